/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Inbound and outbound packet representations.
//!
//! Raw frames are parsed with `smoltcp`'s Ethernet wire view; anything that does
//! not parse never becomes a [`Frame`].

use crate::model::addressing::{ConnectPoint, DeviceId, EtherType, MacAddress, PortNumber};
use smoltcp::wire::{EthernetFrame, EthernetProtocol, EthernetRepr};
use std::fmt;

/// A packet-in as delivered by the packet service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundPacket {
    pub received_from: ConnectPoint,
    pub data: Vec<u8>,
    /// Set when a higher-priority processor has already consumed the packet.
    pub handled: bool,
}

impl InboundPacket {
    pub fn new(received_from: ConnectPoint, data: Vec<u8>) -> Self {
        Self {
            received_from,
            data,
            handled: false,
        }
    }

    /// Parses the Ethernet header; `None` for truncated or otherwise unusable bytes.
    pub fn parse(&self) -> Option<Frame> {
        let frame = EthernetFrame::new_checked(self.data.as_slice()).ok()?;
        Some(Frame {
            src: MacAddress::from(frame.src_addr()),
            dst: MacAddress::from(frame.dst_addr()),
            ether_type: EtherType::from(frame.ethertype()),
            ingress: self.received_from.clone(),
            data: self.data.clone(),
        })
    }
}

/// Parsed view of one inbound Ethernet frame.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub src: MacAddress,
    pub dst: MacAddress,
    pub ether_type: EtherType,
    pub ingress: ConnectPoint,
    pub data: Vec<u8>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("src", &self.src)
            .field("dst", &self.dst)
            .field("ether_type", &self.ether_type)
            .field("ingress", &self.ingress)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Where an outbound frame leaves the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputPort {
    Physical(PortNumber),
    /// Every broadcast-eligible port except the one the frame arrived on.
    Flood,
}

/// A packet-out request handed to the packet service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundPacket {
    pub device: DeviceId,
    pub output: OutputPort,
    /// Port the frame originally arrived on, so flooding can exclude it.
    pub in_port: PortNumber,
    pub data: Vec<u8>,
}

/// Builds an Ethernet frame with the given payload.
pub fn build_ethernet_frame(
    src: MacAddress,
    dst: MacAddress,
    ether_type: EtherType,
    payload: &[u8],
) -> Vec<u8> {
    let repr = EthernetRepr {
        src_addr: src.into(),
        dst_addr: dst.into(),
        ethertype: EthernetProtocol::from(ether_type.0),
    };

    let mut buffer = vec![0u8; repr.buffer_len() + payload.len()];
    let mut frame = EthernetFrame::new_unchecked(&mut buffer);
    repr.emit(&mut frame);
    frame.payload_mut().copy_from_slice(payload);
    buffer
}

#[cfg(test)]
mod tests {
    use super::{build_ethernet_frame, InboundPacket};
    use crate::model::addressing::{ConnectPoint, EtherType, MacAddress};

    const SRC: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0a]);
    const DST: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0b]);

    #[test]
    fn parse_extracts_addresses_and_ether_type() {
        let data = build_ethernet_frame(SRC, DST, EtherType::ARP, &[0u8; 28]);
        let packet = InboundPacket::new(ConnectPoint::new("of:1", 1), data);

        let frame = packet.parse().expect("well-formed frame");

        assert_eq!(frame.src, SRC);
        assert_eq!(frame.dst, DST);
        assert_eq!(frame.ether_type, EtherType::ARP);
        assert_eq!(frame.ingress, ConnectPoint::new("of:1", 1));
    }

    #[test]
    fn parse_rejects_truncated_header() {
        let packet = InboundPacket::new(ConnectPoint::new("of:1", 1), vec![0xff; 9]);
        assert!(packet.parse().is_none());
    }

    #[test]
    fn unknown_ether_type_round_trips_through_the_header() {
        let data = build_ethernet_frame(SRC, DST, EtherType::BDDP, &[]);
        let frame = InboundPacket::new(ConnectPoint::new("of:1", 1), data)
            .parse()
            .expect("well-formed frame");
        assert_eq!(frame.ether_type, EtherType::BDDP);
    }
}
