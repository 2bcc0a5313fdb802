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

//! Packet classification.
//!
//! Pure function of the inbound packet and the host directory: decides whether a
//! packet is control traffic to ignore, unicast towards a known host, or
//! unknown traffic that has to be flooded.

use crate::model::{ConnectPoint, EtherType, Frame, HostId, InboundPacket};
use crate::services::HostDirectory;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Consumed by a processor that ran earlier.
    AlreadyHandled,
    Malformed,
    /// Topology-discovery or switch-management ether-type.
    ControlProtocol(EtherType),
    /// Destination is a link-discovery group address.
    ReservedDestination,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::AlreadyHandled => f.write_str("already_handled"),
            IgnoreReason::Malformed => f.write_str("malformed"),
            IgnoreReason::ControlProtocol(eth_type) => write!(f, "control_protocol({eth_type})"),
            IgnoreReason::ReservedDestination => f.write_str("reserved_destination"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Ignore(IgnoreReason),
    /// Destination host is known and attached at `destination`.
    Unicast {
        frame: Frame,
        destination: ConnectPoint,
    },
    /// Destination host has not been learned.
    Unknown { frame: Frame },
}

pub fn classify(packet: &InboundPacket, hosts: &dyn HostDirectory) -> Classification {
    if packet.handled {
        return Classification::Ignore(IgnoreReason::AlreadyHandled);
    }

    let Some(frame) = packet.parse() else {
        return Classification::Ignore(IgnoreReason::Malformed);
    };

    if frame.ether_type.is_control() {
        return Classification::Ignore(IgnoreReason::ControlProtocol(frame.ether_type));
    }

    if frame.dst.is_lldp() {
        return Classification::Ignore(IgnoreReason::ReservedDestination);
    }

    match hosts.host(&HostId::from_mac(frame.dst)) {
        Some(host) => Classification::Unicast {
            frame,
            destination: host.location,
        },
        None => Classification::Unknown { frame },
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, Classification, IgnoreReason};
    use crate::model::{
        build_ethernet_frame, ConnectPoint, EtherType, Host, HostId, InboundPacket, MacAddress,
    };
    use crate::services::HostDirectory;
    use std::collections::HashMap;

    const A: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0a]);
    const B: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0b]);

    #[derive(Default)]
    struct StaticHosts {
        hosts: HashMap<HostId, Host>,
    }

    impl StaticHosts {
        fn with(mut self, mac: MacAddress, location: ConnectPoint) -> Self {
            self.hosts
                .insert(HostId::from_mac(mac), Host::new(mac, location));
            self
        }
    }

    impl HostDirectory for StaticHosts {
        fn host(&self, id: &HostId) -> Option<Host> {
            self.hosts.get(id).cloned()
        }
    }

    fn packet(src: MacAddress, dst: MacAddress, eth_type: EtherType) -> InboundPacket {
        InboundPacket::new(
            ConnectPoint::new("of:1", 1),
            build_ethernet_frame(src, dst, eth_type, &[0u8; 46]),
        )
    }

    #[test]
    fn known_destination_is_unicast_to_its_location() {
        let hosts = StaticHosts::default().with(B, ConnectPoint::new("of:3", 2));

        match classify(&packet(A, B, EtherType::IPV4), &hosts) {
            Classification::Unicast { frame, destination } => {
                assert_eq!(destination, ConnectPoint::new("of:3", 2));
                assert_eq!(frame.src, A);
            }
            other => panic!("expected unicast, got {other:?}"),
        }
    }

    #[test]
    fn unknown_destination_is_floodable() {
        let hosts = StaticHosts::default();
        assert!(matches!(
            classify(&packet(A, B, EtherType::IPV4), &hosts),
            Classification::Unknown { .. }
        ));
    }

    #[test]
    fn broadcast_arp_is_floodable_not_ignored() {
        let hosts = StaticHosts::default().with(A, ConnectPoint::new("of:1", 1));
        assert!(matches!(
            classify(&packet(A, MacAddress::BROADCAST, EtherType::ARP), &hosts),
            Classification::Unknown { .. }
        ));
    }

    #[test]
    fn discovery_ether_types_are_ignored_even_for_known_hosts() {
        let hosts = StaticHosts::default().with(B, ConnectPoint::new("of:3", 2));

        assert_eq!(
            classify(&packet(A, B, EtherType::LLDP), &hosts),
            Classification::Ignore(IgnoreReason::ControlProtocol(EtherType::LLDP))
        );
        assert_eq!(
            classify(&packet(A, B, EtherType::BDDP), &hosts),
            Classification::Ignore(IgnoreReason::ControlProtocol(EtherType::BDDP))
        );
    }

    #[test]
    fn lldp_group_destination_is_ignored() {
        let hosts = StaticHosts::default();
        assert_eq!(
            classify(&packet(A, MacAddress::LLDP, EtherType::IPV4), &hosts),
            Classification::Ignore(IgnoreReason::ReservedDestination)
        );
    }

    #[test]
    fn malformed_and_handled_packets_are_ignored() {
        let hosts = StaticHosts::default();
        let truncated = InboundPacket::new(ConnectPoint::new("of:1", 1), vec![0u8; 4]);
        assert_eq!(
            classify(&truncated, &hosts),
            Classification::Ignore(IgnoreReason::Malformed)
        );

        let mut handled = packet(A, B, EtherType::IPV4);
        handled.handled = true;
        assert_eq!(
            classify(&handled, &hosts),
            Classification::Ignore(IgnoreReason::AlreadyHandled)
        );
    }
}
