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

use crate::{MemoryFlowStore, MemoryHostDirectory, MemoryTopology, RecordingPacketService};
use reactive_bridge::{
    build_ethernet_frame, Collaborators, ConnectPoint, DeviceId, EtherType, InboundPacket,
    MacAddress, OutputPort, PortNumber, TopologyOracle,
};
use std::sync::Arc;
use tracing::trace;

const DEFAULT_HOP_LIMIT: usize = 16;
const PAYLOAD: [u8; 46] = [0u8; 46];

/// How a simulated frame left the fabric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Reached the port of a known host.
    Delivered {
        host: MacAddress,
        hops: Vec<DeviceId>,
        packet_ins: usize,
    },
    /// The controller flooded the frame from `at`.
    Flooded { at: ConnectPoint, packet_ins: usize },
    /// Nothing forwarded the frame any further.
    Dropped { at: ConnectPoint, packet_ins: usize },
    HopLimitExceeded { hops: Vec<DeviceId> },
}

impl Delivery {
    pub fn packet_ins(&self) -> usize {
        match self {
            Delivery::Delivered { packet_ins, .. }
            | Delivery::Flooded { packet_ins, .. }
            | Delivery::Dropped { packet_ins, .. } => *packet_ins,
            Delivery::HopLimitExceeded { .. } => 0,
        }
    }
}

/// Moves frames switch by switch through the rules in a [`MemoryFlowStore`].
///
/// A switch with no matching rule raises a packet-in through the
/// [`RecordingPacketService`]; the packet-out the processor emits decides
/// where the frame goes next.
#[derive(Clone)]
pub struct SimulatedFabric {
    pub topology: Arc<MemoryTopology>,
    pub hosts: Arc<MemoryHostDirectory>,
    pub flows: Arc<MemoryFlowStore>,
    pub packets: Arc<RecordingPacketService>,
    hop_limit: usize,
}

impl SimulatedFabric {
    pub fn new(topology: MemoryTopology, hosts: MemoryHostDirectory) -> Self {
        Self {
            topology: Arc::new(topology),
            hosts: Arc::new(hosts),
            flows: Arc::new(MemoryFlowStore::new()),
            packets: Arc::new(RecordingPacketService::new()),
            hop_limit: DEFAULT_HOP_LIMIT,
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            hosts: self.hosts.clone(),
            topology: self.topology.clone(),
            flows: self.flows.clone(),
            packets: self.packets.clone(),
        }
    }

    /// Sends one frame from the host `src` toward `dst`.
    pub fn send(&self, src: MacAddress, dst: MacAddress, ether_type: EtherType) -> Delivery {
        let Some(origin) = self.hosts.location_of(src) else {
            return Delivery::Dropped {
                at: ConnectPoint::new("unknown", 0),
                packet_ins: 0,
            };
        };

        let data = build_ethernet_frame(src, dst, ether_type, &PAYLOAD);
        let mut at = origin;
        let mut hops = Vec::new();
        let mut packet_ins = 0;

        while hops.len() < self.hop_limit {
            hops.push(at.device.clone());

            let output = match self.flows.lookup(&at.device, src, dst, ether_type) {
                Some(rule) => rule.output,
                None => {
                    packet_ins += 1;
                    let mark = self.packets.emit_count();
                    self.packets
                        .dispatch(InboundPacket::new(at.clone(), data.clone()));
                    let emitted = self
                        .packets
                        .emitted_since(mark)
                        .into_iter()
                        .find(|packet| packet.device == at.device);
                    match emitted.map(|packet| packet.output) {
                        Some(OutputPort::Physical(port)) => port,
                        Some(OutputPort::Flood) => return Delivery::Flooded { at, packet_ins },
                        None => return Delivery::Dropped { at, packet_ins },
                    }
                }
            };

            match self.next_hop(&at.device, output) {
                Hop::Switch(next) => {
                    trace!(from = %at, to = %next, "frame crossed link");
                    at = next;
                }
                Hop::Host(host) => {
                    return Delivery::Delivered {
                        host,
                        hops,
                        packet_ins,
                    }
                }
                Hop::Nowhere(point) => {
                    return Delivery::Dropped {
                        at: point,
                        packet_ins,
                    }
                }
            }
        }

        Delivery::HopLimitExceeded { hops }
    }

    fn next_hop(&self, device: &DeviceId, port: PortNumber) -> Hop {
        let out = ConnectPoint {
            device: device.clone(),
            port,
        };
        if let Some(link) = self.topology.link_from(&out) {
            return Hop::Switch(link.dst);
        }
        match self.hosts.host_at(&out) {
            Some(host) => Hop::Host(host.mac()),
            None => Hop::Nowhere(out),
        }
    }

    /// Whether the oracle would let a flood leave through `point`.
    pub fn is_broadcast_point(&self, point: &ConnectPoint) -> bool {
        self.topology.is_broadcast_point(point)
    }
}

enum Hop {
    Switch(ConnectPoint),
    Host(MacAddress),
    Nowhere(ConnectPoint),
}
