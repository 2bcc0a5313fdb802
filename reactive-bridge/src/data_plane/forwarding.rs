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

//! Reactive forwarding decision.
//!
//! Each packet-in goes through exactly one of: ignore, flood (or block when the
//! ingress point is not broadcast-eligible), no action when the packet already
//! sits on its destination port, or install-and-forward. Installation failures
//! do not stop the packet-out; the current packet is always sent directly.

use crate::config::BridgeConfig;
use crate::control_plane::flow_lifecycle::install_flow_rule;
use crate::control_plane::flow_table::build_unicast_rule;
use crate::data_plane::classifier::{classify, Classification, IgnoreReason};
use crate::data_plane::packet_out::emit_frame;
use crate::error::BridgeError;
use crate::model::{ConnectPoint, DeviceId, Frame, InboundPacket, OutputPort, PortNumber};
use crate::observability::{events, fields};
use crate::routing::path_selection::select_forward_path;
use crate::services::{FlowStore, HostDirectory, PacketService, TopologyOracle};
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

const COMPONENT: &str = "forwarding";

/// Why a packet was flooded rather than forwarded on a computed port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloodReason {
    UnknownDestination,
    NoPath,
    /// Every candidate path would send the packet back where it came from.
    AllPathsReflect,
    /// The oracle handed back a path that does not start at the ingress device.
    PathInvariantViolated,
}

impl fmt::Display for FloodReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FloodReason::UnknownDestination => "unknown_destination",
            FloodReason::NoPath => "no_path",
            FloodReason::AllPathsReflect => "all_paths_reflect",
            FloodReason::PathInvariantViolated => "path_invariant_violated",
        };
        f.write_str(reason)
    }
}

/// Terminal state of one forwarding decision.
#[derive(Debug)]
pub enum ForwardingOutcome {
    Ignored(IgnoreReason),
    Flooded {
        reason: FloodReason,
        emit: Result<(), BridgeError>,
    },
    /// Flood requested from a point that is not broadcast-eligible.
    Blocked { reason: FloodReason },
    /// The packet arrived on the port its destination is attached to.
    AlreadyAtDestination,
    Forwarded {
        device: DeviceId,
        output: PortNumber,
        install: Result<(), BridgeError>,
        emit: Result<(), BridgeError>,
    },
}

impl ForwardingOutcome {
    pub fn is_flood(&self) -> bool {
        matches!(self, ForwardingOutcome::Flooded { .. })
    }

    pub fn is_forwarded(&self) -> bool {
        matches!(self, ForwardingOutcome::Forwarded { .. })
    }
}

/// Stateless forwarding engine over injected collaborators.
#[derive(Clone)]
pub struct ForwardingEngine {
    hosts: Arc<dyn HostDirectory>,
    topology: Arc<dyn TopologyOracle>,
    flows: Arc<dyn FlowStore>,
    packets: Arc<dyn PacketService>,
    config: Arc<ArcSwap<BridgeConfig>>,
}

impl ForwardingEngine {
    pub fn new(
        hosts: Arc<dyn HostDirectory>,
        topology: Arc<dyn TopologyOracle>,
        flows: Arc<dyn FlowStore>,
        packets: Arc<dyn PacketService>,
        config: Arc<ArcSwap<BridgeConfig>>,
    ) -> Self {
        Self {
            hosts,
            topology,
            flows,
            packets,
            config,
        }
    }

    pub fn process(&self, packet: &InboundPacket) -> ForwardingOutcome {
        match classify(packet, self.hosts.as_ref()) {
            Classification::Ignore(reason) => {
                trace!(
                    event = events::PACKET_IGNORED,
                    component = COMPONENT,
                    ingress = %fields::format_connect_point(&packet.received_from),
                    reason = %reason,
                    "ignoring packet"
                );
                ForwardingOutcome::Ignored(reason)
            }
            Classification::Unknown { frame } => {
                self.flood(&frame, FloodReason::UnknownDestination)
            }
            Classification::Unicast { frame, destination } => {
                self.forward_unicast(&frame, &destination)
            }
        }
    }

    fn forward_unicast(&self, frame: &Frame, destination: &ConnectPoint) -> ForwardingOutcome {
        let ingress = &frame.ingress;

        if destination.device == ingress.device {
            if destination.port == ingress.port {
                debug!(
                    event = events::PACKET_AT_DESTINATION_PORT,
                    component = COMPONENT,
                    ingress = %fields::format_connect_point(ingress),
                    dst = %frame.dst,
                    "packet already at destination port, nothing to install"
                );
                return ForwardingOutcome::AlreadyAtDestination;
            }
            info!(
                component = COMPONENT,
                device = %destination.device,
                "packet reached destination switch"
            );
            return self.install_and_emit(frame, destination.port);
        }

        let paths = self.topology.paths(&ingress.device, &destination.device);
        if paths.is_empty() {
            warn!(
                event = events::PATH_NOT_FOUND,
                component = COMPONENT,
                src_device = %ingress.device,
                dst_device = %destination.device,
                "no path to destination, flooding"
            );
            return self.flood(frame, FloodReason::NoPath);
        }

        let Some(path) = select_forward_path(&paths, ingress.port) else {
            warn!(
                event = events::PATH_ALL_REFLECT_INGRESS,
                component = COMPONENT,
                src = %frame.src,
                dst = %frame.dst,
                ingress = %fields::format_connect_point(ingress),
                "every path leads back to the ingress port, flooding"
            );
            return self.flood(frame, FloodReason::AllPathsReflect);
        };

        if path.src().device != ingress.device {
            error!(
                event = events::PATH_INVARIANT_VIOLATED,
                component = COMPONENT,
                ingress = %fields::format_connect_point(ingress),
                path = %fields::format_path(path),
                "selected path does not start at the ingress device"
            );
            return self.flood(frame, FloodReason::PathInvariantViolated);
        }

        self.install_and_emit(frame, path.src().port)
    }

    fn install_and_emit(&self, frame: &Frame, output: PortNumber) -> ForwardingOutcome {
        let config = self.config.load();
        let device = frame.ingress.device.clone();

        let rule = build_unicast_rule(&config, &device, frame, output);
        let install = install_flow_rule(self.flows.as_ref(), rule);
        let emit = emit_frame(
            self.packets.as_ref(),
            frame,
            OutputPort::Physical(output),
        );

        debug!(
            event = events::PACKET_FORWARDED,
            component = COMPONENT,
            device = %device,
            output = %output,
            src = %frame.src,
            dst = %frame.dst,
            installed = install.is_ok(),
            "forwarded packet"
        );

        ForwardingOutcome::Forwarded {
            device,
            output,
            install,
            emit,
        }
    }

    fn flood(&self, frame: &Frame, reason: FloodReason) -> ForwardingOutcome {
        if !self.topology.is_broadcast_point(&frame.ingress) {
            debug!(
                event = events::PACKET_BLOCKED,
                component = COMPONENT,
                ingress = %fields::format_connect_point(&frame.ingress),
                reason = %reason,
                "ingress is not broadcast-eligible, blocking"
            );
            return ForwardingOutcome::Blocked { reason };
        }

        trace!(
            event = events::PACKET_FLOODED,
            component = COMPONENT,
            ingress = %fields::format_connect_point(&frame.ingress),
            reason = %reason,
            "flooding packet"
        );
        let emit = emit_frame(self.packets.as_ref(), frame, OutputPort::Flood);
        ForwardingOutcome::Flooded { reason, emit }
    }
}

#[cfg(test)]
mod tests {
    use super::{FloodReason, ForwardingEngine, ForwardingOutcome};
    use crate::config::BridgeConfig;
    use crate::data_plane::classifier::IgnoreReason;
    use crate::error::BridgeError;
    use crate::model::{
        build_ethernet_frame, ApplicationId, ConnectPoint, DeviceId, EtherType, FlowEntry,
        FlowEntryState, FlowRule, FlowRuleKey, Host, HostId, InboundPacket, Link, MacAddress,
        OutboundPacket, OutputPort, PacketPriority, Path, PortNumber, TrafficSelector,
    };
    use crate::services::{
        FlowStore, HostDirectory, LinkListener, PacketProcessor, PacketService, TopologyOracle,
    };
    use arc_swap::ArcSwap;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    const A: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0a]);
    const B: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0b]);

    #[derive(Default)]
    struct FakeNetwork {
        hosts: HashMap<HostId, Host>,
        paths: HashMap<(DeviceId, DeviceId), Vec<Path>>,
        non_broadcast: HashSet<ConnectPoint>,
        fail_installs: bool,
        installed: Mutex<Vec<FlowRule>>,
        emitted: Mutex<Vec<OutboundPacket>>,
    }

    impl FakeNetwork {
        fn host(mut self, mac: MacAddress, device: &str, port: u64) -> Self {
            self.hosts
                .insert(HostId::from_mac(mac), Host::new(mac, ConnectPoint::new(device, port)));
            self
        }

        fn path(mut self, hops: &[(&str, u64, &str, u64)]) -> Self {
            let links: Vec<Link> = hops
                .iter()
                .map(|(s, sp, d, dp)| {
                    Link::new(ConnectPoint::new(*s, *sp), ConnectPoint::new(*d, *dp))
                })
                .collect();
            let path = Path::new(links).expect("valid test path");
            let key = (path.src().device.clone(), path.dst().device.clone());
            self.paths.entry(key).or_default().push(path);
            self
        }

        fn installed(&self) -> Vec<FlowRule> {
            self.installed.lock().expect("lock installed").clone()
        }

        fn emitted(&self) -> Vec<OutboundPacket> {
            self.emitted.lock().expect("lock emitted").clone()
        }
    }

    impl HostDirectory for FakeNetwork {
        fn host(&self, id: &HostId) -> Option<Host> {
            self.hosts.get(id).cloned()
        }
    }

    impl TopologyOracle for FakeNetwork {
        fn paths(&self, src: &DeviceId, dst: &DeviceId) -> Vec<Path> {
            self.paths
                .get(&(src.clone(), dst.clone()))
                .cloned()
                .unwrap_or_default()
        }

        fn is_broadcast_point(&self, point: &ConnectPoint) -> bool {
            !self.non_broadcast.contains(point)
        }

        fn add_link_listener(&self, _listener: Arc<dyn LinkListener>) -> Result<(), BridgeError> {
            Ok(())
        }

        fn remove_link_listener(
            &self,
            _listener: &Arc<dyn LinkListener>,
        ) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    impl FlowStore for FakeNetwork {
        fn apply(&self, rule: FlowRule) -> Result<(), BridgeError> {
            if self.fail_installs {
                return Err(BridgeError::FlowStore("table full".to_string()));
            }
            self.installed.lock().expect("lock installed").push(rule);
            Ok(())
        }

        fn remove(&self, _key: &FlowRuleKey) -> Result<(), BridgeError> {
            Ok(())
        }

        fn entries(&self, device: &DeviceId) -> Vec<FlowEntry> {
            self.installed()
                .into_iter()
                .filter(|rule| &rule.device == device)
                .map(|rule| FlowEntry {
                    rule,
                    state: FlowEntryState::Added,
                })
                .collect()
        }

        fn remove_by_app(&self, _app_id: &ApplicationId) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    impl PacketService for FakeNetwork {
        fn emit(&self, packet: OutboundPacket) -> Result<(), BridgeError> {
            self.emitted.lock().expect("lock emitted").push(packet);
            Ok(())
        }

        fn request_packets(
            &self,
            _selector: TrafficSelector,
            _priority: PacketPriority,
            _app_id: &ApplicationId,
        ) -> Result<(), BridgeError> {
            Ok(())
        }

        fn cancel_packets(
            &self,
            _selector: TrafficSelector,
            _priority: PacketPriority,
            _app_id: &ApplicationId,
        ) -> Result<(), BridgeError> {
            Ok(())
        }

        fn add_processor(
            &self,
            _processor: Arc<dyn PacketProcessor>,
            _priority: u32,
        ) -> Result<(), BridgeError> {
            Ok(())
        }

        fn remove_processor(
            &self,
            _processor: &Arc<dyn PacketProcessor>,
        ) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    fn engine(network: &Arc<FakeNetwork>) -> ForwardingEngine {
        ForwardingEngine::new(
            network.clone(),
            network.clone(),
            network.clone(),
            network.clone(),
            Arc::new(ArcSwap::from_pointee(BridgeConfig::default())),
        )
    }

    fn packet_in(device: &str, port: u64, src: MacAddress, dst: MacAddress) -> InboundPacket {
        packet_in_typed(device, port, src, dst, EtherType::IPV4)
    }

    fn packet_in_typed(
        device: &str,
        port: u64,
        src: MacAddress,
        dst: MacAddress,
        eth_type: EtherType,
    ) -> InboundPacket {
        InboundPacket::new(
            ConnectPoint::new(device, port),
            build_ethernet_frame(src, dst, eth_type, &[0u8; 46]),
        )
    }

    #[test]
    fn ignored_packets_have_no_side_effects() {
        let network = Arc::new(FakeNetwork::default().host(B, "of:3", 2));
        let outcome = engine(&network).process(&packet_in_typed("of:1", 1, A, B, EtherType::LLDP));

        assert!(matches!(
            outcome,
            ForwardingOutcome::Ignored(IgnoreReason::ControlProtocol(EtherType::LLDP))
        ));
        assert!(network.installed().is_empty());
        assert!(network.emitted().is_empty());
    }

    #[test]
    fn unknown_destination_floods_from_broadcast_point() {
        let network = Arc::new(FakeNetwork::default());
        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        assert!(matches!(
            outcome,
            ForwardingOutcome::Flooded {
                reason: FloodReason::UnknownDestination,
                emit: Ok(())
            }
        ));
        let emitted = network.emitted();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].output, OutputPort::Flood);
        assert_eq!(emitted[0].in_port, PortNumber(1));
        assert!(network.installed().is_empty());
    }

    #[test]
    fn unknown_destination_blocks_on_non_broadcast_point() {
        let mut network = FakeNetwork::default();
        network.non_broadcast.insert(ConnectPoint::new("of:1", 1));
        let network = Arc::new(network);

        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        assert!(matches!(
            outcome,
            ForwardingOutcome::Blocked {
                reason: FloodReason::UnknownDestination
            }
        ));
        assert!(network.emitted().is_empty());
    }

    #[test]
    fn same_port_destination_installs_nothing() {
        let network = Arc::new(FakeNetwork::default().host(B, "of:1", 1));
        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        assert!(matches!(outcome, ForwardingOutcome::AlreadyAtDestination));
        assert!(network.installed().is_empty());
        assert!(network.emitted().is_empty());
    }

    #[test]
    fn edge_switch_installs_rule_to_host_port() {
        let network = Arc::new(FakeNetwork::default().host(B, "of:3", 2));
        let outcome = engine(&network).process(&packet_in("of:3", 1, A, B));

        assert!(outcome.is_forwarded());
        let installed = network.installed();
        assert_eq!(installed.len(), 1);
        assert_eq!(installed[0].device, DeviceId::new("of:3"));
        assert_eq!(installed[0].output, PortNumber(2));
        assert_eq!(installed[0].selector.eth_dst, Some(B));
        assert_eq!(installed[0].priority, 50000);

        let emitted = network.emitted();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].output, OutputPort::Physical(PortNumber(2)));
    }

    #[test]
    fn remote_destination_uses_first_non_reflecting_path() {
        let network = Arc::new(
            FakeNetwork::default()
                .host(B, "of:3", 2)
                .path(&[("of:1", 1, "of:4", 1), ("of:4", 2, "of:3", 4)])
                .path(&[("of:1", 3, "of:2", 1), ("of:2", 2, "of:3", 1)])
                .path(&[("of:1", 5, "of:3", 5)]),
        );

        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        match outcome {
            ForwardingOutcome::Forwarded {
                device,
                output,
                install,
                emit,
            } => {
                assert_eq!(device, DeviceId::new("of:1"));
                assert_eq!(output, PortNumber(3));
                assert!(install.is_ok());
                assert!(emit.is_ok());
            }
            other => panic!("expected forward, got {other:?}"),
        }
        assert_eq!(network.installed().len(), 1);
        assert_eq!(
            network.emitted()[0].output,
            OutputPort::Physical(PortNumber(3))
        );
    }

    #[test]
    fn remote_destination_without_path_floods() {
        let network = Arc::new(FakeNetwork::default().host(B, "of:3", 2));
        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        assert!(matches!(
            outcome,
            ForwardingOutcome::Flooded {
                reason: FloodReason::NoPath,
                ..
            }
        ));
        assert!(network.installed().is_empty());
    }

    #[test]
    fn all_reflecting_paths_flood() {
        let network = Arc::new(
            FakeNetwork::default()
                .host(B, "of:3", 2)
                .path(&[("of:1", 1, "of:3", 1)]),
        );
        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        assert!(matches!(
            outcome,
            ForwardingOutcome::Flooded {
                reason: FloodReason::AllPathsReflect,
                ..
            }
        ));
        assert!(network.installed().is_empty());
    }

    #[test]
    fn path_from_another_device_falls_back_to_flood() {
        let mut network = FakeNetwork::default().host(B, "of:3", 2);
        let foreign = Path::new(vec![Link::new(
            ConnectPoint::new("of:9", 4),
            ConnectPoint::new("of:3", 1),
        )])
        .expect("valid path");
        network.paths.insert(
            (DeviceId::new("of:1"), DeviceId::new("of:3")),
            vec![foreign],
        );
        let network = Arc::new(network);

        let outcome = engine(&network).process(&packet_in("of:1", 1, A, B));

        assert!(matches!(
            outcome,
            ForwardingOutcome::Flooded {
                reason: FloodReason::PathInvariantViolated,
                ..
            }
        ));
        assert!(network.installed().is_empty());
    }

    #[test]
    fn install_failure_still_emits_the_packet() {
        let mut network = FakeNetwork::default().host(B, "of:3", 2);
        network.fail_installs = true;
        let network = Arc::new(network);

        let outcome = engine(&network).process(&packet_in("of:3", 1, A, B));

        match outcome {
            ForwardingOutcome::Forwarded { install, emit, .. } => {
                assert!(matches!(install, Err(BridgeError::FlowStore(_))));
                assert!(emit.is_ok());
            }
            other => panic!("expected forward, got {other:?}"),
        }
        assert_eq!(network.emitted().len(), 1);
    }

    #[test]
    fn reconfiguration_applies_to_the_next_packet() {
        let network = Arc::new(FakeNetwork::default().host(B, "of:3", 2));
        let config = Arc::new(ArcSwap::from_pointee(BridgeConfig::default()));
        let engine = ForwardingEngine::new(
            network.clone(),
            network.clone(),
            network.clone(),
            network.clone(),
            config.clone(),
        );

        config.store(Arc::new(BridgeConfig {
            flow_priority: 123,
            ..BridgeConfig::default()
        }));
        engine.process(&packet_in("of:3", 1, A, B));

        assert_eq!(network.installed()[0].priority, 123);
    }
}
