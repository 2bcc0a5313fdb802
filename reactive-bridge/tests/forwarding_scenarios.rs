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

use integration_test_utils::{
    init_tracing, Delivery, MemoryHostDirectory, MemoryTopology, SimulatedFabric,
};
use reactive_bridge::{
    build_ethernet_frame, BridgeConfig, ConnectPoint, DeviceId, EtherType, FloodReason,
    ForwardingOutcome, IgnoreReason, InboundPacket, MacAddress, OutputPort, PortNumber,
    ReactiveBridge,
};

const A: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0a]);
const B: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0b]);
const UNKNOWN: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x99]);

/// A on of:1 port 1, B on of:3 port 2, chain of:1 - of:2 - of:3.
fn linear_fabric() -> SimulatedFabric {
    let topology = MemoryTopology::new()
        .with_cable(("of:1", 2), ("of:2", 1))
        .with_cable(("of:2", 2), ("of:3", 1));
    let hosts = MemoryHostDirectory::new()
        .with_host(A, "of:1", 1)
        .with_host(B, "of:3", 2);
    SimulatedFabric::new(topology, hosts)
}

fn active_bridge(fabric: &SimulatedFabric, config: BridgeConfig) -> ReactiveBridge {
    let mut bridge =
        ReactiveBridge::new(config, fabric.collaborators()).expect("bridge should start");
    bridge.activate().expect("bridge should activate");
    bridge
}

#[tokio::test]
async fn first_packet_installs_a_rule_on_every_hop() {
    init_tracing();
    let fabric = linear_fabric();
    let _bridge = active_bridge(&fabric, BridgeConfig::default());

    let delivery = fabric.send(A, B, EtherType::IPV4);

    assert_eq!(
        delivery,
        Delivery::Delivered {
            host: B,
            hops: vec![
                DeviceId::new("of:1"),
                DeviceId::new("of:2"),
                DeviceId::new("of:3")
            ],
            packet_ins: 3,
        }
    );

    let d1 = fabric.flows.rules_on("of:1");
    assert_eq!(d1.len(), 1);
    assert_eq!(d1[0].output, PortNumber(2));
    assert_eq!(d1[0].selector.eth_src, Some(A));
    assert_eq!(d1[0].selector.eth_dst, Some(B));

    let d3 = fabric.flows.rules_on("of:3");
    assert_eq!(d3.len(), 1);
    assert_eq!(d3[0].output, PortNumber(2));

    assert!(fabric
        .packets
        .emitted()
        .iter()
        .all(|packet| packet.output != OutputPort::Flood));
}

#[tokio::test]
async fn later_packets_follow_installed_rules() {
    init_tracing();
    let fabric = linear_fabric();
    let _bridge = active_bridge(&fabric, BridgeConfig::default());

    fabric.send(A, B, EtherType::IPV4);
    let emitted = fabric.packets.emit_count();
    let second = fabric.send(A, B, EtherType::IPV4);

    assert_eq!(second.packet_ins(), 0);
    assert!(matches!(second, Delivery::Delivered { host, .. } if host == B));
    assert_eq!(fabric.packets.emit_count(), emitted);
}

#[tokio::test]
async fn unknown_destination_is_flooded_from_the_edge() {
    init_tracing();
    let fabric = linear_fabric();
    let _bridge = active_bridge(&fabric, BridgeConfig::default());

    let delivery = fabric.send(A, UNKNOWN, EtherType::IPV4);

    assert_eq!(
        delivery,
        Delivery::Flooded {
            at: ConnectPoint::new("of:1", 1),
            packet_ins: 1,
        }
    );
    assert!(fabric.flows.is_empty());
}

#[tokio::test]
async fn broadcast_arp_is_flooded() {
    init_tracing();
    let fabric = linear_fabric();
    let bridge = active_bridge(&fabric, BridgeConfig::default());

    let outcome = bridge.on_packet_in(InboundPacket::new(
        ConnectPoint::new("of:1", 1),
        build_ethernet_frame(A, MacAddress::BROADCAST, EtherType::ARP, &[0u8; 28]),
    ));

    assert!(matches!(
        outcome,
        ForwardingOutcome::Flooded {
            reason: FloodReason::UnknownDestination,
            emit: Ok(())
        }
    ));
    assert!(fabric.flows.is_empty());
}

#[tokio::test]
async fn discovery_frames_have_no_side_effects() {
    init_tracing();
    let fabric = linear_fabric();
    let bridge = active_bridge(&fabric, BridgeConfig::default());

    for (dst, eth_type) in [
        (B, EtherType::LLDP),
        (B, EtherType::BDDP),
        (MacAddress::LLDP, EtherType::IPV4),
    ] {
        let outcome = bridge.on_packet_in(InboundPacket::new(
            ConnectPoint::new("of:2", 1),
            build_ethernet_frame(A, dst, eth_type, &[0u8; 46]),
        ));
        assert!(matches!(
            outcome,
            ForwardingOutcome::Ignored(
                IgnoreReason::ControlProtocol(_) | IgnoreReason::ReservedDestination
            )
        ));
    }

    assert!(fabric.flows.is_empty());
    assert_eq!(fabric.packets.emit_count(), 0);
}

#[tokio::test]
async fn truncated_frames_are_ignored() {
    init_tracing();
    let fabric = linear_fabric();
    let bridge = active_bridge(&fabric, BridgeConfig::default());

    let outcome = bridge.on_packet_in(InboundPacket::new(
        ConnectPoint::new("of:1", 1),
        vec![0xff; 6],
    ));

    assert!(matches!(
        outcome,
        ForwardingOutcome::Ignored(IgnoreReason::Malformed)
    ));
    assert_eq!(fabric.packets.emit_count(), 0);
}

#[tokio::test]
async fn destination_only_matching_omits_source() {
    init_tracing();
    let fabric = linear_fabric();
    let config = BridgeConfig {
        match_dst_mac_only: true,
        permanent_flows: true,
        ..BridgeConfig::default()
    };
    let _bridge = active_bridge(&fabric, config);

    fabric.send(A, B, EtherType::IPV4);

    let rules = fabric.flows.rules();
    assert_eq!(rules.len(), 3);
    assert!(rules.iter().all(|rule| rule.selector.eth_src.is_none()));
    assert!(rules.iter().all(|rule| rule.selector.eth_dst == Some(B)));
}

#[tokio::test]
async fn install_failure_still_delivers_the_frame() {
    init_tracing();
    let fabric = linear_fabric();
    let _bridge = active_bridge(&fabric, BridgeConfig::default());
    fabric.flows.set_fail_apply(true);

    let delivery = fabric.send(A, B, EtherType::IPV4);

    assert!(matches!(delivery, Delivery::Delivered { host, .. } if host == B));
    assert!(fabric.flows.is_empty());
}

#[tokio::test]
async fn inactive_bridge_sees_no_packets() {
    init_tracing();
    let fabric = linear_fabric();
    let _bridge =
        ReactiveBridge::new(BridgeConfig::default(), fabric.collaborators()).expect("bridge");

    let delivery = fabric.send(A, B, EtherType::IPV4);

    assert!(matches!(delivery, Delivery::Dropped { packet_ins: 1, .. }));
    assert!(fabric.packets.requests().is_empty());
}
