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

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use integration_test_utils::{MemoryHostDirectory, MemoryTopology, SimulatedFabric};
use reactive_bridge::{
    build_ethernet_frame, BridgeConfig, ConnectPoint, EtherType, InboundPacket, MacAddress,
    ReactiveBridge,
};

const A: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0a]);
const B: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0b]);
const UNKNOWN: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x99]);

/// Four-switch ring with hosts on opposite corners.
fn ring() -> SimulatedFabric {
    let topology = MemoryTopology::new()
        .with_cable(("of:1", 2), ("of:2", 1))
        .with_cable(("of:2", 2), ("of:3", 1))
        .with_cable(("of:3", 3), ("of:4", 2))
        .with_cable(("of:4", 1), ("of:1", 3));
    let hosts = MemoryHostDirectory::new()
        .with_host(A, "of:1", 1)
        .with_host(B, "of:3", 2);
    SimulatedFabric::new(topology, hosts)
}

fn packet_in(dst: MacAddress, ether_type: EtherType) -> InboundPacket {
    InboundPacket::new(
        ConnectPoint::new("of:1", 1),
        build_ethernet_frame(A, dst, ether_type, &[0u8; 46]),
    )
}

fn forwarding_benchmarks(c: &mut Criterion) {
    let fabric = ring();
    let bridge = ReactiveBridge::new(BridgeConfig::default(), fabric.collaborators())
        .expect("bridge should start");

    let mut group = c.benchmark_group("forwarding");

    group.bench_function("unicast_remote_destination", |b| {
        b.iter_batched(
            || {
                fabric.packets.clear_emitted();
                packet_in(B, EtherType::IPV4)
            },
            |packet| black_box(bridge.on_packet_in(packet)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("flood_unknown_destination", |b| {
        b.iter_batched(
            || {
                fabric.packets.clear_emitted();
                packet_in(UNKNOWN, EtherType::ARP)
            },
            |packet| black_box(bridge.on_packet_in(packet)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("ignore_discovery_frame", |b| {
        b.iter_batched(
            || {
                fabric.packets.clear_emitted();
                packet_in(B, EtherType::LLDP)
            },
            |packet| black_box(bridge.on_packet_in(packet)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, forwarding_benchmarks);
criterion_main!(benches);
