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

//! Packet-processor adapter registered with the packet service.

use crate::data_plane::forwarding::ForwardingEngine;
use crate::model::InboundPacket;
use crate::observability::fields;
use crate::services::PacketProcessor;
use tracing::trace;

const COMPONENT: &str = "packet_in";

/// Processor priority the bridge registers with.
pub(crate) const BRIDGE_PROCESSOR_PRIORITY: u32 = 2;

pub(crate) struct BridgePacketProcessor {
    engine: ForwardingEngine,
}

impl BridgePacketProcessor {
    pub(crate) fn new(engine: ForwardingEngine) -> Self {
        Self { engine }
    }
}

impl PacketProcessor for BridgePacketProcessor {
    fn process(&self, packet: InboundPacket) {
        let outcome = self.engine.process(&packet);
        trace!(
            component = COMPONENT,
            ingress = %fields::format_connect_point(&packet.received_from),
            outcome = ?outcome,
            "packet-in handled"
        );
    }
}
