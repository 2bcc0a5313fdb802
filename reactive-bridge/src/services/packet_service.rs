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

//! Packet I/O contract.

use crate::error::BridgeError;
use crate::model::{ApplicationId, InboundPacket, OutboundPacket, PacketPriority, TrafficSelector};
use std::sync::Arc;

/// Handles packet-ins delivered by the packet service.
pub trait PacketProcessor: Send + Sync {
    fn process(&self, packet: InboundPacket);
}

/// Packet injection and packet-in interception.
pub trait PacketService: Send + Sync {
    /// Transmits a frame out of a device port, or floods it.
    fn emit(&self, packet: OutboundPacket) -> Result<(), BridgeError>;

    /// Asks devices to send matching traffic to the controller.
    fn request_packets(
        &self,
        selector: TrafficSelector,
        priority: PacketPriority,
        app_id: &ApplicationId,
    ) -> Result<(), BridgeError>;

    fn cancel_packets(
        &self,
        selector: TrafficSelector,
        priority: PacketPriority,
        app_id: &ApplicationId,
    ) -> Result<(), BridgeError>;

    /// Registers a processor; lower `priority` values run first.
    fn add_processor(
        &self,
        processor: Arc<dyn PacketProcessor>,
        priority: u32,
    ) -> Result<(), BridgeError>;

    fn remove_processor(&self, processor: &Arc<dyn PacketProcessor>) -> Result<(), BridgeError>;
}
