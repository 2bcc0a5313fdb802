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

use crate::lock;
use reactive_bridge::{
    ApplicationId, BridgeError, EtherType, InboundPacket, OutboundPacket, PacketPriority,
    PacketProcessor, PacketService, TrafficSelector,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// One outstanding packet-in interception request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketRequest {
    pub selector: TrafficSelector,
    pub priority: PacketPriority,
    pub app_id: ApplicationId,
}

/// Packet service that records packet-outs and registrations and dispatches
/// packet-ins to registered processors in priority order.
#[derive(Default)]
pub struct RecordingPacketService {
    emitted: Mutex<Vec<OutboundPacket>>,
    requests: Mutex<Vec<PacketRequest>>,
    processors: Mutex<Vec<(u32, Arc<dyn PacketProcessor>)>>,
    fail_emit: AtomicBool,
    fail_request_for: Mutex<Option<EtherType>>,
}

impl RecordingPacketService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_emit(&self, fail: bool) {
        self.fail_emit.store(fail, Ordering::SeqCst);
    }

    /// Makes `request_packets` fail for selectors matching `eth_type`.
    pub fn fail_requests_for(&self, eth_type: Option<EtherType>) {
        *lock(&self.fail_request_for) = eth_type;
    }

    pub fn emitted(&self) -> Vec<OutboundPacket> {
        lock(&self.emitted).clone()
    }

    pub fn emitted_since(&self, mark: usize) -> Vec<OutboundPacket> {
        lock(&self.emitted).iter().skip(mark).cloned().collect()
    }

    pub fn clear_emitted(&self) {
        lock(&self.emitted).clear();
    }

    pub fn emit_count(&self) -> usize {
        lock(&self.emitted).len()
    }

    pub fn requests(&self) -> Vec<PacketRequest> {
        lock(&self.requests).clone()
    }

    pub fn processor_priorities(&self) -> Vec<u32> {
        lock(&self.processors)
            .iter()
            .map(|(priority, _)| *priority)
            .collect()
    }

    /// Delivers a packet-in to every registered processor.
    pub fn dispatch(&self, packet: InboundPacket) {
        let processors: Vec<_> = lock(&self.processors)
            .iter()
            .map(|(_, processor)| processor.clone())
            .collect();
        for processor in processors {
            processor.process(packet.clone());
        }
    }
}

impl PacketService for RecordingPacketService {
    fn emit(&self, packet: OutboundPacket) -> Result<(), BridgeError> {
        if self.fail_emit.load(Ordering::SeqCst) {
            return Err(BridgeError::PacketService(format!(
                "device {} is disconnected",
                packet.device
            )));
        }
        lock(&self.emitted).push(packet);
        Ok(())
    }

    fn request_packets(
        &self,
        selector: TrafficSelector,
        priority: PacketPriority,
        app_id: &ApplicationId,
    ) -> Result<(), BridgeError> {
        if let Some(eth_type) = *lock(&self.fail_request_for) {
            if selector.eth_type == Some(eth_type) {
                return Err(BridgeError::PacketService(format!(
                    "cannot intercept ether-type {eth_type}"
                )));
            }
        }
        lock(&self.requests).push(PacketRequest {
            selector,
            priority,
            app_id: app_id.clone(),
        });
        Ok(())
    }

    fn cancel_packets(
        &self,
        selector: TrafficSelector,
        priority: PacketPriority,
        app_id: &ApplicationId,
    ) -> Result<(), BridgeError> {
        let request = PacketRequest {
            selector,
            priority,
            app_id: app_id.clone(),
        };
        lock(&self.requests).retain(|existing| existing != &request);
        Ok(())
    }

    fn add_processor(
        &self,
        processor: Arc<dyn PacketProcessor>,
        priority: u32,
    ) -> Result<(), BridgeError> {
        let mut processors = lock(&self.processors);
        processors.push((priority, processor));
        processors.sort_by_key(|(priority, _)| *priority);
        Ok(())
    }

    fn remove_processor(&self, processor: &Arc<dyn PacketProcessor>) -> Result<(), BridgeError> {
        lock(&self.processors).retain(|(_, existing)| !Arc::ptr_eq(existing, processor));
        Ok(())
    }
}
