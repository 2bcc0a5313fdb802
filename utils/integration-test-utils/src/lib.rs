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

//! In-memory collaborators and a simulated switching fabric for exercising
//! `reactive-bridge` end to end without a controller.

mod memory_flow_store;
mod memory_hosts;
mod memory_topology;
mod recording_packet_service;
mod simulated_fabric;

pub use memory_flow_store::MemoryFlowStore;
pub use memory_hosts::MemoryHostDirectory;
pub use memory_topology::MemoryTopology;
pub use recording_packet_service::{PacketRequest, RecordingPacketService};
pub use simulated_fabric::{Delivery, SimulatedFabric};

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call from every
/// test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
