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

//! Collaborator contracts.
//!
//! The bridge never owns topology, host or flow state. It reaches those through
//! the traits below, which are injected as `Arc<dyn ...>` at construction time.
//! Every call on the forwarding path is synchronous and fire-and-forget.

pub mod flow_store;
pub mod host_directory;
pub mod packet_service;
pub mod topology_oracle;

pub use flow_store::FlowStore;
pub use host_directory::HostDirectory;
pub use packet_service::{PacketProcessor, PacketService};
pub use topology_oracle::{LinkListener, TopologyOracle};

use std::sync::Arc;

/// The full set of collaborators a bridge is wired to.
#[derive(Clone)]
pub struct Collaborators {
    pub hosts: Arc<dyn HostDirectory>,
    pub topology: Arc<dyn TopologyOracle>,
    pub flows: Arc<dyn FlowStore>,
    pub packets: Arc<dyn PacketService>,
}
