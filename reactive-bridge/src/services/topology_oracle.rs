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

//! Topology oracle contract and the link-event listener it notifies.

use crate::error::BridgeError;
use crate::model::{ConnectPoint, DeviceId, LinkEvent, Path};
use async_trait::async_trait;
use std::sync::Arc;

/// Receives link changes from the topology oracle.
///
/// Implementations must return quickly; heavy work belongs on a worker.
#[async_trait]
pub trait LinkListener: Send + Sync {
    async fn on_link_event(&self, event: LinkEvent);
}

/// Queryable view of the current network graph.
pub trait TopologyOracle: Send + Sync {
    /// All simple paths from `src` to `dst` in enumeration order. Empty when
    /// the devices are disconnected or identical.
    fn paths(&self, src: &DeviceId, dst: &DeviceId) -> Vec<Path>;

    /// Whether flooding may leave through this point without creating a loop.
    fn is_broadcast_point(&self, point: &ConnectPoint) -> bool;

    fn add_link_listener(&self, listener: Arc<dyn LinkListener>) -> Result<(), BridgeError>;

    fn remove_link_listener(&self, listener: &Arc<dyn LinkListener>) -> Result<(), BridgeError>;
}
