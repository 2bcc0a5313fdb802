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

//! Per-invocation cache of path queries toward source devices.

use crate::model::{DeviceId, Path};
use crate::services::TopologyOracle;
use std::collections::HashMap;

/// Memoizes `paths(from, to)` for one fixed `from` device.
///
/// Lives for a single repair; topology changes between repairs are never
/// served from it.
pub(crate) struct PathCache<'a> {
    topology: &'a dyn TopologyOracle,
    from: DeviceId,
    paths: HashMap<DeviceId, Vec<Path>>,
}

impl<'a> PathCache<'a> {
    pub(crate) fn new(topology: &'a dyn TopologyOracle, from: DeviceId) -> Self {
        Self {
            topology,
            from,
            paths: HashMap::new(),
        }
    }

    pub(crate) fn paths_to(&mut self, to: &DeviceId) -> &[Path] {
        let topology = self.topology;
        let from = &self.from;
        self.paths
            .entry(to.clone())
            .or_insert_with(|| topology.paths(from, to))
    }
}
