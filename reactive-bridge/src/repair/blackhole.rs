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

use crate::config::BridgeConfig;
use crate::control_plane::flow_lifecycle::{remove_flow_rules_for_pair, RemovalTally};
use crate::control_plane::flow_query::{entries_output_to, src_dst_pairs};
use crate::model::{ApplicationId, ConnectPoint, DeviceId, HostId, Path, SrcDstPair};
use crate::observability::{events, fields};
use crate::repair::RepairReport;
use crate::routing::path_cache::PathCache;
use crate::routing::path_selection::select_forward_path;
use crate::services::{FlowStore, HostDirectory, TopologyOracle};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{debug, info, trace};

const COMPONENT: &str = "blackhole_repair";

/// Removes rules that forward into a failed egress, plus the upstream rules
/// that would keep feeding it.
///
/// Each call works on a fresh snapshot of the flow tables and topology, so
/// repairs for unrelated links can run concurrently.
#[derive(Clone)]
pub struct BlackHoleRepair {
    hosts: Arc<dyn HostDirectory>,
    topology: Arc<dyn TopologyOracle>,
    flows: Arc<dyn FlowStore>,
    config: Arc<ArcSwap<BridgeConfig>>,
}

impl BlackHoleRepair {
    pub fn new(
        hosts: Arc<dyn HostDirectory>,
        topology: Arc<dyn TopologyOracle>,
        flows: Arc<dyn FlowStore>,
        config: Arc<ArcSwap<BridgeConfig>>,
    ) -> Self {
        Self {
            hosts,
            topology,
            flows,
            config,
        }
    }

    pub fn repair(&self, egress: &ConnectPoint) -> RepairReport {
        let app_id = self.config.load().app_id();
        let mut report = RepairReport::new(egress.clone());

        let entries = self.flows.entries(&egress.device);
        let stale: Vec<_> = entries_output_to(&entries, &app_id, egress.port).collect();
        report.stale_rules = stale.len();
        let pairs = src_dst_pairs(stale);

        info!(
            event = events::REPAIR_STARTED,
            component = COMPONENT,
            task_id = %report.task_id,
            egress = %fields::format_connect_point(egress),
            stale_rules = report.stale_rules,
            pairs = pairs.len(),
            "repairing black hole"
        );

        let mut tally = RemovalTally::default();
        let mut path_cache = PathCache::new(self.topology.as_ref(), egress.device.clone());

        for pair in &pairs {
            report.pairs_examined += 1;

            tally.absorb(remove_flow_rules_for_pair(
                self.flows.as_ref(),
                &egress.device,
                &app_id,
                pair,
            ));

            let Some((src_device, dst_device)) = self.resolve_pair(pair) else {
                debug!(
                    event = events::REPAIR_PAIR_SKIPPED,
                    component = COMPONENT,
                    task_id = %report.task_id,
                    pair = %pair,
                    "host for pair not found, not backtracking"
                );
                report.pairs_skipped += 1;
                continue;
            };

            let paths = path_cache.paths_to(&src_device);
            tally.absorb(self.backtrack(paths, &dst_device, &app_id, pair));
        }

        report.removed = tally.removed;
        report.removal_failures = tally.failures;

        info!(
            event = events::REPAIR_FINISHED,
            component = COMPONENT,
            task_id = %report.task_id,
            egress = %fields::format_connect_point(egress),
            removed = report.removed.len(),
            skipped = report.pairs_skipped,
            failures = report.removal_failures,
            "black hole repair finished"
        );

        report
    }

    /// Devices of the pair's source and destination hosts.
    fn resolve_pair(&self, pair: &SrcDstPair) -> Option<(DeviceId, DeviceId)> {
        let src = self.hosts.host(&HostId::from_mac(pair.src?))?;
        let dst = self.hosts.host(&HostId::from_mac(pair.dst?))?;
        Some((src.location().device.clone(), dst.location().device.clone()))
    }

    /// Walks each path from the failed egress back toward the source, cleaning
    /// every device that has no surviving way to reach `dst_device`.
    fn backtrack(
        &self,
        paths: &[Path],
        dst_device: &DeviceId,
        app_id: &ApplicationId,
        pair: &SrcDstPair,
    ) -> RemovalTally {
        let mut tally = RemovalTally::default();

        for path in paths {
            trace!(
                component = COMPONENT,
                path = %fields::format_path(path),
                pair = %pair,
                "backtracking along path"
            );
            let links = path.links();
            for (i, link) in links.iter().enumerate() {
                let device = &link.src.device;
                if i != 0 {
                    tally.absorb(remove_flow_rules_for_pair(
                        self.flows.as_ref(),
                        device,
                        app_id,
                        pair,
                    ));
                }

                let onward = self.topology.paths(device, dst_device);
                if select_forward_path(&onward, link.src.port).is_some() {
                    debug!(
                        event = events::REPAIR_BACKTRACK_STOPPED,
                        component = COMPONENT,
                        device = %device,
                        pair = %pair,
                        "device still reaches destination"
                    );
                    break;
                }
                if i + 1 == links.len() {
                    tally.absorb(remove_flow_rules_for_pair(
                        self.flows.as_ref(),
                        &link.dst.device,
                        app_id,
                        pair,
                    ));
                }
            }
        }

        tally
    }
}
