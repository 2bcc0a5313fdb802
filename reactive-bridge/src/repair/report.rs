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

use crate::model::{ConnectPoint, FlowRuleKey};
use uuid::Uuid;

/// Summary of one completed repair.
#[derive(Clone, Debug)]
pub struct RepairReport {
    pub task_id: Uuid,
    pub egress: ConnectPoint,
    /// Rules owned by this application that pointed at `egress`.
    pub stale_rules: usize,
    pub pairs_examined: usize,
    /// Pairs cleaned only at `egress` because a host could not be resolved.
    pub pairs_skipped: usize,
    pub removed: Vec<FlowRuleKey>,
    pub removal_failures: usize,
}

impl RepairReport {
    pub(crate) fn new(egress: ConnectPoint) -> Self {
        Self {
            task_id: Uuid::new_v4(),
            egress,
            stale_rules: 0,
            pairs_examined: 0,
            pairs_skipped: 0,
            removed: Vec::new(),
            removal_failures: 0,
        }
    }

    /// True when the egress had nothing pointing at it.
    pub fn is_noop(&self) -> bool {
        self.stale_rules == 0
    }
}
