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

//! Install/remove primitives against the flow store.

use crate::control_plane::flow_query::entries_for_pair;
use crate::error::BridgeError;
use crate::model::{ApplicationId, DeviceId, FlowRule, FlowRuleKey, SrcDstPair};
use crate::observability::{events, fields};
use crate::services::FlowStore;
use tracing::{debug, trace, warn};

const COMPONENT: &str = "flow_lifecycle";

pub(crate) fn install_flow_rule(flows: &dyn FlowStore, rule: FlowRule) -> Result<(), BridgeError> {
    let device = rule.device.clone();
    let selector = fields::format_selector(&rule.selector);
    let output = rule.output;

    debug!(
        event = events::FLOW_INSTALL_REQUESTED,
        component = COMPONENT,
        device = %device,
        selector = %selector,
        output = %output,
        "requesting flow rule install"
    );

    flows.apply(rule).map_err(|err| {
        warn!(
            event = events::FLOW_INSTALL_FAILED,
            component = COMPONENT,
            device = %device,
            selector = %selector,
            err = %err,
            "flow rule install failed"
        );
        err
    })
}

/// Result of cleaning one pair off one device.
#[derive(Debug, Default)]
pub(crate) struct RemovalTally {
    pub(crate) removed: Vec<FlowRuleKey>,
    pub(crate) failures: usize,
}

impl RemovalTally {
    pub(crate) fn absorb(&mut self, other: RemovalTally) {
        self.removed.extend(other.removed);
        self.failures += other.failures;
    }
}

/// Removes every rule `app_id` owns on `device` for `pair`.
///
/// Finding nothing to remove is the normal outcome on a repeated repair.
pub(crate) fn remove_flow_rules_for_pair(
    flows: &dyn FlowStore,
    device: &DeviceId,
    app_id: &ApplicationId,
    pair: &SrcDstPair,
) -> RemovalTally {
    trace!(
        component = COMPONENT,
        device = %device,
        pair = %pair,
        "searching for flow rules to remove"
    );

    let entries = flows.entries(device);
    let mut tally = RemovalTally::default();

    for entry in entries_for_pair(&entries, app_id, pair) {
        let key = entry.rule.key();
        match flows.remove(&key) {
            Ok(()) => {
                debug!(
                    event = events::FLOW_REMOVE_REQUESTED,
                    component = COMPONENT,
                    device = %device,
                    selector = %fields::format_selector(&key.selector),
                    "removed flow rule"
                );
                tally.removed.push(key);
            }
            Err(err) => {
                warn!(
                    event = events::FLOW_REMOVE_FAILED,
                    component = COMPONENT,
                    device = %device,
                    selector = %fields::format_selector(&key.selector),
                    err = %err,
                    "flow rule removal failed"
                );
                tally.failures += 1;
            }
        }
    }

    tally
}
