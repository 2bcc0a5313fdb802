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

//! Flow store contract.

use crate::error::BridgeError;
use crate::model::{ApplicationId, DeviceId, FlowEntry, FlowRule, FlowRuleKey};

/// Installs, removes and reports flow rules on devices.
///
/// Translation of rules onto a device pipeline is the store's business.
pub trait FlowStore: Send + Sync {
    /// Requests installation of `rule`. Replaces a rule with the same key.
    fn apply(&self, rule: FlowRule) -> Result<(), BridgeError>;

    /// Requests removal of the rule with this key. Absence is not an error.
    fn remove(&self, key: &FlowRuleKey) -> Result<(), BridgeError>;

    /// Snapshot of the entries currently known on `device`, from every application.
    fn entries(&self, device: &DeviceId) -> Vec<FlowEntry>;

    /// Removes every rule owned by `app_id` on every device.
    fn remove_by_app(&self, app_id: &ApplicationId) -> Result<(), BridgeError>;
}
