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
    ApplicationId, BridgeError, DeviceId, EtherType, FlowEntry, FlowEntryState, FlowRule,
    FlowRuleKey, FlowStore, MacAddress,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Flow tables for every device, keyed the way a controller identifies rules.
///
/// Writes take effect immediately unless installs or removals are deferred,
/// in which case entries stay pending until [`MemoryFlowStore::settle`].
#[derive(Default)]
pub struct MemoryFlowStore {
    entries: Mutex<BTreeMap<FlowRuleKey, FlowEntry>>,
    fail_apply: AtomicBool,
    fail_remove_by_app: AtomicBool,
    defer_installs: AtomicBool,
    defer_removals: AtomicBool,
    applies: AtomicUsize,
}

impl MemoryFlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_apply(&self, fail: bool) {
        self.fail_apply.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_remove_by_app(&self, fail: bool) {
        self.fail_remove_by_app.store(fail, Ordering::SeqCst);
    }

    /// Applied rules stay `PendingAdd` until settled.
    pub fn set_defer_installs(&self, defer: bool) {
        self.defer_installs.store(defer, Ordering::SeqCst);
    }

    /// Removed rules stay `PendingRemove` until settled.
    pub fn set_defer_removals(&self, defer: bool) {
        self.defer_removals.store(defer, Ordering::SeqCst);
    }

    /// Confirms pending installs and drops pending removals.
    pub fn settle(&self) {
        let mut entries = lock(&self.entries);
        entries.retain(|_, entry| entry.state != FlowEntryState::PendingRemove);
        for entry in entries.values_mut() {
            entry.state = FlowEntryState::Added;
        }
    }

    /// Successful `apply` calls so far.
    pub fn apply_count(&self) -> usize {
        self.applies.load(Ordering::SeqCst)
    }

    /// Every rule in the store, pending or not.
    pub fn rules(&self) -> Vec<FlowRule> {
        lock(&self.entries)
            .values()
            .map(|entry| entry.rule.clone())
            .collect()
    }

    pub fn rules_on(&self, device: &str) -> Vec<FlowRule> {
        lock(&self.entries)
            .values()
            .filter(|entry| entry.rule.device.as_str() == device)
            .map(|entry| entry.rule.clone())
            .collect()
    }

    pub fn state_of(&self, key: &FlowRuleKey) -> Option<FlowEntryState> {
        lock(&self.entries).get(key).map(|entry| entry.state)
    }

    pub fn keys(&self) -> Vec<FlowRuleKey> {
        lock(&self.entries).keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Highest-priority rule on `device` matching the frame header.
    pub fn lookup(
        &self,
        device: &DeviceId,
        src: MacAddress,
        dst: MacAddress,
        ether_type: EtherType,
    ) -> Option<FlowRule> {
        lock(&self.entries)
            .values()
            .map(|entry| &entry.rule)
            .filter(|rule| &rule.device == device)
            .filter(|rule| {
                let selector = &rule.selector;
                selector.eth_src.map_or(true, |mac| mac == src)
                    && selector.eth_dst.map_or(true, |mac| mac == dst)
                    && selector.eth_type.map_or(true, |eth| eth == ether_type)
            })
            .max_by_key(|rule| rule.priority)
            .cloned()
    }
}

impl FlowStore for MemoryFlowStore {
    fn apply(&self, rule: FlowRule) -> Result<(), BridgeError> {
        if self.fail_apply.load(Ordering::SeqCst) {
            return Err(BridgeError::FlowStore(format!(
                "device {} rejected the rule",
                rule.device
            )));
        }
        let state = if self.defer_installs.load(Ordering::SeqCst) {
            FlowEntryState::PendingAdd
        } else {
            FlowEntryState::Added
        };
        lock(&self.entries).insert(rule.key(), FlowEntry { rule, state });
        self.applies.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &FlowRuleKey) -> Result<(), BridgeError> {
        let mut entries = lock(&self.entries);
        if self.defer_removals.load(Ordering::SeqCst) {
            if let Some(entry) = entries.get_mut(key) {
                entry.state = FlowEntryState::PendingRemove;
            }
        } else {
            entries.remove(key);
        }
        Ok(())
    }

    fn entries(&self, device: &DeviceId) -> Vec<FlowEntry> {
        lock(&self.entries)
            .values()
            .filter(|entry| &entry.rule.device == device)
            .cloned()
            .collect()
    }

    fn remove_by_app(&self, app_id: &ApplicationId) -> Result<(), BridgeError> {
        if self.fail_remove_by_app.load(Ordering::SeqCst) {
            return Err(BridgeError::FlowStore("flow store unavailable".to_string()));
        }
        lock(&self.entries).retain(|_, entry| &entry.rule.app_id != app_id);
        Ok(())
    }
}
