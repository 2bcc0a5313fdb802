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

//! Flow-rule model: selectors, treatments, lifetimes and installed entries.

use crate::model::addressing::{DeviceId, EtherType, MacAddress, PortNumber};
use std::fmt;
use std::time::Duration;

/// Identity of the application that owns a rule or a packet request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Match criteria. Unset fields are wildcards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrafficSelector {
    pub eth_src: Option<MacAddress>,
    pub eth_dst: Option<MacAddress>,
    pub eth_type: Option<EtherType>,
}

impl TrafficSelector {
    pub fn builder() -> TrafficSelectorBuilder {
        TrafficSelectorBuilder::default()
    }

    /// Source/destination pair this selector serves.
    pub fn src_dst_pair(&self) -> SrcDstPair {
        SrcDstPair {
            src: self.eth_src,
            dst: self.eth_dst,
        }
    }
}

#[derive(Default)]
pub struct TrafficSelectorBuilder {
    selector: TrafficSelector,
}

impl TrafficSelectorBuilder {
    pub fn match_eth_src(mut self, mac: MacAddress) -> Self {
        self.selector.eth_src = Some(mac);
        self
    }

    pub fn match_eth_dst(mut self, mac: MacAddress) -> Self {
        self.selector.eth_dst = Some(mac);
        self
    }

    pub fn match_eth_type(mut self, eth_type: EtherType) -> Self {
        self.selector.eth_type = Some(eth_type);
        self
    }

    pub fn build(self) -> TrafficSelector {
        self.selector
    }
}

/// How long an installed rule lives on the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowLifetime {
    /// Expires after the given idle time; the flow store removes it on its own.
    Temporary { idle_timeout: Duration },
    Permanent,
}

/// A rule to install: match on `selector`, output to `output`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlowRule {
    pub device: DeviceId,
    pub selector: TrafficSelector,
    pub output: PortNumber,
    pub priority: u16,
    pub lifetime: FlowLifetime,
    pub app_id: ApplicationId,
}

impl FlowRule {
    pub fn key(&self) -> FlowRuleKey {
        FlowRuleKey {
            device: self.device.clone(),
            selector: self.selector.clone(),
            app_id: self.app_id.clone(),
        }
    }
}

/// Identity of a rule on a device: one rule per selector per application.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowRuleKey {
    pub device: DeviceId,
    pub selector: TrafficSelector,
    pub app_id: ApplicationId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEntryState {
    PendingAdd,
    Added,
    PendingRemove,
}

/// A rule as currently reported by the flow store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowEntry {
    pub rule: FlowRule,
    pub state: FlowEntryState,
}

impl FlowEntry {
    /// Installed or about to be; not already on its way out.
    pub fn is_live(&self) -> bool {
        self.state != FlowEntryState::PendingRemove
    }
}

/// Source/destination MAC pair a unicast rule serves.
///
/// Either side may be absent when the rule was installed with a
/// destination-only selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SrcDstPair {
    pub src: Option<MacAddress>,
    pub dst: Option<MacAddress>,
}

impl SrcDstPair {
    pub fn new(src: MacAddress, dst: MacAddress) -> Self {
        Self {
            src: Some(src),
            dst: Some(dst),
        }
    }

    /// Returns `true` when `selector` matches exactly this source and
    /// destination, including a wildcard source. A pair without a destination
    /// serves nothing.
    pub fn is_served_by(&self, selector: &TrafficSelector) -> bool {
        self.dst.is_some() && selector.eth_src == self.src && selector.eth_dst == self.dst
    }
}

impl fmt::Display for SrcDstPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |mac: &Option<MacAddress>| match mac {
            Some(mac) => mac.to_string(),
            None => "*".to_string(),
        };
        write!(f, "{}->{}", side(&self.src), side(&self.dst))
    }
}

/// Priority of a packet-in interception request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketPriority {
    Control,
    Reactive,
}
