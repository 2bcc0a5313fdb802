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

//! Hosts as tracked by the host directory.

use crate::model::addressing::{ConnectPoint, MacAddress};
use std::fmt;

/// Host identifier derived from its hardware address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(MacAddress);

impl HostId {
    pub fn from_mac(mac: MacAddress) -> Self {
        Self(mac)
    }

    pub fn mac(&self) -> MacAddress {
        self.0
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/None", self.0)
    }
}

/// A learned end host and its last observed attachment point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    pub id: HostId,
    pub location: ConnectPoint,
}

impl Host {
    pub fn new(mac: MacAddress, location: ConnectPoint) -> Self {
        Self {
            id: HostId::from_mac(mac),
            location,
        }
    }

    pub fn mac(&self) -> MacAddress {
        self.id.mac()
    }

    pub fn location(&self) -> &ConnectPoint {
        &self.location
    }
}
