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
use reactive_bridge::{ConnectPoint, Host, HostDirectory, HostId, MacAddress};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryHostDirectory {
    hosts: Mutex<HashMap<HostId, Host>>,
}

impl MemoryHostDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(self, mac: MacAddress, device: &str, port: u64) -> Self {
        self.attach(mac, ConnectPoint::new(device, port));
        self
    }

    /// Adds the host or moves it to `location`.
    pub fn attach(&self, mac: MacAddress, location: ConnectPoint) {
        lock(&self.hosts).insert(HostId::from_mac(mac), Host::new(mac, location));
    }

    pub fn detach(&self, mac: MacAddress) -> Option<Host> {
        lock(&self.hosts).remove(&HostId::from_mac(mac))
    }

    /// Current attachment point of `mac`.
    pub fn location_of(&self, mac: MacAddress) -> Option<ConnectPoint> {
        lock(&self.hosts)
            .get(&HostId::from_mac(mac))
            .map(|host| host.location().clone())
    }

    /// Host attached at exactly `point`, if any.
    pub fn host_at(&self, point: &ConnectPoint) -> Option<Host> {
        lock(&self.hosts)
            .values()
            .find(|host| host.location() == point)
            .cloned()
    }
}

impl HostDirectory for MemoryHostDirectory {
    fn host(&self, id: &HostId) -> Option<Host> {
        lock(&self.hosts).get(id).cloned()
    }
}
