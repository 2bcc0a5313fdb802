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
    BridgeError, ConnectPoint, DeviceId, Link, LinkEvent, LinkListener, Path, TopologyOracle,
};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Graph of switches joined by directed links, with simple-path enumeration
/// and a spanning tree for broadcast eligibility.
///
/// Cables are added in both directions. Ports that carry no link are edge
/// ports and are always broadcast-eligible.
#[derive(Default)]
pub struct MemoryTopology {
    links: Mutex<BTreeSet<Link>>,
    listeners: Mutex<Vec<Arc<dyn LinkListener>>>,
    fail_listener_registration: AtomicBool,
}

impl MemoryTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cable between `a` and `b`, i.e. a link in each direction.
    pub fn with_cable(self, a: (&str, u64), b: (&str, u64)) -> Self {
        let a = ConnectPoint::new(a.0, a.1);
        let b = ConnectPoint::new(b.0, b.1);
        {
            let mut links = lock(&self.links);
            links.insert(Link::new(a.clone(), b.clone()));
            links.insert(Link::new(b, a));
        }
        self
    }

    pub fn set_fail_listener_registration(&self, fail: bool) {
        self.fail_listener_registration.store(fail, Ordering::SeqCst);
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub fn links(&self) -> Vec<Link> {
        lock(&self.links).iter().cloned().collect()
    }

    /// Link leaving `point`, if `point` is an infrastructure port.
    pub fn link_from(&self, point: &ConnectPoint) -> Option<Link> {
        lock(&self.links)
            .iter()
            .find(|link| &link.src == point)
            .cloned()
    }

    /// Cuts the cable attached at `point` and notifies listeners with one
    /// removal per direction. Returns the removed links.
    pub async fn fail_cable(&self, point: &ConnectPoint) -> Vec<Link> {
        let removed: Vec<Link> = {
            let mut links = lock(&self.links);
            let removed: Vec<Link> = links
                .iter()
                .filter(|link| &link.src == point || &link.dst == point)
                .cloned()
                .collect();
            for link in &removed {
                links.remove(link);
            }
            removed
        };

        let listeners: Vec<_> = lock(&self.listeners).clone();
        for link in &removed {
            debug!(link = %link, "link removed");
            for listener in &listeners {
                listener.on_link_event(LinkEvent::removed(link.clone())).await;
            }
        }
        removed
    }

    /// Reconnects `a` and `b` and notifies listeners with one addition per
    /// direction.
    pub async fn restore_cable(&self, a: (&str, u64), b: (&str, u64)) {
        let a = ConnectPoint::new(a.0, a.1);
        let b = ConnectPoint::new(b.0, b.1);
        let added = [Link::new(a.clone(), b.clone()), Link::new(b, a)];
        {
            let mut links = lock(&self.links);
            for link in &added {
                links.insert(link.clone());
            }
        }

        let listeners: Vec<_> = lock(&self.listeners).clone();
        for link in &added {
            debug!(link = %link, "link added");
            for listener in &listeners {
                listener.on_link_event(LinkEvent::added(link.clone())).await;
            }
        }
    }

    fn adjacency(&self) -> BTreeMap<DeviceId, Vec<Link>> {
        let mut adjacency: BTreeMap<DeviceId, Vec<Link>> = BTreeMap::new();
        for link in lock(&self.links).iter() {
            adjacency
                .entry(link.src.device.clone())
                .or_default()
                .push(link.clone());
        }
        adjacency
    }

    /// Ports on links chosen by a breadth-first spanning tree rooted at the
    /// lowest device of each connected component.
    fn spanning_tree_ports(&self) -> HashSet<ConnectPoint> {
        let adjacency = self.adjacency();
        let mut visited: HashSet<DeviceId> = HashSet::new();
        let mut ports = HashSet::new();

        for root in adjacency.keys() {
            if !visited.insert(root.clone()) {
                continue;
            }
            let mut queue = VecDeque::from([root.clone()]);
            while let Some(device) = queue.pop_front() {
                for link in adjacency.get(&device).into_iter().flatten() {
                    if visited.insert(link.dst.device.clone()) {
                        ports.insert(link.src.clone());
                        ports.insert(link.dst.clone());
                        queue.push_back(link.dst.device.clone());
                    }
                }
            }
        }
        ports
    }

    fn walk(
        adjacency: &BTreeMap<DeviceId, Vec<Link>>,
        at: &DeviceId,
        dst: &DeviceId,
        visited: &mut HashSet<DeviceId>,
        current: &mut Vec<Link>,
        found: &mut Vec<Vec<Link>>,
    ) {
        for link in adjacency.get(at).into_iter().flatten() {
            let next = &link.dst.device;
            if visited.contains(next) {
                continue;
            }
            current.push(link.clone());
            if next == dst {
                found.push(current.clone());
            } else {
                visited.insert(next.clone());
                Self::walk(adjacency, next, dst, visited, current, found);
                visited.remove(next);
            }
            current.pop();
        }
    }
}

impl TopologyOracle for MemoryTopology {
    /// Every simple path, shortest first; equal lengths keep enumeration order.
    fn paths(&self, src: &DeviceId, dst: &DeviceId) -> Vec<Path> {
        if src == dst {
            return Vec::new();
        }
        let adjacency = self.adjacency();
        let mut visited = HashSet::from([src.clone()]);
        let mut found = Vec::new();
        Self::walk(&adjacency, src, dst, &mut visited, &mut Vec::new(), &mut found);

        found.sort_by_key(Vec::len);
        found
            .into_iter()
            .filter_map(|links| Path::new(links).ok())
            .collect()
    }

    fn is_broadcast_point(&self, point: &ConnectPoint) -> bool {
        self.link_from(point).is_none() || self.spanning_tree_ports().contains(point)
    }

    fn add_link_listener(&self, listener: Arc<dyn LinkListener>) -> Result<(), BridgeError> {
        if self.fail_listener_registration.load(Ordering::SeqCst) {
            return Err(BridgeError::Topology(
                "link event subscription refused".to_string(),
            ));
        }
        lock(&self.listeners).push(listener);
        Ok(())
    }

    fn remove_link_listener(&self, listener: &Arc<dyn LinkListener>) -> Result<(), BridgeError> {
        lock(&self.listeners).retain(|existing| !Arc::ptr_eq(existing, listener));
        Ok(())
    }
}
