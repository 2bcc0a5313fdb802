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

//! Links, paths and the link events the topology oracle publishes.

use crate::error::BridgeError;
use crate::model::addressing::ConnectPoint;
use std::fmt;

/// A directed infrastructure link between two switch ports.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    pub src: ConnectPoint,
    pub dst: ConnectPoint,
}

impl Link {
    pub fn new(src: ConnectPoint, dst: ConnectPoint) -> Self {
        Self { src, dst }
    }

    pub fn reversed(&self) -> Self {
        Self {
            src: self.dst.clone(),
            dst: self.src.clone(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.src, self.dst)
    }
}

/// Ordered, non-empty walk of contiguous links between two devices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    links: Vec<Link>,
}

impl Path {
    /// Builds a path, rejecting an empty link list or a gap between consecutive links.
    pub fn new(links: Vec<Link>) -> Result<Self, BridgeError> {
        if links.is_empty() {
            return Err(BridgeError::InvalidPath("path has no links".to_string()));
        }
        if let Some(gap) = links
            .windows(2)
            .find(|pair| pair[0].dst.device != pair[1].src.device)
        {
            return Err(BridgeError::InvalidPath(format!(
                "link {} does not continue from {}",
                gap[1], gap[0]
            )));
        }
        Ok(Self { links })
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Egress point of the first hop.
    pub fn src(&self) -> &ConnectPoint {
        &self.links[0].src
    }

    /// Ingress point of the last hop.
    pub fn dst(&self) -> &ConnectPoint {
        &self.links[self.links.len() - 1].dst
    }

    pub fn hop_count(&self) -> usize {
        self.links.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for link in &self.links {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{link}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEventKind {
    Added,
    Removed,
}

/// Link change published by the topology oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkEvent {
    pub kind: LinkEventKind,
    pub link: Link,
}

impl LinkEvent {
    pub fn removed(link: Link) -> Self {
        Self {
            kind: LinkEventKind::Removed,
            link,
        }
    }

    pub fn added(link: Link) -> Self {
        Self {
            kind: LinkEventKind::Added,
            link,
        }
    }
}
