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

//! Field formatters shared by log sites.

use crate::model::{ConnectPoint, Path, TrafficSelector};

pub fn format_connect_point(point: &ConnectPoint) -> String {
    point.to_string()
}

pub fn format_selector(selector: &TrafficSelector) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(src) = selector.eth_src {
        parts.push(format!("ETH_SRC:{src}"));
    }
    if let Some(dst) = selector.eth_dst {
        parts.push(format!("ETH_DST:{dst}"));
    }
    if let Some(eth_type) = selector.eth_type {
        parts.push(format!("ETH_TYPE:{eth_type}"));
    }
    if parts.is_empty() {
        return "*".to_string();
    }
    parts.join(",")
}

pub fn format_path(path: &Path) -> String {
    path.to_string()
}
