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

//! Black-hole repair.
//!
//! When a link goes down, rules that still point at the dead egress keep
//! swallowing traffic until they age out. Repair finds those rules, removes
//! them, and walks back toward each affected source removing the upstream
//! rules that would steer the same traffic into the hole. The next packet of
//! each flow then falls back to reactive forwarding and gets a fresh path.

mod blackhole;
mod link_listener;
mod report;

pub use blackhole::BlackHoleRepair;
pub(crate) use link_listener::RepairLinkListener;
pub use report::RepairReport;
