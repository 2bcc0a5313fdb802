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

//! Control-plane layer.
//!
//! Owns flow-rule construction, the install/remove lifecycle against the flow
//! store, and the read-only queries repair runs over flow-store snapshots.
//! Removal is idempotent: deleting a rule that is already gone is a no-op.

pub(crate) mod flow_lifecycle;
pub(crate) mod flow_query;
pub(crate) mod flow_table;
