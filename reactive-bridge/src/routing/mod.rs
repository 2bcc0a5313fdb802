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

//! Path-selection policy.
//!
//! Forwarding and repair share one tie-break: the first path, in the oracle's
//! enumeration order, whose first hop does not leave through the port the
//! traffic arrived on.

pub(crate) mod path_cache;
pub(crate) mod path_selection;
