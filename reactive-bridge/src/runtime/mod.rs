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

//! Runtime plumbing for work that must not run on the packet-in path.
//!
//! Forwarding decisions stay synchronous on the caller's thread. Link-down
//! handling is queued here and executed on a dedicated worker runtime, so a
//! slow repair never delays packet processing.

pub(crate) mod repair_dispatcher;
pub(crate) mod worker_runtime;
