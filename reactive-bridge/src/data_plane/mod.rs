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

//! Data-plane layer.
//!
//! Owns the per-packet path: classification of packet-ins and the forwarding
//! decision that turns a classification into at most one flow install and at
//! most one packet-out. Nothing here suspends or holds mutable state; the
//! engine can be driven from any number of dispatch threads at once.

pub(crate) mod classifier;
pub(crate) mod forwarding;
pub(crate) mod packet_in;
pub(crate) mod packet_out;
