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

//! Structured logging vocabulary.
//!
//! Every `tracing` event emitted by the crate carries an `event` field taken from
//! [`events`] and a `component` field naming the emitting module, so logs can be
//! filtered and asserted on without matching free-form messages.

pub mod events;
pub mod fields;
