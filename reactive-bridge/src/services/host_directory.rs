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

//! Host directory contract.

use crate::model::{Host, HostId};

/// Read access to learned hosts. Learning itself happens outside the bridge.
pub trait HostDirectory: Send + Sync {
    /// Returns the host with this identifier, if it has been learned.
    fn host(&self, id: &HostId) -> Option<Host>;
}
