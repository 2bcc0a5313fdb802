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

//! Error type shared by the bridge and its collaborator contracts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the bridge or reported back from its collaborators.
///
/// None of these are fatal to packet forwarding: the forwarding engine and
/// the repair engine report them in their outcomes and keep going.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Configuration rejected by validation or parsing.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be located or read.
    #[error("unable to read configuration {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path was built from links that do not form a usable walk.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A textual hardware address did not parse.
    #[error("invalid MAC address: {0:?}")]
    InvalidMacAddress(String),

    /// The flow store refused or failed an install/remove request.
    #[error("flow store: {0}")]
    FlowStore(String),

    /// The packet service failed to emit a frame or register a request.
    #[error("packet service: {0}")]
    PacketService(String),

    /// The topology oracle failed a registration request.
    #[error("topology: {0}")]
    Topology(String),

    #[error("bridge is already active")]
    AlreadyActive,

    #[error("bridge is not active")]
    NotActive,

    /// The repair queue has been closed or is full.
    #[error("repair dispatcher unavailable: {0}")]
    DispatcherClosed(String),

    /// The repair worker thread or runtime could not be started.
    #[error("unable to start repair dispatcher: {0}")]
    DispatcherStart(String),
}

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
