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

//! Bridge configuration.
//!
//! Loaded from a JSON document whose fields all have defaults, so `{}` is a valid
//! configuration. The forwarding parameters can be swapped at runtime through
//! [`crate::ReactiveBridge::reconfigure`].

use crate::error::BridgeError;
use crate::model::{ApplicationId, FlowLifetime};
use crate::observability::events;
use serde::{Deserialize, Serialize};
use std::fs::{self, canonicalize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const COMPONENT: &str = "config";

pub const DEFAULT_APP_NAME: &str = "org.reactive.bridge";
pub const DEFAULT_FLOW_PRIORITY: u16 = 50000;
pub const DEFAULT_FLOW_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REPAIR_QUEUE_SIZE: usize = 64;
pub const DEFAULT_REPAIR_WORKER_THREADS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Owning-application name stamped on every installed rule.
    pub app_name: String,
    pub flow_priority: u16,
    /// Idle timeout of temporary rules.
    pub flow_timeout_secs: u64,
    pub permanent_flows: bool,
    /// Leave the source address out of unicast selectors.
    pub match_dst_mac_only: bool,
    pub repair_queue_size: usize,
    pub repair_worker_threads: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            flow_priority: DEFAULT_FLOW_PRIORITY,
            flow_timeout_secs: DEFAULT_FLOW_TIMEOUT_SECS,
            permanent_flows: false,
            match_dst_mac_only: false,
            repair_queue_size: DEFAULT_REPAIR_QUEUE_SIZE,
            repair_worker_threads: DEFAULT_REPAIR_WORKER_THREADS,
        }
    }
}

impl BridgeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, BridgeError> {
        let config: BridgeConfig = serde_json::from_str(json)
            .map_err(|error| BridgeError::Config(format!("unable to parse JSON: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let config_file = PathBuf::from(path.as_ref());
        debug!(
            event = events::CONFIG_FILE_LOADING,
            component = COMPONENT,
            path = %config_file.display(),
            "loading bridge configuration"
        );

        let canonicalized = canonicalize(&config_file).map_err(|source| BridgeError::ConfigIo {
            path: config_file.clone(),
            source,
        })?;
        let data = fs::read_to_string(&canonicalized).map_err(|source| BridgeError::ConfigIo {
            path: canonicalized.clone(),
            source,
        })?;

        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.app_name.trim().is_empty() {
            return Err(BridgeError::Config("app_name must not be empty".to_string()));
        }
        if self.flow_priority == 0 {
            return Err(BridgeError::Config(
                "flow_priority must be above the default priority 0".to_string(),
            ));
        }
        if !self.permanent_flows && self.flow_timeout_secs == 0 {
            return Err(BridgeError::Config(
                "flow_timeout_secs must be positive for temporary flows".to_string(),
            ));
        }
        if self.repair_queue_size == 0 {
            return Err(BridgeError::Config(
                "repair_queue_size must be positive".to_string(),
            ));
        }
        if self.repair_worker_threads == 0 {
            return Err(BridgeError::Config(
                "repair_worker_threads must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn app_id(&self) -> ApplicationId {
        ApplicationId::new(self.app_name.clone())
    }

    pub fn flow_lifetime(&self) -> FlowLifetime {
        if self.permanent_flows {
            FlowLifetime::Permanent
        } else {
            FlowLifetime::Temporary {
                idle_timeout: Duration::from_secs(self.flow_timeout_secs),
            }
        }
    }
}
