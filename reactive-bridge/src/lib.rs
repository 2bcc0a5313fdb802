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

//! # reactive-bridge
//!
//! `reactive-bridge` is a reactive layer-2 forwarding application for an SDN
//! controller. Switches punt unmatched frames to the controller; the bridge
//! classifies each one, installs a unicast rule on the ingress switch toward
//! the destination host, and sends the frame on directly. When a link fails,
//! rules that would forward into it are removed so traffic re-learns a path.
//!
//! The bridge owns no network state. Topology, hosts, flow tables and packet
//! I/O are reached through the traits in [`services`].
//!
//! ```
//! use reactive_bridge::{
//!     build_ethernet_frame, BridgeConfig, ConnectPoint, EtherType, InboundPacket, MacAddress,
//! };
//!
//! let config = BridgeConfig::from_json_str(r#"{ "flow_timeout_secs": 30 }"#).unwrap();
//! assert_eq!(config.flow_priority, 50000);
//!
//! let a: MacAddress = "02:00:00:00:00:0a".parse().unwrap();
//! let b: MacAddress = "02:00:00:00:00:0b".parse().unwrap();
//! let packet = InboundPacket::new(
//!     ConnectPoint::new("of:0000000000000001", 1),
//!     build_ethernet_frame(a, b, EtherType::IPV4, &[0u8; 46]),
//! );
//! let frame = packet.parse().unwrap();
//! assert_eq!(frame.dst, b);
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: [`ReactiveBridge`] lifecycle, packet-in and link-down entry points
//! - Data plane: classification, the forwarding decision, packet-out
//! - Control plane: flow-rule construction, installation, queries and removal
//! - Routing: forward-path selection and per-repair path caching
//! - Repair: black-hole repair and the topology listener feeding it
//! - Runtime: the repair queue and its dedicated worker runtime
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events, with stable event names in
//! [`observability::events`]. Library code emits events and does not initialize
//! a global subscriber. Binaries and tests are responsible for one-time
//! `tracing_subscriber` initialization at process boundaries.

mod api;
pub mod config;
mod control_plane;
mod data_plane;
pub mod error;
pub mod model;
#[doc(hidden)]
pub mod observability;
mod repair;
mod routing;
mod runtime;
pub mod services;

pub use api::bridge::ReactiveBridge;
pub use config::BridgeConfig;
pub use data_plane::classifier::{classify, Classification, IgnoreReason};
pub use data_plane::forwarding::{FloodReason, ForwardingEngine, ForwardingOutcome};
pub use error::{BridgeError, Result};
pub use model::*;
pub use repair::{BlackHoleRepair, RepairReport};
pub use services::{
    Collaborators, FlowStore, HostDirectory, LinkListener, PacketProcessor, PacketService,
    TopologyOracle,
};
