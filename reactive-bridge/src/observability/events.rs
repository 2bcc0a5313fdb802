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

//! Stable event names.

pub const BRIDGE_ACTIVATED: &str = "bridge_activated";
pub const BRIDGE_DEACTIVATED: &str = "bridge_deactivated";
pub const BRIDGE_ACTIVATE_FAILED: &str = "bridge_activate_failed";
pub const BRIDGE_TEARDOWN_STEP_FAILED: &str = "bridge_teardown_step_failed";
pub const BRIDGE_RECONFIGURED: &str = "bridge_reconfigured";

pub const CONFIG_FILE_LOADING: &str = "config_file_loading";

pub const PACKET_IGNORED: &str = "packet_ignored";
pub const PACKET_FLOODED: &str = "packet_flooded";
pub const PACKET_BLOCKED: &str = "packet_blocked";
pub const PACKET_AT_DESTINATION_PORT: &str = "packet_at_destination_port";
pub const PACKET_FORWARDED: &str = "packet_forwarded";
pub const PACKET_EMIT_FAILED: &str = "packet_emit_failed";

pub const PATH_NOT_FOUND: &str = "path_not_found";
pub const PATH_ALL_REFLECT_INGRESS: &str = "path_all_reflect_ingress";
pub const PATH_INVARIANT_VIOLATED: &str = "path_invariant_violated";

pub const FLOW_INSTALL_REQUESTED: &str = "flow_install_requested";
pub const FLOW_INSTALL_FAILED: &str = "flow_install_failed";
pub const FLOW_REMOVE_REQUESTED: &str = "flow_remove_requested";
pub const FLOW_REMOVE_FAILED: &str = "flow_remove_failed";

pub const LINK_DOWN_RECEIVED: &str = "link_down_received";
pub const REPAIR_ENQUEUE_FAILED: &str = "repair_enqueue_failed";
pub const REPAIR_STARTED: &str = "repair_started";
pub const REPAIR_PAIR_SKIPPED: &str = "repair_pair_skipped";
pub const REPAIR_BACKTRACK_STOPPED: &str = "repair_backtrack_stopped";
pub const REPAIR_FINISHED: &str = "repair_finished";
pub const REPAIR_TASK_PANICKED: &str = "repair_task_panicked";
pub const REPAIR_WORKER_STOPPED: &str = "repair_worker_stopped";
