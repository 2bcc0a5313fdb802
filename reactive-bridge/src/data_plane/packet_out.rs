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

//! Packet-out helpers.

use crate::error::BridgeError;
use crate::model::{Frame, OutboundPacket, OutputPort};
use crate::observability::{events, fields};
use crate::services::PacketService;
use tracing::warn;

const COMPONENT: &str = "packet_out";

/// Sends `frame` back out of the device it arrived on.
pub(crate) fn emit_frame(
    packets: &dyn PacketService,
    frame: &Frame,
    output: OutputPort,
) -> Result<(), BridgeError> {
    let packet = OutboundPacket {
        device: frame.ingress.device.clone(),
        output,
        in_port: frame.ingress.port,
        data: frame.data.clone(),
    };

    packets.emit(packet).map_err(|err| {
        warn!(
            event = events::PACKET_EMIT_FAILED,
            component = COMPONENT,
            ingress = %fields::format_connect_point(&frame.ingress),
            output = ?output,
            err = %err,
            "packet-out failed"
        );
        err
    })
}
