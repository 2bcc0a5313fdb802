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

//! Topology listener adapter that turns link removals into repair requests.

use crate::model::{LinkEvent, LinkEventKind};
use crate::observability::{events, fields};
use crate::runtime::repair_dispatcher::RepairSubmitter;
use crate::services::LinkListener;
use async_trait::async_trait;
use tracing::{debug, trace};

const COMPONENT: &str = "repair_link_listener";

pub(crate) struct RepairLinkListener {
    submitter: RepairSubmitter,
}

impl RepairLinkListener {
    pub(crate) fn new(submitter: RepairSubmitter) -> Self {
        Self { submitter }
    }
}

#[async_trait]
impl LinkListener for RepairLinkListener {
    async fn on_link_event(&self, event: LinkEvent) {
        if event.kind != LinkEventKind::Removed {
            trace!(
                component = COMPONENT,
                link = %event.link,
                "ignoring link event"
            );
            return;
        }

        debug!(
            event = events::LINK_DOWN_RECEIVED,
            component = COMPONENT,
            egress = %fields::format_connect_point(&event.link.src),
            "link removed, scheduling repair"
        );
        // Enqueue failures are logged by the submitter; nothing to hand back here.
        let _ = self.submitter.submit(event.link.src);
    }
}
