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

//! Queue between link-down notifications and black-hole repair.
//!
//! Producers hold a [`RepairSubmitter`] and never wait: a full queue is an
//! error returned to the caller. The worker runs one blocking repair task per
//! request and publishes each finished [`RepairReport`] on a broadcast channel.

use crate::error::BridgeError;
use crate::model::ConnectPoint;
use crate::observability::{events, fields};
use crate::repair::{BlackHoleRepair, RepairReport};
use crate::runtime::worker_runtime::spawn_worker_runtime;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "repair_dispatcher";
const WORKER_THREAD_NAME: &str = "blackhole-repair";

#[derive(Debug)]
pub(crate) struct RepairRequest {
    pub(crate) egress: ConnectPoint,
}

type SharedSender = Arc<ArcSwapOption<mpsc::Sender<RepairRequest>>>;

/// Cheap handle for enqueueing repairs.
#[derive(Clone)]
pub(crate) struct RepairSubmitter {
    sender: SharedSender,
}

impl RepairSubmitter {
    pub(crate) fn submit(&self, egress: ConnectPoint) -> Result<(), BridgeError> {
        let Some(sender) = self.sender.load_full() else {
            return Err(BridgeError::DispatcherClosed(
                "repair dispatcher has been shut down".to_string(),
            ));
        };

        sender
            .try_send(RepairRequest { egress })
            .map_err(|err| {
                let (reason, egress) = match err {
                    TrySendError::Full(request) => ("repair queue is full", request.egress),
                    TrySendError::Closed(request) => ("repair worker has stopped", request.egress),
                };
                warn!(
                    event = events::REPAIR_ENQUEUE_FAILED,
                    component = COMPONENT,
                    egress = %fields::format_connect_point(&egress),
                    reason,
                    "unable to enqueue repair"
                );
                BridgeError::DispatcherClosed(reason.to_string())
            })
    }
}

pub(crate) struct RepairDispatcher {
    sender: SharedSender,
    reports: broadcast::Sender<Arc<RepairReport>>,
    worker: Option<JoinHandle<()>>,
}

impl RepairDispatcher {
    pub(crate) fn start(
        repair: BlackHoleRepair,
        queue_size: usize,
        worker_threads: usize,
    ) -> Result<Self, BridgeError> {
        let (sender, receiver) = mpsc::channel(queue_size);
        let (reports, _) = broadcast::channel(queue_size);

        let worker_reports = reports.clone();
        let worker = spawn_worker_runtime(WORKER_THREAD_NAME, worker_threads, move || {
            Self::repair_loop(Arc::new(repair), receiver, worker_reports)
        })?;

        debug!(
            component = COMPONENT,
            queue_size, worker_threads, "repair dispatcher started"
        );

        Ok(Self {
            sender: Arc::new(ArcSwapOption::from_pointee(sender)),
            reports,
            worker: Some(worker),
        })
    }

    pub(crate) fn submitter(&self) -> RepairSubmitter {
        RepairSubmitter {
            sender: self.sender.clone(),
        }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<Arc<RepairReport>> {
        self.reports.subscribe()
    }

    /// Stops accepting requests. Queued and running repairs still finish.
    pub(crate) fn shutdown(&mut self) {
        if self.sender.swap(None).is_some() {
            info!(component = COMPONENT, "repair queue closed");
        }
        // The worker exits on its own once the queue drains.
        self.worker.take();
    }

    async fn repair_loop(
        repair: Arc<BlackHoleRepair>,
        mut receiver: mpsc::Receiver<RepairRequest>,
        reports: broadcast::Sender<Arc<RepairReport>>,
    ) {
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                request = receiver.recv() => {
                    let Some(RepairRequest { egress }) = request else {
                        break;
                    };
                    let repair = repair.clone();
                    tasks.spawn_blocking(move || repair.repair(&egress));
                }
                Some(finished) = tasks.join_next(), if !tasks.is_empty() => {
                    Self::publish(finished, &reports);
                }
            }
        }

        while let Some(finished) = tasks.join_next().await {
            Self::publish(finished, &reports);
        }

        info!(
            event = events::REPAIR_WORKER_STOPPED,
            component = COMPONENT,
            "repair worker stopped"
        );
    }

    fn publish(
        finished: Result<RepairReport, JoinError>,
        reports: &broadcast::Sender<Arc<RepairReport>>,
    ) {
        match finished {
            // No subscribers is normal.
            Ok(report) => {
                let _ = reports.send(Arc::new(report));
            }
            Err(err) => {
                error!(
                    event = events::REPAIR_TASK_PANICKED,
                    component = COMPONENT,
                    err = %err,
                    "repair task did not complete"
                );
            }
        }
    }
}

impl Drop for RepairDispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
