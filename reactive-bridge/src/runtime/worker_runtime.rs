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

//! Dedicated worker thread hosting its own tokio runtime.

use crate::error::BridgeError;
use std::future::Future;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use tokio::runtime::Builder;
use tracing::trace;

/// Spawns `name` on its own OS thread and drives `run_loop` to completion on a
/// multi-threaded runtime with `worker_threads` workers.
///
/// The runtime is built on the new thread; construction errors are handed back
/// before this returns, and the runtime is never dropped from async context.
pub(crate) fn spawn_worker_runtime<F, Fut>(
    name: &str,
    worker_threads: usize,
    run_loop: F,
) -> Result<JoinHandle<()>, BridgeError>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), String>>(1);
    let thread_name = name.to_string();

    let handle = thread::Builder::new()
        .name(thread_name.clone())
        .spawn(move || {
            let runtime = match Builder::new_multi_thread()
                .worker_threads(worker_threads)
                .thread_name(format!("{thread_name}-worker"))
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = ready_tx.send(Err(err.to_string()));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));

            trace!(thread = %thread_name, "within worker runtime");
            runtime.block_on(run_loop());
        })
        .map_err(|err| BridgeError::DispatcherStart(err.to_string()))?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(handle),
        Ok(Err(reason)) => Err(BridgeError::DispatcherStart(reason)),
        Err(_) => Err(BridgeError::DispatcherStart(
            "worker thread exited before its runtime started".to_string(),
        )),
    }
}
