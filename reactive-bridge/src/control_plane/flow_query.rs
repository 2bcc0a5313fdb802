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

//! Read-only queries over flow-store snapshots.

use crate::model::{ApplicationId, FlowEntry, PortNumber, SrcDstPair};
use std::collections::BTreeSet;

/// Live entries owned by `app_id` whose output is `port`. Pending installs
/// count; entries already pending removal do not.
pub(crate) fn entries_output_to<'a>(
    entries: &'a [FlowEntry],
    app_id: &'a ApplicationId,
    port: PortNumber,
) -> impl Iterator<Item = &'a FlowEntry> + 'a {
    entries.iter().filter(move |entry| {
        entry.is_live() && &entry.rule.app_id == app_id && entry.rule.output == port
    })
}

/// Distinct source/destination pairs served by `entries`, in a stable order.
pub(crate) fn src_dst_pairs<'a>(entries: impl IntoIterator<Item = &'a FlowEntry>) -> Vec<SrcDstPair> {
    entries
        .into_iter()
        .map(|entry| entry.rule.selector.src_dst_pair())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Live entries owned by `app_id` that serve exactly `pair`.
pub(crate) fn entries_for_pair<'a>(
    entries: &'a [FlowEntry],
    app_id: &'a ApplicationId,
    pair: &'a SrcDstPair,
) -> impl Iterator<Item = &'a FlowEntry> + 'a {
    entries.iter().filter(move |entry| {
        entry.is_live()
            && &entry.rule.app_id == app_id
            && pair.is_served_by(&entry.rule.selector)
    })
}
