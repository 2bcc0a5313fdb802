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

//! First-qualifying path selection.

use crate::model::{Path, PortNumber};

/// Picks the first path whose first link does not reflect back out `in_port`.
pub(crate) fn select_forward_path(paths: &[Path], in_port: PortNumber) -> Option<&Path> {
    paths.iter().find(|path| path.src().port != in_port)
}

#[cfg(test)]
mod tests {
    use super::select_forward_path;
    use crate::model::{ConnectPoint, Link, Path, PortNumber};

    fn one_hop(src_port: u64, dst: &str) -> Path {
        Path::new(vec![Link::new(
            ConnectPoint::new("of:1", src_port),
            ConnectPoint::new(dst, 1),
        )])
        .expect("single link path")
    }

    #[test]
    fn skips_paths_leaving_through_ingress_port() {
        let paths = vec![one_hop(1, "of:2"), one_hop(3, "of:3"), one_hop(4, "of:4")];

        let selected = select_forward_path(&paths, PortNumber(1)).expect("qualifying path");

        assert_eq!(selected.src().port, PortNumber(3));
    }

    #[test]
    fn keeps_enumeration_order_rather_than_hop_count() {
        let long = Path::new(vec![
            Link::new(ConnectPoint::new("of:1", 5), ConnectPoint::new("of:9", 1)),
            Link::new(ConnectPoint::new("of:9", 2), ConnectPoint::new("of:4", 1)),
        ])
        .expect("two link path");
        let paths = vec![long.clone(), one_hop(4, "of:4")];

        assert_eq!(select_forward_path(&paths, PortNumber(1)), Some(&long));
    }

    #[test]
    fn none_when_every_path_reflects() {
        let paths = vec![one_hop(2, "of:2"), one_hop(2, "of:3")];
        assert!(select_forward_path(&paths, PortNumber(2)).is_none());
        assert!(select_forward_path(&[], PortNumber(2)).is_none());
    }
}
