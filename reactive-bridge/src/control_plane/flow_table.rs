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

//! Unicast flow-rule construction.

use crate::config::BridgeConfig;
use crate::model::{DeviceId, FlowRule, Frame, PortNumber, TrafficSelector};

/// Builds the rule that sends traffic for `frame`'s destination out of `output`.
#[inline(always)]
pub(crate) fn build_unicast_rule(
    config: &BridgeConfig,
    device: &DeviceId,
    frame: &Frame,
    output: PortNumber,
) -> FlowRule {
    let mut selector = TrafficSelector::builder().match_eth_dst(frame.dst);
    if !config.match_dst_mac_only {
        selector = selector.match_eth_src(frame.src);
    }

    FlowRule {
        device: device.clone(),
        selector: selector.build(),
        output,
        priority: config.flow_priority,
        lifetime: config.flow_lifetime(),
        app_id: config.app_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::build_unicast_rule;
    use crate::config::BridgeConfig;
    use crate::model::{
        build_ethernet_frame, ConnectPoint, DeviceId, EtherType, FlowLifetime, InboundPacket,
        MacAddress, PortNumber,
    };
    use std::time::Duration;

    const A: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0a]);
    const B: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x0b]);

    fn frame() -> crate::model::Frame {
        InboundPacket::new(
            ConnectPoint::new("of:1", 1),
            build_ethernet_frame(A, B, EtherType::IPV4, &[0u8; 46]),
        )
        .parse()
        .expect("well-formed frame")
    }

    #[test]
    fn default_rule_matches_src_and_dst_with_temporary_lifetime() {
        let config = BridgeConfig::default();
        let rule = build_unicast_rule(&config, &DeviceId::new("of:1"), &frame(), PortNumber(2));

        assert_eq!(rule.selector.eth_src, Some(A));
        assert_eq!(rule.selector.eth_dst, Some(B));
        assert_eq!(rule.selector.eth_type, None);
        assert_eq!(rule.output, PortNumber(2));
        assert_eq!(rule.priority, 50000);
        assert_eq!(
            rule.lifetime,
            FlowLifetime::Temporary {
                idle_timeout: Duration::from_secs(10)
            }
        );
        assert_eq!(rule.app_id, config.app_id());
    }

    #[test]
    fn dst_only_mode_leaves_source_wildcarded() {
        let config = BridgeConfig {
            match_dst_mac_only: true,
            permanent_flows: true,
            ..BridgeConfig::default()
        };
        let rule = build_unicast_rule(&config, &DeviceId::new("of:1"), &frame(), PortNumber(2));

        assert_eq!(rule.selector.eth_src, None);
        assert_eq!(rule.selector.eth_dst, Some(B));
        assert_eq!(rule.lifetime, FlowLifetime::Permanent);
    }
}
