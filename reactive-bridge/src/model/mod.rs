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

//! Value types shared by the engines and the collaborator contracts.

pub mod addressing;
pub mod flow;
pub mod host;
pub mod packet;
pub mod topology;

pub use addressing::{ConnectPoint, DeviceId, EtherType, MacAddress, PortNumber};
pub use flow::{
    ApplicationId, FlowEntry, FlowEntryState, FlowLifetime, FlowRule, FlowRuleKey,
    PacketPriority, SrcDstPair, TrafficSelector, TrafficSelectorBuilder,
};
pub use host::{Host, HostId};
pub use packet::{build_ethernet_frame, Frame, InboundPacket, OutboundPacket, OutputPort};
pub use topology::{Link, LinkEvent, LinkEventKind, Path};
