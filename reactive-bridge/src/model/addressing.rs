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

//! Addressing value types: devices, ports, connect points, MACs and ether-types.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use smoltcp::wire::{EthernetAddress, EthernetProtocol};
use std::fmt;
use std::str::FromStr;

/// Identifier of a switch as known to the topology oracle (e.g. `of:0000000000000001`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Physical port number on a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortNumber(pub u64);

impl fmt::Display for PortNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attachment point: the `(device, port)` where a host or link endpoint terminates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectPoint {
    pub device: DeviceId,
    pub port: PortNumber,
}

impl ConnectPoint {
    pub fn new(device: impl Into<DeviceId>, port: u64) -> Self {
        Self {
            device: device.into(),
            port: PortNumber(port),
        }
    }
}

impl fmt::Display for ConnectPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.device, self.port)
    }
}

/// 48-bit hardware address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xff; 6]);
    /// Nearest-bridge LLDP group address.
    pub const LLDP: MacAddress = MacAddress([0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e]);
    /// Nearest non-TPMR bridge group address.
    pub const LLDP_NON_TPMR: MacAddress = MacAddress([0x01, 0x80, 0xc2, 0x00, 0x00, 0x03]);
    /// Nearest customer bridge group address.
    pub const LLDP_CUSTOMER: MacAddress = MacAddress([0x01, 0x80, 0xc2, 0x00, 0x00, 0x00]);

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Returns `true` for the group addresses link discovery is sent to.
    pub fn is_lldp(&self) -> bool {
        *self == Self::LLDP || *self == Self::LLDP_NON_TPMR || *self == Self::LLDP_CUSTOMER
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for MacAddress {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for byte in bytes.iter_mut() {
            let part = parts
                .next()
                .filter(|part| part.len() == 2 && part.bytes().all(|b| b.is_ascii_hexdigit()))
                .ok_or_else(|| BridgeError::InvalidMacAddress(s.to_string()))?;
            *byte = u8::from_str_radix(part, 16)
                .map_err(|_| BridgeError::InvalidMacAddress(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(BridgeError::InvalidMacAddress(s.to_string()));
        }
        Ok(MacAddress(bytes))
    }
}

impl From<EthernetAddress> for MacAddress {
    fn from(addr: EthernetAddress) -> Self {
        MacAddress(addr.0)
    }
}

impl From<MacAddress> for EthernetAddress {
    fn from(mac: MacAddress) -> Self {
        EthernetAddress(mac.0)
    }
}

/// Ethernet protocol number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EtherType(pub u16);

impl EtherType {
    pub const IPV4: EtherType = EtherType(0x0800);
    pub const ARP: EtherType = EtherType(0x0806);
    /// Link Layer Discovery Protocol.
    pub const LLDP: EtherType = EtherType(0x88cc);
    /// Broadcast discovery, the BSN switch-management type.
    pub const BDDP: EtherType = EtherType(0x8942);

    /// Topology-discovery and switch-management types the bridge never forwards.
    pub fn is_control(&self) -> bool {
        *self == Self::LLDP || *self == Self::BDDP
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl From<EthernetProtocol> for EtherType {
    fn from(protocol: EthernetProtocol) -> Self {
        EtherType(u16::from(protocol))
    }
}
