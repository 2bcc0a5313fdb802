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

use crate::config::BridgeConfig;
use crate::data_plane::forwarding::{ForwardingEngine, ForwardingOutcome};
use crate::data_plane::packet_in::{BridgePacketProcessor, BRIDGE_PROCESSOR_PRIORITY};
use crate::error::BridgeError;
use crate::model::{ConnectPoint, EtherType, InboundPacket, PacketPriority, TrafficSelector};
use crate::observability::{events, fields};
use crate::repair::{BlackHoleRepair, RepairLinkListener, RepairReport};
use crate::runtime::repair_dispatcher::{RepairDispatcher, RepairSubmitter};
use crate::services::{Collaborators, LinkListener, PacketProcessor};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "bridge";

/// Ether-types the bridge asks to see as packet-ins.
const INTERCEPTED_ETHER_TYPES: [EtherType; 2] = [EtherType::IPV4, EtherType::ARP];

/// Registrations made by `activate`, undone in reverse order.
#[derive(Clone, Copy, Debug)]
enum Registration {
    Processor,
    LinkListener,
    PacketRequest(EtherType),
}

/// Reactive layer-2 forwarding application.
///
/// Packet-ins are handled synchronously on whatever thread the packet service
/// calls from. Link removals are queued and repaired on a dedicated worker
/// runtime; completed repairs can be observed through
/// [`ReactiveBridge::subscribe_repair_reports`].
pub struct ReactiveBridge {
    config: Arc<ArcSwap<BridgeConfig>>,
    collaborators: Collaborators,
    forwarding: ForwardingEngine,
    dispatcher: RepairDispatcher,
    submitter: RepairSubmitter,
    processor: Arc<dyn PacketProcessor>,
    link_listener: Arc<dyn LinkListener>,
    active: bool,
}

impl ReactiveBridge {
    pub fn new(config: BridgeConfig, collaborators: Collaborators) -> Result<Self, BridgeError> {
        config.validate()?;
        let queue_size = config.repair_queue_size;
        let worker_threads = config.repair_worker_threads;
        let config = Arc::new(ArcSwap::from_pointee(config));

        let forwarding = ForwardingEngine::new(
            collaborators.hosts.clone(),
            collaborators.topology.clone(),
            collaborators.flows.clone(),
            collaborators.packets.clone(),
            config.clone(),
        );
        let repair = BlackHoleRepair::new(
            collaborators.hosts.clone(),
            collaborators.topology.clone(),
            collaborators.flows.clone(),
            config.clone(),
        );
        let dispatcher = RepairDispatcher::start(repair, queue_size, worker_threads)?;
        let submitter = dispatcher.submitter();

        let processor: Arc<dyn PacketProcessor> =
            Arc::new(BridgePacketProcessor::new(forwarding.clone()));
        let link_listener: Arc<dyn LinkListener> =
            Arc::new(RepairLinkListener::new(submitter.clone()));

        Ok(Self {
            config,
            collaborators,
            forwarding,
            dispatcher,
            submitter,
            processor,
            link_listener,
            active: false,
        })
    }

    /// Decides and carries out the forwarding of one packet-in.
    pub fn on_packet_in(&self, packet: InboundPacket) -> ForwardingOutcome {
        self.forwarding.process(&packet)
    }

    /// Queues a black-hole repair for `egress`. Returns once the request is
    /// queued, not when the repair has run.
    pub fn on_link_down(&self, egress: ConnectPoint) -> Result<(), BridgeError> {
        debug!(
            event = events::LINK_DOWN_RECEIVED,
            component = COMPONENT,
            egress = %fields::format_connect_point(&egress),
            "link down reported"
        );
        self.submitter.submit(egress)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<BridgeConfig> {
        self.config.load_full()
    }

    /// Registers with the packet service and topology oracle.
    ///
    /// Either every registration succeeds or none is left behind.
    pub fn activate(&mut self) -> Result<(), BridgeError> {
        if self.active {
            return Err(BridgeError::AlreadyActive);
        }

        let mut done = Vec::new();
        for step in Self::activation_steps() {
            if let Err(err) = self.register(step) {
                error!(
                    event = events::BRIDGE_ACTIVATE_FAILED,
                    component = COMPONENT,
                    step = ?step,
                    err = %err,
                    "activation failed, rolling back"
                );
                for completed in done.into_iter().rev() {
                    self.unregister(completed);
                }
                return Err(err);
            }
            done.push(step);
        }

        self.active = true;
        info!(
            event = events::BRIDGE_ACTIVATED,
            component = COMPONENT,
            app = %self.config.load().app_name,
            "reactive bridge activated"
        );
        Ok(())
    }

    /// Removes this application's flow rules and every registration.
    ///
    /// A failing teardown step is logged and the remaining steps still run.
    pub fn deactivate(&mut self) -> Result<(), BridgeError> {
        if !self.active {
            return Err(BridgeError::NotActive);
        }

        let app_id = self.config.load().app_id();
        if let Err(err) = self.collaborators.flows.remove_by_app(&app_id) {
            warn!(
                event = events::BRIDGE_TEARDOWN_STEP_FAILED,
                component = COMPONENT,
                step = "remove_flow_rules",
                err = %err,
                "unable to remove application flow rules"
            );
        }
        for step in Self::activation_steps().into_iter().rev() {
            self.unregister(step);
        }

        self.active = false;
        info!(
            event = events::BRIDGE_DEACTIVATED,
            component = COMPONENT,
            app = %app_id,
            "reactive bridge deactivated"
        );
        Ok(())
    }

    /// Swaps in `config` for every forwarding decision and repair that starts
    /// after this returns.
    ///
    /// The repair queue and worker pool are sized at construction; changes to
    /// those fields are kept but only logged.
    pub fn reconfigure(&self, config: BridgeConfig) -> Result<(), BridgeError> {
        config.validate()?;
        let current = self.config.load();

        if self.active && config.app_name != current.app_name {
            return Err(BridgeError::Config(
                "app_name cannot change while the bridge is active".to_string(),
            ));
        }
        if config.repair_queue_size != current.repair_queue_size
            || config.repair_worker_threads != current.repair_worker_threads
        {
            warn!(
                component = COMPONENT,
                "repair queue settings take effect on the next bridge instance"
            );
        }

        info!(
            event = events::BRIDGE_RECONFIGURED,
            component = COMPONENT,
            flow_priority = config.flow_priority,
            flow_timeout_secs = config.flow_timeout_secs,
            permanent_flows = config.permanent_flows,
            match_dst_mac_only = config.match_dst_mac_only,
            "configuration updated"
        );
        self.config.store(Arc::new(config));
        Ok(())
    }

    pub fn subscribe_repair_reports(&self) -> broadcast::Receiver<Arc<RepairReport>> {
        self.dispatcher.subscribe()
    }

    /// Closes the repair queue. Repairs already queued still run.
    pub fn shutdown(&mut self) {
        self.dispatcher.shutdown();
    }

    fn activation_steps() -> Vec<Registration> {
        let mut steps = vec![Registration::Processor, Registration::LinkListener];
        steps.extend(
            INTERCEPTED_ETHER_TYPES
                .iter()
                .map(|eth_type| Registration::PacketRequest(*eth_type)),
        );
        steps
    }

    fn packet_selector(eth_type: EtherType) -> TrafficSelector {
        TrafficSelector::builder().match_eth_type(eth_type).build()
    }

    fn register(&self, step: Registration) -> Result<(), BridgeError> {
        match step {
            Registration::Processor => self
                .collaborators
                .packets
                .add_processor(self.processor.clone(), BRIDGE_PROCESSOR_PRIORITY),
            Registration::LinkListener => self
                .collaborators
                .topology
                .add_link_listener(self.link_listener.clone()),
            Registration::PacketRequest(eth_type) => self.collaborators.packets.request_packets(
                Self::packet_selector(eth_type),
                PacketPriority::Reactive,
                &self.config.load().app_id(),
            ),
        }
    }

    fn unregister(&self, step: Registration) {
        let result = match step {
            Registration::Processor => self.collaborators.packets.remove_processor(&self.processor),
            Registration::LinkListener => self
                .collaborators
                .topology
                .remove_link_listener(&self.link_listener),
            Registration::PacketRequest(eth_type) => self.collaborators.packets.cancel_packets(
                Self::packet_selector(eth_type),
                PacketPriority::Reactive,
                &self.config.load().app_id(),
            ),
        };

        if let Err(err) = result {
            warn!(
                event = events::BRIDGE_TEARDOWN_STEP_FAILED,
                component = COMPONENT,
                step = ?step,
                err = %err,
                "unable to undo registration"
            );
        }
    }
}
