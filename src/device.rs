// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `VacBot` facade: one device session.

use crate::command::Command;
use crate::error::Result;
use crate::event::EventBus;
use crate::liveness::{LivenessMonitor, MonitorMode, resync_queries};
use crate::router::MessageRouter;
use crate::state::DeviceState;
use crate::telemetry::RawCtl;
use crate::transport::Transport;
use crate::types::{CleanMode, Component, FanSpeed, MoveAction};

/// Identity of one vacuum, as supplied by device discovery.
///
/// `did` and `class` are opaque vendor identifiers; `nick` is the
/// user-assigned name, if any.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceInfo {
    did: String,
    class: String,
    nick: Option<String>,
}

impl DeviceInfo {
    /// Creates a device identity from its id and class.
    #[must_use]
    pub fn new(did: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            did: did.into(),
            class: class.into(),
            nick: None,
        }
    }

    /// Sets the user-assigned nickname.
    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// The vendor device id.
    #[must_use]
    pub fn did(&self) -> &str {
        &self.did
    }

    /// The vendor device class.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The user-assigned nickname, if any.
    #[must_use]
    pub fn nick(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    /// The chat address this device answers on.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}.ecorobot.net/atom", self.did, self.class)
    }
}

/// One vacuum session: command API, state store, event bus, liveness.
///
/// Owns exactly one [`DeviceState`] and one [`EventBus`], and wires the
/// message router and liveness monitor to them. The core is
/// single-threaded: the host must serialize calls to the `&mut self`
/// methods ([`handle_message`](Self::handle_message),
/// [`on_ping_tick`](Self::on_ping_tick)); subscribing and sending take
/// `&self` and may happen from the same context.
///
/// # Examples
///
/// ```
/// use vacbot_lib::{DeviceInfo, TransportError, VacBot};
/// use vacbot_lib::telemetry::RawCtl;
/// use vacbot_lib::transport::Transport;
///
/// struct NullTransport;
///
/// impl Transport for NullTransport {
///     fn send(&self, _to: &str, _payload: &str) -> Result<(), TransportError> {
///         Ok(())
///     }
///     fn ping(&self, _to: &str) -> Result<(), TransportError> {
///         Ok(())
///     }
/// }
///
/// let device = DeviceInfo::new("E0000000001234567890", "126").with_nick("bob");
/// let mut bot = VacBot::new(device, NullTransport);
///
/// bot.events().on_battery(|fraction| println!("battery at {fraction}"));
///
/// let raw: RawCtl = [("event", "battery_info"), ("power", "095")]
///     .into_iter()
///     .collect();
/// bot.handle_message(&raw)?;
/// assert_eq!(bot.state().battery_fraction(), Some(0.95));
/// # Ok::<(), vacbot_lib::Error>(())
/// ```
#[derive(Debug)]
pub struct VacBot<T> {
    device: DeviceInfo,
    transport: T,
    state: DeviceState,
    events: EventBus,
    monitor: LivenessMonitor,
}

impl<T: Transport> VacBot<T> {
    /// Creates a session with a passive liveness monitor.
    #[must_use]
    pub fn new(device: DeviceInfo, transport: T) -> Self {
        Self::with_monitor(device, transport, LivenessMonitor::new(MonitorMode::Passive))
    }

    /// Creates a session with a custom liveness monitor.
    #[must_use]
    pub fn with_monitor(device: DeviceInfo, transport: T, monitor: LivenessMonitor) -> Self {
        Self {
            device,
            transport,
            state: DeviceState::new(),
            events: EventBus::new(),
            monitor,
        }
    }

    /// The device identity for this session.
    #[must_use]
    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    /// The chat address commands are sent to.
    #[must_use]
    pub fn address(&self) -> String {
        self.device.address()
    }

    /// The event bus for this session.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// The current aggregated device state.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// The liveness monitor for this session.
    #[must_use]
    pub fn monitor(&self) -> &LivenessMonitor {
        &self.monitor
    }

    /// Sends an arbitrary command to the device.
    ///
    /// Fire-and-forget: the device answers later via telemetry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the session
    /// could not deliver the payload.
    pub fn send(&self, command: &Command) -> Result<()> {
        let payload = command.to_xml();
        tracing::debug!(command = command.name(), payload = %payload, "sending command");
        self.transport.send(&self.device.address(), &payload)?;
        Ok(())
    }

    /// Starts a cleaning run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn clean(&self, mode: CleanMode, speed: FanSpeed) -> Result<()> {
        self.send(&Command::clean(mode, speed))
    }

    /// Starts an edge clean at high speed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn edge(&self) -> Result<()> {
        self.send(&Command::edge())
    }

    /// Starts a spot clean at high speed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn spot(&self) -> Result<()> {
        self.send(&Command::spot())
    }

    /// Stops the current cleaning run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn stop(&self) -> Result<()> {
        self.send(&Command::stop())
    }

    /// Sends the vacuum back to its dock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn charge(&self) -> Result<()> {
        self.send(&Command::charge())
    }

    /// Plays the locator sound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn play_sound(&self) -> Result<()> {
        self.send(&Command::play_sound())
    }

    /// Performs a manual motion action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn move_to(&self, action: MoveAction) -> Result<()> {
        self.send(&Command::move_to(action))
    }

    /// Queries the remaining life of one component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn get_life_span(&self, component: Component) -> Result<()> {
        self.send(&Command::get_life_span(component))
    }

    /// Queries clean state, charge state, and battery level.
    ///
    /// Useful at session start and after reconnects; the active-mode
    /// liveness monitor issues the same set on recovery.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on delivery failure.
    pub fn request_all_statuses(&self) -> Result<()> {
        for query in resync_queries() {
            self.send(&query)?;
        }
        Ok(())
    }

    /// Handles one inbound telemetry payload.
    ///
    /// Decodes, mutates the device state, and publishes on the event bus,
    /// synchronously, in this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) for payloads that
    /// violate the device contract; the state is left untouched in that
    /// case. Unknown event names are silently ignored.
    pub fn handle_message(&mut self, raw: &RawCtl) -> Result<()> {
        MessageRouter::handle(raw, &mut self.state, &self.events)?;
        Ok(())
    }

    /// Drives the liveness monitor: sends one probe and updates state.
    ///
    /// Call periodically from the host's scheduler.
    ///
    /// # Errors
    ///
    /// Probe failures are counted, never returned; only an active-mode
    /// recovery resync can fail, with
    /// [`Error::Transport`](crate::Error::Transport).
    pub fn on_ping_tick(&mut self) -> Result<()> {
        let address = self.device.address();
        self.monitor
            .on_tick(&self.transport, &address, &mut self.state, &self.events)
    }
}
