// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `VacBot` Lib - A Rust library to control Ecovacs-compatible robot vacuums.
//!
//! This library is the protocol and state-machine layer for one vacuum
//! session: it renders high-level intents into the vendor's wire commands,
//! decodes asynchronous telemetry into a coherent queryable state, and lets
//! applications observe state changes through event subscriptions.
//!
//! The chat-based transport (connection, authentication, sockets) is *not*
//! part of this library; you plug one in via the
//! [`Transport`](transport::Transport) trait and feed inbound messages to
//! [`VacBot::handle_message`].
//!
//! # Supported Features
//!
//! - **Cleaning control**: auto/edge/spot/single-room runs, stop, return to dock
//! - **Manual motion**: spin, turn around, forward, stop
//! - **Status queries**: clean state, charge state, battery level, component life
//! - **Event streams**: status, battery, lifespan, and error channels
//! - **Liveness**: ping deadman switch with automatic status resync on recovery
//!
//! # Quick Start
//!
//! ```no_run
//! use vacbot_lib::{DeviceInfo, TransportError, VacBot};
//! use vacbot_lib::transport::Transport;
//! use vacbot_lib::types::{CleanMode, FanSpeed};
//!
//! # struct MyChatSession;
//! # impl Transport for MyChatSession {
//! #     fn send(&self, _: &str, _: &str) -> Result<(), TransportError> { Ok(()) }
//! #     fn ping(&self, _: &str) -> Result<(), TransportError> { Ok(()) }
//! # }
//! fn main() -> vacbot_lib::Result<()> {
//!     let session = MyChatSession; // your transport implementation
//!     let device = DeviceInfo::new("E0000000001234567890", "126");
//!     let mut bot = VacBot::new(device, session);
//!
//!     // Observe status changes
//!     bot.events().on_status(|status| {
//!         println!("vacuum is now {status}");
//!     });
//!
//!     // Start cleaning
//!     bot.clean(CleanMode::Auto, FanSpeed::Normal)?;
//!
//!     // Feed inbound messages from your transport:
//!     // bot.handle_message(&raw)?;
//!     // Drive the liveness monitor from your scheduler:
//!     // bot.on_ping_tick()?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom commands
//!
//! Protocol extensions the library does not model by name can be built
//! directly:
//!
//! ```
//! use vacbot_lib::Command;
//!
//! let cmd = Command::new("SetTime")
//!     .with_element("time", [("t", "1731443921"), ("tz", "+01:00")]);
//! assert_eq!(
//!     cmd.to_xml(),
//!     r#"<ctl td="SetTime"><time t="1731443921" tz="+01:00"/></ctl>"#
//! );
//! ```

pub mod command;
mod device;
pub mod error;
pub mod event;
pub mod liveness;
mod router;
pub mod state;
pub mod telemetry;
pub mod transport;
pub mod types;

pub use command::{Command, CommandArg};
pub use device::{DeviceInfo, VacBot};
pub use error::{DecodeError, Error, Result, TransportError};
pub use event::{EventBus, SubscriptionId};
pub use liveness::{DEFAULT_PING_FAILURE_THRESHOLD, LivenessMonitor, MonitorMode};
pub use router::MessageRouter;
pub use state::DeviceState;
pub use telemetry::{ControlEvent, RawCtl};
pub use transport::Transport;
pub use types::{CleanMode, Component, ComponentWear, FanSpeed, MoveAction, VacuumStatus};
