// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport collaborator seam.
//!
//! The chat-style session (connect, authenticate, sockets, TLS) is outside
//! this library. Implementations of [`Transport`] bridge to it: they carry
//! an already-rendered payload to a device address, and answer liveness
//! probes. Inbound traffic flows the other way: the host parses each
//! message into a [`RawCtl`](crate::telemetry::RawCtl) and feeds it to
//! [`VacBot::handle_message`](crate::VacBot::handle_message), serialized
//! into a single-threaded (or externally synchronized) callback context.

use crate::error::TransportError;

/// Outbound half of the chat session for one device.
///
/// Sending is fire-and-forget: a successful return means the payload was
/// handed to the session, not that the device acted on it; replies arrive
/// later as telemetry.
pub trait Transport {
    /// Sends a rendered command payload to the addressed device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the session could not deliver the
    /// payload.
    fn send(&self, to: &str, payload: &str) -> Result<(), TransportError>;

    /// Sends a liveness probe to the addressed device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the probe was not answered; the
    /// liveness monitor counts these rather than surfacing them.
    fn ping(&self, to: &str) -> Result<(), TransportError>;
}
