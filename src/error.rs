// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `VacBot` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: telemetry decoding and transport communication.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while decoding an inbound telemetry payload.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error occurred while talking to the transport collaborator.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors related to decoding inbound telemetry payloads.
///
/// Unknown event names or unknown enum tokens are *not* errors (they pass
/// through verbatim for forward compatibility); decode errors are reserved
/// for payloads that violate the device contract, such as non-numeric
/// battery or lifespan fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Expected field is missing from the payload.
    #[error("missing field in payload: {0}")]
    MissingField(&'static str),

    /// A field that must be numeric could not be parsed.
    #[error("failed to parse {field} as a number: {value:?}")]
    InvalidNumber {
        /// The field that failed to parse.
        field: &'static str,
        /// The raw value received from the device.
        value: String,
    },

    /// The payload is not a flat string map.
    #[error("payload is not a flat attribute map")]
    NotAMap,
}

/// Errors raised by the transport collaborator.
///
/// The library never constructs these itself; they are reported by
/// [`Transport`](crate::transport::Transport) implementations when a send or
/// liveness probe fails.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The outgoing payload could not be delivered.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// The liveness probe was not answered.
    #[error("ping failed: {0}")]
    PingFailed(String),

    /// The underlying session is no longer connected.
    #[error("session is not connected")]
    NotConnected,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
