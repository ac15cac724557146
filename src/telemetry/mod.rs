// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound telemetry payloads.
//!
//! The transport collaborator delivers each telemetry message as a flat
//! key/value payload ([`RawCtl`]). Decoding happens at this boundary: the
//! payload is turned into a typed [`ControlEvent`] immediately, and untyped
//! maps never travel further into the library.
//!
//! Unknown event names decode to [`ControlEvent::Unknown`] and unknown enum
//! tokens pass through verbatim; only contract violations (missing required
//! fields, non-numeric battery/lifespan values) produce a
//! [`DecodeError`](crate::error::DecodeError).

use std::collections::BTreeMap;

use crate::error::DecodeError;
use crate::types::{ComponentWear, FanSpeed, VacuumStatus, canonical_component};

/// Fixed error-code table for `error` events carrying only an `errno`.
const ERROR_CODES: &[(&str, &str)] = &[
    ("100", "NoError: Robot is operational"),
    ("101", "BatteryLow: Low battery"),
    ("102", "HostHang: Robot is off the floor"),
    ("103", "WheelAbnormal: Driving Wheel is abnormal"),
    ("104", "DownSensorAbnormal: Down Sensor is abnormal"),
    ("110", "NoDustBox: Dust Bin Not installed"),
];

/// Message published for error codes the table does not cover.
const UNKNOWN_ERROR: &str = "unknown";

/// A raw inbound telemetry payload: flat string attributes keyed by name.
///
/// The `event` key discriminates the message type; the remaining keys are
/// event-specific (`type`, `speed`, `power`, `val`, `total`, `error`,
/// `errno`).
///
/// # Examples
///
/// ```
/// use vacbot_lib::telemetry::{ControlEvent, RawCtl};
///
/// let raw: RawCtl = [("event", "battery_info"), ("power", "095")]
///     .into_iter()
///     .collect();
/// let event = ControlEvent::decode(&raw).unwrap();
/// assert_eq!(event, ControlEvent::BatteryInfo { fraction: 0.95 });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RawCtl(BTreeMap<String, String>);

impl RawCtl {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Inserts or replaces an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the event discriminator, if present.
    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.get("event")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawCtl {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl TryFrom<serde_json::Value> for RawCtl {
    type Error = DecodeError;

    /// Converts a JSON object with scalar values into a payload map.
    ///
    /// Chat transports commonly hand payloads over as JSON; numbers and
    /// booleans are stringified, nested structures are rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(map) = value else {
            return Err(DecodeError::NotAMap);
        };
        let mut raw = Self::new();
        for (key, value) in map {
            match value {
                serde_json::Value::String(s) => raw.insert(key, s),
                serde_json::Value::Number(n) => raw.insert(key, n.to_string()),
                serde_json::Value::Bool(b) => raw.insert(key, b.to_string()),
                _ => return Err(DecodeError::NotAMap),
            }
        }
        Ok(raw)
    }
}

/// A decoded, typed telemetry event.
///
/// Constructed only by [`ControlEvent::decode`]; never persisted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ControlEvent {
    /// The vacuum reported its cleaning state.
    CleanReport {
        /// Canonical clean status, or the raw wire type if unmapped.
        status: VacuumStatus,
        /// Fan speed if the report carried one; `None` leaves the stored
        /// speed untouched.
        fan_speed: Option<FanSpeed>,
    },
    /// The vacuum reported its charging state.
    ChargeState {
        /// Canonical charge status, or the raw wire type if unmapped.
        status: VacuumStatus,
    },
    /// The vacuum reported its battery level.
    BatteryInfo {
        /// Battery level as a fraction (reported percent / 100).
        fraction: f64,
    },
    /// The vacuum reported remaining life for one component.
    LifeSpan(ComponentWear),
    /// The vacuum reported an error.
    Error {
        /// Resolved human-readable message.
        message: String,
    },
    /// An event the library does not model; applying it is a no-op.
    Unknown {
        /// The raw event discriminator.
        event: String,
    },
}

impl ControlEvent {
    /// Decodes a raw payload into a typed event.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the payload is missing its `event`
    /// discriminator or a required event field, or when a numeric field
    /// (`power`, `val`, `total`) is not a valid integer.
    pub fn decode(raw: &RawCtl) -> Result<Self, DecodeError> {
        let event = raw.event().ok_or(DecodeError::MissingField("event"))?;
        match event {
            "clean_report" => {
                let wire_type = require(raw, "type")?;
                Ok(Self::CleanReport {
                    status: VacuumStatus::from_clean_wire(wire_type),
                    fan_speed: raw.get("speed").map(FanSpeed::from_wire),
                })
            }
            "charge_state" => {
                let wire_type = require(raw, "type")?;
                Ok(Self::ChargeState {
                    status: VacuumStatus::from_charge_wire(wire_type),
                })
            }
            "battery_info" => {
                let percent = require_int(raw, "power")?;
                #[allow(clippy::cast_precision_loss)]
                Ok(Self::BatteryInfo {
                    fraction: percent as f64 / 100.0,
                })
            }
            "life_span" => {
                let component = canonical_component(require(raw, "type")?);
                let val = require_int(raw, "val")?;
                let total = require_int(raw, "total")?;
                // The device's "total" has no verified meaning beyond being
                // the denominator; zero just yields a zero level.
                #[allow(clippy::cast_precision_loss)]
                let level = if total == 0 {
                    0.0
                } else {
                    val as f64 / total as f64
                };
                Ok(Self::LifeSpan(ComponentWear { component, level }))
            }
            "error" => {
                let message = raw.get("error").map_or_else(
                    || resolve_errno(raw.get("errno")),
                    ToString::to_string,
                );
                Ok(Self::Error { message })
            }
            other => Ok(Self::Unknown {
                event: other.to_string(),
            }),
        }
    }
}

/// Resolves an `errno` value through the fixed code table.
fn resolve_errno(errno: Option<&str>) -> String {
    errno
        .and_then(|code| {
            ERROR_CODES
                .iter()
                .find(|(known, _)| *known == code)
                .map(|(_, message)| (*message).to_string())
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

fn require<'a>(raw: &'a RawCtl, field: &'static str) -> Result<&'a str, DecodeError> {
    raw.get(field).ok_or(DecodeError::MissingField(field))
}

fn require_int(raw: &RawCtl, field: &'static str) -> Result<i64, DecodeError> {
    let value = require(raw, field)?;
    value
        .parse::<i64>()
        .map_err(|_| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
