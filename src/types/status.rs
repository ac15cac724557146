// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status values.
//!
//! One open enum covers all three status fields on
//! [`DeviceState`](crate::state::DeviceState): the clean status, the charge
//! status, and the derived vacuum status. Clean and charge telemetry use
//! different wire vocabularies, so there are two wire constructors; both
//! fall back to the canonical-name mapping first and then to verbatim
//! passthrough for tokens the library does not model.

use std::fmt;

/// A device status value.
///
/// # Forward compatibility
///
/// Status fields are deliberately *open*: a wire token without a canonical
/// mapping becomes [`VacuumStatus::Other`] holding the raw string, and is
/// reported back to the application unchanged. Unknown tokens never count
/// as cleaning or charging.
///
/// # Examples
///
/// ```
/// use vacbot_lib::types::VacuumStatus;
///
/// assert_eq!(VacuumStatus::from_clean_wire("border"), VacuumStatus::Edge);
/// assert_eq!(VacuumStatus::from_charge_wire("going"), VacuumStatus::Returning);
/// assert!(VacuumStatus::Auto.is_cleaning());
/// assert!(!VacuumStatus::Returning.is_cleaning());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VacuumStatus {
    /// Cleaning the whole floor automatically.
    Auto,
    /// Cleaning along the room edges.
    Edge,
    /// Spot-cleaning around the current position.
    Spot,
    /// Cleaning a single room.
    SingleRoom,
    /// Stopped.
    Stop,
    /// Idle on the dock (charge complete) or otherwise inactive.
    Idle,
    /// Charging on the dock.
    Charging,
    /// Returning to the dock.
    Returning,
    /// Declared unreachable by the liveness monitor.
    Offline,
    /// A device-reported status the library does not model.
    Other(String),
}

impl VacuumStatus {
    /// Maps a `clean_report` wire type to the canonical status.
    ///
    /// Tokens outside the wire vocabulary fall back to the canonical-name
    /// mapping (some firmware reports `"edge"` instead of `"border"`);
    /// genuinely unknown tokens pass through verbatim.
    #[must_use]
    pub fn from_clean_wire(token: &str) -> Self {
        match token {
            "auto" => Self::Auto,
            "border" => Self::Edge,
            "spot" => Self::Spot,
            "SinglePoint" => Self::SingleRoom,
            "stop" => Self::Stop,
            other => Self::from(other.to_string()),
        }
    }

    /// Maps a `charge_state` wire type to the canonical status.
    ///
    /// Tokens outside the wire vocabulary fall back to the canonical-name
    /// mapping; genuinely unknown tokens pass through verbatim.
    #[must_use]
    pub fn from_charge_wire(token: &str) -> Self {
        match token {
            "going" => Self::Returning,
            "slot_charging" => Self::Charging,
            "idle" => Self::Idle,
            other => Self::from(other.to_string()),
        }
    }

    /// Returns the canonical (library-side) name for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "auto",
            Self::Edge => "edge",
            Self::Spot => "spot",
            Self::SingleRoom => "single_room",
            Self::Stop => "stop",
            Self::Idle => "idle",
            Self::Charging => "charging",
            Self::Returning => "returning",
            Self::Offline => "offline",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` if this status is a recognized cleaning mode.
    ///
    /// Stop, dock statuses, offline, and unmodelled values are not cleaning.
    #[must_use]
    pub const fn is_cleaning(&self) -> bool {
        matches!(self, Self::Auto | Self::Edge | Self::Spot | Self::SingleRoom)
    }
}

impl fmt::Display for VacuumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for VacuumStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto" => Self::Auto,
            "edge" => Self::Edge,
            "spot" => Self::Spot,
            "single_room" => Self::SingleRoom,
            "stop" => Self::Stop,
            "idle" => Self::Idle,
            "charging" => Self::Charging,
            "returning" => Self::Returning,
            "offline" => Self::Offline,
            _ => Self::Other(value),
        }
    }
}

impl From<VacuumStatus> for String {
    fn from(value: VacuumStatus) -> Self {
        value.as_str().to_string()
    }
}
