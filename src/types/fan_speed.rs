// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Suction fan speed.

use std::fmt;

/// Suction fan speed.
///
/// The library knows two speeds (`normal` ↔ wire `"standard"`, `high` ↔ wire
/// `"strong"`). Anything else the device reports is carried verbatim in
/// [`FanSpeed::Other`] rather than rejected, so future vendor values do not
/// break decoding.
///
/// # Examples
///
/// ```
/// use vacbot_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::High.wire_token(), "strong");
/// assert_eq!(FanSpeed::from_wire("standard"), FanSpeed::Normal);
/// assert_eq!(
///     FanSpeed::from_wire("a_weird_speed"),
///     FanSpeed::Other("a_weird_speed".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FanSpeed {
    /// Standard suction.
    #[default]
    Normal,
    /// Strong suction.
    High,
    /// A device-reported speed the library does not model.
    Other(String),
}

impl FanSpeed {
    /// Returns the vendor wire token for this speed.
    ///
    /// Unmodelled speeds are passed through as-is.
    #[must_use]
    pub fn wire_token(&self) -> &str {
        match self {
            Self::Normal => "standard",
            Self::High => "strong",
            Self::Other(raw) => raw,
        }
    }

    /// Maps a device-reported speed token to the canonical speed.
    ///
    /// Unmapped tokens pass through verbatim.
    #[must_use]
    pub fn from_wire(token: &str) -> Self {
        match token {
            "standard" => Self::Normal,
            "strong" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the canonical (library-side) name for this speed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FanSpeed {
    fn from(value: String) -> Self {
        match value.as_str() {
            "normal" => Self::Normal,
            "high" => Self::High,
            _ => Self::Other(value),
        }
    }
}

impl From<FanSpeed> for String {
    fn from(value: FanSpeed) -> Self {
        value.as_str().to_string()
    }
}
