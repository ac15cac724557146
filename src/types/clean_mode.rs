// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning modes for the `Clean` command.

use std::fmt;

/// Cleaning mode requested from the vacuum.
///
/// Each mode maps to a vendor wire token; the mapping is not 1:1 with the
/// conceptual name (`Edge` is `"border"` on the wire, `SingleRoom` is
/// `"SinglePoint"`).
///
/// # Examples
///
/// ```
/// use vacbot_lib::types::CleanMode;
///
/// assert_eq!(CleanMode::Auto.wire_token(), "auto");
/// assert_eq!(CleanMode::Edge.wire_token(), "border");
/// assert_eq!(CleanMode::default(), CleanMode::Auto);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CleanMode {
    /// Clean the whole floor automatically.
    #[default]
    Auto,
    /// Follow the room edges.
    Edge,
    /// Spot-clean around the current position.
    Spot,
    /// Clean a single room.
    SingleRoom,
    /// Stop the current cleaning run.
    Stop,
}

impl CleanMode {
    /// Returns the vendor wire token for this mode.
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Edge => "border",
            Self::Spot => "spot",
            Self::SingleRoom => "SinglePoint",
            Self::Stop => "stop",
        }
    }

    /// Returns the canonical (library-side) name for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Edge => "edge",
            Self::Spot => "spot",
            Self::SingleRoom => "single_room",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for CleanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
