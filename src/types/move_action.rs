// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual motion actions for the `Move` command.

use std::fmt;

/// A manual motion action.
///
/// The spin actions use vendor-specific wire tokens; `forward` and `stop`
/// are transmitted unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Spin left in place.
    Left,
    /// Spin right in place.
    Right,
    /// Turn around 180 degrees.
    TurnAround,
    /// Drive forward.
    Forward,
    /// Stop moving.
    Stop,
}

impl MoveAction {
    /// Returns the vendor wire token for this action.
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            Self::Left => "SpinLeft",
            Self::Right => "SpinRight",
            Self::TurnAround => "TurnAround",
            Self::Forward => "forward",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for MoveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::TurnAround => "turn_around",
            Self::Forward => "forward",
            Self::Stop => "stop",
        };
        f.write_str(name)
    }
}
