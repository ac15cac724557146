// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning and docking command builders.

use crate::command::Command;
use crate::types::{CleanMode, FanSpeed};

impl Command {
    /// Builds a `Clean` command for the given mode and fan speed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacbot_lib::Command;
    /// use vacbot_lib::types::{CleanMode, FanSpeed};
    ///
    /// let cmd = Command::clean(CleanMode::Auto, FanSpeed::Normal);
    /// assert_eq!(
    ///     cmd.to_xml(),
    ///     r#"<ctl td="Clean"><clean type="auto" speed="standard"/></ctl>"#
    /// );
    /// ```
    #[must_use]
    pub fn clean(mode: CleanMode, speed: FanSpeed) -> Self {
        Self::new("Clean").with_element(
            "clean",
            [("type", mode.wire_token()), ("speed", speed.wire_token())],
        )
    }

    /// Builds the default `Clean` command (auto mode, normal speed).
    #[must_use]
    pub fn clean_auto() -> Self {
        Self::clean(CleanMode::default(), FanSpeed::default())
    }

    /// Builds an edge clean at high speed.
    #[must_use]
    pub fn edge() -> Self {
        Self::clean(CleanMode::Edge, FanSpeed::High)
    }

    /// Builds a spot clean at high speed.
    #[must_use]
    pub fn spot() -> Self {
        Self::clean(CleanMode::Spot, FanSpeed::High)
    }

    /// Builds a stop command (clean mode `stop`, default speed).
    #[must_use]
    pub fn stop() -> Self {
        Self::clean(CleanMode::Stop, FanSpeed::default())
    }

    /// Builds a `Charge` command sending the vacuum back to its dock.
    #[must_use]
    pub fn charge() -> Self {
        Self::new("Charge").with_element("charge", [("type", "go")])
    }
}
