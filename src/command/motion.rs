// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual motion and sound command builders.

use crate::command::Command;
use crate::types::MoveAction;

impl Command {
    /// Builds a `Move` command for a manual motion action.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacbot_lib::Command;
    /// use vacbot_lib::types::MoveAction;
    ///
    /// let cmd = Command::move_to(MoveAction::Left);
    /// assert_eq!(
    ///     cmd.to_xml(),
    ///     r#"<ctl td="Move"><move action="SpinLeft"/></ctl>"#
    /// );
    /// ```
    #[must_use]
    pub fn move_to(action: MoveAction) -> Self {
        Self::new("Move").with_element("move", [("action", action.wire_token())])
    }

    /// Builds a `PlaySound` command for the default locator sound (sid 0).
    #[must_use]
    pub fn play_sound() -> Self {
        Self::play_sound_with("0")
    }

    /// Builds a `PlaySound` command for a specific sound id.
    #[must_use]
    pub fn play_sound_with(sid: impl Into<String>) -> Self {
        Self::new("PlaySound").with_attr("sid", sid)
    }
}
