// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query command builders.
//!
//! Queries carry no arguments; the vacuum answers asynchronously with the
//! matching telemetry event (`clean_report`, `charge_state`, `battery_info`,
//! `life_span`).

use crate::command::Command;
use crate::types::Component;

impl Command {
    /// Builds a `GetCleanState` query.
    #[must_use]
    pub fn get_clean_state() -> Self {
        Self::new("GetCleanState")
    }

    /// Builds a `GetChargeState` query.
    #[must_use]
    pub fn get_charge_state() -> Self {
        Self::new("GetChargeState")
    }

    /// Builds a battery-level query.
    ///
    /// The wire td is `GetBatteryInfo`, not `GetBatteryState`.
    #[must_use]
    pub fn get_battery_state() -> Self {
        Self::new("GetBatteryInfo")
    }

    /// Builds a `GetLifeSpan` query for one wearable component.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacbot_lib::Command;
    /// use vacbot_lib::types::Component;
    ///
    /// let cmd = Command::get_life_span(Component::Filter);
    /// assert_eq!(cmd.to_xml(), r#"<ctl td="GetLifeSpan" type="DustCaseHeap"/>"#);
    /// ```
    #[must_use]
    pub fn get_life_span(component: Component) -> Self {
        Self::new("GetLifeSpan").with_attr("type", component.wire_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_wire_forms() {
        assert_eq!(
            Command::get_clean_state().to_xml(),
            r#"<ctl td="GetCleanState"/>"#
        );
        assert_eq!(
            Command::get_charge_state().to_xml(),
            r#"<ctl td="GetChargeState"/>"#
        );
        assert_eq!(
            Command::get_battery_state().to_xml(),
            r#"<ctl td="GetBatteryInfo"/>"#
        );
    }

    #[test]
    fn life_span_component_tokens() {
        assert_eq!(
            Command::get_life_span(Component::MainBrush).to_xml(),
            r#"<ctl td="GetLifeSpan" type="Brush"/>"#
        );
        assert_eq!(
            Command::get_life_span(Component::SideBrush).to_xml(),
            r#"<ctl td="GetLifeSpan" type="SideBrush"/>"#
        );
        assert_eq!(
            Command::get_life_span(Component::Filter).to_xml(),
            r#"<ctl td="GetLifeSpan" type="DustCaseHeap"/>"#
        );
    }
}
