// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aggregated vacuum state derived from telemetry.

use std::collections::BTreeMap;

use crate::types::{FanSpeed, VacuumStatus};

/// Tracked state of one vacuum session.
///
/// All fields start unknown (`None`) and are replaced wholesale by the
/// latest decoded event of their category; only `components` is updated
/// key-by-key. Mutation funnels through the message router and the liveness
/// monitor; application code observes state via the facade's snapshot and
/// the event bus.
///
/// # Vacuum status derivation
///
/// `vacuum_status` is the single top-level answer to "what is the vacuum
/// doing", recomputed after every clean or charge report:
///
/// - a clean report wins unconditionally;
/// - an `idle` charge report is only honored when the previous status was
///   `charging` (the device emits spurious `idle` charge telemetry during
///   initialization and mid-clean);
/// - any other charge report wins unconditionally.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    /// Latest clean status reported by the device.
    clean_status: Option<VacuumStatus>,
    /// Latest charge status reported by the device.
    charge_status: Option<VacuumStatus>,
    /// Derived top-level status (see the type-level docs).
    vacuum_status: Option<VacuumStatus>,
    /// Latest fan speed; untouched by clean reports without a speed field.
    fan_speed: Option<FanSpeed>,
    /// Battery level as a fraction (0.0 to 1.0).
    battery_fraction: Option<f64>,
    /// Remaining-life fraction per component.
    components: BTreeMap<String, f64>,
}

impl DeviceState {
    /// Creates a state with everything unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest clean status, if any report has arrived.
    #[must_use]
    pub fn clean_status(&self) -> Option<&VacuumStatus> {
        self.clean_status.as_ref()
    }

    /// Latest charge status, if any report has arrived.
    #[must_use]
    pub fn charge_status(&self) -> Option<&VacuumStatus> {
        self.charge_status.as_ref()
    }

    /// Derived top-level vacuum status.
    #[must_use]
    pub fn vacuum_status(&self) -> Option<&VacuumStatus> {
        self.vacuum_status.as_ref()
    }

    /// Latest fan speed, if any clean report has carried one.
    #[must_use]
    pub fn fan_speed(&self) -> Option<&FanSpeed> {
        self.fan_speed.as_ref()
    }

    /// Battery level as a fraction, if a battery report has arrived.
    #[must_use]
    pub fn battery_fraction(&self) -> Option<f64> {
        self.battery_fraction
    }

    /// Remaining-life fractions keyed by canonical component name.
    #[must_use]
    pub fn components(&self) -> &BTreeMap<String, f64> {
        &self.components
    }

    /// Returns `true` if the derived status is a recognized cleaning mode.
    #[must_use]
    pub fn is_cleaning(&self) -> bool {
        self.vacuum_status
            .as_ref()
            .is_some_and(VacuumStatus::is_cleaning)
    }

    /// Returns `true` if the charge status says the vacuum is charging.
    ///
    /// Independent of `vacuum_status`.
    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.charge_status == Some(VacuumStatus::Charging)
    }

    /// Applies a clean report and returns the new derived status.
    ///
    /// A report without a fan speed leaves the stored speed untouched.
    pub(crate) fn apply_clean_report(
        &mut self,
        status: VacuumStatus,
        fan_speed: Option<FanSpeed>,
    ) -> VacuumStatus {
        self.clean_status = Some(status.clone());
        if fan_speed.is_some() {
            self.fan_speed = fan_speed;
        }
        self.vacuum_status = Some(status.clone());
        status
    }

    /// Applies a charge report and returns the derived status afterwards.
    ///
    /// Returns `None` when an ignored `idle` report arrives while the
    /// derived status is still unknown.
    pub(crate) fn apply_charge_state(&mut self, status: VacuumStatus) -> Option<VacuumStatus> {
        self.charge_status = Some(status.clone());
        if status == VacuumStatus::Idle {
            // Spurious "idle" charge telemetry shows up during
            // initialization and mid-clean; only honor it as the end of a
            // charge cycle.
            if self.vacuum_status == Some(VacuumStatus::Charging) {
                self.vacuum_status = Some(VacuumStatus::Idle);
            }
        } else {
            self.vacuum_status = Some(status);
        }
        self.vacuum_status.clone()
    }

    /// Stores the latest battery fraction.
    pub(crate) fn set_battery_fraction(&mut self, fraction: f64) {
        self.battery_fraction = Some(fraction);
    }

    /// Stores one component's remaining-life fraction.
    ///
    /// New component names add entries; known names overwrite. Other
    /// entries are never touched.
    pub(crate) fn set_component_level(&mut self, component: String, level: f64) {
        self.components.insert(component, level);
    }

    /// Marks the device offline (liveness threshold crossed).
    pub(crate) fn set_offline(&mut self) {
        self.vacuum_status = Some(VacuumStatus::Offline);
    }

    /// Resets the derived status to unknown (liveness recovery).
    ///
    /// Fresh reports will re-derive it; the other fields keep their last
    /// known values.
    pub(crate) fn clear_vacuum_status(&mut self) {
        self.vacuum_status = None;
    }
}
