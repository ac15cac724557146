// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Liveness monitoring: a ping deadman switch.
//!
//! The monitor owns a consecutive-failure counter. Ticks are driven by an
//! external scheduler; each tick sends one probe through the transport.
//! Crossing the failure threshold flips the device to `offline` and
//! publishes that once; the next success clears the derived status and, in
//! [`MonitorMode::Active`], re-queries all statuses so fresh reports can
//! rebuild it.

use crate::command::Command;
use crate::error::Result;
use crate::event::EventBus;
use crate::state::DeviceState;
use crate::transport::Transport;
use crate::types::VacuumStatus;

/// Consecutive probe failures after which a device is declared offline.
pub const DEFAULT_PING_FAILURE_THRESHOLD: u32 = 4;

/// Recovery behavior of the liveness monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorMode {
    /// Reset silently on recovery; the host re-queries on its own terms.
    #[default]
    Passive,
    /// Re-query all statuses on recovery.
    Active,
}

/// The query set sent to rebuild an unknown device status.
pub(crate) fn resync_queries() -> [Command; 3] {
    [
        Command::get_clean_state(),
        Command::get_charge_state(),
        Command::get_battery_state(),
    ]
}

/// Deadman switch for one device session.
///
/// Owns the failure counter (never ambient state); exactly one monitor
/// exists per [`VacBot`](crate::VacBot).
#[derive(Debug)]
pub struct LivenessMonitor {
    failures: u32,
    threshold: u32,
    mode: MonitorMode,
}

impl LivenessMonitor {
    /// Creates a monitor with the default failure threshold.
    #[must_use]
    pub fn new(mode: MonitorMode) -> Self {
        Self::with_threshold(mode, DEFAULT_PING_FAILURE_THRESHOLD)
    }

    /// Creates a monitor with a custom failure threshold (minimum 1).
    #[must_use]
    pub fn with_threshold(mode: MonitorMode, threshold: u32) -> Self {
        Self {
            failures: 0,
            threshold: threshold.max(1),
            mode,
        }
    }

    /// Current run of consecutive probe failures.
    #[must_use]
    pub fn consecutive_failures(&self) -> u32 {
        self.failures
    }

    /// Configured failure threshold.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Configured recovery mode.
    #[must_use]
    pub fn mode(&self) -> MonitorMode {
        self.mode
    }

    /// Sends one liveness probe and updates the device status.
    ///
    /// Probe failures are counted, not surfaced: the threshold crossing is
    /// reported via the status channel only, and exactly once per run of
    /// failures.
    ///
    /// # Errors
    ///
    /// Only the active-mode resync sends can fail; probe failures
    /// themselves never produce an `Err`.
    pub fn on_tick<T: Transport>(
        &mut self,
        transport: &T,
        address: &str,
        state: &mut DeviceState,
        events: &EventBus,
    ) -> Result<()> {
        match transport.ping(address) {
            Ok(()) => {
                let recovered = self.failures >= self.threshold;
                self.failures = 0;
                if recovered {
                    tracing::info!(address = %address, "device answered again, status unknown until re-derived");
                    state.clear_vacuum_status();
                    if self.mode == MonitorMode::Active {
                        for query in resync_queries() {
                            transport.send(address, &query.to_xml())?;
                        }
                    }
                }
                Ok(())
            }
            Err(err) => {
                self.failures += 1;
                tracing::warn!(
                    address = %address,
                    failures = self.failures,
                    error = %err,
                    "liveness probe failed"
                );
                if self.failures == self.threshold {
                    state.set_offline();
                    events.publish_status(&VacuumStatus::Offline);
                }
                Ok(())
            }
        }
    }
}
