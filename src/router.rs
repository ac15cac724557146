// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Routing of inbound telemetry into state mutations and event publishes.

use crate::error::DecodeError;
use crate::event::EventBus;
use crate::state::DeviceState;
use crate::telemetry::{ControlEvent, RawCtl};

/// Stateless router for inbound telemetry.
///
/// Decodes raw payloads into [`ControlEvent`]s and applies them: mutate the
/// [`DeviceState`], then publish the result on the matching
/// [`EventBus`] channel. Publishes run synchronously after the mutation, so
/// a panicking subscriber can never leave the state half-applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRouter;

impl MessageRouter {
    /// Decodes a raw payload into a typed event.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for payloads that violate the device
    /// contract (missing required fields, non-numeric numbers). Unknown
    /// event names are not errors.
    pub fn decode(raw: &RawCtl) -> Result<ControlEvent, DecodeError> {
        ControlEvent::decode(raw)
    }

    /// Applies a decoded event to the state and publishes it.
    ///
    /// Unknown events are silently dropped; error events publish without
    /// touching the state.
    pub fn apply(event: &ControlEvent, state: &mut DeviceState, events: &EventBus) {
        match event {
            ControlEvent::CleanReport { status, fan_speed } => {
                let derived = state.apply_clean_report(status.clone(), fan_speed.clone());
                events.publish_status(&derived);
            }
            ControlEvent::ChargeState { status } => {
                if let Some(derived) = state.apply_charge_state(status.clone()) {
                    events.publish_status(&derived);
                } else {
                    tracing::debug!(
                        charge_status = %status,
                        "charge report left vacuum status unknown, nothing to publish"
                    );
                }
            }
            ControlEvent::BatteryInfo { fraction } => {
                state.set_battery_fraction(*fraction);
                events.publish_battery(*fraction);
            }
            ControlEvent::LifeSpan(wear) => {
                state.set_component_level(wear.component.clone(), wear.level);
                events.publish_lifespan(wear);
            }
            ControlEvent::Error { message } => {
                events.publish_error(message);
            }
            ControlEvent::Unknown { event } => {
                tracing::debug!(event = %event, "ignoring unmodelled telemetry event");
            }
        }
    }

    /// Decodes and applies a raw payload in one step.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] as from [`MessageRouter::decode`]; a decode
    /// failure leaves the state untouched.
    pub fn handle(
        raw: &RawCtl,
        state: &mut DeviceState,
        events: &EventBus,
    ) -> Result<(), DecodeError> {
        let event = Self::decode(raw)?;
        Self::apply(&event, state, events);
        Ok(())
    }
}
