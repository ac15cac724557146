// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for observing device state changes.
//!
//! The bus carries four independent channels:
//!
//! - **status**: the derived [`VacuumStatus`] after clean/charge reports
//!   and liveness transitions
//! - **battery**: battery level as a fraction (0.0 to 1.0)
//! - **lifespan**: per-component [`ComponentWear`] readings
//! - **error**: resolved error messages
//!
//! Delivery is synchronous and in subscription order, in the thread that
//! applied the triggering mutation. Subscribing returns a
//! [`SubscriptionId`]; [`EventBus::unsubscribe`] removes it and is
//! idempotent.
//!
//! # Examples
//!
//! ```
//! use vacbot_lib::event::EventBus;
//! use vacbot_lib::types::VacuumStatus;
//!
//! let bus = EventBus::new();
//! let id = bus.on_status(|status| println!("vacuum is now {status}"));
//!
//! bus.publish_status(&VacuumStatus::Auto);
//! assert!(bus.unsubscribe(id));
//! assert!(!bus.unsubscribe(id));
//! ```

mod channel;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use crate::types::{ComponentWear, VacuumStatus};

use channel::Channel;
pub use channel::SubscriptionId;

/// Publish/subscribe hub for one device session.
///
/// Owned by the [`VacBot`](crate::VacBot) facade; channel publishes are
/// driven by the message router and the liveness monitor.
pub struct EventBus {
    status: Channel<VacuumStatus>,
    battery: Channel<f64>,
    lifespan: Channel<ComponentWear>,
    error: Channel<String>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let next_id = Arc::new(AtomicU64::new(1));
        Self {
            status: Channel::new(Arc::clone(&next_id)),
            battery: Channel::new(Arc::clone(&next_id)),
            lifespan: Channel::new(Arc::clone(&next_id)),
            error: Channel::new(next_id),
        }
    }

    /// Subscribes to vacuum status changes.
    pub fn on_status<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&VacuumStatus) + Send + Sync + 'static,
    {
        self.status.subscribe(callback)
    }

    /// Subscribes to battery-level updates (fraction, 0.0 to 1.0).
    pub fn on_battery<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&f64) + Send + Sync + 'static,
    {
        self.battery.subscribe(callback)
    }

    /// Subscribes to component lifespan updates.
    pub fn on_lifespan<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ComponentWear) + Send + Sync + 'static,
    {
        self.lifespan.subscribe(callback)
    }

    /// Subscribes to device error reports.
    pub fn on_error<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.error.subscribe(move |message: &String| callback(message))
    }

    /// Removes a subscription from whichever channel holds it.
    ///
    /// Returns `true` if a subscriber was removed; unsubscribing twice is a
    /// no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.status.unsubscribe(id)
            || self.battery.unsubscribe(id)
            || self.lifespan.unsubscribe(id)
            || self.error.unsubscribe(id)
    }

    /// Publishes a vacuum status to all status subscribers.
    pub fn publish_status(&self, status: &VacuumStatus) {
        self.status.publish(status);
    }

    /// Publishes a battery fraction to all battery subscribers.
    pub fn publish_battery(&self, fraction: f64) {
        self.battery.publish(&fraction);
    }

    /// Publishes a component wear reading to all lifespan subscribers.
    pub fn publish_lifespan(&self, wear: &ComponentWear) {
        self.lifespan.publish(wear);
    }

    /// Publishes an error message to all error subscribers.
    pub fn publish_error(&self, message: &str) {
        self.error.publish(&message.to_owned());
    }

    /// Returns the total number of subscribers across all channels.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.status.subscriber_count()
            + self.battery.subscriber_count()
            + self.lifespan.subscriber_count()
            + self.error.subscriber_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
