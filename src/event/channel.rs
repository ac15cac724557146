// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One ordered subscriber list, shared-counter token allocation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Unique identifier for a subscription.
///
/// Returned by the `on_*` methods of [`EventBus`](super::EventBus) and
/// passed to [`unsubscribe`](super::EventBus::unsubscribe). IDs are unique
/// within one bus's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// One event channel: an ordered list of subscriber records.
///
/// Subscription tokens are drawn from a counter shared across the owning
/// bus, so one token namespace covers all channels and `unsubscribe` can
/// probe each channel in turn.
pub(super) struct Channel<T> {
    next_id: Arc<AtomicU64>,
    subscribers: RwLock<Vec<(SubscriptionId, Callback<T>)>>,
}

impl<T> Channel<T> {
    pub(super) fn new(next_id: Arc<AtomicU64>) -> Self {
        Self {
            next_id,
            subscribers: RwLock::new(Vec::new()),
        }
    }

    pub(super) fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().push((id, Arc::new(callback)));
        id
    }

    /// Removes the subscriber with the given token. Idempotent.
    pub(super) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Invokes every current subscriber in subscription order.
    ///
    /// The subscriber list is snapshotted first, so callbacks added or
    /// removed during the publish do not affect this in-flight publish and
    /// re-entrant unsubscription cannot deadlock.
    pub(super) fn publish(&self, value: &T) {
        let snapshot: Vec<Callback<T>> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in snapshot {
            callback(value);
        }
    }

    pub(super) fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}
