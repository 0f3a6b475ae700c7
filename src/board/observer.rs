//! Change notification for board toggles.

use std::fmt;

use tracing::trace;

use crate::core::coord::Coord;

/// Delivered to subscribers after a cell has been toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChange {
    pub cell: Coord,
    /// Occupancy of `cell` after the toggle.
    pub occupied: bool,
}

/// Handle returned by [`Observers::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&BoardChange) + Send>;

/// Ordered list of change subscribers.
///
/// Callbacks run synchronously in subscription order, each exactly once per
/// [`Observers::notify`].
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BoardChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn notify(&mut self, change: &BoardChange) {
        trace!(subscribers = self.subscribers.len(), cell = %change.cell, "notifying");
        for (_, callback) in &mut self.subscribers {
            callback(change);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
