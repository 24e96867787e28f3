//! Change feed
//!
//! Front ends subscribe to the manager and re-render when a change arrives.
//! Each subscriber owns the receiving half of an unbounded channel, so
//! publishing never blocks the manager. Subscribers that drop their receiver
//! are pruned on the next publish.

use crossbeam::channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use uuid::Uuid;

/// One effective mutation of the diary
///
/// Published after the in-memory state has changed. No-op calls (unknown
/// ids) publish nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    GroupAdded { group_id: Uuid },
    GroupUpdated { group_id: Uuid },
    GroupDeleted { group_id: Uuid, entries_removed: usize },
    BirdAdded { group_id: Uuid, bird_id: Uuid },
    EntryAdded { entry_id: Uuid, group_id: Uuid },
    EntryDeleted { entry_id: Uuid },
}

/// Fan-out of changes to every live subscriber
#[derive(Debug, Default)]
pub struct ChangeFeed {
    subscribers: Mutex<Vec<Sender<Change>>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> Receiver<Change> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Deliver a change to every subscriber, dropping disconnected ones
    pub fn publish(&self, change: Change) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }

    /// Number of subscribers still registered
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}
