//! Utilities to observe the changes applied to a task store
//!
//! A view layer subscribes to the store and re-reads whatever it displays whenever an event is broadcast. This keeps the store usable from any kind of frontend (or from none at all).

use std::fmt::{Display, Error, Formatter};

use crate::task::TaskId;

/// A mutation that a [`TaskStore`](crate::TaskStore) has applied and persisted
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// A task has been created
    TaskAdded(TaskId),
    /// The completion state of a task has been flipped
    TaskToggled(TaskId),
    /// Some fields of a task have been edited
    TaskUpdated(TaskId),
    /// A task has been removed
    TaskDeleted(TaskId),
}

impl Display for StoreEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StoreEvent::TaskAdded(id) => write!(f, "added task {}", id),
            StoreEvent::TaskToggled(id) => write!(f, "toggled task {}", id),
            StoreEvent::TaskUpdated(id) => write!(f, "updated task {}", id),
            StoreEvent::TaskDeleted(id) => write!(f, "deleted task {}", id),
        }
    }
}


/// See [`ChangeFeed::subscribe`]
pub type Listener = Box<dyn FnMut(&StoreEvent)>;

/// The parties interested in store changes.
///
/// Events are broadcast synchronously, after the new collection has been persisted
pub struct ChangeFeed {
    listeners: Vec<Listener>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener that will be called on every broadcast event
    pub fn subscribe<F: FnMut(&StoreEvent) + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    /// Tell every listener about this event
    pub fn broadcast(&mut self, event: &StoreEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
