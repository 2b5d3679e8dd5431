use crate::Task;

/// A durable slot that persists the whole task collection between sessions.
///
/// The store loads through this trait once at startup, and saves through it after every mutation. \
/// Every save replaces the previous content entirely, there is no incremental update. The slot is the only hand-off point between a closed session and a new one, resolved by last-write-wins.
pub trait TaskStorage {
    /// Return the last saved collection.
    /// Missing or unparseable data yields an empty collection, never an error: the planner must always start in a usable state
    fn load(&self) -> Vec<Task>;

    /// Persist the whole collection, replacing any previous content.
    /// Implementations absorb their own failures (and report them through `log`)
    fn save(&mut self, tasks: &[Task]);
}
