//! This crate provides the data layer of a local-first weekly planner.
//!
//! Tasks live in a [`TaskStore`]: a planner grid of seven day columns is just seven calls to [`TaskStore::tasks_for_date`] over the dates of the displayed week. \
//! The store persists its whole collection through a [`TaskStorage`](traits::TaskStorage) slot on every mutation, so a freshly opened session picks up exactly where the previous one stopped (see [`LocalStorage`]). \
//! The displayed week itself is handled by the [`week`] module: a [`WeekCursor`](week::WeekCursor) holds the Sunday that anchors the current 7-day window and moves it by whole weeks.
//!
//! View layers are expected to subscribe to the store (see [`TaskStore::subscribe`]) and re-read whatever they display whenever a change is broadcast.

pub mod traits;

mod task;
pub use task::Task;
pub use task::TaskId;
pub use task::Priority;
pub use task::TaskPatch;
pub mod store;
pub use store::TaskStore;
pub mod storage;
pub use storage::LocalStorage;
pub mod week;

pub mod config;
pub mod utils;
