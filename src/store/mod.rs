//! This module provides the task store, the single owner of the task collection
//!
//! Every mutation goes through the [`TaskStore`]: it validates the request, applies it in memory, persists the whole new collection through its [`TaskStorage`], and then broadcasts what happened (see [`change_feed`]). \
//! Reads are pure: day columns and week statistics are derived on demand and never touch storage.

pub mod change_feed;

use crate::task::normalized_text;
use crate::task::{Priority, Task, TaskId, TaskPatch};
use crate::traits::TaskStorage;
use change_feed::{ChangeFeed, StoreEvent};


/// Aggregated completion numbers over a set of day columns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekStatistics {
    pub completed: usize,
    pub total: usize,
    /// `completed / total`, rounded to whole percents, or 0 when there are no tasks at all
    pub percentage: u32,
}


/// The owner of the task collection.
///
/// A store is created over a [`TaskStorage`] and immediately loads whatever that slot holds (a missing or corrupted slot yields an empty, usable store). \
/// Tasks are kept in insertion order, which is also their display order within a day column.
pub struct TaskStore<S: TaskStorage> {
    storage: S,
    tasks: Vec<Task>,
    change_feed: ChangeFeed,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Create a store from whatever the given storage holds
    pub fn new(storage: S) -> Self {
        let tasks = storage.load();
        Self {
            storage,
            tasks,
            change_feed: ChangeFeed::new(),
        }
    }

    /// Add a new task to the given day column and return it.
    ///
    /// The text is trimmed first. A whitespace-only text creates nothing and returns `None`
    pub fn add_task(&mut self, text: &str, date: &str, priority: Priority) -> Option<&Task> {
        let text = match normalized_text(text) {
            None => {
                log::debug!("Refusing to add a task with an empty text");
                return None;
            },
            Some(text) => text,
        };

        let task = Task::new(text, date.to_string(), priority);
        let id = task.id().clone();
        self.tasks.push(task);
        self.after_change(StoreEvent::TaskAdded(id));

        self.tasks.last()
    }

    /// Flip the completion state of this task.
    /// Unknown ids are ignored: they are just stale references, not errors
    pub fn toggle_task(&mut self, id: &TaskId) {
        let task = match self.task_mut(id) {
            None => return,
            Some(t) => t,
        };

        let completed = task.completed() == false;
        task.set_completed(completed);
        self.after_change(StoreEvent::TaskToggled(id.clone()));
    }

    /// Remove this task from the collection. Unknown ids are ignored
    pub fn delete_task(&mut self, id: &TaskId) {
        let index = match self.tasks.iter().position(|task| task.id() == id) {
            None => {
                log::debug!("No task for id {}, ignoring", id);
                return;
            },
            Some(index) => index,
        };

        self.tasks.remove(index);
        self.after_change(StoreEvent::TaskDeleted(id.clone()));
    }

    /// Apply a partial edit to this task. Unknown ids are ignored.
    ///
    /// The replacement text goes through the same normalization as [`add_task`](Self::add_task): a whitespace-only text is discarded (the other fields of the patch still apply), so tasks always keep a meaningful text
    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) {
        let task = match self.task_mut(id) {
            None => return,
            Some(t) => t,
        };

        let mut changed = false;
        if let Some(text) = patch.text {
            match normalized_text(&text) {
                None => log::debug!("Discarding an empty replacement text for task {}", id),
                Some(text) => {
                    task.set_text(text);
                    changed = true;
                },
            }
        }
        if let Some(priority) = patch.priority {
            task.set_priority(priority);
            changed = true;
        }
        if let Some(date) = patch.date {
            task.set_date(date);
            changed = true;
        }

        if changed {
            self.after_change(StoreEvent::TaskUpdated(id.clone()));
        }
    }

    /// A read-only snapshot of the whole collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Every task pinned to this day column, in collection order
    pub fn tasks_for_date(&self, date: &str) -> Vec<&Task> {
        self.tasks.iter()
            .filter(|task| task.date() == date)
            .collect()
    }

    /// Completion numbers for the tasks whose day is in `dates` (usually the 7 dates of the displayed week, see [`week_dates`](crate::week::week_dates))
    pub fn week_statistics(&self, dates: &[String]) -> WeekStatistics {
        let week_tasks: Vec<&Task> = self.tasks.iter()
            .filter(|task| dates.iter().any(|date| date == task.date()))
            .collect();

        let total = week_tasks.len();
        let completed = week_tasks.iter().filter(|task| task.completed()).count();
        let percentage = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        WeekStatistics { completed, total, percentage }
    }

    /// Register a listener that will be told about every completed mutation.
    /// This is how a view layer triggers its re-renders without polling the store
    pub fn subscribe<F: FnMut(&StoreEvent) + 'static>(&mut self, listener: F) {
        self.change_feed.subscribe(listener);
    }

    /// The storage this store persists into
    pub fn storage(&self) -> &S {
        &self.storage
    }
    /// The storage this store persists into
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id);
        if task.is_none() {
            log::debug!("No task for id {}, ignoring", id);
        }
        task
    }

    /// Persist the new collection, then tell the subscribers.
    /// Mutations that did not change anything never get here
    fn after_change(&mut self, event: StoreEvent) {
        self.storage.save(&self.tasks);
        self.change_feed.broadcast(&event);
    }
}
