//! To-do tasks and their priorities

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// How important a task is, as displayed by its day column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}


/// The unique identifier of a [`Task`].
///
/// Ids are generated when a task is created and never change afterwards. A store never contains two tasks with the same id
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.content.as_str())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}


/// The single validation boundary for task texts, used by every mutation that sets one.
/// Returns the trimmed text, or `None` when nothing meaningful remains
pub(crate) fn normalized_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}


/// A to-do task, pinned to a single day column of the planner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The unique, immutable identifier of this task
    id: TaskId,

    /// What should be done. This has been trimmed, and is never empty
    text: String,
    /// Whether this task is done already
    completed: bool,
    /// How important this task is
    priority: Priority,
    /// The day column that owns this task, as a `YYYY-MM-DD` string.
    /// The store hands this string back as-is: callers are responsible for providing valid calendar dates
    date: String,

    /// The time this task was created.
    /// Kept for debugging and optional sorting. Display order is insertion order, not creation time
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}


impl Task {
    /// Create a brand new, uncompleted Task with a fresh random id.
    ///
    /// `text` must already have gone through [`normalized_text`] (the store does this)
    pub(crate) fn new(text: String, date: String, priority: Priority) -> Self {
        Self {
            id: TaskId::random(),
            text,
            completed: false,
            priority,
            date,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &TaskId       { &self.id        }
    pub fn text(&self) -> &str        { &self.text      }
    pub fn completed(&self) -> bool   { self.completed  }
    pub fn priority(&self) -> Priority { self.priority  }
    pub fn date(&self) -> &str        { &self.date      }
    pub fn created_at(&self) -> &DateTime<Utc> { &self.created_at }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
    pub(crate) fn set_text(&mut self, new_text: String) {
        self.text = new_text;
    }
    pub(crate) fn set_priority(&mut self, new_priority: Priority) {
        self.priority = new_priority;
    }
    pub(crate) fn set_date(&mut self, new_date: String) {
        self.date = new_date;
    }
}


/// A partial edit of a task, as supplied by e.g. an edit form.
///
/// `None` fields are left untouched
#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub priority: Option<Priority>,
    pub date: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_task_layout() {
        let task = Task::new("Buy milk".to_string(), "2026-01-05".to_string(), Priority::High);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["priority"], "high");
        assert_eq!(json["date"], "2026-01-05");
        assert!(json["id"].is_string());
        assert!(json["createdAt"].is_string());

        let retrieved: Task = serde_json::from_value(json).unwrap();
        assert_eq!(task, retrieved);
    }

    #[test]
    fn text_normalization() {
        assert_eq!(normalized_text("  Buy milk "), Some("Buy milk".to_string()));
        assert_eq!(normalized_text(""), None);
        assert_eq!(normalized_text("   \t "), None);
    }
}
