//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};


/// The identifier of a task.
/// It is randomly picked when the task is created, and never reused afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId {
    content: Uuid,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u = Uuid::parse_str(s)?;
        Ok(Self { content: u })
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}



/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task identifier
    id: TaskId,

    /// The display text of the task
    text: String,
    /// Whether this task has been marked as done
    completed: bool,

    /// The day this task is due, if any, as it was typed by the user
    due_date: Option<String>,
    /// The time of day this task is due, if any, as it was typed by the user.
    /// It can be set without a due date.
    due_time: Option<String>,

    /// The time this task was created.
    creation_date: DateTime<Utc>,
    /// The last time this task was modified
    last_modified: DateTime<Utc>,
}


impl Task {
    /// Create a brand new Task, with no due date nor time.
    /// This will pick a new (random) task ID.
    ///
    /// This does not check `text` is not empty, see [`TaskStore::add`](crate::store::TaskStore::add) for that
    pub(crate) fn new(text: String) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::random(),
            text,
            completed: false,
            due_date: None,
            due_time: None,
            creation_date: now,
            last_modified: now,
        }
    }

    pub fn id(&self) -> &TaskId      { &self.id   }
    pub fn text(&self) -> &str       { &self.text }
    pub fn completed(&self) -> bool  { self.completed }
    pub fn due_date(&self) -> Option<&str> { self.due_date.as_deref() }
    pub fn due_time(&self) -> Option<&str> { self.due_time.as_deref() }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    /// Returns true if both tasks have the same content, regardless of their timestamps
    pub fn has_same_observable_content_as(&self, other: &Task) -> bool {
           self.id == other.id
        && self.text == other.text
        && self.completed == other.completed
        && self.due_date == other.due_date
        && self.due_time == other.due_time
    }

    fn update_last_modified(&mut self) {
        self.last_modified = Utc::now();
    }

    /// Mark an uncompleted task as completed, and the other way round.
    /// This updates its "last modified" field
    pub(crate) fn toggle_completion(&mut self) {
        self.update_last_modified();
        self.completed = !self.completed;
    }

    /// Overwrite the user-editable fields of this task.
    /// This updates its "last modified" field
    pub(crate) fn set_content(&mut self, text: String, due_date: Option<String>, due_time: Option<String>) {
        self.update_last_modified();
        self.text = text;
        self.due_date = due_date;
        self.due_time = due_time;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_blank() {
        let task = Task::new("Buy milk".to_string());
        assert_eq!(task.text(), "Buy milk");
        assert_eq!(task.completed(), false);
        assert!(task.due_date().is_none());
        assert!(task.due_time().is_none());
        assert_eq!(task.creation_date(), task.last_modified());
    }

    #[test]
    fn ids_are_unique() {
        let a = Task::new("a".to_string());
        let b = Task::new("a".to_string());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.has_same_observable_content_as(&b), false);
    }

    #[test]
    fn id_from_its_display() {
        let id = TaskId::random();
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-an-id".parse::<TaskId>().is_err());
    }

    #[test]
    fn set_content_keeps_identity() {
        let mut task = Task::new("draft".to_string());
        let before = task.clone();
        task.toggle_completion();

        task.set_content("final".to_string(), Some("2024-01-01".to_string()), Some("09:00".to_string()));

        assert_eq!(task.id(), before.id());
        assert_eq!(task.completed(), true);
        assert_eq!(task.text(), "final");
        assert_eq!(task.due_date(), Some("2024-01-01"));
        assert_eq!(task.due_time(), Some("09:00"));
        assert!(task.last_modified() >= before.last_modified());
    }
}
