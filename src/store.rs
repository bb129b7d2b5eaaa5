//! The in-memory collection of tasks

use crate::error::Error;
use crate::task::{Task, TaskId};


/// An ordered collection of tasks.
///
/// Tasks are kept in insertion order, and are never sorted.
/// Operations that target a task that does not exist (anymore) are silently ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new task from some user input, and append it at the end of the collection.
    ///
    /// The input is trimmed. If nothing remains, [`Error::EmptyInput`] is returned and the collection is left unchanged.
    pub fn add(&mut self, text: &str) -> Result<&Task, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let task = Task::new(text.to_string());
        log::debug!("Adding task {} ({:?})", task.id(), task.text());
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Mark a task as completed, or uncompleted if it already was
    pub fn toggle_complete(&mut self, id: &TaskId) {
        match self.find_mut(id) {
            None => log::debug!("Cannot toggle unknown task {}", id),
            Some(task) => {
                task.toggle_completion();
                log::debug!("Task {} is now {}", id, if task.completed() { "completed" } else { "uncompleted" });
            },
        }
    }

    /// Delete a task. The remaining tasks keep their relative order.
    pub fn remove(&mut self, id: &TaskId) {
        match self.position(id) {
            None => log::debug!("Cannot remove unknown task {}", id),
            Some(index) => {
                self.tasks.remove(index);
                log::debug!("Removed task {}", id);
            },
        }
    }

    /// Overwrite the text, due date and due time of a task.
    ///
    /// Unlike [`Self::add`], this does not reject an empty text.
    pub fn update(&mut self, id: &TaskId, text: String, due_date: Option<String>, due_time: Option<String>) {
        match self.find_mut(id) {
            None => log::debug!("Cannot update unknown task {}", id),
            Some(task) => {
                task.set_content(text, due_date, due_time);
                log::debug!("Updated task {}", id);
            },
        }
    }

    /// Returns the task with the given ID, if any
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns every task, in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}
