//! A declarative description of the task list, as it should be displayed
//!
//! Building it is a pure function of the tasks. Actually drawing it is the job of a [`Surface`](crate::traits::Surface).

use serde::{Deserialize, Serialize};
use bitflags::bitflags;

use crate::task::{Task, TaskId};

bitflags! {
    /// Presentational markers of a row
    #[derive(Serialize, Deserialize)]
    pub struct RowClasses: u8 {
        /// Set on every row
        const TODO_ITEM = 1;
        /// The task of this row is completed
        const COMPLETED = 2;
        /// The row is showing its edit form instead of its usual content
        const EDIT_MODE = 4;
    }
}

/// What a control does when it is clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Complete,
    Edit,
    Delete,
    Save,
    Cancel,
}

/// A clickable control
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub role: Role,
    pub label: String,
}

impl Control {
    fn new(role: Role, label: &str) -> Self {
        Self { role, label: label.to_string() }
    }
}

/// The inline inputs of an edit form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditField {
    Text,
    Date,
    Time,
}

/// The form that replaces the content of a row while it is edited
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditForm {
    pub text: String,
    pub date: String,
    pub time: String,
    pub focus: EditField,
    pub controls: Vec<Control>,
}

impl EditForm {
    /// Create a form pre-populated with the current values of a task. The text input has the focus.
    pub fn for_task(task: &Task) -> Self {
        Self {
            text: task.text().to_string(),
            date: task.due_date().unwrap_or_default().to_string(),
            time: task.due_time().unwrap_or_default().to_string(),
            focus: EditField::Text,
            controls: vec![
                Control::new(Role::Save, "Save"),
                Control::new(Role::Cancel, "Cancel"),
            ],
        }
    }

    pub fn set(&mut self, field: EditField, value: String) {
        match field {
            EditField::Text => self.text = value,
            EditField::Date => self.date = value,
            EditField::Time => self.time = value,
        }
    }

    /// Read the values of this form, the way they should be stored into a task.
    ///
    /// The text is trimmed (but may end up empty). Empty date and time inputs mean "no due date" and "no due time",
    /// anything else is kept as typed.
    pub fn values(&self) -> (String, Option<String>, Option<String>) {
        let text = self.text.trim().to_string();
        (text, non_empty(&self.date), non_empty(&self.time))
    }
}

/// One row of the list, showing a single task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    pub task_id: TaskId,
    pub text: String,
    pub due_label: String,
    pub classes: RowClasses,
    pub controls: Vec<Control>,
    pub edit_form: Option<EditForm>,
}

impl RowView {
    pub fn new(task: &Task) -> Self {
        let mut classes = RowClasses::TODO_ITEM;
        if task.completed() {
            classes.insert(RowClasses::COMPLETED);
        }
        let toggle_label = if task.completed() { "Unmark" } else { "Complete" };

        Self {
            task_id: *task.id(),
            text: task.text().to_string(),
            due_label: due_label(task.due_date(), task.due_time()),
            classes,
            controls: vec![
                Control::new(Role::Complete, toggle_label),
                Control::new(Role::Edit, "Edit"),
                Control::new(Role::Delete, "Delete"),
            ],
            edit_form: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.classes.contains(RowClasses::EDIT_MODE)
    }

    /// Switch this row to edit mode, with a fresh form for `task`
    pub fn open_edit_form(&mut self, task: &Task) {
        self.classes.insert(RowClasses::EDIT_MODE);
        self.edit_form = Some(EditForm::for_task(task));
    }

    /// Returns the control with the given role, be it a control of the row or of its edit form
    pub fn control(&self, role: Role) -> Option<&Control> {
        let form_controls = self.edit_form.iter().flat_map(|form| form.controls.iter());
        self.controls.iter()
            .chain(form_controls)
            .find(|control| control.role == role)
    }
}

/// The whole list, one row per task, in the same order as the tasks
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    pub rows: Vec<RowView>,
}

impl ListView {
    pub fn row(&self, id: &TaskId) -> Option<&RowView> {
        self.rows.iter().find(|row| &row.task_id == id)
    }

    pub fn row_mut(&mut self, id: &TaskId) -> Option<&mut RowView> {
        self.rows.iter_mut().find(|row| &row.task_id == id)
    }
}

/// Build the description of the list for the given tasks.
///
/// No row is in edit mode in the returned value.
pub fn render_all(tasks: &[Task]) -> ListView {
    ListView {
        rows: tasks.iter().map(RowView::new).collect(),
    }
}

/// The human-readable due date and time of a task
pub fn due_label(due_date: Option<&str>, due_time: Option<&str>) -> String {
    match (due_date, due_time) {
        (None, None) => String::from("No due date/time"),
        (Some(date), None) => format!("Due: {}", date),
        (None, Some(time)) => format!(" at {}", time),
        (Some(date), Some(time)) => format!("Due: {} at {}", date, time),
    }
}

fn non_empty(input: &str) -> Option<String> {
    let input = input.trim();
    match input.is_empty() {
        true => None,
        false => Some(input.to_string()),
    }
}
