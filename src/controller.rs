//! Glue between the user, the task store and a display surface
//!
//! User events are turned into [`TaskStore`] mutations, after which the whole list is rebuilt and sent to the [`Surface`].

use crate::config;
use crate::store::TaskStore;
use crate::task::TaskId;
use crate::traits::Surface;
use crate::view::{self, EditField, ListView, Role};

/// The element a click landed on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickTarget {
    /// The row that contains the clicked element, if any
    pub row: Option<TaskId>,
    /// The role of the clicked element, if it is a control
    pub role: Option<Role>,
}

impl ClickTarget {
    /// A click on a control of a row
    pub fn control(row: TaskId, role: Role) -> Self {
        Self { row: Some(row), role: Some(role) }
    }
}

/// A key pressed in the text-entry field
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    Enter,
    Other(String),
}

/// Something the user did
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// A click somewhere in the list
    Click { target: ClickTarget },
    /// A click on the "add" control
    AddClicked,
    /// A key press in the text-entry field
    KeyPress(Key),
    /// The content of the text-entry field has changed
    InputChanged(String),
    /// The content of an inline input of an edit form has changed
    EditInputChanged { id: TaskId, field: EditField, value: String },
}


/// Keeps a [`Surface`] in sync with a [`TaskStore`], and applies user events to this store.
pub struct ViewController<S: Surface> {
    store: TaskStore,
    surface: S,
    /// Current content of the text-entry field
    input: String,
    /// What is currently displayed
    view: ListView,
}

impl<S: Surface> ViewController<S> {
    /// Create a controller with an empty store
    pub fn new(surface: S) -> Self {
        Self::with_store(TaskStore::new(), surface)
    }

    pub fn with_store(store: TaskStore, surface: S) -> Self {
        Self {
            store,
            surface,
            input: String::new(),
            view: ListView::default(),
        }
    }

    pub fn store(&self) -> &TaskStore   { &self.store   }
    pub fn view(&self) -> &ListView     { &self.view    }
    pub fn input(&self) -> &str         { &self.input   }
    pub fn surface(&self) -> &S         { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    /// Display the initial state of the store
    pub fn start(&mut self) {
        self.render_all();
    }

    /// Rebuild the whole list from the store, and display it.
    ///
    /// This closes every open edit form.
    pub fn render_all(&mut self) {
        self.view = view::render_all(self.store.list());
        self.surface.replace_list(&self.view);
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Click { target } => self.handle_click(target),
            UiEvent::AddClicked => self.add_from_input(),
            UiEvent::KeyPress(Key::Enter) => self.add_from_input(),
            UiEvent::KeyPress(Key::Other(_)) => {},
            UiEvent::InputChanged(text) => self.input = text,
            UiEvent::EditInputChanged { id, field, value } => self.edit_input(&id, field, value),
        }
    }

    fn handle_click(&mut self, target: ClickTarget) {
        let (id, role) = match (target.row, target.role) {
            (Some(id), Some(role)) => (id, role),
            _ => return,
        };

        match role {
            Role::Complete => {
                self.store.toggle_complete(&id);
                self.render_all();
            },
            Role::Delete => {
                self.store.remove(&id);
                self.render_all();
            },
            Role::Edit => self.enter_edit_mode(&id),
            Role::Save => self.save_edit(&id),
            Role::Cancel => self.cancel_edit(&id),
        }
    }

    fn add_from_input(&mut self) {
        match self.store.add(&self.input) {
            Err(err) => {
                log::debug!("Not adding task: {}", err);
                self.surface.notify(&config::get(&config::EMPTY_INPUT_MESSAGE));
            },
            Ok(_) => {
                self.input.clear();
                self.surface.clear_input();
                self.render_all();
            },
        }
    }

    /// Open an edit form on a row, without re-rendering the other ones.
    /// Other rows may be in edit mode already. A row that is already being edited keeps its form as it is.
    fn enter_edit_mode(&mut self, id: &TaskId) {
        let task = match self.store.find(id) {
            None => {
                log::debug!("Cannot edit unknown task {}", id);
                return;
            },
            Some(task) => task,
        };
        let row = match self.view.row_mut(id) {
            None => {
                log::debug!("Task {} is not displayed, it cannot be edited", id);
                return;
            },
            Some(row) => row,
        };
        if row.is_editing() {
            log::debug!("Task {} is already being edited", id);
            return;
        }

        row.open_edit_form(task);
        self.surface.update_row(row);
    }

    fn edit_input(&mut self, id: &TaskId, field: EditField, value: String) {
        let row = match self.view.row_mut(id) {
            Some(row) => row,
            None => return,
        };
        let form = match row.edit_form.as_mut() {
            None => {
                log::debug!("Task {} is not being edited", id);
                return;
            },
            Some(form) => form,
        };

        form.set(field, value);
        form.focus = field;
        self.surface.update_row(row);
    }

    fn save_edit(&mut self, id: &TaskId) {
        let (text, due_date, due_time) = match self.view.row(id).and_then(|row| row.edit_form.as_ref()) {
            None => {
                log::debug!("Task {} is not being edited, there is nothing to save", id);
                return;
            },
            Some(form) => form.values(),
        };

        self.store.update(id, text, due_date, due_time);
        self.render_all();
    }

    fn cancel_edit(&mut self, id: &TaskId) {
        let is_editing = self.view.row(id).map(|row| row.is_editing()).unwrap_or(false);
        match is_editing {
            true => self.render_all(),
            false => log::debug!("Task {} is not being edited, there is nothing to cancel", id),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_surface::{RecordingSurface, SurfaceCall};
    use crate::view::RowClasses;

    fn controller_with(texts: &[&str]) -> ViewController<RecordingSurface> {
        let mut store = TaskStore::new();
        for text in texts {
            store.add(text).unwrap();
        }
        let mut controller = ViewController::with_store(store, RecordingSurface::new());
        controller.start();
        controller.surface_mut().clear_calls();
        controller
    }

    fn click(controller: &mut ViewController<RecordingSurface>, index: usize, role: Role) {
        let id = controller.view().rows[index].task_id;
        controller.handle(UiEvent::Click { target: ClickTarget::control(id, role) });
    }

    #[test]
    fn start_renders_the_store() {
        let mut controller = ViewController::with_store(TaskStore::new(), RecordingSurface::new());
        controller.start();
        assert_eq!(controller.surface().calls(), &[SurfaceCall::ReplaceList(ListView::default())]);
    }

    #[test]
    fn enter_and_add_button_both_add() {
        let mut controller = controller_with(&[]);
        controller.handle(UiEvent::InputChanged("one".to_string()));
        controller.handle(UiEvent::KeyPress(Key::Enter));
        controller.handle(UiEvent::InputChanged("two".to_string()));
        controller.handle(UiEvent::AddClicked);

        let texts: Vec<&str> = controller.view().rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(controller.input(), "");
        assert_eq!(controller.surface().full_render_count(), 2);
        assert_eq!(controller.surface().calls()[0], SurfaceCall::ClearInput);
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut controller = controller_with(&[]);
        controller.handle(UiEvent::InputChanged("typing".to_string()));
        controller.handle(UiEvent::KeyPress(Key::Other("a".to_string())));
        assert!(controller.store().is_empty());
        assert!(controller.surface().calls().is_empty());
        assert_eq!(controller.input(), "typing");
    }

    #[test]
    fn empty_input_is_reported() {
        let mut controller = controller_with(&["kept"]);
        controller.handle(UiEvent::InputChanged("   ".to_string()));
        controller.handle(UiEvent::AddClicked);

        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.input(), "   ");
        assert_eq!(controller.surface().calls(), &[SurfaceCall::Notify("Please enter a task!".to_string())]);
    }

    #[test]
    fn clicks_outside_controls_are_ignored() {
        let mut controller = controller_with(&["A"]);
        let id = controller.view().rows[0].task_id;

        controller.handle(UiEvent::Click { target: ClickTarget { row: None, role: Some(Role::Delete) } });
        controller.handle(UiEvent::Click { target: ClickTarget { row: Some(id), role: None } });

        assert_eq!(controller.store().len(), 1);
        assert!(controller.surface().calls().is_empty());
    }

    #[test]
    fn complete_toggles_and_rerenders() {
        let mut controller = controller_with(&["A"]);
        click(&mut controller, 0, Role::Complete);

        let row = &controller.view().rows[0];
        assert!(row.classes.contains(RowClasses::COMPLETED));
        assert_eq!(row.control(Role::Complete).unwrap().label, "Unmark");
        assert_eq!(controller.surface().full_render_count(), 1);
    }

    #[test]
    fn edit_only_updates_its_row() {
        let mut controller = controller_with(&["A", "B"]);
        click(&mut controller, 1, Role::Edit);

        let calls = controller.surface().calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            SurfaceCall::UpdateRow(row) => {
                assert_eq!(row.text, "B");
                assert!(row.is_editing());
            },
            other => panic!("Unexpected call {:?}", other),
        }
        assert_eq!(controller.view().rows[0].is_editing(), false);
        assert!(controller.surface().displayed().rows[1].is_editing());
    }

    #[test]
    fn several_rows_can_be_edited_until_next_render() {
        let mut controller = controller_with(&["A", "B", "C"]);
        click(&mut controller, 0, Role::Edit);
        click(&mut controller, 2, Role::Edit);
        assert!(controller.view().rows[0].is_editing());
        assert!(controller.view().rows[2].is_editing());

        // Saving one of them rebuilds the whole list, closing the other one
        click(&mut controller, 2, Role::Save);
        assert!(controller.view().rows.iter().all(|row| row.is_editing() == false));
    }

    #[test]
    fn free_form_date_is_saved_as_typed() {
        let mut controller = controller_with(&["A"]);
        let id = controller.view().rows[0].task_id;
        click(&mut controller, 0, Role::Edit);
        controller.handle(UiEvent::EditInputChanged { id, field: EditField::Text, value: "B".to_string() });
        controller.handle(UiEvent::EditInputChanged { id, field: EditField::Date, value: "01/02/2024".to_string() });
        controller.handle(UiEvent::EditInputChanged { id, field: EditField::Time, value: "09:00:30".to_string() });
        click(&mut controller, 0, Role::Save);

        let task = &controller.store().list()[0];
        assert_eq!(task.text(), "B");
        assert_eq!(task.due_date(), Some("01/02/2024"));
        assert_eq!(task.due_time(), Some("09:00:30"));
        assert!(controller.surface().notifications().is_empty());

        let row = &controller.surface().displayed().rows[0];
        assert_eq!(row.is_editing(), false);
        assert_eq!(row.due_label, "Due: 01/02/2024 at 09:00:30");
    }

    #[test]
    fn editing_twice_keeps_what_was_typed() {
        let mut controller = controller_with(&["A"]);
        let id = controller.view().rows[0].task_id;
        click(&mut controller, 0, Role::Edit);
        controller.handle(UiEvent::EditInputChanged { id, field: EditField::Text, value: "half typed".to_string() });
        controller.surface_mut().clear_calls();

        click(&mut controller, 0, Role::Edit);

        assert!(controller.surface().calls().is_empty());
        let form = controller.view().rows[0].edit_form.as_ref().unwrap();
        assert_eq!(form.text, "half typed");
        assert_eq!(form.focus, EditField::Text);
    }

    #[test]
    fn save_and_cancel_need_an_open_form() {
        let mut controller = controller_with(&["A"]);
        let id = controller.view().rows[0].task_id;
        controller.handle(UiEvent::EditInputChanged { id, field: EditField::Text, value: "B".to_string() });
        click(&mut controller, 0, Role::Save);
        click(&mut controller, 0, Role::Cancel);

        assert!(controller.surface().calls().is_empty());
        assert_eq!(controller.store().list()[0].text(), "A");
    }
}
