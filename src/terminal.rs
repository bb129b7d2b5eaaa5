//! A line-based terminal front-end
//!
//! The list is printed as text, and every line typed by the user is translated into [`UiEvent`]s.

use std::io::Write;

use crate::controller::{ClickTarget, Key, UiEvent};
use crate::traits::Surface;
use crate::utils;
use crate::view::{EditField, ListView, RowView, Role};

pub const HELP: &str = "\
Type some text and press Enter to add a task. Other commands (N is a row number):
  :add                 add the current input
  :complete N          mark or unmark a task
  :edit N              edit a task
  :delete N            delete a task
  :text N <text>       in edit mode, change the text
  :date N <date>       in edit mode, change the due date (empty to remove it)
  :time N <time>       in edit mode, change the due time (empty to remove it)
  :save N / :cancel N  leave edit mode
  :quit
Any line starting with ':' is read as a command, so a task cannot start with ':'.";

/// What the user asked for with a line of input
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Events to feed to the controller, in order
    Events(Vec<UiEvent>),
    /// The user wants to leave
    Quit,
    /// The line could not be understood. This tells why.
    Invalid(String),
}

/// Parse a line typed by the user.
///
/// `list` is what is currently displayed: row numbers refer to it.
pub fn parse_line(line: &str, list: &ListView) -> Command {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

    let command = match line.strip_prefix(':') {
        None => {
            if line.is_empty() {
                return Command::Events(vec![UiEvent::KeyPress(Key::Enter)]);
            }
            return Command::Events(vec![
                UiEvent::InputChanged(line.to_string()),
                UiEvent::KeyPress(Key::Enter),
            ]);
        },
        Some(command) => command,
    };

    let mut parts = command.splitn(3, ' ');
    let verb = parts.next().unwrap_or_default();
    let row_number = parts.next();
    let value = parts.next().unwrap_or_default().to_string();

    match verb {
        "quit" | "q" => return Command::Quit,
        "add" => return Command::Events(vec![UiEvent::AddClicked]),
        _ => {},
    }

    let row = match find_row(list, row_number) {
        Err(err) => return Command::Invalid(err),
        Ok(row) => row,
    };
    let id = row.task_id;

    let click = |role| Command::Events(vec![UiEvent::Click { target: ClickTarget::control(id, role) }]);
    let edit = |field, value| Command::Events(vec![UiEvent::EditInputChanged { id, field, value }]);

    match verb {
        "complete" => click(Role::Complete),
        "edit" => click(Role::Edit),
        "delete" => click(Role::Delete),
        "save" => click(Role::Save),
        "cancel" => click(Role::Cancel),
        "text" => edit(EditField::Text, value),
        "date" => edit(EditField::Date, value),
        "time" => edit(EditField::Time, value),
        other => Command::Invalid(format!("Unknown command :{}", other)),
    }
}

fn find_row<'a>(list: &'a ListView, row_number: Option<&str>) -> Result<&'a RowView, String> {
    let row_number = match row_number {
        None => return Err(String::from("Missing row number")),
        Some(n) => n,
    };
    let index: usize = row_number.parse()
        .map_err(|_| format!("Invalid row number {:?}", row_number))?;

    index.checked_sub(1)
        .and_then(|i| list.rows.get(i))
        .ok_or_else(|| format!("There is no row {}", index))
}


/// A [`Surface`] that prints everything to a writer (usually stdout)
pub struct TerminalSurface<W: Write> {
    out: W,
    /// What has been printed last, so that single rows can be located
    displayed: ListView,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, displayed: ListView::default() }
    }

    pub fn print_help(&mut self) {
        self.print_lines(&[HELP.to_string()]);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_lines(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(err) = writeln!(self.out, "{}", line) {
                log::warn!("Unable to write to the terminal: {}", err);
                return;
            }
        }
        if let Err(err) = self.out.flush() {
            log::warn!("Unable to flush the terminal: {}", err);
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn replace_list(&mut self, list: &ListView) {
        match serde_json::to_string(list) {
            Ok(json) => log::trace!("Rendering {}", json),
            Err(err) => log::warn!("Unable to serialize the list: {}", err),
        }

        self.displayed = list.clone();
        let mut lines = vec![format!("---- {} task(s) ----", list.rows.len())];
        lines.extend(utils::format_list(list));
        self.print_lines(&lines);
    }

    fn update_row(&mut self, row: &RowView) {
        let index = match utils::row_index(&self.displayed, row) {
            None => {
                log::warn!("Row {} is not displayed, it cannot be updated", row.task_id);
                return;
            },
            Some(index) => index,
        };
        if let Some(displayed_row) = self.displayed.row_mut(&row.task_id) {
            *displayed_row = row.clone();
        }
        self.print_lines(&[utils::format_row(index, row)]);
    }

    fn clear_input(&mut self) {
        // Lines are consumed as soon as they are typed, there is no pending input to clear
    }

    fn notify(&mut self, message: &str) {
        self.print_lines(&[format!("!! {}", message)]);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;
    use crate::view::render_all;

    fn two_rows() -> ListView {
        let mut store = TaskStore::new();
        store.add("A").unwrap();
        store.add("B").unwrap();
        render_all(store.list())
    }

    #[test]
    fn plain_text_adds() {
        let list = ListView::default();
        assert_eq!(parse_line("Buy milk\n", &list), Command::Events(vec![
            UiEvent::InputChanged("Buy milk".to_string()),
            UiEvent::KeyPress(Key::Enter),
        ]));
        assert_eq!(parse_line("", &list), Command::Events(vec![UiEvent::KeyPress(Key::Enter)]));
        assert_eq!(parse_line(":add", &list), Command::Events(vec![UiEvent::AddClicked]));
        assert_eq!(parse_line(":quit", &list), Command::Quit);
    }

    #[test]
    fn row_commands() {
        let list = two_rows();
        let second = list.rows[1].task_id;

        assert_eq!(parse_line(":delete 2", &list), Command::Events(vec![
            UiEvent::Click { target: ClickTarget::control(second, Role::Delete) },
        ]));
        assert_eq!(parse_line(":date 2 2024-01-01", &list), Command::Events(vec![
            UiEvent::EditInputChanged { id: second, field: EditField::Date, value: "2024-01-01".to_string() },
        ]));
        assert_eq!(parse_line(":text 2 Call mom back", &list), Command::Events(vec![
            UiEvent::EditInputChanged { id: second, field: EditField::Text, value: "Call mom back".to_string() },
        ]));
        assert_eq!(parse_line(":time 2", &list), Command::Events(vec![
            UiEvent::EditInputChanged { id: second, field: EditField::Time, value: String::new() },
        ]));
    }

    #[test]
    fn invalid_commands() {
        let list = two_rows();
        assert_eq!(parse_line(":delete", &list), Command::Invalid("Missing row number".to_string()));
        assert_eq!(parse_line(":delete x", &list), Command::Invalid("Invalid row number \"x\"".to_string()));
        assert_eq!(parse_line(":delete 0", &list), Command::Invalid("There is no row 0".to_string()));
        assert_eq!(parse_line(":delete 3", &list), Command::Invalid("There is no row 3".to_string()));
        assert_eq!(parse_line(":frobnicate 1", &list), Command::Invalid("Unknown command :frobnicate".to_string()));

        // Lines starting with ':' are never added as tasks, and the help says so
        assert_eq!(parse_line(":)", &list), Command::Invalid("Missing row number".to_string()));
        assert!(HELP.contains("a task cannot start with ':'"));
    }

    #[test]
    fn prints_list_and_messages() {
        let list = two_rows();
        let mut surface = TerminalSurface::new(Vec::new());
        surface.replace_list(&list);
        surface.notify("Please enter a task!");

        let printed = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(printed, "---- 2 task(s) ----\n\
            \x20 1. [ ] A\tNo due date/time\t[Complete] [Edit] [Delete]\n\
            \x20 2. [ ] B\tNo due date/time\t[Complete] [Edit] [Delete]\n\
            !! Please enter a task!\n");
    }
}
