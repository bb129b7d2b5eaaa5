//! Some utility functions

use crate::view::{EditField, ListView, RowClasses, RowView};

/// Format a row as a single line of text. `index` is the 1-based position of the row in its list.
pub fn format_row(index: usize, row: &RowView) -> String {
    let controls: Vec<String> = match &row.edit_form {
        Some(form) => form.controls.iter().map(|c| format!("[{}]", c.label)).collect(),
        None => row.controls.iter().map(|c| format!("[{}]", c.label)).collect(),
    };

    match (&row.edit_form, row.classes.contains(RowClasses::EDIT_MODE)) {
        (Some(form), true) => {
            let cursor = |field: EditField| if form.focus == field { ">" } else { " " };
            format!("{:>3}. ~ {}text: {:?}  {}date: {:?}  {}time: {:?}  {}",
                index,
                cursor(EditField::Text), form.text,
                cursor(EditField::Date), form.date,
                cursor(EditField::Time), form.time,
                controls.join(" "))
        },
        _ => {
            let completion = if row.classes.contains(RowClasses::COMPLETED) { "✓" } else { " " };
            format!("{:>3}. [{}] {}\t{}\t{}", index, completion, row.text, row.due_label, controls.join(" "))
        },
    }
}

/// Format a whole list, one line per row
pub fn format_list(list: &ListView) -> Vec<String> {
    if list.rows.is_empty() {
        return vec![String::from("    (no task)")];
    }
    list.rows.iter()
        .enumerate()
        .map(|(i, row)| format_row(i + 1, row))
        .collect()
}

/// 1-based position of a row in a list
pub fn row_index(list: &ListView, row: &RowView) -> Option<usize> {
    list.rows.iter()
        .position(|r| r.task_id == row.task_id)
        .map(|i| i + 1)
}
