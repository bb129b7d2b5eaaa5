use crate::view::{ListView, RowView};

/// Something that can actually display a task list, and talk to the user.
///
/// A [`ViewController`](crate::controller::ViewController) decides *what* is displayed, and tells its surface about it.
/// Implementors only have to draw what they are given.
pub trait Surface {
    /// Replace every displayed row with the rows of `list`
    fn replace_list(&mut self, list: &ListView);

    /// Replace a single displayed row (e.g. because it switched to edit mode), leaving the other ones untouched
    fn update_row(&mut self, row: &RowView);

    /// Empty the text-entry field used to add new tasks
    fn clear_input(&mut self);

    /// Synchronously show a message to the user
    fn notify(&mut self, message: &str);
}
