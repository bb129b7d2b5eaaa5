//! A surface that displays nothing, but remembers everything it has been asked to display
//!
//! This is useful to drive a [`ViewController`](crate::controller::ViewController) headlessly, e.g. in tests.

use crate::traits::Surface;
use crate::view::{ListView, RowView};

/// A single call that has been made to a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    ReplaceList(ListView),
    UpdateRow(RowView),
    ClearInput,
    Notify(String),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    displayed: ListView,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, oldest first
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Forget the calls received so far. This does not change what is displayed.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// The list, as it would currently be visible on a real surface
    pub fn displayed(&self) -> &ListView {
        &self.displayed
    }

    /// The messages that have been shown to the user
    pub fn notifications(&self) -> Vec<&str> {
        self.calls.iter()
            .filter_map(|call| match call {
                SurfaceCall::Notify(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// How many times the whole list has been replaced
    pub fn full_render_count(&self) -> usize {
        self.calls.iter()
            .filter(|call| matches!(call, SurfaceCall::ReplaceList(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn replace_list(&mut self, list: &ListView) {
        self.displayed = list.clone();
        self.calls.push(SurfaceCall::ReplaceList(list.clone()));
    }

    fn update_row(&mut self, row: &RowView) {
        match self.displayed.row_mut(&row.task_id) {
            Some(displayed_row) => *displayed_row = row.clone(),
            None => log::warn!("Row {} is not displayed, it cannot be updated", row.task_id),
        }
        self.calls.push(SurfaceCall::UpdateRow(row.clone()));
    }

    fn clear_input(&mut self) {
        self.calls.push(SurfaceCall::ClearInput);
    }

    fn notify(&mut self, message: &str) {
        self.calls.push(SurfaceCall::Notify(message.to_string()));
    }
}
