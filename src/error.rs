//! Errors that can be reported to the user

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A task was about to be created with no text (or only whitespace)
    #[error("task text is empty")]
    EmptyInput,
}
