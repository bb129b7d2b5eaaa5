//! This crate provides a small, in-memory to-do list.
//!
//! Tasks live in a [`TaskStore`](store::TaskStore). Nothing is persisted: the store lives as long as its owner.
//!
//! The list is displayed through a [`ViewController`](controller::ViewController), that turns user events into store mutations,
//! and then rebuilds a declarative description of the whole list (see the [`view`] module). \
//! Actually drawing this description is the job of a [`Surface`](traits::Surface). This crate ships a [`terminal`] surface,
//! and a [`mock_surface`] that only records what it is asked to display.

pub mod traits;

mod error;
pub use error::Error;
pub mod task;
pub use task::{Task, TaskId};
pub mod store;
pub use store::TaskStore;
pub mod view;
pub mod controller;
pub use controller::ViewController;

pub mod terminal;
pub mod mock_surface;

pub mod config;
pub mod utils;
