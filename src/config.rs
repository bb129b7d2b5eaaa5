//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The message shown to the user when they try to add a task without any text.
/// Feel free to override it when initing this library.
pub static EMPTY_INPUT_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Please enter a task!".to_string())));

/// Read the current value of a config string.
///
/// A poisoned lock still holds a valid string, so it is read anyway.
pub fn get(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    let value = match setting.lock() {
        Ok(value) => value,
        Err(poisoned) => poisoned.into_inner(),
    };
    value.clone()
}

/// Override a config string
pub fn set(setting: &Lazy<Arc<Mutex<String>>>, new_value: &str) {
    let mut value = match setting.lock() {
        Ok(value) => value,
        Err(poisoned) => poisoned.into_inner(),
    };
    *value = new_value.to_string();
}
