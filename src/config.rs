//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The key the task collection is saved under in its durable slot (for a [`LocalStorage`](crate::LocalStorage), this becomes the file name).
/// Feel free to override it when initing this library.
pub static STORAGE_KEY: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("notion-todos".to_string())));
