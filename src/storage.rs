//! This module provides durable storage for the task collection
//!
//! [`LocalStorage`] keeps the collection in a local JSON file, so that a newly opened session picks up exactly what the previous one saved. \
//! [`InMemoryStorage`] keeps it in memory only, which is handy to run a store without any durable backing (e.g. in tests).

use std::path::{Path, PathBuf};

use crate::config;
use crate::traits::TaskStorage;
use crate::Task;

/// The file name a given slot key is saved under
fn file_name_for_key(key: &str) -> String {
    format!("{}.json", sanitize_filename::sanitize(key))
}


/// A [`TaskStorage`] that stores the collection in a local JSON file
#[derive(Debug, PartialEq)]
pub struct LocalStorage {
    backing_file: PathBuf,
}

impl LocalStorage {
    /// Storage inside the given folder, under the configured slot key (see [`config::STORAGE_KEY`])
    pub fn in_folder(folder: &Path) -> Self {
        let key = config::STORAGE_KEY.lock().unwrap().clone();
        Self {
            backing_file: folder.join(file_name_for_key(&key)),
        }
    }

    /// Storage backed by this exact file
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
        }
    }

    /// The file this storage reads and writes
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }
}

impl TaskStorage for LocalStorage {
    fn load(&self) -> Vec<Task> {
        let file = match std::fs::File::open(&self.backing_file) {
            Err(_err) => {
                log::info!("No saved tasks in {:?}, starting from an empty collection", self.backing_file);
                return Vec::new();
            },
            Ok(f) => f,
        };

        match serde_json::from_reader(file) {
            Err(err) => {
                log::warn!("Unable to parse {:?} ({}), starting from an empty collection", self.backing_file, err);
                Vec::new()
            },
            Ok(tasks) => tasks,
        }
    }

    fn save(&mut self, tasks: &[Task]) {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            },
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, tasks) {
            log::warn!("Unable to serialize: {}", err);
            return;
        };
    }
}


/// A [`TaskStorage`] that only lives in memory.
///
/// It also counts its writes, so tests can check exactly when the store persists
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryStorage {
    saved: Vec<Task>,
    n_saves: u32,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds the given collection
    pub fn containing(tasks: Vec<Task>) -> Self {
        Self {
            saved: tasks,
            n_saves: 0,
        }
    }

    /// How many times `save` has been called on this slot
    pub fn n_saves(&self) -> u32 {
        self.n_saves
    }
}

impl TaskStorage for InMemoryStorage {
    fn load(&self) -> Vec<Task> {
        self.saved.clone()
    }

    fn save(&mut self, tasks: &[Task]) {
        self.saved = tasks.to_vec();
        self.n_saves += 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::Priority;

    #[test]
    fn serde_local_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = LocalStorage::in_folder(dir.path());

        let tasks = vec![
            Task::new("Buy milk".to_string(), "2026-01-05".to_string(), Priority::High),
            Task::new("Water the plants".to_string(), "2026-01-07".to_string(), Priority::Low),
        ];
        storage.save(&tasks);

        let retrieved = storage.load();
        assert_eq!(tasks, retrieved);
    }

    #[test]
    fn missing_slot_is_a_cold_start() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_folder(dir.path());

        assert!(storage.load().is_empty());
    }

    #[test]
    fn corrupted_slot_is_a_cold_start() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_folder(dir.path());
        std::fs::write(storage.backing_file(), b"{ this is not JSON !").unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn in_memory_storage_round_trip() {
        let tasks = vec![
            Task::new("Buy milk".to_string(), "2026-01-05".to_string(), Priority::Medium),
        ];

        let mut storage = InMemoryStorage::containing(tasks.clone());
        assert_eq!(storage.load(), tasks);
        assert_eq!(storage.n_saves(), 0);

        storage.save(&tasks);
        assert_eq!(storage.n_saves(), 1);
    }

    #[test]
    fn slot_key_becomes_the_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::in_folder(dir.path());

        assert_eq!(storage.backing_file(), dir.path().join("notion-todos.json"));
    }
}
