//! Shared test utilities for tracker integration tests

use std::path::{Path, PathBuf};

use habitquest::config::StorageBackend;
use habitquest::store::{HabitTracker, open_store};
use tempfile::TempDir;

/// A temp dir holding one data file for the given backend
pub struct TestData {
    pub dir: TempDir,
    pub backend: StorageBackend,
}

impl TestData {
    pub fn new(backend: StorageBackend) -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            backend,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(self.backend.default_file_name())
    }

    /// Open a fresh tracker on the data file, as a new CLI invocation would
    pub fn open(&self) -> HabitTracker {
        open_tracker_at(self.backend, &self.path())
    }
}

pub fn open_tracker_at(backend: StorageBackend, path: &Path) -> HabitTracker {
    let store = open_store(backend, path).expect("Failed to open store");
    HabitTracker::load(store).expect("Failed to load tracker")
}
