use std::time::Duration;

use recipe_core::{DraftStore, DraftStoreBuilder, MockBackend, Settings, Timings};
use tempfile::TempDir;

/// Helper function to create a store in a fresh temporary directory
pub fn create_test_store() -> (TempDir, DraftStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let store = DraftStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Settings with the simulated network latency removed
#[allow(dead_code)]
pub fn instant_settings() -> Settings {
    Settings {
        timings: Timings::default().with_latency(Duration::ZERO),
        ..Settings::default()
    }
}

/// Backend recording submissions into `store`
#[allow(dead_code)]
pub fn test_backend(store: &DraftStore) -> MockBackend {
    MockBackend::new(&instant_settings().timings)
        .with_store(store.connect_tab().expect("Failed to connect tab"))
}
