//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::path::PathBuf;

use crate::core::action::{Action, update};
use crate::core::animal::AnimalRecord;
use crate::core::catalogue::{CatalogueError, CatalogueSource, animals};
use crate::core::state::App;

/// A catalogue whose every call fails.
pub struct FailingCatalogue;

#[async_trait]
impl CatalogueSource for FailingCatalogue {
    fn name(&self) -> &str {
        "failing"
    }

    async fn load(&self) -> Result<Vec<AnimalRecord>, CatalogueError> {
        Err(CatalogueError::Unavailable("offline".to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<AnimalRecord>, CatalogueError> {
        Err(CatalogueError::Unavailable("offline".to_string()))
    }
}

/// Creates a test App with the built-in catalogue already loaded.
pub fn loaded_app() -> App {
    let mut app = App::new();
    update(&mut app, Action::SetAnimals(animals()));
    app
}

/// A fresh, not-yet-created directory under the system temp dir.
pub fn temp_store_dir() -> PathBuf {
    std::env::temp_dir().join(format!("wildlife-test-{}", uuid::Uuid::new_v4()))
}
