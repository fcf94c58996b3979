//! # Catalogue Loading
//!
//! The async half of loading: waits out the configured delay, asks the
//! `CatalogueSource` for records and reports the outcome as `Action`s on the
//! event loop's channel. The TUI spawns [`load_catalogue`] as a tokio task.
//!
//! ```text
//! SetError(None) → SetLoading(true) → (delay) → SetAnimals → SetLoading(false)
//!                                             ↘ SetError(Some(code))
//! ```

use log::{debug, info, warn};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::core::action::Action;
use crate::core::animal::AnimalRecord;
use crate::core::catalogue::CatalogueSource;
use crate::core::error::{AppError, ErrorCode};

/// Loads the full collection and sends the resulting actions on `tx`.
///
/// `code` is `InitError` for the first load and `LoadError` for a refresh.
/// If the receiver is gone (the app quit mid-load) the task just stops.
pub async fn load_catalogue(
    source: &dyn CatalogueSource,
    delay: Duration,
    code: ErrorCode,
    tx: Sender<Action>,
) {
    info!("Loading catalogue from '{}' ({:?} delay)", source.name(), delay);
    if tx.send(Action::SetError(None)).is_err() || tx.send(Action::SetLoading(true)).is_err() {
        debug!("Load abandoned: receiver dropped");
        return;
    }

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let outcome = match source.load().await {
        Ok(animals) => {
            info!("Catalogue loaded: {} animals", animals.len());
            tx.send(Action::SetAnimals(animals))
                .and_then(|_| tx.send(Action::SetLoading(false)))
        }
        Err(e) => {
            warn!("Catalogue load failed: {}", e);
            let message = match code {
                ErrorCode::InitError => "Failed to initialize the animal catalogue",
                _ => "Failed to load animals",
            };
            tx.send(Action::SetError(Some(
                AppError::new(code, message).with_details(e.to_string()),
            )))
        }
    };

    if outcome.is_err() {
        debug!("Load finished after shutdown: receiver dropped");
    }
}

/// Looks up a single record. A source failure is `FETCH_ERROR`, an unknown
/// id is `NOT_FOUND`.
pub async fn fetch_animal(source: &dyn CatalogueSource, id: &str) -> Result<AnimalRecord, AppError> {
    match source.get(id).await {
        Ok(Some(animal)) => Ok(animal),
        Ok(None) => Err(AppError::not_found(id)),
        Err(e) => Err(AppError::new(ErrorCode::FetchError, format!("Failed to fetch animal {id}"))
            .with_details(e.to_string())),
    }
}

/// Resolves `id` and reports it as `SetCurrentAnimal`, or as `SetError`
/// carrying the `NOT_FOUND` / `FETCH_ERROR` from [`fetch_animal`].
pub async fn resolve_animal(source: &dyn CatalogueSource, id: String, tx: Sender<Action>) {
    let action = match fetch_animal(source, &id).await {
        Ok(animal) => {
            debug!("Resolved animal {} ({})", animal.id, animal.name);
            Action::SetCurrentAnimal(Some(animal.id))
        }
        Err(e) => {
            warn!("Requested animal not available: {}", e);
            Action::SetError(Some(e))
        }
    };
    if tx.send(action).is_err() {
        debug!("Animal lookup finished after shutdown: receiver dropped");
    }
}
