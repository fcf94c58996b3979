//! # Core Application Logic
//!
//! This module contains the showcase's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter engine        │
//!                    │  • slider controller    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  storage   │      │ catalogue  │
//!     │  Adapter   │      │ (per key,  │      │  source    │
//!     │ (ratatui)  │      │   JSON)    │      │  (async)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`persist`]: Runs the storage writes an `Effect` asks for
//! - [`filter`]: Search, filter, similar-animal and suggestion queries
//! - [`slider`]: Autoplaying carousel state machine
//! - [`storage`]: Durable key-value storage

pub mod action;
pub mod animal;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod loader;
pub mod persist;
pub mod preferences;
pub mod recent;
pub mod slider;
pub mod state;
pub mod stats;
pub mod storage;
pub mod timer;
