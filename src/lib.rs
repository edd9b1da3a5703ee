//! Liberation - RPG library inventory tracker
//!
//! A REST JSON API for tracking the inventory of a tabletop-RPG library:
//! users, rule systems, catalog definitions (book titles) and physical
//! copies. Every operation is a direct pass-through from a route to one
//! typed CRUD repository call.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
