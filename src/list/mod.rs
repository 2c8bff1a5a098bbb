//! Shopping List Domain Module
//!
//! This module contains all shopping-list business logic, including:
//! - Domain models (ListEntry, RecommendedItem, payloads)
//! - Pure list logic (cleaning, dedupe, reset merge)
//! - CSV-backed persistence
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
