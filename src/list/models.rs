//! Shopping List Domain Models
//!
//! This module contains all data structures related to the shopping-list
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Domain Models
// =============================================================================

/// A single row on the shopping list.
///
/// Quantity is a free-form string ("2", "500 g", ...) and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEntry {
    /// Name of the item to buy
    pub item: String,

    /// Quantity of this item (free-form, defaults to empty)
    #[serde(default)]
    pub quantity: String,

    /// Category the item is shelved under (defaults to empty)
    #[serde(default)]
    pub category: String,
}

/// An item kept on the recommended list across resets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendedItem {
    /// Name of the item
    pub item: String,

    /// Category the item is shelved under (defaults to empty)
    #[serde(default)]
    pub category: String,
}

// =============================================================================
// Request / Response Payloads
// =============================================================================

/// Body of `GET`/`POST /api/list` and of the PDF export request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPayload {
    /// The full shopping list
    pub list: Vec<ListEntry>,
}

/// Body of `GET`/`POST /api/recommended`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendedPayload {
    /// The recommended items
    pub items: Vec<RecommendedItem>,
}

/// Response of `POST /api/reset`: the (now empty) list plus the merged
/// recommended items.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    /// Always empty after a reset
    pub list: Vec<ListEntry>,

    /// Recommended items including everything carried over from the list
    pub items: Vec<RecommendedItem>,
}

impl ListEntry {
    /// Convenience constructor used by tests and helpers.
    pub fn new(
        item: impl Into<String>,
        quantity: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
            category: category.into(),
        }
    }
}

impl RecommendedItem {
    pub fn new(item: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            category: category.into(),
        }
    }
}
