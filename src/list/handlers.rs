//! REST API handlers for shopping-list operations
//!
//! This module implements the HTTP endpoints for loading and saving both
//! lists, the reset carryover, and the PDF export.

use super::{helpers, models::*, state::SharedState};
use crate::error::ApiError;
use crate::pdf;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

/// Creates routes for list-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/list", get(get_list).post(save_list))
        .route("/recommended", get(get_recommended).post(save_recommended))
        .route("/reset", post(reset))
        .route("/export/pdf", post(export_pdf))
}

/// Endpoint: GET /api/list
/// Loads the persisted shopping list.
async fn get_list(State(state): State<SharedState>) -> Result<Json<ListPayload>, ApiError> {
    let list = state
        .store
        .load_list()
        .await
        .map_err(|e| ApiError::new("Failed to read list", e))?;

    Ok(Json(ListPayload { list }))
}

/// Endpoint: POST /api/list
/// Overwrites the persisted shopping list with the posted entries,
/// echoing back the cleaned rows.
async fn save_list(
    State(state): State<SharedState>,
    Json(payload): Json<ListPayload>,
) -> Result<Json<ListPayload>, ApiError> {
    let list = helpers::clean_entries(payload.list);

    state
        .store
        .save_list(&list)
        .await
        .map_err(|e| ApiError::new("Failed to save list", e))?;

    Ok(Json(ListPayload { list }))
}

/// Endpoint: GET /api/recommended
/// Loads the recommended items, deduped case-insensitively and sorted.
async fn get_recommended(
    State(state): State<SharedState>,
) -> Result<Json<RecommendedPayload>, ApiError> {
    let stored = state
        .store
        .load_recommended()
        .await
        .map_err(|e| ApiError::new("Failed to read recommended", e))?;

    let mut items = helpers::dedupe_recommended(stored);
    helpers::sort_recommended(&mut items);

    Ok(Json(RecommendedPayload { items }))
}

/// Endpoint: POST /api/recommended
/// Overwrites the recommended list with the posted items.
async fn save_recommended(
    State(state): State<SharedState>,
    Json(payload): Json<RecommendedPayload>,
) -> Result<Json<RecommendedPayload>, ApiError> {
    let items = helpers::clean_recommended(payload.items);

    state
        .store
        .save_recommended(&items)
        .await
        .map_err(|e| ApiError::new("Failed to save recommended", e))?;

    Ok(Json(RecommendedPayload { items }))
}

/// Endpoint: POST /api/reset
/// Folds every current list entry into the recommended list (existing
/// recommended items win on a name collision), then clears the list.
async fn reset(State(state): State<SharedState>) -> Result<Json<ResetResponse>, ApiError> {
    let wrap = |e: crate::error::StoreError| ApiError::new("Failed to reset", e);

    let entries = state.store.load_list().await.map_err(wrap)?;
    let existing = state.store.load_recommended().await.map_err(wrap)?;

    let items = helpers::merge_into_recommended(existing, &entries);

    state.store.save_recommended(&items).await.map_err(wrap)?;
    state.store.clear_list().await.map_err(wrap)?;

    if !entries.is_empty() {
        info!(
            "reset moved {} entries to recommended: {}",
            entries.len(),
            helpers::format_entry_summary(&entries)
        );
    }

    Ok(Json(ResetResponse {
        list: Vec::new(),
        items,
    }))
}

/// Endpoint: POST /api/export/pdf
/// Renders the posted list as a printable PDF.
async fn export_pdf(Json(payload): Json<ListPayload>) -> Result<impl IntoResponse, ApiError> {
    let bytes = pdf::render_shopping_list(&payload.list)
        .map_err(|e| ApiError::new("Failed to generate PDF", e))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"shopping-list.pdf\"",
            ),
        ],
        bytes,
    ))
}
