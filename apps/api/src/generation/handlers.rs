//! Axum route handlers for the JSON Ideas API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{DIFFICULTIES, INDUSTRIES, PROJECT_TYPES, TEMPLATES};
use crate::errors::AppError;
use crate::generation::generator::{generate_batch, IdeaBatch};
use crate::generation::request::IdeaRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub industries: &'static [&'static str],
    pub project_types: &'static [&'static str],
    pub difficulties: &'static [&'static str],
    pub templates: &'static [&'static str],
    pub default_results: usize,
    pub max_results: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ideas
///
/// Generates a batch of ideas for the given selection. Missing or null fields
/// fall back to defaults. A malformed body or a bad `num_results` is a 400
/// validation error.
pub async fn handle_generate_ideas(
    State(state): State<AppState>,
    payload: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<Json<IdeaBatch>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected ideas request body: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    })?;

    let n = request
        .result_count(state.config.default_results, state.config.max_results)
        .inspect_err(|e| warn!("Rejected num_results={:?}: {e}", request.num_results))?;

    let batch = generate_batch(request.selection(), n);
    info!(
        "Generated batch {} with {} idea(s) for {:?}",
        batch.batch_id,
        batch.ideas.len(),
        batch.selection
    );

    Ok(Json(batch))
}

/// GET /api/v1/options
///
/// Returns the option lists the page offers, for clients building their own form.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        industries: INDUSTRIES,
        project_types: PROJECT_TYPES,
        difficulties: DIFFICULTIES,
        templates: TEMPLATES,
        default_results: state.config.default_results,
        max_results: state.config.max_results,
    })
}
