//! The idea form page: GET renders it empty, POST renders it with results.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{info, warn};

use crate::generation::generator::{generate_batch, IdeaSelection};
use crate::generation::request::{parse_result_count, IdeaForm};
use crate::render::{render_page, PageContext};
use crate::state::AppState;

/// GET /
pub async fn handle_home_page(State(state): State<AppState>) -> Html<String> {
    let selection = IdeaSelection::default();
    Html(render_page(&PageContext {
        selection: &selection,
        num_results: state.config.default_results.to_string(),
        max_results: state.config.max_results,
        ideas: &[],
        error: None,
        submitted: false,
    }))
}

/// POST /
///
/// A bad result count re-renders the form with the error and a 400 status,
/// keeping the user's selection.
pub async fn handle_home_submit(
    State(state): State<AppState>,
    Form(form): Form<IdeaForm>,
) -> Response {
    let selection = form.selection();
    let num_results = form
        .num_results
        .clone()
        .unwrap_or_else(|| state.config.default_results.to_string());

    let n = match parse_result_count(
        form.num_results.as_deref(),
        state.config.default_results,
        state.config.max_results,
    ) {
        Ok(n) => n,
        Err(e) => {
            warn!("Rejected form submission: {e}");
            let page = render_page(&PageContext {
                selection: &selection,
                num_results,
                max_results: state.config.max_results,
                ideas: &[],
                error: Some(e.user_message()),
                submitted: true,
            });
            return (e.status(), Html(page)).into_response();
        }
    };

    let batch = generate_batch(selection, n);
    info!(
        "Generated batch {} with {} idea(s) for {:?}",
        batch.batch_id,
        batch.ideas.len(),
        batch.selection
    );

    let page = render_page(&PageContext {
        selection: &batch.selection,
        num_results,
        max_results: state.config.max_results,
        ideas: &batch.ideas,
        error: None,
        submitted: true,
    });
    (StatusCode::OK, Html(page)).into_response()
}
