//! Curriculum Page Handler

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::templates::CurriculumTemplate;

/// Handler for the per-track curriculum page.
///
/// An unknown id renders the default track rather than a 404.
pub async fn curriculum(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let track = state.content().curriculum_or_default(Some(&id));
    if track.id != id {
        tracing::debug!(requested = %id, resolved = track.id, "unknown track, using default");
    }

    CurriculumTemplate::new(track, state.content())
}
