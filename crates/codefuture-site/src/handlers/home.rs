//! Landing Page Handler

use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::templates::LandingTemplate;

/// Handler for the landing page. Also the fallback for unmatched paths.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    LandingTemplate::new(state.content())
}
