//! View Pages
//!
//! Every path outside `/api/v1` lands here and renders whatever
//! [`Route::resolve`] picks for it, with 404 for Not Found.
//!
//! The weather view is mounted fresh per request and only rendered once its
//! fetch has settled, so the loading state is never served.

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::api::layout::document;
use crate::api::state::AppState;
use crate::router::Route;
use crate::views::render_settled;

/// Router fallback for page paths
pub async fn page(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Html<String>) {
    let route = Route::resolve(uri.path());
    tracing::debug!(%route, "Rendering {}", uri.path());

    let page = render_settled(route, &state.views).await;
    let status = match route {
        Route::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    (status, Html(document(route.label(), &page)))
}
