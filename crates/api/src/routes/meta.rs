//! Route definitions for form reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET /meta -> reference data for the form layer
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/meta", get(meta::get_meta))
}
