//! Route definitions for the deadline calculation engine.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::calculations;
use crate::state::AppState;

/// Routes mounted at `/calculations`.
///
/// ```text
/// POST   /            -> calculate
/// POST   /validate    -> validate
/// GET    /current     -> get_current
/// PUT    /current     -> put_current
/// DELETE /current     -> delete_current
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(calculations::calculate_deadlines))
        .route("/validate", post(calculations::validate))
        .route(
            "/current",
            get(calculations::get_current)
                .put(calculations::put_current)
                .delete(calculations::delete_current),
        )
}
