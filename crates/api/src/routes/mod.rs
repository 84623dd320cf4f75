pub mod calculations;
pub mod health;
pub mod meta;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /calculations                    run the engine (POST)
/// /calculations/validate           validate facts (POST)
/// /calculations/current            session slot (GET, PUT, DELETE)
///
/// /meta                            form reference data (GET)
///
/// /projects                        list, save
/// /projects/{id}                   get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/calculations", calculations::router())
        .nest("/projects", projects::router())
        .merge(meta::router())
}
