//! Handlers for the calculation endpoints.
//!
//! These delegate to the pure functions in `lienguard_core`; the only
//! state they touch is the current-calculation slot.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use lienguard_core::{calculate, validation, CalculationResult, ProjectFacts};
use lienguard_db::repositories::CurrentCalculationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Validation outcome payload for `POST /calculations/validate`.
#[derive(Debug, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// POST /api/v1/calculations
///
/// Validates the facts and, if clean, runs the deadline and remedy
/// engines. The result is returned unsaved (no id); saving it is a
/// separate, explicit step via `POST /projects`.
pub async fn calculate_deadlines(
    Json(facts): Json<ProjectFacts>,
) -> AppResult<Json<DataResponse<CalculationResult>>> {
    let errors = validation::validate(&facts);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let result = calculate(&facts)?;
    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/calculations/validate
///
/// Reports the full error list without blocking; the form layer decides
/// whether to let submission proceed.
pub async fn validate(
    Json(facts): Json<ProjectFacts>,
) -> Json<DataResponse<ValidationOutcome>> {
    let errors = validation::validate(&facts);
    Json(DataResponse {
        data: ValidationOutcome {
            valid: errors.is_empty(),
            errors,
        },
    })
}

/// GET /api/v1/calculations/current
pub async fn get_current(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<CalculationResult>>>> {
    let current = CurrentCalculationRepo::load(&state.pool).await?;
    Ok(Json(DataResponse { data: current }))
}

/// PUT /api/v1/calculations/current
///
/// Stores the snapshot exactly as submitted; day counts are not refreshed.
pub async fn put_current(
    State(state): State<AppState>,
    Json(result): Json<CalculationResult>,
) -> AppResult<StatusCode> {
    CurrentCalculationRepo::save(&state.pool, &result).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/calculations/current
pub async fn delete_current(State(state): State<AppState>) -> AppResult<StatusCode> {
    CurrentCalculationRepo::clear(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
