//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use lienguard_core::{CalculationResult, CoreError};
use lienguard_db::repositories::SavedProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Saves a calculation result as a project. An id is assigned on first
/// save and reused on re-saves of the same result.
pub async fn save(
    State(state): State<AppState>,
    Json(result): Json<CalculationResult>,
) -> AppResult<(StatusCode, Json<DataResponse<CalculationResult>>)> {
    let saved = SavedProjectRepo::save(&state.pool, &result).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CalculationResult>>>> {
    let projects = SavedProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<CalculationResult>>> {
    let project = SavedProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let deleted = SavedProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        }))
    }
}
