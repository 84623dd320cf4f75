//! Saved project row model.

use lienguard_core::types::Timestamp;
use sqlx::FromRow;

/// A row from the `saved_projects` table.
///
/// `data` holds the full `CalculationResult` as JSON; `project_name` and
/// `calculated_at` are projections of it so listing does not require
/// parsing every payload.
#[derive(Debug, Clone, FromRow)]
pub struct SavedProjectRow {
    pub id: String,
    pub project_name: String,
    pub calculated_at: Timestamp,
    pub data: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
