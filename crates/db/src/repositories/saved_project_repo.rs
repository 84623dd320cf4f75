//! Repository for the `saved_projects` table.

use lienguard_core::CalculationResult;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::saved_project::SavedProjectRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, calculated_at, data, created_at, updated_at";

/// Persists calculation results the user saved as projects.
pub struct SavedProjectRepo;

impl SavedProjectRepo {
    /// Save a calculation result as a project, returning the stored result.
    ///
    /// A result without an id gets a fresh one here, exactly once; saving
    /// again with that id updates the existing row in place.
    pub async fn save(
        pool: &DbPool,
        result: &CalculationResult,
    ) -> Result<CalculationResult, DbError> {
        let mut stored = result.clone();
        let id = *stored.id.get_or_insert_with(Uuid::new_v4);

        let data = serde_json::to_string(&stored)?;

        sqlx::query(
            "INSERT INTO saved_projects (id, project_name, calculated_at, data)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (id) DO UPDATE SET
                project_name = excluded.project_name,
                calculated_at = excluded.calculated_at,
                data = excluded.data,
                updated_at = datetime('now')",
        )
        .bind(id.to_string())
        .bind(&stored.project_details.project_name)
        .bind(stored.calculated_at)
        .bind(&data)
        .execute(pool)
        .await?;

        Ok(stored)
    }

    /// Find a saved project by id.
    ///
    /// A row whose payload no longer parses reads as absent; destroying
    /// data on a read path is worse than hiding it.
    pub async fn find_by_id(pool: &DbPool, id: Uuid) -> Result<Option<CalculationResult>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM saved_projects WHERE id = ?1");
        let row = sqlx::query_as::<_, SavedProjectRow>(&query)
            .bind(id.to_string())
            .fetch_optional(pool)
            .await?;

        Ok(row.and_then(|r| parse_payload(&r)))
    }

    /// List all saved projects, most recently calculated first. Corrupt
    /// rows are skipped with a warning.
    pub async fn list(pool: &DbPool) -> Result<Vec<CalculationResult>, DbError> {
        let query =
            format!("SELECT {COLUMNS} FROM saved_projects ORDER BY calculated_at DESC");
        let rows = sqlx::query_as::<_, SavedProjectRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().filter_map(parse_payload).collect())
    }

    /// Delete a saved project by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM saved_projects WHERE id = ?1")
            .bind(id.to_string())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn parse_payload(row: &SavedProjectRow) -> Option<CalculationResult> {
    match serde_json::from_str(&row.data) {
        Ok(result) => Some(result),
        Err(err) => {
            tracing::warn!(id = %row.id, error = %err, "Skipping saved project with unreadable payload");
            None
        }
    }
}
