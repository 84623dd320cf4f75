//! Repository for the single-slot `current_calculation` table.
//!
//! Holds the calculation currently on the user's screen so a reload can
//! restore it. At most one row ever exists.

use lienguard_core::CalculationResult;

use crate::error::DbError;
use crate::models::current_calculation::CurrentCalculationRow;
use crate::DbPool;

pub struct CurrentCalculationRepo;

impl CurrentCalculationRepo {
    /// Store the given result in the slot, replacing whatever was there.
    pub async fn save(pool: &DbPool, result: &CalculationResult) -> Result<(), DbError> {
        let data = serde_json::to_string(result)?;

        sqlx::query(
            "INSERT INTO current_calculation (slot, data)
             VALUES (1, ?1)
             ON CONFLICT (slot) DO UPDATE SET
                data = excluded.data,
                updated_at = datetime('now')",
        )
        .bind(&data)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Load the slot contents, if any. An unreadable payload reads as empty.
    pub async fn load(pool: &DbPool) -> Result<Option<CalculationResult>, DbError> {
        let row = sqlx::query_as::<_, CurrentCalculationRow>(
            "SELECT slot, data, updated_at FROM current_calculation WHERE slot = 1",
        )
        .fetch_optional(pool)
        .await?;

        Ok(row.and_then(|r| match serde_json::from_str(&r.data) {
            Ok(result) => Some(result),
            Err(err) => {
                tracing::warn!(error = %err, "Current calculation payload is unreadable; treating as empty");
                None
            }
        }))
    }

    /// Empty the slot. Returns `true` if there was something to clear.
    pub async fn clear(pool: &DbPool) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM current_calculation WHERE slot = 1")
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
