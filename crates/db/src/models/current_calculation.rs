//! Current-calculation slot row model.

use lienguard_core::types::Timestamp;
use sqlx::FromRow;

/// The single row of the `current_calculation` table (slot is always 1).
#[derive(Debug, Clone, FromRow)]
pub struct CurrentCalculationRow {
    pub slot: i64,
    pub data: String,
    pub updated_at: Timestamp,
}
