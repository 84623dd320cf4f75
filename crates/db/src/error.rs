#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A stored payload could not be produced from a result. Read-side
    /// payload corruption is logged and skipped instead of surfacing here.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
