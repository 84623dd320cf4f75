//! Calculation entry points and the aggregate result.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deadlines::{compute_deadlines, DeadlineResult};
use crate::error::CoreError;
use crate::facts::ProjectFacts;
use crate::remedies::{generate_remedies, RemedyStep};
use crate::types::Timestamp;

/// The full outcome of one calculation: the facts it was computed from,
/// the dated obligations, and the action plan.
///
/// `id` stays `None` until the user saves the result as a project; the
/// store assigns it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub project_details: ProjectFacts,
    pub deadlines: Vec<DeadlineResult>,
    pub remedies: Vec<RemedyStep>,
    pub calculated_at: Timestamp,
}

/// Calculate deadlines and remedies, evaluating day counts against the
/// real current date.
pub fn calculate(facts: &ProjectFacts) -> Result<CalculationResult, CoreError> {
    calculate_as_of(facts, Utc::now().date_naive())
}

/// Calculate against an explicit evaluation date.
///
/// Fully deterministic apart from the `calculated_at` stamp: fixed facts
/// and a fixed `today` always produce the same deadlines and remedies.
pub fn calculate_as_of(
    facts: &ProjectFacts,
    today: NaiveDate,
) -> Result<CalculationResult, CoreError> {
    let deadlines = compute_deadlines(facts, today)?;
    let remedies = generate_remedies(facts, &deadlines);

    Ok(CalculationResult {
        id: None,
        project_details: facts.clone(),
        deadlines,
        remedies,
        calculated_at: Utc::now(),
    })
}
