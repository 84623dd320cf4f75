//! Input validation for project facts.
//!
//! Every check runs and every failure is collected, so the form layer can
//! show the full list at once. An empty list means the facts are ready for
//! the deadline engine.

use chrono::{NaiveDate, Utc};

use crate::facts::ProjectFacts;

/// Validate facts against the real current date.
pub fn validate(facts: &ProjectFacts) -> Vec<String> {
    validate_as_of(facts, Utc::now().date_naive())
}

/// Validate facts against an explicit evaluation date.
///
/// Message order is stable: required fields first, then date consistency,
/// then future-date checks, then the role/party pairing.
pub fn validate_as_of(facts: &ProjectFacts, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if facts.project_name.trim().is_empty() {
        errors.push("Project name is required".to_string());
    }

    if facts.state.is_none() {
        errors.push("Project state is required".to_string());
    }

    if facts.role.is_none() {
        errors.push("Your role is required".to_string());
    }

    if facts.contract_with.is_none() {
        errors.push("Contract party is required".to_string());
    }

    if facts.project_type.is_none() {
        errors.push("Project type is required".to_string());
    }

    if facts.first_furnishing_date.is_none() {
        errors.push("Date of notice recorded is required".to_string());
    }

    if facts.last_furnishing_date.is_none() {
        errors.push("Date of last performance is required".to_string());
    }

    if let (Some(first), Some(last)) = (facts.first_furnishing_date, facts.last_furnishing_date) {
        if first > last {
            errors.push("Date of last performance must be after date of notice recorded".to_string());
        }
    }

    if let Some(first) = facts.first_furnishing_date {
        if first > today {
            errors.push("Date of notice recorded cannot be in the future".to_string());
        }
    }

    if let Some(last) = facts.last_furnishing_date {
        if last > today {
            errors.push("Date of last performance cannot be in the future".to_string());
        }
    }

    // The form only offers legal pairings, so this fires only on requests
    // that bypassed it.
    if let (Some(role), Some(party)) = (facts.role, facts.contract_with) {
        if !role.valid_contract_parties().contains(&party) {
            errors.push("Contract party is not valid for your role".to_string());
        }
    }

    errors
}
