//! Remedy plan generation.
//!
//! Turns the computed deadlines into a sequential action plan: send notice,
//! prepare the claim paperwork ahead of the filing deadline, then file and
//! (if still unpaid) sue. Steps branch on project type, not state; the
//! state-specific dates already live in the deadlines.

use serde::{Deserialize, Serialize};

use crate::dates::{format_month_day_year, sub_days};
use crate::deadlines::{DeadlineKind, DeadlineResult, DeadlineType};
use crate::facts::ProjectFacts;
use crate::jurisdiction::ProjectType;
use crate::roles::Role;

/// Days before the filing deadline by which the paperwork should be ready.
pub const PREPARE_WINDOW_DAYS: u64 = 10;

/// One step of the remedy plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyStep {
    /// 1-based position in the plan. Execution order, not a priority score.
    pub order: u32,
    pub title: String,
    pub description: String,
}

/// Derive the remedy plan from facts and their computed deadlines.
///
/// Returns an empty plan if no primary deadline is present; the deadline
/// engine always produces one, so this only guards a caller handing in a
/// foreign list.
pub fn generate_remedies(facts: &ProjectFacts, deadlines: &[DeadlineResult]) -> Vec<RemedyStep> {
    let Some(primary) = deadlines
        .iter()
        .find(|d| d.deadline_type == DeadlineType::Primary)
    else {
        return Vec::new();
    };

    let prepare_by = format_month_day_year(sub_days(primary.date, PREPARE_WINDOW_DAYS));
    let file_by = format_month_day_year(primary.date);
    let suit_by = deadlines
        .iter()
        .find(|d| d.kind == DeadlineKind::Lawsuit)
        .map(|d| format_month_day_year(d.date));

    let needs_notice = facts.role != Some(Role::GeneralContractor);
    let mut steps: Vec<(String, String)> = Vec::with_capacity(3);

    match facts.project_type.unwrap_or(ProjectType::Private) {
        ProjectType::Federal => {
            steps.push((
                "Send Miller Act Notice".to_string(),
                match facts.state {
                    Some(state) => format!(
                        "Based on your {state} federal project role, you must send the Miller Act Notice to the general contractor within 90 days of last furnishing. Send notice immediately if not already done."
                    ),
                    None => "Based on your federal project role, you must send the Miller Act Notice to the general contractor within 90 days of last furnishing. Send notice immediately if not already done.".to_string(),
                },
            ));
            steps.push((
                "Prepare Bond Claim".to_string(),
                format!(
                    "If payment is not received by {prepare_by}, prepare your Miller Act bond claim form with all required documentation."
                ),
            ));
            steps.push((
                "File Bond Claim & Suit".to_string(),
                filing_step("File your bond claim", &file_by, suit_by.as_deref()),
            ));
        }
        ProjectType::Public => {
            if needs_notice {
                steps.push((
                    "Send Preliminary Notice".to_string(),
                    "Send preliminary notice to the public entity and general contractor immediately. This is required in most states for public projects.".to_string(),
                ));
            }
            steps.push((
                "Prepare Payment Bond Claim".to_string(),
                format!(
                    "If payment is not received by {prepare_by}, prepare your payment bond claim with all required documentation."
                ),
            ));
            steps.push((
                "File Bond Claim & Suit".to_string(),
                filing_step("File your payment bond claim", &file_by, suit_by.as_deref()),
            ));
        }
        ProjectType::Private => {
            if needs_notice {
                steps.push((
                    "Send Preliminary Notice".to_string(),
                    match facts.state {
                        Some(state) => format!(
                            "In {state}, send preliminary notice to the property owner and general contractor immediately if not already sent. This preserves your lien rights."
                        ),
                        None => "Send preliminary notice to the property owner and general contractor immediately if not already sent. This preserves your lien rights.".to_string(),
                    },
                ));
            }
            steps.push((
                "Prepare Lien Affidavit".to_string(),
                format!(
                    "If payment is not received by {prepare_by}, prepare your mechanic's lien affidavit with accurate amounts and dates."
                ),
            ));
            steps.push((
                "File Lien & Suit".to_string(),
                filing_step("File your mechanic's lien", &file_by, suit_by.as_deref()),
            ));
        }
    }

    steps
        .into_iter()
        .enumerate()
        .map(|(i, (title, description))| RemedyStep {
            order: (i + 1) as u32,
            title,
            description,
        })
        .collect()
}

/// Compose the final filing step, with the suit sentence only when a suit
/// deadline exists.
fn filing_step(action: &str, file_by: &str, suit_by: Option<&str>) -> String {
    match suit_by {
        Some(suit_by) => format!(
            "{action} by {file_by}. If still unpaid, you must file suit to enforce by {suit_by}."
        ),
        None => format!("{action} by {file_by}."),
    }
}
