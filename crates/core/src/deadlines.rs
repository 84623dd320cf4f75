//! Statutory deadline engine.
//!
//! Maps project facts to the dated obligations a claimant must meet. The
//! jurisdiction rules live in a static table keyed by project type and state,
//! so adding a state is a data change; the engine itself only does lookup,
//! date arithmetic, and assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{add_days, add_months, days_remaining};
use crate::error::CoreError;
use crate::facts::ProjectFacts;
use crate::jurisdiction::{ProjectType, UsState};
use crate::roles::Role;

// ---------------------------------------------------------------------------
// Deadline types
// ---------------------------------------------------------------------------

/// Whether a deadline is the dispositive filing for the claim or an
/// ancillary obligation (notice, follow-on suit window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineType {
    Primary,
    Secondary,
}

/// What kind of obligation a deadline represents.
///
/// Consumers match on this tag rather than on the display title, so titles
/// can be reworded without breaking the remedy engine or the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineKind {
    /// The lien or bond-claim filing itself.
    Filing,
    /// Preliminary notice preserving the right to file.
    Notice,
    /// Suit-to-enforce window.
    Lawsuit,
}

impl DeadlineKind {
    /// Sort key for the results panel: suit window first, then notice,
    /// then the filing deadline.
    pub fn display_weight(self) -> u8 {
        match self {
            DeadlineKind::Lawsuit => 1,
            DeadlineKind::Notice => 2,
            DeadlineKind::Filing => 3,
        }
    }
}

/// A single dated obligation produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineResult {
    pub title: String,
    pub date: NaiveDate,
    /// Whole days from the evaluation date until `date`; negative means
    /// overdue, zero means due today. A snapshot, not a live value.
    pub days_remaining: i64,
    pub requirement: String,
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,
    pub kind: DeadlineKind,
}

// ---------------------------------------------------------------------------
// Jurisdiction rule table
// ---------------------------------------------------------------------------

/// A calendar offset used in a deadline formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOffset {
    Days(u64),
    Months(u32),
}

impl DateOffset {
    pub fn apply(self, date: NaiveDate) -> NaiveDate {
        match self {
            DateOffset::Days(n) => add_days(date, n),
            DateOffset::Months(n) => add_months(date, n),
        }
    }
}

/// Which date the suit-to-enforce formula counts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitAnchor {
    LastFurnishing,
    FilingDeadline,
}

/// One cell of the jurisdiction rule matrix.
///
/// `state: None` marks the fallback row for a project type; unlisted states
/// degrade to it rather than failing.
#[derive(Debug)]
pub struct JurisdictionRule {
    pub project_type: ProjectType,
    pub state: Option<UsState>,
    /// Claimants below the general contractor must send preliminary notice.
    pub notice_required: bool,
    pub filing_title: &'static str,
    pub filing_offset: DateOffset,
    pub filing_requirement: &'static str,
    pub suit_anchor: SuitAnchor,
    pub suit_offset: DateOffset,
    pub suit_requirement: &'static str,
}

/// The full rule matrix. Exact-match rows precede the fallback row for the
/// same project type; [`lookup_rule`] relies on that order.
pub static JURISDICTION_RULES: [JurisdictionRule; 8] = [
    JurisdictionRule {
        project_type: ProjectType::Federal,
        state: None,
        notice_required: false,
        filing_title: "Miller Act Bond Claim Filing",
        filing_offset: DateOffset::Days(90),
        filing_requirement: "90 days from last furnishing to file Miller Act bond claim.",
        suit_anchor: SuitAnchor::LastFurnishing,
        suit_offset: DateOffset::Months(12),
        suit_requirement: "1 year from last furnishing to file suit to enforce your bond claim.",
    },
    JurisdictionRule {
        project_type: ProjectType::Public,
        state: Some(UsState::Texas),
        notice_required: true,
        filing_title: "Payment Bond Claim Filing",
        filing_offset: DateOffset::Months(2),
        filing_requirement: "2nd month after each month in which labor or materials are provided.",
        suit_anchor: SuitAnchor::LastFurnishing,
        suit_offset: DateOffset::Months(12),
        suit_requirement: "1 year from last furnishing to file suit to enforce your claim.",
    },
    JurisdictionRule {
        project_type: ProjectType::Public,
        state: Some(UsState::California),
        notice_required: true,
        filing_title: "Payment Bond Claim Filing",
        filing_offset: DateOffset::Days(90),
        filing_requirement: "90 days from project completion or cessation.",
        suit_anchor: SuitAnchor::FilingDeadline,
        suit_offset: DateOffset::Months(6),
        suit_requirement: "6 months to file suit after recording claim.",
    },
    JurisdictionRule {
        project_type: ProjectType::Public,
        state: None,
        notice_required: true,
        filing_title: "Payment Bond Claim Filing",
        filing_offset: DateOffset::Days(90),
        filing_requirement:
            "90 days from last furnishing (typical). Varies by state - consult local statutes.",
        suit_anchor: SuitAnchor::LastFurnishing,
        suit_offset: DateOffset::Months(12),
        suit_requirement: "1 year from last furnishing to file suit.",
    },
    JurisdictionRule {
        project_type: ProjectType::Private,
        state: Some(UsState::Texas),
        notice_required: true,
        filing_title: "Mechanic's Lien Filing",
        filing_offset: DateOffset::Months(4),
        filing_requirement: "4th month after each month in which labor or materials are provided.",
        suit_anchor: SuitAnchor::FilingDeadline,
        suit_offset: DateOffset::Months(12),
        suit_requirement: "1 year from filing to file suit to enforce your lien.",
    },
    JurisdictionRule {
        project_type: ProjectType::Private,
        state: Some(UsState::California),
        notice_required: true,
        filing_title: "Mechanic's Lien Filing",
        filing_offset: DateOffset::Days(90),
        filing_requirement: "90 days from project completion or cessation.",
        suit_anchor: SuitAnchor::FilingDeadline,
        suit_offset: DateOffset::Days(90),
        suit_requirement: "90 days to file suit after recording claim.",
    },
    JurisdictionRule {
        project_type: ProjectType::Private,
        state: Some(UsState::Florida),
        notice_required: true,
        filing_title: "Mechanic's Lien Filing",
        filing_offset: DateOffset::Days(90),
        filing_requirement: "90 days from last furnishing or completion.",
        suit_anchor: SuitAnchor::FilingDeadline,
        suit_offset: DateOffset::Months(12),
        suit_requirement: "1 year from recording to file suit to enforce your lien.",
    },
    JurisdictionRule {
        project_type: ProjectType::Private,
        state: None,
        notice_required: true,
        filing_title: "Mechanic's Lien Filing",
        filing_offset: DateOffset::Days(90),
        filing_requirement: "90 days from last furnishing (typical). Varies by state.",
        suit_anchor: SuitAnchor::FilingDeadline,
        suit_offset: DateOffset::Months(12),
        suit_requirement: "1 year from filing to enforce. Varies by state.",
    },
];

/// Days after last furnishing within which preliminary notice must go out.
pub const NOTICE_WINDOW_DAYS: u64 = 30;

/// Find the rule cell for a project type and state.
///
/// An absent project type takes the Private branch; a state without its own
/// row falls back to the project type's generic row.
pub fn lookup_rule(
    project_type: Option<ProjectType>,
    state: Option<UsState>,
) -> &'static JurisdictionRule {
    let project_type = project_type.unwrap_or(ProjectType::Private);

    JURISDICTION_RULES
        .iter()
        .find(|r| r.project_type == project_type && r.state.is_some() && r.state == state)
        .or_else(|| {
            JURISDICTION_RULES
                .iter()
                .find(|r| r.project_type == project_type && r.state.is_none())
        })
        .unwrap_or(&JURISDICTION_RULES[JURISDICTION_RULES.len() - 1])
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute the ordered deadlines for a project, evaluated as of `today`.
///
/// The last furnishing date anchors every formula; its absence is a contract
/// violation by the caller, not a user-facing validation failure.
pub fn compute_deadlines(
    facts: &ProjectFacts,
    today: NaiveDate,
) -> Result<Vec<DeadlineResult>, CoreError> {
    let last = facts
        .last_furnishing_date
        .ok_or_else(|| CoreError::InvalidInput("Last furnishing date is required".to_string()))?;

    let rule = lookup_rule(facts.project_type, facts.state);
    let project_type = facts.project_type.unwrap_or(ProjectType::Private);

    let mut deadlines = Vec::with_capacity(3);

    // General contractors deal with the owner directly; everyone further
    // down the chain has to announce themselves first.
    if rule.notice_required && facts.role != Some(Role::GeneralContractor) {
        let notice_date = add_days(last, NOTICE_WINDOW_DAYS);
        deadlines.push(DeadlineResult {
            title: "Preliminary Notice".to_string(),
            date: notice_date,
            days_remaining: days_remaining(notice_date, today),
            requirement: notice_requirement(project_type, facts.state),
            deadline_type: DeadlineType::Secondary,
            kind: DeadlineKind::Notice,
        });
    }

    let filing_date = rule.filing_offset.apply(last);
    deadlines.push(DeadlineResult {
        title: rule.filing_title.to_string(),
        date: filing_date,
        days_remaining: days_remaining(filing_date, today),
        requirement: rule.filing_requirement.to_string(),
        deadline_type: DeadlineType::Primary,
        kind: DeadlineKind::Filing,
    });

    let suit_anchor = match rule.suit_anchor {
        SuitAnchor::LastFurnishing => last,
        SuitAnchor::FilingDeadline => filing_date,
    };
    let suit_date = rule.suit_offset.apply(suit_anchor);
    deadlines.push(DeadlineResult {
        title: "Lawsuit Filing Deadline".to_string(),
        date: suit_date,
        days_remaining: days_remaining(suit_date, today),
        requirement: rule.suit_requirement.to_string(),
        deadline_type: DeadlineType::Secondary,
        kind: DeadlineKind::Lawsuit,
    });

    Ok(deadlines)
}

fn notice_requirement(project_type: ProjectType, state: Option<UsState>) -> String {
    match project_type {
        ProjectType::Public => {
            "Send preliminary notice to public entity and general contractor within 30 days."
                .to_string()
        }
        _ => match state {
            Some(state) => format!(
                "Send preliminary notice to property owner and general contractor within 30 days in {state}."
            ),
            None => {
                "Send preliminary notice to property owner and general contractor within 30 days."
                    .to_string()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::UsState;
    use crate::roles::ContractParty;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn facts(
        project_type: ProjectType,
        state: Option<UsState>,
        role: Role,
        last: NaiveDate,
    ) -> ProjectFacts {
        ProjectFacts {
            project_name: "Test Project".to_string(),
            state,
            role: Some(role),
            contract_with: Some(ContractParty::GeneralContractor),
            project_type: Some(project_type),
            first_furnishing_date: Some(date(2023, 12, 1)),
            last_furnishing_date: Some(last),
            project_completion_date: None,
        }
    }

    fn find<'a>(deadlines: &'a [DeadlineResult], kind: DeadlineKind) -> &'a DeadlineResult {
        deadlines.iter().find(|d| d.kind == kind).unwrap()
    }

    // -- rule table lookup --

    #[test]
    fn every_project_type_has_a_fallback_row() {
        for pt in ProjectType::ALL {
            let rule = lookup_rule(Some(pt), Some(UsState::Wyoming));
            assert_eq!(rule.project_type, pt);
        }
    }

    #[test]
    fn exact_state_rows_win_over_fallback() {
        let rule = lookup_rule(Some(ProjectType::Private), Some(UsState::Texas));
        assert_eq!(rule.filing_offset, DateOffset::Months(4));
    }

    #[test]
    fn missing_project_type_takes_the_private_branch() {
        let rule = lookup_rule(None, Some(UsState::Texas));
        assert_eq!(rule.project_type, ProjectType::Private);
    }

    #[test]
    fn federal_has_a_single_row_and_no_notice() {
        let rule = lookup_rule(Some(ProjectType::Federal), Some(UsState::Texas));
        assert!(!rule.notice_required);
        assert_eq!(rule.filing_title, "Miller Act Bond Claim Filing");
    }

    // -- engine output shape --

    #[test]
    fn missing_last_furnishing_date_is_rejected() {
        let mut f = facts(
            ProjectType::Private,
            Some(UsState::Texas),
            Role::Subcontractor,
            date(2024, 1, 1),
        );
        f.last_furnishing_date = None;

        let err = compute_deadlines(&f, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn exactly_one_primary_for_every_rule_path() {
        let cases = [
            (ProjectType::Federal, None),
            (ProjectType::Public, Some(UsState::Texas)),
            (ProjectType::Public, Some(UsState::California)),
            (ProjectType::Public, Some(UsState::Ohio)),
            (ProjectType::Private, Some(UsState::Texas)),
            (ProjectType::Private, Some(UsState::California)),
            (ProjectType::Private, Some(UsState::Florida)),
            (ProjectType::Private, Some(UsState::Ohio)),
        ];
        for (pt, state) in cases {
            let f = facts(pt, state, Role::Subcontractor, date(2024, 1, 1));
            let deadlines = compute_deadlines(&f, date(2024, 2, 1)).unwrap();
            let primaries = deadlines
                .iter()
                .filter(|d| d.deadline_type == DeadlineType::Primary)
                .count();
            assert_eq!(primaries, 1, "{pt} / {state:?}");
            assert!(!deadlines.is_empty());
        }
    }

    #[test]
    fn general_contractor_gets_no_preliminary_notice() {
        let f = facts(
            ProjectType::Private,
            Some(UsState::Texas),
            Role::GeneralContractor,
            date(2024, 1, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 2, 1)).unwrap();
        assert!(deadlines.iter().all(|d| d.kind != DeadlineKind::Notice));
    }

    // -- scenario fixtures --

    #[test]
    fn private_texas_subcontractor_scenario() {
        let f = facts(
            ProjectType::Private,
            Some(UsState::Texas),
            Role::Subcontractor,
            date(2024, 1, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 1, 15)).unwrap();

        let notice = find(&deadlines, DeadlineKind::Notice);
        assert_eq!(notice.date, date(2024, 1, 31));
        assert_eq!(notice.deadline_type, DeadlineType::Secondary);

        let filing = find(&deadlines, DeadlineKind::Filing);
        assert_eq!(filing.title, "Mechanic's Lien Filing");
        assert_eq!(filing.date, date(2024, 5, 1));
        assert_eq!(filing.deadline_type, DeadlineType::Primary);

        let suit = find(&deadlines, DeadlineKind::Lawsuit);
        assert_eq!(suit.title, "Lawsuit Filing Deadline");
        assert_eq!(suit.date, date(2025, 5, 1));
    }

    #[test]
    fn federal_general_contractor_scenario() {
        let f = facts(
            ProjectType::Federal,
            Some(UsState::Virginia),
            Role::GeneralContractor,
            date(2024, 1, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 1, 15)).unwrap();

        assert_eq!(deadlines.len(), 2);
        let filing = find(&deadlines, DeadlineKind::Filing);
        assert_eq!(filing.title, "Miller Act Bond Claim Filing");
        assert_eq!(filing.date, date(2024, 3, 31));

        let suit = find(&deadlines, DeadlineKind::Lawsuit);
        assert_eq!(suit.date, date(2025, 1, 1));
    }

    #[test]
    fn private_california_supplier_scenario() {
        let f = facts(
            ProjectType::Private,
            Some(UsState::California),
            Role::Supplier,
            date(2024, 6, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 6, 15)).unwrap();

        let filing = find(&deadlines, DeadlineKind::Filing);
        assert_eq!(filing.date, date(2024, 8, 30));

        let suit = find(&deadlines, DeadlineKind::Lawsuit);
        assert_eq!(suit.date, add_days(filing.date, 90));
    }

    #[test]
    fn public_california_suit_counts_from_filing_deadline() {
        let f = facts(
            ProjectType::Public,
            Some(UsState::California),
            Role::Subcontractor,
            date(2024, 1, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 1, 15)).unwrap();

        let filing = find(&deadlines, DeadlineKind::Filing);
        assert_eq!(filing.date, date(2024, 3, 31));

        let suit = find(&deadlines, DeadlineKind::Lawsuit);
        assert_eq!(suit.date, add_months(filing.date, 6));
    }

    #[test]
    fn unlisted_state_uses_generic_wording() {
        let f = facts(
            ProjectType::Public,
            Some(UsState::Montana),
            Role::Supplier,
            date(2024, 1, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 1, 15)).unwrap();

        let filing = find(&deadlines, DeadlineKind::Filing);
        assert!(filing.requirement.contains("Varies by state"));
    }

    #[test]
    fn private_notice_wording_names_the_state() {
        let f = facts(
            ProjectType::Private,
            Some(UsState::Florida),
            Role::Subcontractor,
            date(2024, 1, 1),
        );
        let deadlines = compute_deadlines(&f, date(2024, 1, 15)).unwrap();

        let notice = find(&deadlines, DeadlineKind::Notice);
        assert!(notice.requirement.ends_with("in Florida."));
    }

    // -- days remaining snapshots --

    #[test]
    fn days_remaining_counts_from_the_provided_today() {
        let last = date(2024, 1, 1);
        let f = facts(
            ProjectType::Federal,
            Some(UsState::Virginia),
            Role::Subcontractor,
            last,
        );

        // Last furnishing is today: the 90-day filing window reads as 90.
        let deadlines = compute_deadlines(&f, last).unwrap();
        let filing = find(&deadlines, DeadlineKind::Filing);
        assert_eq!(filing.days_remaining, 90);

        // Evaluated after the deadline, the count goes negative.
        let deadlines = compute_deadlines(&f, date(2024, 4, 5)).unwrap();
        let filing = find(&deadlines, DeadlineKind::Filing);
        assert_eq!(filing.days_remaining, -5);
    }

    #[test]
    fn display_weight_orders_lawsuit_notice_filing() {
        assert!(DeadlineKind::Lawsuit.display_weight() < DeadlineKind::Notice.display_weight());
        assert!(DeadlineKind::Notice.display_weight() < DeadlineKind::Filing.display_weight());
    }

    #[test]
    fn deadline_serializes_type_under_the_type_key() {
        let d = DeadlineResult {
            title: "Preliminary Notice".to_string(),
            date: date(2024, 1, 31),
            days_remaining: 10,
            requirement: "Send it.".to_string(),
            deadline_type: DeadlineType::Secondary,
            kind: DeadlineKind::Notice,
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["type"], "secondary");
        assert_eq!(json["kind"], "notice");
        assert_eq!(json["daysRemaining"], 10);
        assert_eq!(json["date"], "2024-01-31");
    }
}
