//! Project facts: the input record the form layer collects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::jurisdiction::{ProjectType, UsState};
use crate::roles::{ContractParty, Role};

/// Everything the calculator needs to know about a project.
///
/// Select fields are optional so the same record can represent a
/// partially-filled form (the validator's input) and a submitted one (the
/// engine's input). The engine itself only hard-requires
/// `last_furnishing_date`; an absent state or project type degrades to the
/// generic rule branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFacts {
    /// Defaults to empty on deserialization so a draft that has not named
    /// the project yet still reaches the validator.
    #[serde(default)]
    pub project_name: String,
    pub state: Option<UsState>,
    pub role: Option<Role>,
    pub contract_with: Option<ContractParty>,
    pub project_type: Option<ProjectType>,
    /// Date labor or materials were first furnished.
    pub first_furnishing_date: Option<NaiveDate>,
    /// Date of last furnishing; anchors nearly every deadline formula.
    pub last_furnishing_date: Option<NaiveDate>,
    pub project_completion_date: Option<NaiveDate>,
}
