//! Jurisdiction types: US states and project classification.
//!
//! Both enums serialize to their human-readable names because the persisted
//! JSON and the form layer exchange the display strings directly.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// US states
// ---------------------------------------------------------------------------

/// The 50 US states, identified by full name on the wire ("New Hampshire").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsState {
    Alabama,
    Alaska,
    Arizona,
    Arkansas,
    California,
    Colorado,
    Connecticut,
    Delaware,
    Florida,
    Georgia,
    Hawaii,
    Idaho,
    Illinois,
    Indiana,
    Iowa,
    Kansas,
    Kentucky,
    Louisiana,
    Maine,
    Maryland,
    Massachusetts,
    Michigan,
    Minnesota,
    Mississippi,
    Missouri,
    Montana,
    Nebraska,
    Nevada,
    #[serde(rename = "New Hampshire")]
    NewHampshire,
    #[serde(rename = "New Jersey")]
    NewJersey,
    #[serde(rename = "New Mexico")]
    NewMexico,
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "North Carolina")]
    NorthCarolina,
    #[serde(rename = "North Dakota")]
    NorthDakota,
    Ohio,
    Oklahoma,
    Oregon,
    Pennsylvania,
    #[serde(rename = "Rhode Island")]
    RhodeIsland,
    #[serde(rename = "South Carolina")]
    SouthCarolina,
    #[serde(rename = "South Dakota")]
    SouthDakota,
    Tennessee,
    Texas,
    Utah,
    Vermont,
    Virginia,
    Washington,
    #[serde(rename = "West Virginia")]
    WestVirginia,
    Wisconsin,
    Wyoming,
}

impl UsState {
    /// All states in alphabetical order, for populating form dropdowns.
    pub const ALL: [UsState; 50] = [
        UsState::Alabama,
        UsState::Alaska,
        UsState::Arizona,
        UsState::Arkansas,
        UsState::California,
        UsState::Colorado,
        UsState::Connecticut,
        UsState::Delaware,
        UsState::Florida,
        UsState::Georgia,
        UsState::Hawaii,
        UsState::Idaho,
        UsState::Illinois,
        UsState::Indiana,
        UsState::Iowa,
        UsState::Kansas,
        UsState::Kentucky,
        UsState::Louisiana,
        UsState::Maine,
        UsState::Maryland,
        UsState::Massachusetts,
        UsState::Michigan,
        UsState::Minnesota,
        UsState::Mississippi,
        UsState::Missouri,
        UsState::Montana,
        UsState::Nebraska,
        UsState::Nevada,
        UsState::NewHampshire,
        UsState::NewJersey,
        UsState::NewMexico,
        UsState::NewYork,
        UsState::NorthCarolina,
        UsState::NorthDakota,
        UsState::Ohio,
        UsState::Oklahoma,
        UsState::Oregon,
        UsState::Pennsylvania,
        UsState::RhodeIsland,
        UsState::SouthCarolina,
        UsState::SouthDakota,
        UsState::Tennessee,
        UsState::Texas,
        UsState::Utah,
        UsState::Vermont,
        UsState::Virginia,
        UsState::Washington,
        UsState::WestVirginia,
        UsState::Wisconsin,
        UsState::Wyoming,
    ];

    /// Human-readable state name, matching the wire representation.
    pub fn name(self) -> &'static str {
        match self {
            UsState::Alabama => "Alabama",
            UsState::Alaska => "Alaska",
            UsState::Arizona => "Arizona",
            UsState::Arkansas => "Arkansas",
            UsState::California => "California",
            UsState::Colorado => "Colorado",
            UsState::Connecticut => "Connecticut",
            UsState::Delaware => "Delaware",
            UsState::Florida => "Florida",
            UsState::Georgia => "Georgia",
            UsState::Hawaii => "Hawaii",
            UsState::Idaho => "Idaho",
            UsState::Illinois => "Illinois",
            UsState::Indiana => "Indiana",
            UsState::Iowa => "Iowa",
            UsState::Kansas => "Kansas",
            UsState::Kentucky => "Kentucky",
            UsState::Louisiana => "Louisiana",
            UsState::Maine => "Maine",
            UsState::Maryland => "Maryland",
            UsState::Massachusetts => "Massachusetts",
            UsState::Michigan => "Michigan",
            UsState::Minnesota => "Minnesota",
            UsState::Mississippi => "Mississippi",
            UsState::Missouri => "Missouri",
            UsState::Montana => "Montana",
            UsState::Nebraska => "Nebraska",
            UsState::Nevada => "Nevada",
            UsState::NewHampshire => "New Hampshire",
            UsState::NewJersey => "New Jersey",
            UsState::NewMexico => "New Mexico",
            UsState::NewYork => "New York",
            UsState::NorthCarolina => "North Carolina",
            UsState::NorthDakota => "North Dakota",
            UsState::Ohio => "Ohio",
            UsState::Oklahoma => "Oklahoma",
            UsState::Oregon => "Oregon",
            UsState::Pennsylvania => "Pennsylvania",
            UsState::RhodeIsland => "Rhode Island",
            UsState::SouthCarolina => "South Carolina",
            UsState::SouthDakota => "South Dakota",
            UsState::Tennessee => "Tennessee",
            UsState::Texas => "Texas",
            UsState::Utah => "Utah",
            UsState::Vermont => "Vermont",
            UsState::Virginia => "Virginia",
            UsState::Washington => "Washington",
            UsState::WestVirginia => "West Virginia",
            UsState::Wisconsin => "Wisconsin",
            UsState::Wyoming => "Wyoming",
        }
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Project type
// ---------------------------------------------------------------------------

/// Whether the project is on private, public (state/municipal), or federal
/// land. This is the top-level dispatch for the deadline rules: liens attach
/// to private property, bond claims replace them on public and federal work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Private,
    Public,
    Federal,
}

impl ProjectType {
    /// All project types, for populating form dropdowns.
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Private,
        ProjectType::Public,
        ProjectType::Federal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProjectType::Private => "Private",
            ProjectType::Public => "Public",
            ProjectType::Federal => "Federal",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
