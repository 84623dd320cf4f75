//! Handler for form reference data.
//!
//! The form layer populates its dropdowns from this endpoint so the closed
//! enumerations (states, project types, role/party pairings) live in one
//! place: the core crate.

use axum::Json;
use serde::Serialize;

use lienguard_core::{ProjectType, Role, UsState};

use crate::response::DataResponse;

/// Reference data for the project facts form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub states: Vec<&'static str>,
    pub project_types: Vec<&'static str>,
    pub roles: Vec<RoleMeta>,
}

/// A role together with the contract parties the form may offer for it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMeta {
    pub role: &'static str,
    pub contract_parties: Vec<&'static str>,
}

/// GET /api/v1/meta
pub async fn get_meta() -> Json<DataResponse<MetaResponse>> {
    let roles = Role::ALL
        .iter()
        .map(|role| RoleMeta {
            role: role.name(),
            contract_parties: role
                .valid_contract_parties()
                .iter()
                .map(|p| p.name())
                .collect(),
        })
        .collect();

    Json(DataResponse {
        data: MetaResponse {
            states: UsState::ALL.iter().map(|s| s.name()).collect(),
            project_types: ProjectType::ALL.iter().map(|t| t.name()).collect(),
            roles,
        },
    })
}
