//! Contractual roles and counterparties.
//!
//! Who the user is on the project and who they contracted with. The pairing
//! is constrained: a general contractor only ever contracts with the owner,
//! while suppliers can sit several tiers down the chain.

use serde::{Deserialize, Serialize};

/// The user's role on the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "General Contractor")]
    GeneralContractor,
    Subcontractor,
    Supplier,
    #[serde(rename = "Equipment Lessor")]
    EquipmentLessor,
}

/// The party the user holds a contract with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractParty {
    #[serde(rename = "Property Owner")]
    PropertyOwner,
    #[serde(rename = "General Contractor (Original Contractor)")]
    GeneralContractor,
    Subcontractor,
    Supplier,
}

impl Role {
    /// All roles, for populating form dropdowns.
    pub const ALL: [Role; 4] = [
        Role::GeneralContractor,
        Role::Subcontractor,
        Role::Supplier,
        Role::EquipmentLessor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::GeneralContractor => "General Contractor",
            Role::Subcontractor => "Subcontractor",
            Role::Supplier => "Supplier",
            Role::EquipmentLessor => "Equipment Lessor",
        }
    }

    /// The contract parties that are legal for this role. The form layer
    /// offers exactly this subset; the validator re-checks it defensively.
    pub fn valid_contract_parties(self) -> &'static [ContractParty] {
        match self {
            Role::GeneralContractor => &[ContractParty::PropertyOwner],
            Role::Subcontractor => &[
                ContractParty::GeneralContractor,
                ContractParty::Subcontractor,
            ],
            Role::Supplier | Role::EquipmentLessor => &[
                ContractParty::GeneralContractor,
                ContractParty::Subcontractor,
                ContractParty::Supplier,
            ],
        }
    }
}

impl ContractParty {
    pub fn name(self) -> &'static str {
        match self {
            ContractParty::PropertyOwner => "Property Owner",
            ContractParty::GeneralContractor => "General Contractor (Original Contractor)",
            ContractParty::Subcontractor => "Subcontractor",
            ContractParty::Supplier => "Supplier",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for ContractParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_contractor_only_contracts_with_owner() {
        assert_eq!(
            Role::GeneralContractor.valid_contract_parties(),
            &[ContractParty::PropertyOwner]
        );
    }

    #[test]
    fn subcontractor_contracts_up_the_chain() {
        let parties = Role::Subcontractor.valid_contract_parties();
        assert!(parties.contains(&ContractParty::GeneralContractor));
        assert!(parties.contains(&ContractParty::Subcontractor));
        assert!(!parties.contains(&ContractParty::PropertyOwner));
    }

    #[test]
    fn supplier_and_lessor_share_the_same_parties() {
        assert_eq!(
            Role::Supplier.valid_contract_parties(),
            Role::EquipmentLessor.valid_contract_parties()
        );
    }

    #[test]
    fn role_serializes_to_display_name() {
        assert_eq!(
            serde_json::to_string(&Role::EquipmentLessor).unwrap(),
            "\"Equipment Lessor\""
        );
        let back: Role = serde_json::from_str("\"General Contractor\"").unwrap();
        assert_eq!(back, Role::GeneralContractor);
    }

    #[test]
    fn contract_party_keeps_original_contractor_qualifier() {
        assert_eq!(
            serde_json::to_string(&ContractParty::GeneralContractor).unwrap(),
            "\"General Contractor (Original Contractor)\""
        );
    }
}
