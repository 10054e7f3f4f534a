use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;

/// Training-center branch. The head-of-branch profile is stored flat on the
/// same row; `is_primary` marks the one branch that must never be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: RecordId,
    pub center_code: String,
    pub center_name: String,
    pub society_trust_company: String,
    pub reg_no: String,
    pub reg_year: String,
    pub center_address: String,
    pub contact_no: String,
    pub state: String,
    pub city: String,
    // head-of-branch profile
    pub name: String,
    pub gender: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub address_proof: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BranchPayload {
    pub center_code: String,
    pub center_name: String,
    pub society_trust_company: String,
    pub reg_no: String,
    pub reg_year: String,
    pub center_address: String,
    pub contact_no: String,
    pub state: String,
    pub city: String,
    pub name: String,
    pub gender: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_proof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}
