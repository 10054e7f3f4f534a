use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
    pub gender: String,
    /// Department display name, matching the legacy storage format.
    pub department: String,
    pub date_of_joining: NaiveDate,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
    pub gender: String,
    pub department: String,
    pub date_of_joining: Option<NaiveDate>,
}
