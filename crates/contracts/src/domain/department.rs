use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: RecordId,
    pub department_name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DepartmentPayload {
    pub department_name: String,
}
