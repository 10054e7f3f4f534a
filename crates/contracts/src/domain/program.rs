use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;

/// Top level of the program -> course -> subject hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: RecordId,
    pub program_name: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Insert/update body. The image URL is filled after the upload completes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgramPayload {
    pub program_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

/// Embedded parent row as returned by `programs(id, program_name)` joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRef {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub program_name: String,
}

/// Program with its courses and their subjects embedded, as returned by
/// `select=*, courses(*, subject(*))`. Read-only input of the cascade.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgramTree {
    pub id: RecordId,
    pub program_name: String,
    #[serde(default)]
    pub courses: Vec<CourseTree>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseTree {
    pub id: RecordId,
    pub course_name: String,
    // the embed key is the table name, which is singular for subjects
    #[serde(default, rename = "subject")]
    pub subjects: Vec<SubjectLite>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectLite {
    pub id: RecordId,
    pub subject_name: String,
}
