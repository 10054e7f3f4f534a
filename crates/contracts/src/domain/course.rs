use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::domain::program::ProgramRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    pub program_id: RecordId,
    pub course_name: String,
    pub course_code: String,
    /// Duration in months.
    pub duration: i32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Present when the list/detail select embeds the parent program.
    #[serde(default, skip_serializing)]
    pub programs: Option<ProgramRef>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CoursePayload {
    pub program_id: RecordId,
    pub course_name: String,
    pub course_code: String,
    pub duration: i32,
}

/// Embedded parent row as returned by `courses(id, course_name)` joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub course_name: String,
}
