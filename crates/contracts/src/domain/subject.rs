use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::domain::course::CourseRef;
use crate::domain::program::ProgramRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: RecordId,
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub subject_name: String,
    pub subject_code: String,
    pub total_marks: i32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub programs: Option<ProgramRef>,
    #[serde(default, skip_serializing)]
    pub courses: Option<CourseRef>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubjectPayload {
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub subject_name: String,
    pub subject_code: String,
    pub total_marks: i32,
}

/// Embedded parent row as returned by `subject(id, subject_name)` joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRef {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub subject_name: String,
}
