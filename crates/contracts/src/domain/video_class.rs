use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::domain::course::CourseRef;
use crate::domain::program::ProgramRef;
use crate::domain::subject::SubjectRef;

/// Recorded video class. The table carries no active flag, so the list
/// page shows no status toggle and the dashboard counts every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoClass {
    pub id: RecordId,
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub subject_id: RecordId,
    pub video_code: String,
    pub video_url: String,
    #[serde(default, skip_serializing)]
    pub programs: Option<ProgramRef>,
    #[serde(default, skip_serializing)]
    pub courses: Option<CourseRef>,
    #[serde(default, skip_serializing, rename = "subject")]
    pub subject_ref: Option<SubjectRef>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VideoClassPayload {
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub subject_id: RecordId,
    pub video_code: String,
    pub video_url: String,
}
