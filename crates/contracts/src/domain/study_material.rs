use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::domain::course::CourseRef;
use crate::domain::program::ProgramRef;
use crate::domain::subject::SubjectRef;

/// Supplementary study material file attached to a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: RecordId,
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub subject_id: RecordId,
    pub material_name: String,
    pub file_url: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub programs: Option<ProgramRef>,
    #[serde(default, skip_serializing)]
    pub courses: Option<CourseRef>,
    #[serde(default, skip_serializing, rename = "subject")]
    pub subject_ref: Option<SubjectRef>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudyMaterialPayload {
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub subject_id: RecordId,
    pub material_name: String,
    pub file_url: String,
}

/// Flat row of the denormalized `studymaterial_view` used by the list page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudyMaterialViewRow {
    pub id: RecordId,
    pub program_name: String,
    pub course_name: String,
    pub subject_name: String,
    pub material_name: String,
    pub file_url: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
