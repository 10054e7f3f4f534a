use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::domain::course::CourseRef;
use crate::domain::program::ProgramRef;

/// Enrolled student. Admission links the student to a program and course;
/// the photo lives in object storage with its public URL on the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub student_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub gender: String,
    #[serde(default)]
    pub caste: Option<String>,
    pub marital_status: String,
    pub mobile_number: String,
    #[serde(default)]
    pub parents_contact: Option<String>,
    pub identity_type: String,
    pub identity_number: String,
    #[serde(default)]
    pub last_qualification: Option<String>,
    pub address: String,
    pub pincode: String,
    pub state: String,
    pub city: String,
    pub email: String,
    pub dob: NaiveDate,
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub net_fee: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub inquiry_source: Option<String>,
    #[serde(default)]
    pub student_image: Option<String>,
    #[serde(default)]
    pub student_image_url: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub programs: Option<ProgramRef>,
    #[serde(default, skip_serializing)]
    pub courses: Option<CourseRef>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentPayload {
    pub student_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caste: Option<String>,
    pub marital_status: String,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents_contact: Option<String>,
    pub identity_type: String,
    pub identity_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_qualification: Option<String>,
    pub address: String,
    pub pincode: String,
    pub state: String,
    pub city: String,
    pub email: String,
    pub dob: Option<NaiveDate>,
    pub program_id: RecordId,
    pub course_id: RecordId,
    pub net_fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_image_url: Option<String>,
}
