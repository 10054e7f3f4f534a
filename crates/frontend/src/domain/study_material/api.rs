use contracts::domain::common::RecordId;
use contracts::domain::study_material::{StudyMaterial, StudyMaterialPayload, StudyMaterialViewRow};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "studymaterial";
/// Denormalized list source; writes still go through [`TABLE`].
pub const VIEW: &str = "studymaterial_view";
pub const FILE_BUCKET: &str = "study_material_files";

pub async fn fetch_all(search: &str) -> Result<Vec<StudyMaterialViewRow>, StoreError> {
    let mut query = SelectQuery::table(VIEW).order_asc("id");
    if !search.is_empty() {
        query = query.or_ilike(
            &["material_name", "subject_name", "program_name", "course_name"],
            search,
        );
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<StudyMaterial>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn create(payload: &StudyMaterialPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &StudyMaterialPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
