use contracts::domain::common::RecordId;
use contracts::domain::student::{Student, StudentPayload};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "students";
pub const PHOTO_BUCKET: &str = "student_files";

pub async fn fetch_all(search: &str) -> Result<Vec<Student>, StoreError> {
    let mut query = SelectQuery::table(TABLE)
        .columns("*, programs(id, program_name), courses(id, course_name)")
        .order_asc("id");
    if !search.is_empty() {
        query = query.ilike("student_name", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Student>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn create(payload: &StudentPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &StudentPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
