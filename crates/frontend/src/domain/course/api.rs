use contracts::domain::common::RecordId;
use contracts::domain::course::{Course, CoursePayload};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "courses";

/// List rows carry the parent program name via an embedded select.
pub async fn fetch_all(search: &str) -> Result<Vec<Course>, StoreError> {
    let mut query = SelectQuery::table(TABLE)
        .columns("*, programs(id, program_name)")
        .order_asc("id");
    if !search.is_empty() {
        query = query.ilike("course_name", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Course>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn create(payload: &CoursePayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &CoursePayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
