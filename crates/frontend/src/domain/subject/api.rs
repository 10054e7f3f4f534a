use contracts::domain::common::RecordId;
use contracts::domain::subject::{Subject, SubjectPayload};

use crate::shared::data::{store, SelectQuery, StoreError};

// the table name is singular, unlike every other entity table
pub const TABLE: &str = "subject";

pub async fn fetch_all(search: &str) -> Result<Vec<Subject>, StoreError> {
    let mut query = SelectQuery::table(TABLE)
        .columns("*, programs(id, program_name), courses(id, course_name)")
        .order_asc("id");
    if !search.is_empty() {
        query = query.ilike("subject_name", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Subject>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn create(payload: &SubjectPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &SubjectPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
