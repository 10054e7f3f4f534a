use contracts::domain::common::RecordId;
use contracts::domain::video_class::{VideoClass, VideoClassPayload};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "videoclasses";

pub async fn fetch_all(search: &str) -> Result<Vec<VideoClass>, StoreError> {
    let mut query = SelectQuery::table(TABLE)
        .columns("*, programs(id, program_name), courses(id, course_name), subject(id, subject_name)")
        .order_asc("id");
    if !search.is_empty() {
        query = query.ilike("video_code", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<VideoClass>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn create(payload: &VideoClassPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &VideoClassPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
