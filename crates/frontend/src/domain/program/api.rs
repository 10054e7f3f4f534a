use contracts::domain::common::RecordId;
use contracts::domain::program::{Program, ProgramPayload, ProgramTree};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "programs";
pub const IMAGE_BUCKET: &str = "program_images";

pub async fn fetch_all(search: &str) -> Result<Vec<Program>, StoreError> {
    let mut query = SelectQuery::table(TABLE).order_asc("id");
    if !search.is_empty() {
        query = query.ilike("program_name", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Program>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

/// The full program -> course -> subject hierarchy in one embedded select.
/// Every cascading form starts from this query.
pub async fn fetch_hierarchy() -> Result<Vec<ProgramTree>, StoreError> {
    store::select(
        SelectQuery::table(TABLE)
            .columns("*, courses(*, subject(*))")
            .order_asc("id"),
    )
    .await
}

pub async fn create(payload: &ProgramPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &ProgramPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
