use contracts::domain::branch::{Branch, BranchPayload};
use contracts::domain::common::RecordId;
use serde::Deserialize;

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "branch";
pub const LOGO_BUCKET: &str = "logo";

pub async fn fetch_all(search: &str) -> Result<Vec<Branch>, StoreError> {
    let mut query = SelectQuery::table(TABLE).order_asc("id");
    if !search.is_empty() {
        query = query.ilike("center_name", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Branch>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn fetch_primary() -> Result<Option<Branch>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("is_primary", true)).await
}

/// Primary flag read fresh from the store. The delete guard must not trust
/// a row that may have gone stale since the list was fetched.
pub async fn is_primary(id: RecordId) -> Result<bool, StoreError> {
    #[derive(Deserialize)]
    struct PrimaryFlag {
        is_primary: bool,
    }

    let row: Option<PrimaryFlag> =
        store::select_one(SelectQuery::table(TABLE).columns("is_primary").eq("id", id)).await?;
    Ok(row.map(|r| r.is_primary).unwrap_or(false))
}

pub async fn create(payload: &BranchPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &BranchPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
