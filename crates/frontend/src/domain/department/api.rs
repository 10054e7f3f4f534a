use contracts::domain::common::RecordId;
use contracts::domain::department::{Department, DepartmentPayload};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "department";

pub async fn fetch_all(search: &str) -> Result<Vec<Department>, StoreError> {
    let mut query = SelectQuery::table(TABLE).order_asc("id");
    if !search.is_empty() {
        query = query.ilike("department_name", search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Department>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

/// Active departments as dropdown options for the employee form.
pub async fn fetch_active() -> Result<Vec<Department>, StoreError> {
    store::select(
        SelectQuery::table(TABLE)
            .eq("isActive", true)
            .order_asc("department_name"),
    )
    .await
}

pub async fn create(payload: &DepartmentPayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &DepartmentPayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
