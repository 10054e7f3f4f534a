use contracts::domain::common::RecordId;
use contracts::domain::employee::{Employee, EmployeePayload};

use crate::shared::data::{store, SelectQuery, StoreError};

pub const TABLE: &str = "employees";

pub async fn fetch_all(search: &str) -> Result<Vec<Employee>, StoreError> {
    let mut query = SelectQuery::table(TABLE).order_asc("id");
    if !search.is_empty() {
        query = query.or_ilike(&["first_name", "last_name"], search);
    }
    store::select(query).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Option<Employee>, StoreError> {
    store::select_one(SelectQuery::table(TABLE).eq("id", id)).await
}

pub async fn create(payload: &EmployeePayload) -> Result<(), StoreError> {
    store::insert(TABLE, payload).await
}

pub async fn update(id: RecordId, payload: &EmployeePayload) -> Result<(), StoreError> {
    store::update(TABLE, id, payload).await
}

pub async fn delete(id: RecordId) -> Result<(), StoreError> {
    store::delete(TABLE, id).await
}
