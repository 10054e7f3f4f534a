use crate::shared::data::{store, SelectQuery, StoreError};

pub async fn count_active(table: &str) -> Result<u64, StoreError> {
    store::count(SelectQuery::table(table).eq("isActive", true)).await
}

pub async fn count_all(table: &str) -> Result<u64, StoreError> {
    store::count(SelectQuery::table(table)).await
}
