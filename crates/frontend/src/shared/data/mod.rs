pub mod config;
pub mod error;
pub mod query;
pub mod storage;
pub mod store;

pub use error::StoreError;
pub use query::SelectQuery;
