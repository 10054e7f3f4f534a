//! HTTP client for the row store.
//!
//! Every call sends the public key and, when a session exists, its bearer
//! token. Mutations go through `insert`/`update`/`delete`; reads through
//! `select` with a [`SelectQuery`]. Row-level errors come back as
//! [`StoreError`] and are turned into user strings by the pages.

use contracts::domain::common::RecordId;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::{rest_url, store_config};
use super::error::StoreError;
use super::query::SelectQuery;
use crate::system::auth::storage as auth_storage;

fn authed(builder: RequestBuilder) -> RequestBuilder {
    let config = store_config();
    let bearer = auth_storage::access_token().unwrap_or_else(|| config.anon_key.clone());
    builder
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", bearer))
}

async fn error_from(response: Response) -> StoreError {
    let status = response.status();
    if status == 401 {
        return StoreError::Unauthenticated;
    }
    let fallback = format!("Request failed with status {}", status);
    match response.text().await {
        Ok(body) => {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    ["message", "msg", "error_description"]
                        .iter()
                        .find_map(|key| v.get(key).and_then(|m| m.as_str()))
                        .map(|s| s.to_string())
                })
                .unwrap_or(fallback);
            StoreError::Http(message)
        }
        Err(_) => StoreError::Http(fallback),
    }
}

pub async fn select<T: DeserializeOwned>(query: SelectQuery) -> Result<Vec<T>, StoreError> {
    let url = format!("{}?{}", rest_url(query.table_name()), query.query_string());
    let response = authed(gloo_net::http::Request::get(&url)).send().await?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

/// First row of the result set, if any.
pub async fn select_one<T: DeserializeOwned>(query: SelectQuery) -> Result<Option<T>, StoreError> {
    let rows = select::<T>(query.limit(1)).await?;
    Ok(rows.into_iter().next())
}

pub async fn insert<B: Serialize>(table: &str, row: &B) -> Result<(), StoreError> {
    let response = authed(gloo_net::http::Request::post(&rest_url(table)))
        .header("Prefer", "return=minimal")
        .json(row)
        .map_err(|e| StoreError::Http(e.to_string()))?
        .send()
        .await?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

pub async fn update<B: Serialize>(table: &str, id: RecordId, patch: &B) -> Result<(), StoreError> {
    let url = format!("{}?id=eq.{}", rest_url(table), id);
    let response = authed(gloo_net::http::Request::patch(&url))
        .header("Prefer", "return=minimal")
        .json(patch)
        .map_err(|e| StoreError::Http(e.to_string()))?
        .send()
        .await?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

pub async fn delete(table: &str, id: RecordId) -> Result<(), StoreError> {
    let url = format!("{}?id=eq.{}", rest_url(table), id);
    let response = authed(gloo_net::http::Request::delete(&url)).send().await?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

/// Exact row count for the query, read from the `content-range` header.
pub async fn count(query: SelectQuery) -> Result<u64, StoreError> {
    let url = format!(
        "{}?{}",
        rest_url(query.table_name()),
        query.columns("id").limit(1).query_string()
    );
    let response = authed(gloo_net::http::Request::get(&url))
        .header("Prefer", "count=exact")
        .send()
        .await?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    let header = response.headers().get("content-range").unwrap_or_default();
    parse_total(&header)
        .ok_or_else(|| StoreError::Decode(format!("missing count in content-range '{}'", header)))
}

/// `content-range` comes back as `0-0/42` or `*/0` for an empty table.
fn parse_total(content_range: &str) -> Option<u64> {
    content_range.rsplit('/').next()?.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_total_from_range() {
        assert_eq!(parse_total("0-0/42"), Some(42));
    }

    #[test]
    fn test_parse_total_empty_table() {
        assert_eq!(parse_total("*/0"), Some(0));
    }

    #[test]
    fn test_parse_total_garbage_is_none() {
        assert_eq!(parse_total(""), None);
        assert_eq!(parse_total("0-0/many"), None);
    }
}
