//! Object storage access: bucket uploads, removal and public URLs.
//!
//! Uploads always complete before the row referencing the file is
//! written, so a failed upload never leaves a dangling URL.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use super::config::{storage_url, store_config};
use super::error::StoreError;
use crate::system::auth::storage as auth_storage;

fn encoded_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// `{prefix}/{timestamp}_{file_name}`, matching the layout of existing
/// objects in the buckets.
pub fn timestamped_path(prefix: &str, file_name: &str) -> String {
    let timestamp = js_sys::Date::now() as u64;
    format!("{}/{}_{}", prefix, timestamp, file_name)
}

pub fn public_url(bucket: &str, path: &str) -> String {
    storage_url(&format!("object/public/{}/{}", bucket, encoded_path(path)))
}

/// Derives the bucket-relative object path from a stored public URL
/// (the `{prefix}/{file}` tail). Used when replacing an uploaded file.
pub fn object_path_from_public_url(url: &str) -> Option<String> {
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return None;
    }
    let tail = &segments[segments.len() - 2..];
    urlencoding::decode(&tail.join("/"))
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Uploads the file and returns its public URL.
pub async fn upload_file(
    bucket: &str,
    path: &str,
    file: &web_sys::File,
) -> Result<String, StoreError> {
    let config = store_config();
    let bearer = auth_storage::access_token().unwrap_or_else(|| config.anon_key.clone());
    let url = storage_url(&format!("object/{}/{}", bucket, encoded_path(path)));

    let response = Request::post(&url)
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", bearer))
        .body(JsValue::from(file.clone()))
        .map_err(|e| StoreError::Http(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::Http(if body.is_empty() {
            format!("Upload failed with status {}", status)
        } else {
            body
        }));
    }

    Ok(public_url(bucket, path))
}

pub async fn remove_file(bucket: &str, path: &str) -> Result<(), StoreError> {
    let config = store_config();
    let bearer = auth_storage::access_token().unwrap_or_else(|| config.anon_key.clone());
    let url = storage_url(&format!("object/{}/{}", bucket, encoded_path(path)));

    let response = Request::delete(&url)
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", bearer))
        .send()
        .await?;

    if !response.ok() {
        return Err(StoreError::Http(format!(
            "Delete failed with status {}",
            response.status()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_path_from_public_url() {
        let url = "https://store.example.com/storage/v1/object/public/logo/branch_logos/17_a.png";
        assert_eq!(
            object_path_from_public_url(url),
            Some("branch_logos/17_a.png".to_string())
        );
    }

    #[test]
    fn test_object_path_decodes_file_names() {
        let url = "https://x.test/storage/v1/object/public/logo/branch_logos/17_my%20logo.png";
        assert_eq!(
            object_path_from_public_url(url),
            Some("branch_logos/17_my logo.png".to_string())
        );
    }

    #[test]
    fn test_object_path_needs_two_segments() {
        assert_eq!(object_path_from_public_url("x"), None);
    }
}
