use contracts::system::auth::{PasswordLoginRequest, SessionResponse};
use gloo_net::http::Request;

use crate::shared::data::config::{auth_url, store_config};

/// Sign in with email and password against the auth service.
pub async fn login(email: String, password: String) -> Result<SessionResponse, String> {
    let request = PasswordLoginRequest { email, password };

    let response = Request::post(&auth_url("token?grant_type=password"))
        .header("apikey", &store_config().anon_key)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                ["error_description", "msg", "message"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()))
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| format!("Login failed: {}", status));
        return Err(message);
    }

    response
        .json::<SessionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the session server-side. Best effort; local state is cleared
/// regardless of the outcome.
pub async fn logout(access_token: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("logout"))
        .header("apikey", &store_config().anon_key)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}
