use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordLoginRequest {
    pub email: String,
    pub password: String,
}

/// Token grant response of the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds from the moment of issue.
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session as persisted in browser storage: the token plus an absolute
/// expiry computed from `expires_in` at login time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl Session {
    pub fn from_response(response: &SessionResponse, issued_at: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token.clone(),
            expires_at: issued_at + chrono::Duration::seconds(response.expires_in),
            user: response.user.clone(),
        }
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_response() -> SessionResponse {
        SessionResponse {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            refresh_token: None,
            user: AuthUser {
                id: Uuid::nil(),
                email: Some("admin@center.test".to_string()),
            },
        }
    }

    #[test]
    fn test_session_expiry_is_absolute() {
        let issued = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let session = Session::from_response(&sample_response(), issued);
        assert!(session.is_live(issued + chrono::Duration::seconds(3599)));
        assert!(!session.is_live(issued + chrono::Duration::seconds(3600)));
    }
}
