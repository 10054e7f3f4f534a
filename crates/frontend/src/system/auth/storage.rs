use chrono::Utc;
use contracts::system::auth::Session;
use web_sys::window;

const SESSION_KEY: &str = "auth_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(session: &Session) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Raw stored session, expiry not checked.
fn load_session() -> Option<Session> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// The current live session. Read fresh at the start of every mutating
/// operation; an expired session reads as `None` and gates the call.
pub fn get_session() -> Option<Session> {
    load_session().filter(|session| session.is_live(Utc::now()))
}

/// Bearer token of the live session, if any.
pub fn access_token() -> Option<String> {
    get_session().map(|session| session.access_token)
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
