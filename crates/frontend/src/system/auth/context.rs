use chrono::Utc;
use contracts::system::auth::{Session, SessionResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Auth context provider component. The stored session is restored
/// synchronously; expiry is a local check, so no validation round trip
/// is needed on startup.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        session: storage::get_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a fresh login and flip the app into the authenticated shell.
pub fn apply_login(set_auth_state: WriteSignal<AuthState>, response: &SessionResponse) {
    let session = Session::from_response(response, Utc::now());
    storage::save_session(&session);
    set_auth_state.set(AuthState {
        session: Some(session),
    });
}

/// Drop the session locally and revoke it server-side, best effort.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    let token = storage::access_token();
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    if let Some(token) = token {
        spawn_local(async move {
            if let Err(e) = api::logout(&token).await {
                log::warn!("Logout revocation failed: {}", e);
            }
        });
    }
}

/// Clears auth state after a failed session gate, which swaps the UI back
/// to the sign-in screen while keeping the current URL.
pub fn force_sign_in(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
