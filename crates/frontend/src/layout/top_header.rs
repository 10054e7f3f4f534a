//! Application top bar: sidebar toggle, title, signed-in user and logout.

use crate::layout::context::use_layout;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_layout();
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let logout = move |_| {
        do_logout(set_auth_state);
    };

    let user_email = move || {
        auth_state
            .get()
            .session
            .and_then(|s| s.user.email)
            .unwrap_or_else(|| "Signed in".to_string())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if ctx.sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {icon("chevrons-left")}
                </button>
                <span class="top-header__title">"Training Center Admin"</span>
            </div>

            <div class="top-header__actions">
                <A href="/profile" attr:class="top-header__user" attr:title="Profile">
                    {icon("user")}
                    <span>{user_email}</span>
                </A>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
