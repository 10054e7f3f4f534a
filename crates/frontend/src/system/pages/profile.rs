//! Profile page: the signed-in account next to the primary branch record.

use contracts::domain::branch::Branch;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::branch;
use crate::shared::components::PageHeader;
use crate::system::auth::context::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (primary_branch, set_primary_branch) = signal(Option::<Branch>::None);
    let (is_loading, set_is_loading) = signal(true);

    spawn_local(async move {
        match branch::api::fetch_primary().await {
            Ok(found) => set_primary_branch.set(found),
            Err(e) => log::error!("Failed to load primary branch: {}", e),
        }
        set_is_loading.set(false);
    });

    let email = move || {
        auth_state
            .get()
            .session
            .and_then(|s| s.user.email)
            .unwrap_or_else(|| "\u{2014}".to_string())
    };

    view! {
        <div class="page">
            <PageHeader title="Profile">
                {()}
            </PageHeader>

            <div class="profile">
                <div class="profile__section">
                    <h3>"Account"</h3>
                    <div class="profile__row">
                        <span class="profile__label">"Email"</span>
                        <span class="profile__value">{email}</span>
                    </div>
                </div>

                <div class="profile__section">
                    <h3>"Organization"</h3>
                    {move || {
                        if is_loading.get() {
                            view! { <div class="skeleton"></div> }.into_any()
                        } else {
                            match primary_branch.get() {
                                Some(b) => view! {
                                    <div>
                                        <div class="profile__row">
                                            <span class="profile__label">"Center"</span>
                                            <span class="profile__value">
                                                {format!("{} ({})", b.center_name, b.center_code)}
                                            </span>
                                        </div>
                                        <div class="profile__row">
                                            <span class="profile__label">"Society / Trust"</span>
                                            <span class="profile__value">{b.society_trust_company.clone()}</span>
                                        </div>
                                        <div class="profile__row">
                                            <span class="profile__label">"Contact"</span>
                                            <span class="profile__value">{b.contact_no.clone()}</span>
                                        </div>
                                        <div class="profile__row">
                                            <span class="profile__label">"Address"</span>
                                            <span class="profile__value">
                                                {format!("{}, {}, {}", b.center_address, b.city, b.state)}
                                            </span>
                                        </div>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <p class="profile__empty">"No primary branch configured."</p>
                                }.into_any(),
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
