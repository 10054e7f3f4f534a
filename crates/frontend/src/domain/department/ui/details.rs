use contracts::domain::common::RecordId;
use contracts::domain::department::DepartmentPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::department::api;
use crate::shared::components::ui::{Button, ButtonVariant, Input};
use crate::shared::components::PageHeader;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

fn validate_form(payload: &DepartmentPayload) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(
        "department_name",
        validate::min_len(&payload.department_name, 3, "Department name"),
    );
    errors
}

#[component]
pub fn DepartmentDetails() -> impl IntoView {
    let params = use_params_map();
    let edit_id = Memo::new(move |_| {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| RecordId::from_string(&raw).ok())
        })
    });

    let notify = use_notify();
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let form = RwSignal::new(DepartmentPayload::default());
    let errors = RwSignal::new(FormErrors::new());
    let is_saving = RwSignal::new(false);

    spawn_local(async move {
        if let Some(id) = edit_id.get_untracked() {
            match api::fetch_by_id(id).await {
                Ok(Some(department)) => {
                    form.set(DepartmentPayload {
                        department_name: department.department_name,
                    });
                }
                Ok(None) => notify.error("Department not found"),
                Err(e) => {
                    log::error!("Failed to load department {}: {}", id, e);
                    notify.error(e.to_string());
                }
            }
        }
    });

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();

    let save = move |_| {
        let payload = form.get_untracked();
        let checked = validate_form(&payload);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FormErrors::new());

        if auth_storage::get_session().is_none() {
            notify.error("You must be logged in to perform this action");
            force_sign_in(set_auth_state);
            return;
        }

        is_saving.set(true);
        let nav = nav_back.clone();

        spawn_local(async move {
            let result = match edit_id.get_untracked() {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            match result {
                Ok(()) => {
                    notify.success(if edit_id.get_untracked().is_some() {
                        "Department updated successfully"
                    } else {
                        "Department created successfully"
                    });
                    nav("/departments", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save department: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Department"
    } else {
        "Add Department"
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Department"</legend>
                    <Input
                        label="Department Name"
                        value=Signal::derive(move || form.with(|f| f.department_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.department_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("department_name")))
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| {
                            nav_cancel("/departments", Default::default())
                        })
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        disabled=Signal::derive(move || is_saving.get())
                        on_click=Callback::new(save)
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
