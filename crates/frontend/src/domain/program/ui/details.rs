use contracts::domain::common::RecordId;
use contracts::domain::program::{Program, ProgramPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::program::api;
use crate::shared::components::ui::{Button, ButtonVariant, FilePicker, Input};
use crate::shared::components::PageHeader;
use crate::shared::data::storage;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

fn validate_form(payload: &ProgramPayload) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(
        "program_name",
        validate::min_len(&payload.program_name, 3, "Program name"),
    );
    errors
}

#[component]
pub fn ProgramDetails() -> impl IntoView {
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

    let form = RwSignal::new(ProgramPayload::default());
    let errors = RwSignal::new(FormErrors::new());
    let existing = RwSignal::new(Option::<Program>::None);
    let is_saving = RwSignal::new(false);

    let image_file = StoredValue::new_local(Option::<web_sys::File>::None);
    let image_name = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        if let Some(id) = edit_id.get_untracked() {
            match api::fetch_by_id(id).await {
                Ok(Some(program)) => {
                    form.set(ProgramPayload {
                        program_name: program.program_name.clone(),
                        img_url: program.img_url.clone(),
                    });
                    existing.set(Some(program));
                }
                Ok(None) => notify.error("Program not found"),
                Err(e) => {
                    log::error!("Failed to load program {}: {}", id, e);
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
        let picked = image_file.get_value();
        let nav = nav_back.clone();

        spawn_local(async move {
            let mut payload = payload;

            if let Some(file) = picked {
                let path = storage::timestamped_path("program", &file.name());
                match storage::upload_file(api::IMAGE_BUCKET, &path, &file).await {
                    Ok(url) => payload.img_url = Some(url),
                    Err(e) => {
                        log::error!("Image upload failed: {}", e);
                        notify.error(format!("Image upload failed: {}", e));
                        is_saving.set(false);
                        return;
                    }
                }
            }

            let result = match edit_id.get_untracked() {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            match result {
                Ok(()) => {
                    notify.success(if edit_id.get_untracked().is_some() {
                        "Program updated successfully"
                    } else {
                        "Program created successfully"
                    });
                    nav("/programs", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save program: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Program"
    } else {
        "Add Program"
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Program"</legend>
                    <Input
                        label="Program Name"
                        value=Signal::derive(move || form.with(|f| f.program_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.program_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("program_name")))
                    />
                    <FilePicker
                        label="Program Image"
                        accept="image/*"
                        hint=Signal::derive(move || {
                            image_name
                                .get()
                                .or_else(|| {
                                    existing
                                        .with(|p| {
                                            p.as_ref()
                                                .and_then(|p| p.img_url.as_ref())
                                                .map(|_| "Current image kept".to_string())
                                        })
                                })
                        })
                        on_file=move |file: web_sys::File| {
                            image_name.set(Some(file.name()));
                            image_file.set_value(Some(file));
                        }
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| nav_cancel("/programs", Default::default()))
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
