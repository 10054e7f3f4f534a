use contracts::domain::common::{RecordId, SelectOption};
use contracts::domain::study_material::{StudyMaterial, StudyMaterialPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::program::api as program_api;
use crate::domain::study_material::api;
use crate::shared::cascade::{nodes_from_programs, CascadeResolver};
use crate::shared::components::ui::{Button, ButtonVariant, FilePicker, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::data::storage;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

fn validate_form(
    material_name: &str,
    program_id: Option<RecordId>,
    course_id: Option<RecordId>,
    subject_id: Option<RecordId>,
    has_file: bool,
) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check("program", validate::selected(&program_id, "Program"));
    errors.check("course", validate::selected(&course_id, "Course"));
    errors.check("subject", validate::selected(&subject_id, "Subject"));
    errors.check(
        "material_name",
        validate::min_len(material_name, 3, "Material name"),
    );
    if !has_file {
        errors.add("file", "Material file is required");
    }
    errors
}

#[component]
pub fn StudyMaterialDetails() -> impl IntoView {
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

    let material_name = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let existing = RwSignal::new(Option::<StudyMaterial>::None);
    let is_saving = RwSignal::new(false);

    let picked_file = StoredValue::new_local(Option::<web_sys::File>::None);
    let picked_name = RwSignal::new(Option::<String>::None);

    // level 0 = program, level 1 = course, level 2 = subject
    let cascade = RwSignal::new(CascadeResolver::new(3));

    spawn_local(async move {
        match program_api::fetch_hierarchy().await {
            Ok(trees) => cascade.update(|c| c.load(nodes_from_programs(&trees))),
            Err(e) => {
                log::error!("Failed to load program hierarchy: {}", e);
                notify.error(e.to_string());
                return;
            }
        }

        if let Some(id) = edit_id.get_untracked() {
            match api::fetch_by_id(id).await {
                Ok(Some(row)) => {
                    material_name.set(row.material_name.clone());
                    let hydrated = cascade
                        .try_update(|c| {
                            c.hydrate(&[row.program_id, row.course_id, row.subject_id])
                        })
                        .unwrap_or(false);
                    if !hydrated {
                        notify.warning(
                            "The stored program/course/subject chain no longer exists. Please reselect.",
                        );
                    }
                    existing.set(Some(row));
                }
                Ok(None) => notify.error("Study material not found"),
                Err(e) => {
                    log::error!("Failed to load study material {}: {}", id, e);
                    notify.error(e.to_string());
                }
            }
        }
    });

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();

    let save = move |_| {
        let name = material_name.get_untracked();
        let (program_id, course_id, subject_id) = cascade
            .with_untracked(|c| (c.selected_id(0), c.selected_id(1), c.selected_id(2)));
        let previous_url = existing.with_untracked(|s| s.as_ref().map(|s| s.file_url.clone()));
        let has_file = picked_file.with_value(|f| f.is_some()) || previous_url.is_some();

        let checked = validate_form(&name, program_id, course_id, subject_id, has_file);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FormErrors::new());

        let (Some(program_id), Some(course_id), Some(subject_id)) =
            (program_id, course_id, subject_id)
        else {
            return;
        };

        if auth_storage::get_session().is_none() {
            notify.error("You must be logged in to perform this action");
            force_sign_in(set_auth_state);
            return;
        }

        is_saving.set(true);
        let picked = picked_file.get_value();
        let nav = nav_back.clone();

        spawn_local(async move {
            let file_url = match picked {
                Some(file) => {
                    let path = storage::timestamped_path("study_material", &file.name());
                    match storage::upload_file(api::FILE_BUCKET, &path, &file).await {
                        Ok(url) => url,
                        Err(e) => {
                            log::error!("Study material upload failed: {}", e);
                            notify.error(format!("File upload failed: {}", e));
                            is_saving.set(false);
                            return;
                        }
                    }
                }
                None => previous_url.unwrap_or_default(),
            };

            let payload = StudyMaterialPayload {
                program_id,
                course_id,
                subject_id,
                material_name: name,
                file_url,
            };

            let result = match edit_id.get_untracked() {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            match result {
                Ok(()) => {
                    notify.success(if edit_id.get_untracked().is_some() {
                        "Study material updated successfully"
                    } else {
                        "Study material created successfully"
                    });
                    nav("/study-materials", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save study material: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Study Material"
    } else {
        "Add Study Material"
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Study Material"</legend>
                    <Select
                        label="Program"
                        value=Signal::derive(move || {
                            cascade.with(|c| {
                                c.selection(0).map(|o| o.value.clone()).unwrap_or_default()
                            })
                        })
                        options=Signal::derive(move || cascade.with(|c| c.options(0).to_vec()))
                        disabled=Signal::derive(move || cascade.with(|c| !c.is_enabled(0)))
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            cascade.update(|c| c.select_at(0, option));
                        })
                        placeholder="Select program"
                        error=Signal::derive(move || errors.with(|e| e.get("program")))
                    />
                    <Select
                        label="Course"
                        value=Signal::derive(move || {
                            cascade.with(|c| {
                                c.selection(1).map(|o| o.value.clone()).unwrap_or_default()
                            })
                        })
                        options=Signal::derive(move || cascade.with(|c| c.options(1).to_vec()))
                        disabled=Signal::derive(move || cascade.with(|c| !c.is_enabled(1)))
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            cascade.update(|c| c.select_at(1, option));
                        })
                        placeholder="Select course"
                        error=Signal::derive(move || errors.with(|e| e.get("course")))
                    />
                    <Select
                        label="Subject"
                        value=Signal::derive(move || {
                            cascade.with(|c| {
                                c.selection(2).map(|o| o.value.clone()).unwrap_or_default()
                            })
                        })
                        options=Signal::derive(move || cascade.with(|c| c.options(2).to_vec()))
                        disabled=Signal::derive(move || cascade.with(|c| !c.is_enabled(2)))
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            cascade.update(|c| c.select_at(2, option));
                        })
                        placeholder="Select subject"
                        error=Signal::derive(move || errors.with(|e| e.get("subject")))
                    />
                    <Input
                        label="Material Name"
                        value=Signal::derive(move || material_name.get())
                        on_input=Callback::new(move |v| material_name.set(v))
                        placeholder="Unit 1 notes"
                        error=Signal::derive(move || errors.with(|e| e.get("material_name")))
                    />
                    <FilePicker
                        label="Material File"
                        accept=".pdf,.doc,.docx,.ppt,.pptx"
                        hint=Signal::derive(move || {
                            picked_name
                                .get()
                                .or_else(|| {
                                    existing
                                        .with(|s| {
                                            s.as_ref().map(|_| "Current file kept".to_string())
                                        })
                                })
                        })
                        error=Signal::derive(move || errors.with(|e| e.get("file")))
                        on_file=move |file: web_sys::File| {
                            picked_name.set(Some(file.name()));
                            picked_file.set_value(Some(file));
                        }
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| {
                            nav_cancel("/study-materials", Default::default())
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
