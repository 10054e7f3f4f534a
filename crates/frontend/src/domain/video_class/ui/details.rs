use contracts::domain::common::{RecordId, SelectOption};
use contracts::domain::video_class::VideoClassPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::program::api as program_api;
use crate::domain::video_class::api;
use crate::shared::cascade::{nodes_from_programs, CascadeResolver};
use crate::shared::components::ui::{Button, ButtonVariant, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

#[derive(Clone, Default)]
struct VideoClassForm {
    video_code: String,
    video_url: String,
}

fn validate_form(
    form: &VideoClassForm,
    program_id: Option<RecordId>,
    course_id: Option<RecordId>,
    subject_id: Option<RecordId>,
) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check("program", validate::selected(&program_id, "Program"));
    errors.check("course", validate::selected(&course_id, "Course"));
    errors.check("subject", validate::selected(&subject_id, "Subject"));
    errors.check(
        "video_code",
        validate::alphanumeric(&form.video_code, "Video code"),
    );
    errors.check("video_url", validate::url(&form.video_url, "Video URL"));
    errors
}

#[component]
pub fn VideoClassDetails() -> impl IntoView {
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

    let form = RwSignal::new(VideoClassForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let is_saving = RwSignal::new(false);

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
                    form.set(VideoClassForm {
                        video_code: row.video_code.clone(),
                        video_url: row.video_url.clone(),
                    });
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
                }
                Ok(None) => notify.error("Video class not found"),
                Err(e) => {
                    log::error!("Failed to load video class {}: {}", id, e);
                    notify.error(e.to_string());
                }
            }
        }
    });

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();

    let save = move |_| {
        let snapshot = form.get_untracked();
        let (program_id, course_id, subject_id) = cascade
            .with_untracked(|c| (c.selected_id(0), c.selected_id(1), c.selected_id(2)));
        let checked = validate_form(&snapshot, program_id, course_id, subject_id);
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
        let payload = VideoClassPayload {
            program_id,
            course_id,
            subject_id,
            video_code: snapshot.video_code,
            video_url: snapshot.video_url,
        };
        let nav = nav_back.clone();

        spawn_local(async move {
            let result = match edit_id.get_untracked() {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            match result {
                Ok(()) => {
                    notify.success(if edit_id.get_untracked().is_some() {
                        "Video class updated successfully"
                    } else {
                        "Video class created successfully"
                    });
                    nav("/video-classes", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save video class: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Video Class"
    } else {
        "Add Video Class"
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Video Class"</legend>
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
                        label="Video Code"
                        value=Signal::derive(move || form.with(|f| f.video_code.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.video_code = v))
                        placeholder="VC101"
                        error=Signal::derive(move || errors.with(|e| e.get("video_code")))
                    />
                    <Input
                        label="Video URL"
                        value=Signal::derive(move || form.with(|f| f.video_url.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.video_url = v))
                        placeholder="https://..."
                        error=Signal::derive(move || errors.with(|e| e.get("video_url")))
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| {
                            nav_cancel("/video-classes", Default::default())
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
