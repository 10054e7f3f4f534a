use contracts::domain::common::{RecordId, SelectOption};
use contracts::domain::course::CoursePayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::course::api;
use crate::domain::program::api as program_api;
use crate::shared::cascade::{nodes_from_programs, CascadeResolver};
use crate::shared::components::ui::{Button, ButtonVariant, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

#[derive(Clone, Default)]
struct CourseForm {
    course_name: String,
    course_code: String,
    duration: String,
}

fn validate_form(form: &CourseForm, program_id: Option<RecordId>) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check("program", validate::selected(&program_id, "Program"));
    errors.check(
        "course_name",
        validate::min_len(&form.course_name, 3, "Course name"),
    );
    errors.check(
        "course_code",
        validate::alphanumeric(&form.course_code, "Course code"),
    );
    errors.check("duration", validate::positive_int(&form.duration, "Duration"));
    errors
}

#[component]
pub fn CourseDetails() -> impl IntoView {
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

    let form = RwSignal::new(CourseForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let is_saving = RwSignal::new(false);

    let cascade = RwSignal::new(CascadeResolver::new(1));

    // the hierarchy must be in place before an edited row can hydrate
    // its program selection
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
                Ok(Some(course)) => {
                    form.set(CourseForm {
                        course_name: course.course_name.clone(),
                        course_code: course.course_code.clone(),
                        duration: course.duration.to_string(),
                    });
                    let hydrated = cascade
                        .try_update(|c| c.hydrate(&[course.program_id]))
                        .unwrap_or(false);
                    if !hydrated {
                        notify.warning(
                            "The program this course belonged to no longer exists. Please select one.",
                        );
                    }
                }
                Ok(None) => notify.error("Course not found"),
                Err(e) => {
                    log::error!("Failed to load course {}: {}", id, e);
                    notify.error(e.to_string());
                }
            }
        }
    });

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();

    let save = move |_| {
        let snapshot = form.get_untracked();
        let program_id = cascade.with_untracked(|c| c.selected_id(0));
        let checked = validate_form(&snapshot, program_id);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FormErrors::new());

        let (Some(program_id), Ok(duration)) = (
            program_id,
            validate::positive_int(&snapshot.duration, "Duration"),
        ) else {
            return;
        };

        if auth_storage::get_session().is_none() {
            notify.error("You must be logged in to perform this action");
            force_sign_in(set_auth_state);
            return;
        }

        is_saving.set(true);
        let payload = CoursePayload {
            program_id,
            course_name: snapshot.course_name,
            course_code: snapshot.course_code,
            duration,
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
                        "Course updated successfully"
                    } else {
                        "Course created successfully"
                    });
                    nav("/courses", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save course: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Course"
    } else {
        "Add Course"
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Course"</legend>
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
                    <Input
                        label="Course Name"
                        value=Signal::derive(move || form.with(|f| f.course_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.course_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("course_name")))
                    />
                    <Input
                        label="Course Code"
                        value=Signal::derive(move || form.with(|f| f.course_code.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.course_code = v))
                        error=Signal::derive(move || errors.with(|e| e.get("course_code")))
                    />
                    <Input
                        label="Duration (months)"
                        value=Signal::derive(move || form.with(|f| f.duration.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.duration = v))
                        placeholder="12"
                        error=Signal::derive(move || errors.with(|e| e.get("duration")))
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| nav_cancel("/courses", Default::default()))
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
