use contracts::domain::common::{RecordId, SelectOption};
use contracts::domain::student::StudentPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::program::api as program_api;
use crate::domain::student::api;
use crate::shared::cascade::{nodes_from_programs, CascadeResolver};
use crate::shared::components::ui::{Button, ButtonVariant, FilePicker, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::data::storage;
use crate::shared::geo;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

#[derive(Clone, Default)]
struct StudentForm {
    student_name: String,
    father_name: String,
    mother_name: String,
    gender: String,
    caste: String,
    marital_status: String,
    mobile_number: String,
    parents_contact: String,
    identity_type: String,
    identity_number: String,
    last_qualification: String,
    address: String,
    pincode: String,
    state: String,
    city: String,
    email: String,
    dob: String,
    net_fee: String,
    discount: String,
    inquiry_source: String,
}

fn validate_form(
    form: &StudentForm,
    program_id: Option<RecordId>,
    course_id: Option<RecordId>,
) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(
        "student_name",
        validate::min_len(&form.student_name, 3, "Student name"),
    );
    errors.check(
        "father_name",
        validate::required(&form.father_name, "Father's name"),
    );
    errors.check(
        "mother_name",
        validate::required(&form.mother_name, "Mother's name"),
    );
    errors.check("gender", validate::required(&form.gender, "Gender"));
    errors.check("dob", validate::date(&form.dob, "Date of birth"));
    errors.check(
        "marital_status",
        validate::required(&form.marital_status, "Marital status"),
    );
    errors.check(
        "mobile_number",
        validate::exact_digits(&form.mobile_number, 10, "Mobile number"),
    );
    if !form.parents_contact.trim().is_empty() {
        errors.check(
            "parents_contact",
            validate::exact_digits(&form.parents_contact, 10, "Parents' contact"),
        );
    }
    errors.check("email", validate::email(&form.email, "Email"));
    errors.check(
        "identity_type",
        validate::required(&form.identity_type, "Identity type"),
    );
    errors.check(
        "identity_number",
        validate::required(&form.identity_number, "Identity number"),
    );
    errors.check("address", validate::required(&form.address, "Address"));
    errors.check("pincode", validate::exact_digits(&form.pincode, 6, "Pincode"));
    errors.check("state", validate::required(&form.state, "State"));
    errors.check("city", validate::required(&form.city, "City"));
    errors.check("program", validate::selected(&program_id, "Program"));
    errors.check("course", validate::selected(&course_id, "Course"));
    errors.check("net_fee", validate::positive_number(&form.net_fee, "Net fee"));
    if !form.discount.trim().is_empty() {
        errors.check(
            "discount",
            validate::positive_number(&form.discount, "Discount"),
        );
    }
    errors
}

#[component]
pub fn StudentDetails() -> impl IntoView {
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

    let form = RwSignal::new(StudentForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let is_saving = RwSignal::new(false);

    let photo_file = StoredValue::new_local(Option::<web_sys::File>::None);
    let photo_name = RwSignal::new(Option::<String>::None);
    let existing_photo = RwSignal::new(Option::<(Option<String>, Option<String>)>::None);

    // level 0 = program, level 1 = course
    let cascade = RwSignal::new(CascadeResolver::new(2));

    let states = RwSignal::new(Vec::<SelectOption>::new());
    let cities = RwSignal::new(Vec::<SelectOption>::new());

    let load_cities = move |state_code: String| {
        spawn_local(async move {
            match geo::cities_of_state(&state_code).await {
                Ok(list) => cities.set(list),
                Err(e) => {
                    log::error!("Failed to load cities: {}", e);
                    notify.error(e);
                    cities.set(Vec::new());
                }
            }
        });
    };

    spawn_local(async move {
        let loaded_states = match geo::indian_states().await {
            Ok(list) => {
                states.set(list.clone());
                list
            }
            Err(e) => {
                log::error!("Failed to load states: {}", e);
                notify.error(e);
                Vec::new()
            }
        };

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
                Ok(Some(student)) => {
                    form.set(StudentForm {
                        student_name: student.student_name,
                        father_name: student.father_name,
                        mother_name: student.mother_name,
                        gender: student.gender,
                        caste: student.caste.unwrap_or_default(),
                        marital_status: student.marital_status,
                        mobile_number: student.mobile_number,
                        parents_contact: student.parents_contact.unwrap_or_default(),
                        identity_type: student.identity_type,
                        identity_number: student.identity_number,
                        last_qualification: student.last_qualification.unwrap_or_default(),
                        address: student.address,
                        pincode: student.pincode,
                        state: student.state.clone(),
                        city: student.city,
                        email: student.email,
                        dob: student.dob.format("%Y-%m-%d").to_string(),
                        net_fee: student.net_fee.to_string(),
                        discount: student
                            .discount
                            .map(|d| d.to_string())
                            .unwrap_or_default(),
                        inquiry_source: student.inquiry_source.unwrap_or_default(),
                    });
                    existing_photo.set(Some((student.student_image, student.student_image_url)));
                    if let Some(state_option) = loaded_states
                        .iter()
                        .find(|option| option.label == student.state)
                    {
                        load_cities(state_option.value.clone());
                    }
                    let hydrated = cascade
                        .try_update(|c| c.hydrate(&[student.program_id, student.course_id]))
                        .unwrap_or(false);
                    if !hydrated {
                        notify.warning(
                            "The stored program/course pair no longer exists. Please reselect.",
                        );
                    }
                }
                Ok(None) => notify.error("Student not found"),
                Err(e) => {
                    log::error!("Failed to load student {}: {}", id, e);
                    notify.error(e.to_string());
                }
            }
        }
    });

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();

    let save = move |_| {
        let snapshot = form.get_untracked();
        let (program_id, course_id) =
            cascade.with_untracked(|c| (c.selected_id(0), c.selected_id(1)));
        let checked = validate_form(&snapshot, program_id, course_id);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FormErrors::new());

        let (Some(program_id), Some(course_id), Ok(dob), Ok(net_fee)) = (
            program_id,
            course_id,
            validate::date(&snapshot.dob, "Date of birth"),
            validate::positive_number(&snapshot.net_fee, "Net fee"),
        ) else {
            return;
        };
        let discount = if snapshot.discount.trim().is_empty() {
            None
        } else {
            match validate::positive_number(&snapshot.discount, "Discount") {
                Ok(n) => Some(n),
                Err(_) => return,
            }
        };

        if auth_storage::get_session().is_none() {
            notify.error("You must be logged in to perform this action");
            force_sign_in(set_auth_state);
            return;
        }

        is_saving.set(true);
        let picked = photo_file.get_value();
        let previous_photo = existing_photo.get_untracked();
        let nav = nav_back.clone();

        spawn_local(async move {
            let opt = |v: String| (!v.is_empty()).then_some(v);

            let mut payload = StudentPayload {
                student_name: snapshot.student_name,
                father_name: snapshot.father_name,
                mother_name: snapshot.mother_name,
                gender: snapshot.gender,
                caste: opt(snapshot.caste),
                marital_status: snapshot.marital_status,
                mobile_number: snapshot.mobile_number,
                parents_contact: opt(snapshot.parents_contact),
                identity_type: snapshot.identity_type,
                identity_number: snapshot.identity_number,
                last_qualification: opt(snapshot.last_qualification),
                address: snapshot.address,
                pincode: snapshot.pincode,
                state: snapshot.state,
                city: snapshot.city,
                email: snapshot.email,
                dob: Some(dob),
                program_id,
                course_id,
                net_fee,
                discount,
                inquiry_source: opt(snapshot.inquiry_source),
                student_image: None,
                student_image_url: None,
            };

            if let Some(file) = picked {
                let path = storage::timestamped_path("student", &file.name());
                match storage::upload_file(api::PHOTO_BUCKET, &path, &file).await {
                    Ok(url) => {
                        payload.student_image = Some(file.name());
                        payload.student_image_url = Some(url);
                    }
                    Err(e) => {
                        log::error!("Photo upload failed: {}", e);
                        notify.error(format!("Photo upload failed: {}", e));
                        is_saving.set(false);
                        return;
                    }
                }
            } else if let Some((image, image_url)) = previous_photo {
                payload.student_image = image;
                payload.student_image_url = image_url;
            }

            let result = match edit_id.get_untracked() {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            match result {
                Ok(()) => {
                    notify.success(if edit_id.get_untracked().is_some() {
                        "Student updated successfully"
                    } else {
                        "Student created successfully"
                    });
                    nav("/students", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save student: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Student"
    } else {
        "Add Student"
    };

    let gender_options = Signal::derive(|| {
        vec![
            SelectOption::plain("Male", "Male"),
            SelectOption::plain("Female", "Female"),
            SelectOption::plain("Other", "Other"),
        ]
    });
    let marital_options = Signal::derive(|| {
        vec![
            SelectOption::plain("Single", "Single"),
            SelectOption::plain("Married", "Married"),
            SelectOption::plain("Divorced", "Divorced"),
            SelectOption::plain("Widowed", "Widowed"),
        ]
    });
    let identity_options = Signal::derive(|| {
        vec![
            SelectOption::plain("Aadhaar Card", "Aadhaar Card"),
            SelectOption::plain("PAN Card", "PAN Card"),
            SelectOption::plain("Passport", "Passport"),
            SelectOption::plain("Voter ID", "Voter ID"),
            SelectOption::plain("Driving License", "Driving License"),
        ]
    });
    let inquiry_options = Signal::derive(|| {
        vec![
            SelectOption::plain("Walk-in", "Walk-in"),
            SelectOption::plain("Friends", "Friends"),
            SelectOption::plain("Newspaper", "Newspaper"),
            SelectOption::plain("Website", "Website"),
            SelectOption::plain("Social Media", "Social Media"),
        ]
    });

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Personal"</legend>
                    <Input
                        label="Student Name"
                        value=Signal::derive(move || form.with(|f| f.student_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.student_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("student_name")))
                    />
                    <Input
                        label="Father's Name"
                        value=Signal::derive(move || form.with(|f| f.father_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.father_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("father_name")))
                    />
                    <Input
                        label="Mother's Name"
                        value=Signal::derive(move || form.with(|f| f.mother_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.mother_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("mother_name")))
                    />
                    <Select
                        label="Gender"
                        value=Signal::derive(move || form.with(|f| f.gender.clone()))
                        options=gender_options
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            form.update(|f| f.gender = option.map(|o| o.value).unwrap_or_default());
                        })
                        placeholder="Select gender"
                        error=Signal::derive(move || errors.with(|e| e.get("gender")))
                    />
                    <Input
                        label="Date of Birth"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.dob.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.dob = v))
                        error=Signal::derive(move || errors.with(|e| e.get("dob")))
                    />
                    <Input
                        label="Caste"
                        value=Signal::derive(move || form.with(|f| f.caste.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.caste = v))
                    />
                    <Select
                        label="Marital Status"
                        value=Signal::derive(move || form.with(|f| f.marital_status.clone()))
                        options=marital_options
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            form.update(|f| {
                                f.marital_status = option.map(|o| o.value).unwrap_or_default();
                            });
                        })
                        placeholder="Select marital status"
                        error=Signal::derive(move || errors.with(|e| e.get("marital_status")))
                    />
                    <FilePicker
                        label="Photo"
                        accept="image/*"
                        hint=Signal::derive(move || {
                            photo_name
                                .get()
                                .or_else(|| {
                                    existing_photo
                                        .with(|p| {
                                            p.as_ref()
                                                .and_then(|(image, _)| image.clone())
                                        })
                                })
                        })
                        on_file=move |file: web_sys::File| {
                            photo_name.set(Some(file.name()));
                            photo_file.set_value(Some(file));
                        }
                    />
                </fieldset>

                <fieldset class="form__section">
                    <legend>"Contact & Identity"</legend>
                    <Input
                        label="Mobile Number"
                        value=Signal::derive(move || form.with(|f| f.mobile_number.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.mobile_number = v))
                        placeholder="10-digit number"
                        error=Signal::derive(move || errors.with(|e| e.get("mobile_number")))
                    />
                    <Input
                        label="Parents' Contact"
                        value=Signal::derive(move || form.with(|f| f.parents_contact.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.parents_contact = v))
                        placeholder="Optional"
                        error=Signal::derive(move || errors.with(|e| e.get("parents_contact")))
                    />
                    <Input
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=Signal::derive(move || errors.with(|e| e.get("email")))
                    />
                    <Select
                        label="Identity Type"
                        value=Signal::derive(move || form.with(|f| f.identity_type.clone()))
                        options=identity_options
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            form.update(|f| {
                                f.identity_type = option.map(|o| o.value).unwrap_or_default();
                            });
                        })
                        placeholder="Select identity type"
                        error=Signal::derive(move || errors.with(|e| e.get("identity_type")))
                    />
                    <Input
                        label="Identity Number"
                        value=Signal::derive(move || form.with(|f| f.identity_number.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.identity_number = v))
                        error=Signal::derive(move || errors.with(|e| e.get("identity_number")))
                    />
                    <Input
                        label="Address"
                        value=Signal::derive(move || form.with(|f| f.address.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.address = v))
                        error=Signal::derive(move || errors.with(|e| e.get("address")))
                    />
                    <Select
                        label="State"
                        value=Signal::derive(move || {
                            let name = form.with(|f| f.state.clone());
                            states
                                .with(|list| {
                                    list.iter().find(|o| o.label == name).map(|o| o.value.clone())
                                })
                                .unwrap_or_default()
                        })
                        options=states
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            match option {
                                Some(option) => {
                                    form.update(|f| {
                                        f.state = option.label.clone();
                                        f.city = String::new();
                                    });
                                    load_cities(option.value);
                                }
                                None => {
                                    form.update(|f| {
                                        f.state = String::new();
                                        f.city = String::new();
                                    });
                                    cities.set(Vec::new());
                                }
                            }
                        })
                        placeholder="Select state"
                        error=Signal::derive(move || errors.with(|e| e.get("state")))
                    />
                    <Select
                        label="City"
                        value=Signal::derive(move || form.with(|f| f.city.clone()))
                        options=cities
                        disabled=Signal::derive(move || form.with(|f| f.state.is_empty()))
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            form.update(|f| f.city = option.map(|o| o.value).unwrap_or_default());
                        })
                        placeholder="Select city"
                        error=Signal::derive(move || errors.with(|e| e.get("city")))
                    />
                    <Input
                        label="Pincode"
                        value=Signal::derive(move || form.with(|f| f.pincode.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.pincode = v))
                        placeholder="6-digit code"
                        error=Signal::derive(move || errors.with(|e| e.get("pincode")))
                    />
                </fieldset>

                <fieldset class="form__section">
                    <legend>"Admission"</legend>
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
                    <Input
                        label="Last Qualification"
                        value=Signal::derive(move || form.with(|f| f.last_qualification.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.last_qualification = v))
                        placeholder="Optional"
                    />
                    <Select
                        label="Inquiry Source"
                        value=Signal::derive(move || form.with(|f| f.inquiry_source.clone()))
                        options=inquiry_options
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            form.update(|f| {
                                f.inquiry_source = option.map(|o| o.value).unwrap_or_default();
                            });
                        })
                        placeholder="Optional"
                    />
                    <Input
                        label="Net Fee"
                        value=Signal::derive(move || form.with(|f| f.net_fee.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.net_fee = v))
                        placeholder="15000"
                        error=Signal::derive(move || errors.with(|e| e.get("net_fee")))
                    />
                    <Input
                        label="Discount"
                        value=Signal::derive(move || form.with(|f| f.discount.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.discount = v))
                        placeholder="Optional"
                        error=Signal::derive(move || errors.with(|e| e.get("discount")))
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| nav_cancel("/students", Default::default()))
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
