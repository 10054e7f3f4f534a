use contracts::domain::branch::{Branch, BranchPayload};
use contracts::domain::common::{RecordId, SelectOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::branch::api;
use crate::shared::components::ui::{Button, ButtonVariant, FilePicker, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::data::storage;
use crate::shared::geo;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

fn validate_form(payload: &BranchPayload) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(
        "center_code",
        validate::alphanumeric(&payload.center_code, "Center code"),
    );
    errors.check(
        "center_name",
        validate::min_len(&payload.center_name, 3, "Center name"),
    );
    errors.check(
        "society_trust_company",
        validate::required(&payload.society_trust_company, "Society / trust / company"),
    );
    errors.check(
        "reg_no",
        validate::alphanumeric(&payload.reg_no, "Registration number"),
    );
    errors.check(
        "reg_year",
        validate::exact_digits(&payload.reg_year, 4, "Registration year"),
    );
    errors.check(
        "center_address",
        validate::required(&payload.center_address, "Center address"),
    );
    errors.check(
        "contact_no",
        validate::exact_digits(&payload.contact_no, 10, "Contact number"),
    );
    errors.check("state", validate::required(&payload.state, "State"));
    errors.check("city", validate::required(&payload.city, "City"));
    errors.check("name", validate::required(&payload.name, "Head name"));
    errors.check("gender", validate::required(&payload.gender, "Gender"));
    errors.check(
        "mobile_number",
        validate::exact_digits(&payload.mobile_number, 10, "Mobile number"),
    );
    errors.check("email", validate::email(&payload.email, "Email"));
    errors.check("address", validate::required(&payload.address, "Address"));
    errors
}

#[component]
pub fn BranchDetails() -> impl IntoView {
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

    let form = RwSignal::new(BranchPayload::default());
    let errors = RwSignal::new(FormErrors::new());
    let existing = RwSignal::new(Option::<Branch>::None);
    let is_saving = RwSignal::new(false);

    // the picked logo lives outside the reactive graph; File is a JS handle
    let logo_file = StoredValue::new_local(Option::<web_sys::File>::None);
    let logo_name = RwSignal::new(Option::<String>::None);

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

    // states first; on edit the stored state name is mapped back to its
    // code so the city list can be restored
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

        if let Some(id) = edit_id.get_untracked() {
            match api::fetch_by_id(id).await {
                Ok(Some(branch)) => {
                    form.set(BranchPayload {
                        center_code: branch.center_code.clone(),
                        center_name: branch.center_name.clone(),
                        society_trust_company: branch.society_trust_company.clone(),
                        reg_no: branch.reg_no.clone(),
                        reg_year: branch.reg_year.clone(),
                        center_address: branch.center_address.clone(),
                        contact_no: branch.contact_no.clone(),
                        state: branch.state.clone(),
                        city: branch.city.clone(),
                        name: branch.name.clone(),
                        gender: branch.gender.clone(),
                        mobile_number: branch.mobile_number.clone(),
                        email: branch.email.clone(),
                        address: branch.address.clone(),
                        address_proof: branch.address_proof.clone(),
                        id_number: branch.id_number.clone(),
                        logo_url: branch.logo_url.clone(),
                    });
                    if let Some(state_option) = loaded_states
                        .iter()
                        .find(|option| option.label == branch.state)
                    {
                        load_cities(state_option.value.clone());
                    }
                    existing.set(Some(branch));
                }
                Ok(None) => notify.error("Branch not found"),
                Err(e) => {
                    log::error!("Failed to load branch {}: {}", id, e);
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
        let picked = logo_file.get_value();
        let previous_logo = existing.with_untracked(|b| b.as_ref().and_then(|b| b.logo_url.clone()));
        let nav = nav_back.clone();

        spawn_local(async move {
            let mut payload = payload;

            if let Some(file) = picked {
                // replacing the logo removes the old object before the new
                // upload; a leftover file is only a warning
                if let Some(old_path) = previous_logo
                    .as_deref()
                    .and_then(storage::object_path_from_public_url)
                {
                    if let Err(e) = storage::remove_file(api::LOGO_BUCKET, &old_path).await {
                        log::warn!("Could not remove previous logo: {}", e);
                    }
                }
                let path = storage::timestamped_path("branch", &file.name());
                match storage::upload_file(api::LOGO_BUCKET, &path, &file).await {
                    Ok(url) => payload.logo_url = Some(url),
                    Err(e) => {
                        log::error!("Logo upload failed: {}", e);
                        notify.error(format!("Logo upload failed: {}", e));
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
                        "Branch updated successfully"
                    } else {
                        "Branch created successfully"
                    });
                    nav("/branches", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save branch: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Branch"
    } else {
        "Add Branch"
    };

    let gender_options = Signal::derive(|| {
        vec![
            SelectOption::plain("Male", "Male"),
            SelectOption::plain("Female", "Female"),
            SelectOption::plain("Other", "Other"),
        ]
    });

    view! {
        <div class="page">
            <PageHeader title=title>
                {()}
            </PageHeader>

            <form class="form" on:submit=move |ev| ev.prevent_default()>
                <fieldset class="form__section">
                    <legend>"Center"</legend>
                    <Input
                        label="Center Code"
                        value=Signal::derive(move || form.with(|f| f.center_code.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.center_code = v))
                        error=Signal::derive(move || errors.with(|e| e.get("center_code")))
                    />
                    <Input
                        label="Center Name"
                        value=Signal::derive(move || form.with(|f| f.center_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.center_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("center_name")))
                    />
                    <Input
                        label="Society / Trust / Company"
                        value=Signal::derive(move || form.with(|f| f.society_trust_company.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.society_trust_company = v))
                        error=Signal::derive(move || errors.with(|e| e.get("society_trust_company")))
                    />
                    <Input
                        label="Registration No."
                        value=Signal::derive(move || form.with(|f| f.reg_no.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.reg_no = v))
                        error=Signal::derive(move || errors.with(|e| e.get("reg_no")))
                    />
                    <Input
                        label="Registration Year"
                        value=Signal::derive(move || form.with(|f| f.reg_year.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.reg_year = v))
                        placeholder="2015"
                        error=Signal::derive(move || errors.with(|e| e.get("reg_year")))
                    />
                    <Input
                        label="Center Address"
                        value=Signal::derive(move || form.with(|f| f.center_address.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.center_address = v))
                        error=Signal::derive(move || errors.with(|e| e.get("center_address")))
                    />
                    <Input
                        label="Contact Number"
                        value=Signal::derive(move || form.with(|f| f.contact_no.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.contact_no = v))
                        placeholder="10-digit number"
                        error=Signal::derive(move || errors.with(|e| e.get("contact_no")))
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
                    <FilePicker
                        label="Logo"
                        accept="image/*"
                        hint=Signal::derive(move || logo_name.get())
                        on_file=move |file: web_sys::File| {
                            logo_name.set(Some(file.name()));
                            logo_file.set_value(Some(file));
                        }
                    />
                </fieldset>

                <fieldset class="form__section">
                    <legend>"Head of Branch"</legend>
                    <Input
                        label="Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("name")))
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
                        label="Mobile Number"
                        value=Signal::derive(move || form.with(|f| f.mobile_number.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.mobile_number = v))
                        placeholder="10-digit number"
                        error=Signal::derive(move || errors.with(|e| e.get("mobile_number")))
                    />
                    <Input
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=Signal::derive(move || errors.with(|e| e.get("email")))
                    />
                    <Input
                        label="Address"
                        value=Signal::derive(move || form.with(|f| f.address.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.address = v))
                        error=Signal::derive(move || errors.with(|e| e.get("address")))
                    />
                    <Input
                        label="Address Proof"
                        value=Signal::derive(move || {
                            form.with(|f| f.address_proof.clone().unwrap_or_default())
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| {
                                f.address_proof = (!v.is_empty()).then_some(v);
                            })
                        })
                    />
                    <Input
                        label="ID Number"
                        value=Signal::derive(move || {
                            form.with(|f| f.id_number.clone().unwrap_or_default())
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| {
                                f.id_number = (!v.is_empty()).then_some(v);
                            })
                        })
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| nav_cancel("/branches", Default::default()))
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
