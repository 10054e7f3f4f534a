use contracts::domain::common::{RecordId, SelectOption};
use contracts::domain::employee::EmployeePayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::department::api as department_api;
use crate::domain::employee::api;
use crate::shared::components::ui::{Button, ButtonVariant, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::notify::use_notify;
use crate::shared::validate::{self, FormErrors};
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

/// Offered when the department table cannot be read; rows store the
/// display name, so a hardcoded list still produces valid employees.
const FALLBACK_DEPARTMENTS: [&str; 4] = ["Teaching", "Administration", "Accounts", "Support"];

#[derive(Clone, Default)]
struct EmployeeForm {
    first_name: String,
    last_name: String,
    mobile_number: String,
    email: String,
    gender: String,
    department: String,
    date_of_joining: String,
}

fn validate_form(form: &EmployeeForm) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check(
        "first_name",
        validate::required(&form.first_name, "First name"),
    );
    errors.check("last_name", validate::required(&form.last_name, "Last name"));
    errors.check(
        "mobile_number",
        validate::exact_digits(&form.mobile_number, 10, "Mobile number"),
    );
    errors.check("email", validate::email(&form.email, "Email"));
    errors.check("gender", validate::required(&form.gender, "Gender"));
    errors.check(
        "department",
        validate::required(&form.department, "Department"),
    );
    errors.check(
        "date_of_joining",
        validate::date(&form.date_of_joining, "Date of joining"),
    );
    errors
}

#[component]
pub fn EmployeeDetails() -> impl IntoView {
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

    let form = RwSignal::new(EmployeeForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let is_saving = RwSignal::new(false);

    let departments = RwSignal::new(Vec::<SelectOption>::new());

    spawn_local(async move {
        match department_api::fetch_active().await {
            Ok(rows) => {
                departments.set(
                    rows.iter()
                        .map(|d| SelectOption::plain(&d.department_name, &d.department_name))
                        .collect(),
                );
            }
            Err(e) => {
                log::warn!("Falling back to builtin department list: {}", e);
                departments.set(
                    FALLBACK_DEPARTMENTS
                        .iter()
                        .map(|name| SelectOption::plain(*name, *name))
                        .collect(),
                );
            }
        }

        if let Some(id) = edit_id.get_untracked() {
            match api::fetch_by_id(id).await {
                Ok(Some(employee)) => {
                    form.set(EmployeeForm {
                        first_name: employee.first_name,
                        last_name: employee.last_name,
                        mobile_number: employee.mobile_number,
                        email: employee.email,
                        gender: employee.gender,
                        department: employee.department,
                        date_of_joining: employee.date_of_joining.format("%Y-%m-%d").to_string(),
                    });
                }
                Ok(None) => notify.error("Employee not found"),
                Err(e) => {
                    log::error!("Failed to load employee {}: {}", id, e);
                    notify.error(e.to_string());
                }
            }
        }
    });

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();

    let save = move |_| {
        let snapshot = form.get_untracked();
        let checked = validate_form(&snapshot);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FormErrors::new());

        let Ok(date_of_joining) = validate::date(&snapshot.date_of_joining, "Date of joining")
        else {
            return;
        };

        if auth_storage::get_session().is_none() {
            notify.error("You must be logged in to perform this action");
            force_sign_in(set_auth_state);
            return;
        }

        is_saving.set(true);
        let payload = EmployeePayload {
            first_name: snapshot.first_name,
            last_name: snapshot.last_name,
            mobile_number: snapshot.mobile_number,
            email: snapshot.email,
            gender: snapshot.gender,
            department: snapshot.department,
            date_of_joining: Some(date_of_joining),
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
                        "Employee updated successfully"
                    } else {
                        "Employee created successfully"
                    });
                    nav("/employees", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to save employee: {}", e);
                    notify.error(e.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let title = if edit_id.get_untracked().is_some() {
        "Edit Employee"
    } else {
        "Add Employee"
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
                    <legend>"Employee"</legend>
                    <Input
                        label="First Name"
                        value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.first_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("first_name")))
                    />
                    <Input
                        label="Last Name"
                        value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.last_name = v))
                        error=Signal::derive(move || errors.with(|e| e.get("last_name")))
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
                    <Select
                        label="Department"
                        value=Signal::derive(move || form.with(|f| f.department.clone()))
                        options=departments
                        on_change=Callback::new(move |option: Option<SelectOption>| {
                            form.update(|f| {
                                f.department = option.map(|o| o.value).unwrap_or_default();
                            });
                        })
                        placeholder="Select department"
                        error=Signal::derive(move || errors.with(|e| e.get("department")))
                    />
                    <Input
                        label="Date of Joining"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.date_of_joining.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.date_of_joining = v))
                        error=Signal::derive(move || errors.with(|e| e.get("date_of_joining")))
                    />
                </fieldset>

                <div class="form__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| nav_cancel("/employees", Default::default()))
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
