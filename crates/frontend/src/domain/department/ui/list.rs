use contracts::domain::common::RecordId;
use contracts::domain::department::Department;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::department::api;
use crate::shared::components::ui::{Button, ButtonVariant, Switch};
use crate::shared::components::{ColumnDef, ConfirmDialog, DataTable, PageHeader, SearchInput};
use crate::shared::list_controller::{create_state, ListRow, SEARCH_DEBOUNCE_MS};
use crate::shared::notify::use_notify;
use crate::shared::status_toggle::toggle_status;
use crate::system::auth::context::{force_sign_in, use_auth};
use crate::system::auth::storage as auth_storage;

impl ListRow for Department {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[component]
pub fn DepartmentList() -> impl IntoView {
    let state = create_state::<Department>();
    let notify = use_notify();
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let fetch = move |query: String| {
        state.update(|s| s.set_loading(true));
        spawn_local(async move {
            match api::fetch_all(&query).await {
                Ok(rows) => {
                    let _ = state.try_update(|s| {
                        s.set_rows(rows);
                        s.set_loading(false);
                    });
                }
                Err(e) => {
                    log::error!("Failed to load departments: {}", e);
                    notify.error(e.to_string());
                    let _ = state.try_update(|s| s.set_loading(false));
                }
            }
        });
    };

    fetch(String::new());

    let on_search = Callback::new(move |text: String| {
        let Some(ticket) = state.try_update(|s| s.set_search(text)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            let due = state
                .try_with_untracked(|s| s.take_due_search(ticket))
                .flatten();
            if let Some(query) = due {
                fetch(query);
            }
        });
    });

    let columns = vec![
        ColumnDef::text("name", "Department Name", |row: &Department| {
            row.department_name.clone()
        }),
        ColumnDef::view("status", "Status", move |row: &Department| {
            let id = row.id;
            let current = row.is_active;
            view! {
                <Switch
                    checked=current
                    on_toggle=Callback::new(move |_| {
                        spawn_local(async move {
                            toggle_status(
                                notify,
                                api::TABLE,
                                "Department",
                                id,
                                current,
                                move |next| {
                                    let _ = state
                                        .try_update(|s| s.patch_row(id, |r| r.is_active = next));
                                },
                                move || force_sign_in(set_auth_state),
                            )
                            .await;
                        });
                    })
                />
            }
            .into_any()
        }),
    ];

    let nav_add = navigate.clone();
    let nav_edit = navigate.clone();

    let on_edit = Callback::new(move |id: RecordId| {
        nav_edit(&format!("/departments/edit/{}", id), Default::default());
    });

    let on_delete = Callback::new(move |row: Department| {
        state.update(|s| s.request_delete(row));
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(row) = state.with_untracked(|s| s.pending_delete().cloned()) else {
            return;
        };
        if auth_storage::get_session().is_none() {
            notify.error("You must be logged in to perform this action");
            state.update(|s| s.cancel_delete());
            force_sign_in(set_auth_state);
            return;
        }
        state.update(|s| s.set_deleting(true));
        spawn_local(async move {
            match api::delete(row.id).await {
                Ok(()) => {
                    notify.success("Department deleted successfully");
                    let query = state
                        .try_with_untracked(|s| s.search_query().to_string())
                        .unwrap_or_default();
                    match api::fetch_all(&query).await {
                        Ok(rows) => {
                            let _ = state.try_update(|s| s.set_rows(rows));
                        }
                        Err(e) => log::error!("Refetch after delete failed: {}", e),
                    }
                }
                Err(e) => {
                    log::error!("Failed to delete department {}: {}", row.id, e);
                    notify.error(e.to_string());
                }
            }
            let _ = state.try_update(|s| {
                s.set_deleting(false);
                s.cancel_delete();
            });
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Departments" subtitle="Staff departments">
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| {
                        nav_add("/departments/add", Default::default())
                    })
                >
                    "Add Department"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_query().to_string()))
                    on_change=on_search
                    placeholder="Search by department name..."
                />
            </div>

            <DataTable
                state=state
                columns=columns
                on_edit=on_edit
                on_delete=on_delete
                empty_message="No departments found"
            />

            <Show when=move || state.with(|s| s.pending_delete().is_some())>
                <ConfirmDialog
                    title=Signal::derive(|| "Delete department".to_string())
                    message=Signal::derive(move || {
                        state.with(|s| {
                            s.pending_delete()
                                .map(|r| {
                                    format!(
                                        "Delete department \"{}\"? This cannot be undone.",
                                        r.department_name
                                    )
                                })
                                .unwrap_or_default()
                        })
                    })
                    busy=Signal::derive(move || state.with(|s| s.is_deleting()))
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| state.update(|s| s.cancel_delete()))
                />
            </Show>
        </div>
    }
}
