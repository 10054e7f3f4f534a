use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, ListRow};
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use std::sync::Arc;

const SKELETON_ROWS: usize = 5;

/// One column of a [`DataTable`]: header label plus a cell renderer.
pub struct ColumnDef<R> {
    pub key: &'static str,
    pub label: &'static str,
    render: Arc<dyn Fn(&R) -> AnyView + Send + Sync>,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            render: Arc::clone(&self.render),
        }
    }
}

impl<R> ColumnDef<R> {
    /// Plain text cell.
    pub fn text(
        key: &'static str,
        label: &'static str,
        value: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            render: Arc::new(move |row| value(row).into_any()),
        }
    }

    /// Arbitrary view cell (badges, toggles, links).
    pub fn view(
        key: &'static str,
        label: &'static str,
        render: impl Fn(&R) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            render: Arc::new(render),
        }
    }

    pub fn render(&self, row: &R) -> AnyView {
        (self.render)(row)
    }
}

/// Table over a [`ListController`]: skeleton rows while loading, empty
/// message, per-row edit/delete actions and a pager once the rows spill
/// past one page.
#[component]
pub fn DataTable<R>(
    state: RwSignal<ListController<R>>,
    columns: Vec<ColumnDef<R>>,
    #[prop(optional)] on_edit: Option<Callback<RecordId>>,
    #[prop(optional)] on_delete: Option<Callback<R>>,
    #[prop(optional, into)] empty_message: MaybeProp<String>,
) -> impl IntoView
where
    R: ListRow,
{
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let span = columns.len() + usize::from(has_actions);
    let columns = StoredValue::new(columns);

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|col| view! { <th>{col.label}</th> })
            .collect_view()
    });

    let body = move || {
        if state.with(|s| s.is_loading()) {
            (0..SKELETON_ROWS)
                .map(|_| {
                    view! {
                        <tr class="data-table__skeleton-row">
                            <td colspan=span>
                                <div class="skeleton"></div>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        } else if state.with(|s| s.page_rows().is_empty()) {
            let message = empty_message
                .get()
                .unwrap_or_else(|| "No records found".to_string());
            view! {
                <tr class="data-table__empty-row">
                    <td colspan=span>{message}</td>
                </tr>
            }
            .into_any()
        } else {
            state
                .with(|s| s.page_rows().to_vec())
                .into_iter()
                .map(|row| {
                    let cells = columns.with_value(|cols| {
                        cols.iter()
                            .map(|col| {
                                let cell = col.render(&row);
                                view! { <td>{cell}</td> }
                            })
                            .collect_view()
                    });
                    let actions = has_actions.then(|| {
                        let id = row.id();
                        let staged = row.clone();
                        view! {
                            <td class="data-table__actions">
                                {on_edit.map(|cb| view! {
                                    <button
                                        class="icon-btn"
                                        title="Edit"
                                        on:click=move |_| cb.run(id)
                                    >
                                        {icon("edit")}
                                    </button>
                                })}
                                {on_delete.map(|cb| view! {
                                    <button
                                        class="icon-btn icon-btn--danger"
                                        title="Delete"
                                        on:click=move |_| cb.run(staged.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                })}
                            </td>
                        }
                    });
                    view! {
                        <tr>
                            {cells}
                            {actions}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="data-table">
            <table class="data-table__table">
                <thead>
                    <tr>
                        {header}
                        <Show when=move || has_actions>
                            <th class="data-table__actions-header">"Actions"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <Show when=move || state.with(|s| s.total_pages() > 1)>
                <div class="data-table__footer">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page()))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        total_count=Signal::derive(move || state.with(|s| s.row_count()))
                        on_page_change=Callback::new(move |page| {
                            state.update(|s| s.set_page(page))
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
