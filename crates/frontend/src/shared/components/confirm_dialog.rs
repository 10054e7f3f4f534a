use crate::shared::components::ui::{Button, ButtonVariant};
use leptos::prelude::*;

/// Blocking confirmation overlay, used before destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    /// Disables both buttons and swaps the confirm label while a delete runs
    #[prop(optional, into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3 class="dialog__title">{move || title.get()}</h3>
                <p class="dialog__message">{move || message.get()}</p>
                <div class="dialog__actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=busy
                        on_click=Callback::new(move |_| on_cancel.run(()))
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        disabled=busy
                        on_click=Callback::new(move |_| on_confirm.run(()))
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
