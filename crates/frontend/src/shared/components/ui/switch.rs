use leptos::prelude::*;

/// Checkbox-backed toggle used for activate/deactivate actions
#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="switch">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_toggle {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="switch__slider"></span>
        </label>
    }
}
