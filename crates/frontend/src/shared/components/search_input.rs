use leptos::prelude::*;

/// Controlled search box. Emits every keystroke; debouncing is the caller's
/// concern so that list state can hand out generation tickets.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="search">
            <input
                type="text"
                class="search__input"
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    type="button"
                    class="search__clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
