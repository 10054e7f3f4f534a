use contracts::domain::common::SelectOption;
use leptos::prelude::*;

/// Select over [`SelectOption`]s. The change handler receives the full
/// resolved option (or `None` for the placeholder row), so callers get
/// the record id back without re-deriving it from the displayed text.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Value of the selected option, empty when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<Option<SelectOption>>>,
    /// Options to offer
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Placeholder row shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state, reactive for dependent dropdowns
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Validation error shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select...".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || {
                    if error.get().is_some() {
                        "form__select form__select--invalid"
                    } else {
                        "form__select"
                    }
                }
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        let selected = event_target_value(&ev);
                        let option = options
                            .get_untracked()
                            .into_iter()
                            .find(|o| o.value == selected);
                        handler.run(option);
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let option_value = option.value.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=option.value.clone() selected=is_selected>
                                {option.label.clone()}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}
        </div>
    }
}
