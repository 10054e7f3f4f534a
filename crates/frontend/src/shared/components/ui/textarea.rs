use leptos::prelude::*;

/// Textarea component with label and inline validation error
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let area_id = move || id.get().unwrap_or_default();
    let area_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=area_id>
                    {l}
                </label>
            })}
            <textarea
                id=area_id
                class=move || {
                    if error.get().is_some() {
                        "form__textarea form__textarea--invalid"
                    } else {
                        "form__textarea"
                    }
                }
                prop:value=move || value.get()
                placeholder=area_placeholder
                disabled=disabled
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}
        </div>
    }
}
