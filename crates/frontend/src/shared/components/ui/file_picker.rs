use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Extracts the first selected file from a change event on `<input type="file">`.
pub fn file_from_event(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// File input with label. The handler receives the picked file; storing it
/// across renders requires a local (non-send) container such as
/// `StoredValue::new_local`.
#[component]
pub fn FilePicker<F>(
    on_file: F,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] accept: MaybeProp<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView
where
    F: Fn(web_sys::File) + Send + Sync + 'static,
{
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                type="file"
                class="form__file"
                accept=move || accept.get().unwrap_or_default()
                on:change=move |ev| {
                    if let Some(file) = file_from_event(&ev) {
                        on_file(file);
                    }
                }
            />
            {move || hint.get().map(|h| view! {
                <div class="form__hint">{h}</div>
            })}
            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}
        </div>
    }
}
