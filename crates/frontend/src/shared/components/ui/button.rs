use leptos::prelude::*;

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Danger => "btn btn--danger",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] button_type: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let full_class = move || {
        let mut c = variant.class().to_string();
        if let Some(extra) = class.get() {
            c.push(' ');
            c.push_str(&extra);
        }
        c
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=full_class
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
