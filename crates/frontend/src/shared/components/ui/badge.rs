use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Danger,
    Info,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge--neutral",
            BadgeTone::Success => "badge badge--success",
            BadgeTone::Danger => "badge badge--danger",
            BadgeTone::Info => "badge badge--info",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

/// Active/Inactive pill used in list tables
#[component]
pub fn StatusBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || {
            if active.get() { "badge badge--success" } else { "badge badge--danger" }
        }>
            {move || if active.get() { "Active" } else { "Inactive" }}
        </span>
    }
}
