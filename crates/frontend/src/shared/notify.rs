//! Toast notifications shown in the top-right corner.
//!
//! Provided once at the app root; pages report operation outcomes through
//! this service instead of rendering their own banners.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

#[derive(Clone)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // try_update: the host may already be torn down when the timer fires
            let _ = svc.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not provided in context")
}

/// Renders the toast stack. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_notify();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Warning => "toast toast--warning",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| svc.dismiss(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
