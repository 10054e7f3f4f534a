use leptos::prelude::*;

use crate::layout::context::LayoutContext;
use crate::routes::AppRoutes;
use crate::shared::notify::{NotifyService, ToastHost};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(LayoutContext::default());
    provide_context(NotifyService::new());

    view! {
        <AuthProvider>
            <ToastHost />
            <AppRoutes />
        </AuthProvider>
    }
}
