pub mod context;
pub mod sidebar;
pub mod top_header;

use context::use_layout;
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_layout();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div
                    data-zone="left"
                    class="app-sidebar"
                    class:hidden=move || !ctx.sidebar_open.get()
                >
                    <Sidebar />
                </div>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
