use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not found")
}
