use crate::shared::icons::icon;
use leptos::prelude::*;

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Count tile on the dashboard. `None` renders a placeholder while the
/// count request is in flight.
#[component]
pub fn StatCard(
    /// Label displayed next to the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    #[prop(into)] value: Signal<Option<u64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
