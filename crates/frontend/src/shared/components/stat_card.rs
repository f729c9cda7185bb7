use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat tile: a label and one counter.
///
/// `None` renders an em dash while the value is loading or failed.
#[component]
pub fn StatCard(
    /// Label displayed next to the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Counter value
    #[prop(into)]
    value: Signal<Option<u64>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__value">
                    {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())}
                </div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
