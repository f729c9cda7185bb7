use leptos::prelude::*;

/// Display form of a badge label: the text itself, or a placeholder dash
/// when the value is blank. Badge content is always a text node.
pub fn badge_text(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge text content; rendered as text, never markup
    #[prop(into)]
    text: Signal<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {move || badge_text(&text.get())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text_placeholder() {
        assert_eq!(badge_text(""), "-");
        assert_eq!(badge_text("  "), "-");
        assert_eq!(badge_text("FI"), "FI");
    }
}
