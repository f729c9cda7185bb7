//! Safe DOM construction helpers.
//!
//! Every string that originates from user input or a network response reaches
//! the DOM through this module (or through Leptos text nodes, which have the
//! same semantics): as text content, never as parsed markup. The one
//! exception is `render_content` for rich-text document bodies, which passes
//! the string through the sanitizer first.

use web_sys::Element;

pub const EMPTY_PLACEHOLDER: &str = "-";

/// Display form of an optional field: the value itself, or a placeholder
/// dash when the value is missing or blank.
pub fn display_text(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => EMPTY_PLACEHOLDER,
    }
}

/// Remove every child of `container`.
pub fn clear_children(container: &Element) {
    while let Some(child) = container.first_child() {
        let _ = container.remove_child(&child);
    }
}

/// Replace the content of `container` with `value` as plain text.
///
/// `set_text_content` creates a single text node, so the value is never
/// parsed as markup regardless of what it contains.
pub fn render_text(container: &Element, value: Option<&str>) {
    clear_children(container);
    container.set_text_content(Some(display_text(value)));
}

/// Escape `&`, `<` and `>` so the whole string renders as visible text.
///
/// This is the fail-closed fallback for markup display when the sanitizer
/// is not compiled in.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Sanitize a markup string from a trusted rich-text source: strips script
/// elements, inline event-handler attributes and `javascript:` URIs.
#[cfg(feature = "rich-text")]
pub fn sanitize_markup(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    ammonia::clean(html)
}

/// Without the `rich-text` feature there is no sanitizer; treat the whole
/// string as plain text rather than render unsanitized markup.
#[cfg(not(feature = "rich-text"))]
pub fn sanitize_markup(html: &str) -> String {
    escape_text(html)
}

/// The single seam through which document bodies reach the DOM.
///
/// Rich-text bodies are sanitized before insertion; everything else is
/// rendered as text content.
pub fn render_content(container: &Element, value: &str, rich: bool) {
    if rich {
        container.set_inner_html(&sanitize_markup(value));
    } else {
        render_text(container, Some(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_placeholder() {
        assert_eq!(display_text(None), "-");
        assert_eq!(display_text(Some("")), "-");
        assert_eq!(display_text(Some("   ")), "-");
        assert_eq!(display_text(Some("FI")), "FI");
    }

    #[test]
    fn test_display_text_keeps_special_characters() {
        // the text path must not alter the value: a text node renders it as-is
        let input = "a < b && c > d";
        assert_eq!(display_text(Some(input)), input);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert!(!escape_text("<script>alert(1)</script>").contains('<'));
    }

    #[test]
    fn test_escape_text_no_double_escaping_of_plain_text() {
        assert_eq!(escape_text("plain text 123"), "plain text 123");
    }

    #[cfg(feature = "rich-text")]
    #[test]
    fn test_sanitize_strips_event_handlers() {
        let out = sanitize_markup("<img src=x onerror=alert(1)>DROP");
        assert!(!out.contains("onerror"));
        assert!(out.contains("DROP"));
    }

    #[cfg(feature = "rich-text")]
    #[test]
    fn test_sanitize_strips_script_elements() {
        let out = sanitize_markup("<p>before</p><script>alert(1)</script>");
        assert!(!out.contains("<script"));
        assert!(out.contains("before"));
    }

    #[cfg(feature = "rich-text")]
    #[test]
    fn test_sanitize_strips_javascript_uris() {
        let out = sanitize_markup("<a href=\"javascript:alert(1)\">link</a>");
        assert!(!out.contains("javascript:"));
        assert!(out.contains("link"));
    }

    #[cfg(feature = "rich-text")]
    #[test]
    fn test_sanitize_keeps_benign_formatting() {
        let out = sanitize_markup("<p>Posting logic for <em>FB60</em></p>");
        assert!(out.contains("<em>"));
    }
}
