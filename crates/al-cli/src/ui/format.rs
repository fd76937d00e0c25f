//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};

/// Format a timestamp for list output.
///
/// Pretty mode shows the local calendar day; plain mode keeps the full
/// RFC 3339 value for scripts.
pub fn format_date(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Join keywords for display.
pub fn format_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}

/// Render a list of names as "a, b or c".
pub fn human_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} or {}", head.join(", "), last),
    }
}
