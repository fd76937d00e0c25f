//! Parsing helpers for `|`-separated lists and shortcut arguments.

/// Split a `|`-separated value into trimmed, non-empty entries.
pub fn split_pipe_list(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the shortcut list for `al init`.
///
/// Arguments are joined by spaces then split on `|`, so both
/// `al init "api|back"` and `al init api '|' back` work. The directory name
/// always comes first and is never repeated.
pub fn init_shortcuts(dir_name: &str, args: &[String]) -> Vec<String> {
    let mut shortcuts = vec![dir_name.to_string()];
    for part in split_pipe_list(&args.join(" ")) {
        if part != dir_name {
            shortcuts.push(part);
        }
    }
    shortcuts
}

/// Remove repeated entries while keeping first-seen order.
pub fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
