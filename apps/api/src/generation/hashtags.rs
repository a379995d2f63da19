//! Hashtag formatting shared by demo output, live-result normalization and
//! the history listing.

/// Number of tags shown per history item.
pub const HISTORY_TAG_LIMIT: usize = 5;

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `#` followed by the project name with all whitespace removed.
/// Falls back to `#project` when the name is blank.
pub fn project_hashtag(project_name: &str) -> String {
    let compact = strip_whitespace(project_name);
    if compact.is_empty() {
        "#project".to_string()
    } else {
        format!("#{compact}")
    }
}

/// Canonical display form: no whitespace, exactly one leading `#`.
/// Returns `None` for tags with no content.
pub fn display_hashtag(tag: &str) -> Option<String> {
    let compact = strip_whitespace(tag);
    let body = compact.trim_start_matches('#');
    if body.is_empty() {
        None
    } else {
        Some(format!("#{body}"))
    }
}

/// First `limit` displayable tags, in order.
pub fn display_hashtags(tags: &[String], limit: usize) -> Vec<String> {
    tags.iter()
        .filter_map(|t| display_hashtag(t))
        .take(limit)
        .collect()
}
