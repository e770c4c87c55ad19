//! Cleans the raw model response before display.

/// Trims the text and removes a code fence wrapped around the whole answer,
/// including an info string such as ```` ```markdown ````.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed.to_string();
    };

    // Drop the info string on the opening fence line.
    let body = match inner.split_once('\n') {
        Some((info, body)) if !info.trim().contains(' ') => body,
        _ => inner,
    };
    body.trim().to_string()
}
