//! Shared text normalization helpers.

/// Trim an optional string and drop empty values.
///
/// # Returns
/// `None` when the input is missing or whitespace-only; otherwise the trimmed
/// string.
pub fn normalize_optional_nonempty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

/// Case-insensitive substring test against an already-lowercased needle.
///
/// When both sides are ASCII they are compared byte-wise without allocating a
/// lowered copy of the haystack. Any non-ASCII haystack goes through
/// [`str::to_lowercase`], so characters such as U+212A KELVIN SIGN that
/// lowercase to ASCII still match.
pub fn contains_case_insensitive(haystack: &str, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    if query_lower.is_ascii() && haystack.is_ascii() {
        let needle = query_lower.as_bytes();
        let hay = haystack.as_bytes();
        if needle.len() > hay.len() {
            return false;
        }
        return hay
            .windows(needle.len())
            .any(|window| window.iter().map(u8::to_ascii_lowercase).eq(needle.iter().copied()));
    }
    haystack.to_lowercase().contains(query_lower)
}
