//! Normalization of quoted literals into dotted translation paths.

/// Characters accepted as the quote around a translation literal.
pub const QUOTE_CHARS: [char; 3] = ['\'', '"', '`'];

/// Turn a raw quoted literal into a canonical dotted path.
///
/// Every quote character is removed (not only the outer pair), surrounding
/// whitespace is trimmed and empty segments are dropped, so `"'.a..b.'"`
/// becomes `a.b`. A literal without any segment yields the empty string.
///
/// # Examples
///
/// ```
/// use lingua::core::normalize_path;
///
/// assert_eq!(normalize_path("'greeting.hello'"), "greeting.hello");
/// assert_eq!(normalize_path("\"..a..b.\""), "a.b");
/// assert_eq!(normalize_path("`...`"), "");
/// ```
pub fn normalize_path(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();

    stripped
        .trim()
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
