//! Value decomposition.
//!
//! Splits StringList values into entries and flattens Directory sub-paths
//! into data keys. Commas and equals signs inside values cannot be escaped.

use std::collections::BTreeMap;

/// Split a comma-delimited list into key/value entries.
///
/// Each segment is trimmed. `k=v` splits on the first `=`; a segment with
/// an empty left side is kept whole as a bare key, as is a segment without
/// `=`. Bare keys map to an empty value. Empty keys are skipped.
///
/// # Examples
///
/// ```
/// use paramsync::core::decompose::parse_string_list;
///
/// let values = parse_string_list("a=1, b=2, bare");
/// assert_eq!(values.get("a").map(String::as_str), Some("1"));
/// assert_eq!(values.get("bare").map(String::as_str), Some(""));
/// ```
pub fn parse_string_list(raw: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for segment in raw.trim().split(',') {
        let segment = segment.trim();
        let (key, value) = match segment.split_once('=') {
            Some((k, v)) if !k.is_empty() => (k, v),
            _ => (segment, ""),
        };
        if !key.is_empty() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    values
}

/// Convert a hierarchical parameter path into a flat data key.
///
/// Strips every trailing `/`, then a single leading `/`, then replaces the
/// remaining `/` with `_`.
///
/// # Examples
///
/// ```
/// use paramsync::core::decompose::safe_key_name;
///
/// assert_eq!(safe_key_name("/a/b/"), "a_b");
/// assert_eq!(safe_key_name("//a"), "_a");
/// ```
pub fn safe_key_name(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    trimmed.replace('/', "_")
}
