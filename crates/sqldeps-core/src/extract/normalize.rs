//! Canonical identifier normalization

/// Collapse an ordered sequence of raw name parts into one canonical dotted
/// identifier.
///
/// Each part has at most one outer pair of double quotes stripped; parts
/// that are empty or whitespace-only after stripping are dropped; survivors
/// join with `.` in source order; a `@database_link` suffix is discarded.
/// Returns `None` when nothing usable remains — the caller skips such an
/// occurrence rather than treating it as an error.
pub(crate) fn normalize_parts<I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let parts: Vec<String> = parts.into_iter().collect();
    let mut surviving: Vec<&str> = Vec::new();
    for part in &parts {
        let part = strip_outer_quotes(part);
        if part.trim().is_empty() {
            continue;
        }
        surviving.push(part);
    }
    if surviving.is_empty() {
        return None;
    }

    let joined = surviving.join(".");

    // A remote reference reads the same object regardless of which link
    // reached it; everything from the first `@` on is link name.
    let name = match joined.find('@') {
        Some(at) => &joined[..at],
        None => joined.as_str(),
    };
    if name.trim().is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Strip exactly one outer pair of double quotes, if both are present.
fn strip_outer_quotes(part: &str) -> &str {
    if part.len() >= 2 && part.starts_with('"') && part.ends_with('"') {
        &part[1..part.len() - 1]
    } else {
        part
    }
}
