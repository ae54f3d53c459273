/// Fast check if a url already carries a query string.
/// Plain byte scan for `?`, no structural parsing: a `?` anywhere counts.
pub fn has_query(url: &str) -> bool {
    memchr::memchr(b'?', url.as_bytes()).is_some()
}

/// Separator to put in front of a new query parameter
pub fn query_separator(url: &str) -> char {
    if has_query(url) { '&' } else { '?' }
}

/// Prune fragment (#hash) from a relative reference
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Splits at the first '#', the fragment is returned WITHOUT the leading '#'
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Check if a string only holds C0 controls and spaces (trims to nothing)
pub fn is_blank(input: &str) -> bool {
    input.bytes().all(|b| b <= 0x20)
}

/// The fragment as it should be rendered after a '#', if at all.
/// Absent, empty and blank fragments all render as nothing.
pub fn visible_fragment(fragment: Option<&str>) -> Option<&str> {
    match fragment {
        Some(fragment) if is_blank(fragment) => {
            if !fragment.is_empty() {
                tracing::trace!(len = fragment.len(), "dropping blank fragment");
            }
            None
        }
        fragment => fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_separator() {
        assert_eq!(query_separator("/a"), '?');
        assert_eq!(query_separator("/a?"), '&');
        assert_eq!(query_separator("/a?b=1"), '&');
        assert_eq!(query_separator("/a/b%3F"), '?'); // Encoded '?' is not a separator
        assert_eq!(query_separator(""), '?');
    }

    #[test]
    fn test_prune_fragment() {
        assert_eq!(prune_fragment("/a?x=1#top"), ("/a?x=1", Some("top")));
        assert_eq!(prune_fragment("/a#"), ("/a", Some("")));
        assert_eq!(prune_fragment("/a#b#c"), ("/a", Some("b#c")));
        assert_eq!(prune_fragment("/a"), ("/a", None));
    }

    #[test]
    fn test_visible_fragment() {
        assert_eq!(visible_fragment(None), None);
        assert_eq!(visible_fragment(Some("")), None);
        assert_eq!(visible_fragment(Some("  \t\n")), None);
        assert_eq!(visible_fragment(Some("top")), Some("top"));
        // Inner and edge whitespace is kept when there is content
        assert_eq!(visible_fragment(Some(" top ")), Some(" top "));
        // Only C0/space counts as blank
        assert_eq!(visible_fragment(Some("\u{3000}")), Some("\u{3000}"));
    }
}
