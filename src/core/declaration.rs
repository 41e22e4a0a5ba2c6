//! Key declaration lookup.

/// Find the byte offset of the first `x:Key="<key>"` declaration.
///
/// This is plain substring search, not pattern matching: the key is
/// substituted verbatim, so characters that are special in regex engines
/// have no special meaning here. Returns `None` when the key is never
/// declared in the document.
pub fn find_declaration(document: &str, key: &str) -> Option<usize> {
    let needle = format!("x:Key=\"{}\"", key);
    document.find(&needle)
}
