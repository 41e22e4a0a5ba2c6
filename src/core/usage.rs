//! Resource reference usage extraction.
//!
//! Finds all `{StaticResource Key}` and `{DynamicResource Key}` usages in a
//! document. Matching is non-overlapping, left-to-right and case-sensitive
//! on the literal keywords.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `{StaticResource <key>}` / `{DynamicResource <key>}`.
///
/// The key is everything up to the first `}`, taken verbatim. A key text
/// containing a literal `}` truncates early; such keys are not legal in the
/// source format and are not validated here.
static USAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(StaticResource|DynamicResource) ([^}]*)\}").unwrap());

/// How a resource reference binds to its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Static,
    Dynamic,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Static => write!(f, "StaticResource"),
            ResourceKind::Dynamic => write!(f, "DynamicResource"),
        }
    }
}

/// A single resource reference found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    /// The referenced key, exactly as captured (not trimmed or normalized).
    pub key: String,
    pub kind: ResourceKind,
    /// Byte offset of the match start (the opening `{`) in the document.
    pub offset: usize,
}

/// Iterate all resource reference usages in document order.
///
/// The iterator is lazy; collecting it yields occurrences in ascending
/// offset order.
pub fn usages(document: &str) -> impl Iterator<Item = Usage> + '_ {
    USAGE_REGEX.captures_iter(document).map(|caps| {
        let kind = match &caps[1] {
            "StaticResource" => ResourceKind::Static,
            _ => ResourceKind::Dynamic,
        };
        Usage {
            key: caps[2].to_string(),
            kind,
            offset: caps.get(0).unwrap().start(),
        }
    })
}
