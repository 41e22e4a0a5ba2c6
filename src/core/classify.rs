//! Usage classification.
//!
//! Walks the usages in document order and resolves each distinct key against
//! its first declaration. Classification is pure; printing the outcome is
//! the report layer's job.

use std::collections::HashSet;

use crate::core::declaration::find_declaration;
use crate::core::usage::usages;
use crate::issue::Problem;

/// Result of scanning one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Total number of resource reference usages found, duplicates included.
    pub usage_count: usize,
    /// Problem records in first-usage document order, at most one per key.
    pub problems: Vec<Problem>,
}

/// Scan a document and classify every distinct referenced key.
///
/// Only the first usage of a key is evaluated; later usages of the same key
/// are skipped. A key declared at or before its first usage produces no
/// record.
pub fn classify(document: &str) -> ScanOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut problems = Vec::new();
    let mut usage_count = 0;

    for usage in usages(document) {
        usage_count += 1;

        if !seen.insert(usage.key.clone()) {
            continue;
        }

        match find_declaration(document, &usage.key) {
            None => problems.push(Problem::not_defined(&usage.key, usage.offset)),
            Some(declared) if declared > usage.offset => {
                problems.push(Problem::defined_after_usage(&usage.key, usage.offset, declared));
            }
            Some(_) => {}
        }
    }

    ScanOutcome {
        usage_count,
        problems,
    }
}
