//! Report formatting and printing utilities.
//!
//! This module is separate from the scanning logic to allow xamlint to be
//! used as a library without printing side effects.

use std::fmt::Write;

use colored::Colorize;

use crate::core::ScanOutcome;
use crate::issue::{Problem, ProblemKind};

/// Render the scan report as it is printed to stdout.
///
/// Finding problems is not a failure; the report is the same shape whether
/// the problem list is empty or not.
pub fn render_report(outcome: &ScanOutcome) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "Found resource key usage count: {}",
        outcome.usage_count
    )
    .unwrap();
    writeln!(out, "Searching problem keys....").unwrap();
    writeln!(out, "Total problem keys: {}", outcome.problems.len()).unwrap();

    for problem in &outcome.problems {
        render_problem(&mut out, problem);
    }

    out
}

fn render_problem(out: &mut String, problem: &Problem) {
    let description = match problem.kind {
        ProblemKind::NotDefined => problem.kind.to_string().bold().red(),
        ProblemKind::DefinedAfterUsage => problem.kind.to_string().bold().yellow(),
    };

    writeln!(out, "{} : {}", problem.key, description).unwrap();

    match problem.declaration_offset {
        Some(declared) => writeln!(
            out,
            "  {} {} first usage at offset {}, declaration at offset {}",
            "=".blue(),
            "note:".bold(),
            problem.usage_offset,
            declared
        )
        .unwrap(),
        None => writeln!(
            out,
            "  {} {} first usage at offset {}",
            "=".blue(),
            "note:".bold(),
            problem.usage_offset
        )
        .unwrap(),
    }
}

/// Print the report to stdout.
pub fn print_report(outcome: &ScanOutcome) {
    print!("{}", render_report(outcome));
}
