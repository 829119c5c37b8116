use std::fmt;

use practise_core::{sorted_counts, WordCounts};
use serde::Serialize;

/// Outcome of a single harness case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub input: String,
    pub got: WordCounts,
    pub want: WordCounts,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HarnessReport {
    pub cases: Vec<CaseReport>,
}

impl HarnessReport {
    /// True when every case passed. An empty report passes.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(|case| case.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| !case.passed)
    }

    /// Human-readable PASS/FAIL listing, one block per case.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            let verdict = if case.passed { "PASS" } else { "FAIL" };
            writeln!(f, "{verdict}")?;
            writeln!(f, " f({:?}) =", case.input)?;
            writeln!(f, "  {}", format_counts(&case.got))?;
            if !case.passed {
                writeln!(f, "Want:")?;
                writeln!(f, "  {}", format_counts(&case.want))?;
            }
        }
        Ok(())
    }
}

/// Formats a mapping as `map[string]int{"a":1, "b":2}` with sorted keys.
pub fn format_counts(counts: &WordCounts) -> String {
    let body = sorted_counts(counts)
        .into_iter()
        .map(|(token, count)| format!("{token:?}:{count}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("map[string]int{{{body}}}")
}
