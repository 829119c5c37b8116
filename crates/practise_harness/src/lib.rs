//! Word count test harness.
//!
//! Drives any [`WordCounter`] over a fixed set of sentences plus seeded
//! random inputs and checks each result against an independent reference
//! tally. The harness only sees the counter through its trait.
mod cases;
mod reference;
mod report;

pub use cases::{fixed_cases, random_cases};
pub use reference::reference_count;
pub use report::{format_counts, CaseReport, HarnessReport};

use practise_core::WordCounter;
use practise_logging::{practise_debug, practise_trace, practise_warn};

/// Runs `counter` over every case and collects the outcome.
pub fn run<C>(counter: &C, cases: &[String]) -> HarnessReport
where
    C: WordCounter + ?Sized,
{
    let reports = cases
        .iter()
        .map(|input| {
            let got = counter.count(input);
            let want = reference_count(input);
            let passed = got == want;
            practise_trace!("got {:?}, want {:?}", got, want);
            if passed {
                practise_debug!("word count case passed: {:?}", input);
            } else {
                practise_warn!("word count case failed: {:?}", input);
            }
            CaseReport {
                input: input.clone(),
                got,
                want,
                passed,
            }
        })
        .collect();
    HarnessReport { cases: reports }
}
