use practise_core::{word_count, WhitespaceWordCounter, WordCounter, WordCounts};
use practise_harness::{fixed_cases, random_cases, reference_count, run};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Splits on spaces only, so tabs and newlines leak into tokens.
struct SpaceOnlyCounter;

impl WordCounter for SpaceOnlyCounter {
    fn count(&self, text: &str) -> WordCounts {
        let mut counts = WordCounts::new();
        for token in text.split(' ').filter(|t| !t.is_empty()) {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

#[test]
fn whitespace_counter_passes_fixed_cases() {
    let report = run(&WhitespaceWordCounter, &fixed_cases());
    assert!(report.passed());
    assert_eq!(report.cases.len(), 4);
}

#[test]
fn whitespace_counter_passes_random_cases() {
    let cases = random_cases(0x5eed, 64);
    let report = run(&WhitespaceWordCounter, &cases);
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn plain_function_can_be_tested() {
    let counter = |text: &str| word_count(text);
    assert!(run(&counter, &fixed_cases()).passed());
}

#[test]
fn broken_counter_is_reported() {
    let cases = vec!["a\tb".to_string(), "a b".to_string()];
    let report = run(&SpaceOnlyCounter, &cases);

    assert!(!report.passed());
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].input, "a\tb");

    let rendered = report.render();
    assert!(rendered.starts_with("FAIL\n f(\"a\\tb\") =\n"));
    assert!(rendered.contains("Want:\n  map[string]int{\"a\":1, \"b\":1}\n"));
    assert!(rendered.contains("PASS\n f(\"a b\") =\n  map[string]int{\"a\":1, \"b\":1}\n"));
}

#[test]
fn rendered_pass_lists_sorted_counts() {
    let report = run(&WhitespaceWordCounter, &["I am learning Go!".to_string()]);
    assert_eq!(
        report.render(),
        "PASS\n f(\"I am learning Go!\") =\n  map[string]int{\"Go!\":1, \"I\":1, \"am\":1, \"learning\":1}\n"
    );
}

#[test]
fn reference_agrees_with_expected_sentence() {
    let counts = reference_count("A man a plan a canal panama.");
    assert_eq!(counts["a"], 2);
    assert_eq!(counts["A"], 1);
    assert_eq!(counts["panama."], 1);
}

#[test]
fn report_serializes_to_json() {
    let report = run(&WhitespaceWordCounter, &["a a".to_string()]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["cases"][0]["input"], "a a");
    assert_eq!(json["cases"][0]["passed"], true);
    assert_eq!(json["cases"][0]["got"]["a"], 2);
}

#[test]
fn counter_matches_reference_on_mixed_unicode_whitespace() {
    let separators = [
        " ", "\t", "\n", "\r\n", "\u{b}", "\u{c}", "\u{85}", "\u{a0}", "\u{1680}",
        "\u{2003}", "\u{2028}", "\u{3000}",
    ];
    let words = ["go", "Go!", "über", "日本", "x-y"];
    let mut text = String::new();
    for i in 0..2000 {
        text.push_str(words[i % words.len()]);
        text.push_str(separators[i % separators.len()]);
    }

    let counts = word_count(&text);
    assert_eq!(counts, reference_count(&text));
    assert_eq!(counts.values().sum::<usize>(), 2000);
}

proptest! {
    #[test]
    fn counter_matches_reference_for_any_text(
        s in "(\\PC|[ \t\n\r\u{85}\u{a0}\u{2028}\u{3000}]){0,200}"
    ) {
        prop_assert_eq!(word_count(&s), reference_count(&s));
    }
}
