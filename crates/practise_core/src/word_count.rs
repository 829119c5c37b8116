use std::collections::HashMap;

/// Token to occurrence count.
pub type WordCounts = HashMap<String, usize>;

/// Anything that can tally the whitespace-delimited tokens of a text.
pub trait WordCounter {
    fn count(&self, text: &str) -> WordCounts;
}

/// The standard split-on-whitespace counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceWordCounter;

impl WordCounter for WhitespaceWordCounter {
    fn count(&self, text: &str) -> WordCounts {
        word_count(text)
    }
}

impl<F> WordCounter for F
where
    F: Fn(&str) -> WordCounts,
{
    fn count(&self, text: &str) -> WordCounts {
        self(text)
    }
}

/// Counts each maximal run of non-whitespace characters in `text`.
pub fn word_count(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Sum of all counts, i.e. the number of tokens that produced the mapping.
pub fn total_tokens(counts: &WordCounts) -> usize {
    counts.values().sum()
}

/// Entries ordered by token, for stable output.
pub fn sorted_counts(counts: &WordCounts) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(token, count)| (token.as_str(), *count))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}
