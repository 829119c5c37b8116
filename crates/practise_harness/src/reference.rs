use practise_core::WordCounts;

/// Oracle tally built by scanning characters directly.
///
/// Shares no code with the counter under test.
pub fn reference_count(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            flush(&mut counts, &mut current);
        } else {
            current.push(c);
        }
    }
    flush(&mut counts, &mut current);
    counts
}

fn flush(counts: &mut WordCounts, current: &mut String) {
    if current.is_empty() {
        return;
    }
    let token = std::mem::take(current);
    *counts.entry(token).or_default() += 1;
}
