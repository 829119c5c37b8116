use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIXED: &[&str] = &[
    "I am learning Go!",
    "The quick brown fox jumped over the lazy dog.",
    "I ate a donut. Then I ate another donut.",
    "A man a plan a canal panama.",
];

const VOCABULARY: &[&str] = &[
    "a", "A", "the", "fox", "donut.", "Go!", "panama", "plan", "canal", "über", "日本", "x-y",
];

const SEPARATORS: &[&str] = &[" ", "  ", "\t", "\n", " \t ", "\r\n", "\u{a0}"];

/// The classic sentences every counter must handle.
pub fn fixed_cases() -> Vec<String> {
    FIXED.iter().map(|s| s.to_string()).collect()
}

/// Reproducible random inputs: vocabulary words joined by whitespace runs,
/// sometimes padded at either end. Some cases come out empty.
pub fn random_cases(seed: u64, count: usize) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| random_text(&mut rng)).collect()
}

fn random_text(rng: &mut SmallRng) -> String {
    let words: usize = rng.gen_range(0..=12);
    let mut text = String::new();
    if rng.gen_bool(0.3) {
        text.push_str(pick(rng, SEPARATORS));
    }
    for i in 0..words {
        if i > 0 {
            text.push_str(pick(rng, SEPARATORS));
        }
        text.push_str(pick(rng, VOCABULARY));
    }
    if rng.gen_bool(0.3) {
        text.push_str(pick(rng, SEPARATORS));
    }
    text
}

fn pick<'a>(rng: &mut SmallRng, choices: &[&'a str]) -> &'a str {
    choices.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_cases() {
        assert_eq!(random_cases(7, 16), random_cases(7, 16));
    }

    #[test]
    fn requested_count_is_honoured() {
        assert_eq!(random_cases(1, 0).len(), 0);
        assert_eq!(random_cases(1, 5).len(), 5);
    }

    #[test]
    fn fixed_cases_are_the_four_sentences() {
        let cases = fixed_cases();
        assert_eq!(cases.len(), 4);
        assert_eq!(cases[0], "I am learning Go!");
    }
}
