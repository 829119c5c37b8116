//! Practise core: the Fibonacci generator and the word-frequency counter.
mod fib;
mod word_count;

pub use fib::{fibonacci, first_n, Fibonacci};
pub use word_count::{
    sorted_counts, total_tokens, word_count, WhitespaceWordCounter, WordCounter, WordCounts,
};
