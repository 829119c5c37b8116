/// Unbounded Fibonacci generator.
///
/// Holds the current value `a` and the next value `b`. Each call to
/// [`Fibonacci::next_value`] returns `a` and shifts the pair forward.
/// Arithmetic wraps modulo 2^64; F(93) is the last exact term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    a: u64,
    b: u64,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self { a: 0, b: 1 }
    }

    /// Returns the current term and advances to the next one.
    pub fn next_value(&mut self) -> u64 {
        let result = self.a;
        self.a = self.b;
        self.b = result.wrapping_add(self.b);
        result
    }

    /// Converts the generator into a nullary closure that owns its state.
    pub fn into_fn(mut self) -> impl FnMut() -> u64 {
        move || self.next_value()
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_value())
    }
}

/// Returns a fresh generator starting at F(0).
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}

/// Collects the first `n` Fibonacci numbers.
pub fn first_n(n: usize) -> Vec<u64> {
    fibonacci().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_one() {
        let mut fib = fibonacci();
        assert_eq!(fib.next_value(), 0);
        assert_eq!(fib.next_value(), 1);
        assert_eq!(fib.next_value(), 1);
    }

    #[test]
    fn copies_advance_independently() {
        let mut first = fibonacci();
        first.next_value();
        let mut second = first;
        assert_eq!(first.next_value(), 1);
        assert_eq!(first.next_value(), 1);
        assert_eq!(second.next_value(), 1);
    }

    #[test]
    fn huge_take_is_lazy() {
        let values: Vec<u64> = fibonacci().take(usize::MAX).take(5).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3]);
        assert_eq!(fibonacci().take(usize::MAX).size_hint().0, 0);
    }

    #[test]
    fn wraps_past_u64() {
        let mut fib = fibonacci();
        let f93 = fib.nth(93).unwrap();
        assert_eq!(f93, 12_200_160_415_121_876_738);
        let f94 = fib.next_value();
        let f92 = 7_540_113_804_746_346_429u64;
        assert_eq!(f94, f92.wrapping_add(f93));
        assert!(f94 < f93);
    }
}
