use rand::Rng;

/// A source of uniformly distributed integers.
///
/// Category fallback, content selection and sound-effect selection all draw
/// from this, so tests can substitute a predictable source.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an integer in `[min, max]`, both ends inclusive.
    fn int_inclusive(&self, min: usize, max: usize) -> usize;
}

/// Thread-local system randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_inclusive(&self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        rand::rng().random_range(min..=max)
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    let last = items.len().checked_sub(1)?;
    // Clamp in case a substituted source strays outside the range.
    let index = random.int_inclusive(0, last).min(last);
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_thread_random_stays_in_range_and_covers_it() {
        let random = ThreadRandom;
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let value = random.int_inclusive(3, 6);
            assert!((3..=6).contains(&value));
            seen.insert(value);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_thread_random_degenerate_range() {
        assert_eq!(ThreadRandom.int_inclusive(4, 4), 4);
        assert_eq!(ThreadRandom.int_inclusive(5, 2), 5);
    }

    #[test]
    fn test_choose_empty_never_calls_source() {
        let random = MockRandomSource::new();
        let items: Vec<String> = Vec::new();
        assert!(choose(&random, &items).is_none());
    }

    #[test]
    fn test_choose_clamps_out_of_range_index() {
        let mut random = MockRandomSource::new();
        random.expect_int_inclusive().returning(|_, _| 99);
        assert_eq!(choose(&random, &["a", "b"]), Some(&"b"));
    }
}
