//! Row filter hook.

use std::fmt;

/// Caller-supplied row predicate. The table only applies it; what counts as a
/// match is entirely up to the caller.
pub enum RowFilter<T> {
    /// Every row passes.
    PassThrough,
    Predicate(Box<dyn Fn(&T) -> bool>),
}

impl<T> RowFilter<T> {
    pub fn predicate(f: impl Fn(&T) -> bool + 'static) -> Self {
        Self::Predicate(Box::new(f))
    }

    pub fn matches(&self, row: &T) -> bool {
        match self {
            RowFilter::PassThrough => true,
            RowFilter::Predicate(f) => f(row),
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, RowFilter::PassThrough)
    }
}

impl<T> Default for RowFilter<T> {
    fn default() -> Self {
        Self::PassThrough
    }
}

impl<T> fmt::Debug for RowFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowFilter::PassThrough => f.write_str("PassThrough"),
            RowFilter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passes_everything() {
        let filter: RowFilter<i32> = RowFilter::default();
        assert!(filter.is_pass_through());
        assert!(filter.matches(&-1));
    }

    #[test]
    fn test_predicate() {
        let filter = RowFilter::predicate(|n: &i32| *n > 2);
        assert!(!filter.matches(&1));
        assert!(filter.matches(&3));
    }
}
