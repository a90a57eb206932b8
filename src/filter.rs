//! Pure, order-preserving sequence filtering
//!
//! Filtering here is a referentially transparent transformation: the input
//! is never mutated, the result is freshly allocated, relative order and
//! duplicates are preserved, and the same input with the same predicate
//! always produces the same result. Nothing is shared or cached, so
//! concurrent callers need no coordination.

use crate::predicate::Predicate;

/// Filter a sequence by a predicate, preserving input order.
///
/// Returns a new `Vec` containing clones of exactly the elements the
/// predicate accepts, in their original relative order. Duplicates in the
/// input that pass the predicate appear in the output the same number of
/// times.
///
/// # Example
///
/// ```rust
/// use weir::filter;
/// use weir::predicate::*;
///
/// let names: Vec<String> = ["Adam", "Alexander", "John", "Tom"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// let a_names = filter(&names, starts_with("A"));
/// assert_eq!(a_names, ["Adam", "Alexander"]);
///
/// // Combined predicates filter in one pass
/// let short_a_names = filter(&names, starts_with("A").and(len_lt(5)));
/// assert_eq!(short_a_names, ["Adam"]);
/// ```
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    let kept: Vec<T> = items
        .iter()
        .filter(|item| predicate.check(item))
        .cloned()
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(input = items.len(), kept = kept.len(), "filtered sequence");

    kept
}

/// Extension trait for filtering slices by a predicate.
///
/// # Example
///
/// ```rust
/// use weir::FilterExt;
/// use weir::predicate::*;
///
/// let names: Vec<String> = ["Adam", "Alexander", "John", "Tom"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// assert_eq!(names.filtered(len_lt(4)), ["Tom"]);
/// ```
pub trait FilterExt<T> {
    /// Filter this sequence by a predicate, preserving order.
    fn filtered<P: Predicate<T>>(&self, predicate: P) -> Vec<T>;
}

impl<T: Clone> FilterExt<T> for [T] {
    fn filtered<P: Predicate<T>>(&self, predicate: P) -> Vec<T> {
        filter(self, predicate)
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::predicate::starts_with;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_filter_emits_trace_event() {
        let names = vec!["Adam".to_string(), "Tom".to_string()];
        let _ = filter(&names, starts_with("A"));
        assert!(logs_contain("filtered sequence"));
    }
}
