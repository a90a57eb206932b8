//! Reducing predicate collections
//!
//! A collection of predicates folds into a single predicate the same way any
//! sequence folds under an associative operator with an identity: AND-folds
//! start from the predicate that accepts everything, OR-folds from the one
//! that rejects everything. An empty collection yields the identity
//! unchanged, so `conjoin([])` accepts every value and `disjoin([])` rejects
//! every value.

use super::boxed::BoxPredicate;

/// Left-fold a collection of predicates into one.
///
/// `identity` seeds the fold and is returned unchanged for an empty
/// collection. Predicates are combined left-to-right.
///
/// [`conjoin`] and [`disjoin`] cover the two folds you almost always want;
/// `fold` is the general form for custom combinators.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let rules = vec![
///     BoxPredicate::new(starts_with("A")),
///     BoxPredicate::new(contains("d")),
/// ];
/// let both = fold(rules, BoxPredicate::always(true), BoxPredicate::and);
/// assert!(both.check("Adam"));
/// assert!(!both.check("Tom"));
///
/// // Empty input yields the identity unchanged
/// let none: Vec<BoxPredicate<str>> = Vec::new();
/// let identity = fold(none, BoxPredicate::always(true), BoxPredicate::and);
/// assert!(identity.check("anything"));
/// ```
pub fn fold<T, I, F>(predicates: I, identity: BoxPredicate<T>, combine: F) -> BoxPredicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = BoxPredicate<T>>,
    F: FnMut(BoxPredicate<T>, BoxPredicate<T>) -> BoxPredicate<T>,
{
    predicates.into_iter().fold(identity, combine)
}

/// AND-fold: the resulting predicate accepts a value iff every predicate in
/// the collection accepts it.
///
/// The fold identity is `always(true)`, so an empty collection accepts
/// everything.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let all_rules = conjoin(vec![
///     BoxPredicate::new(starts_with("A")),
///     BoxPredicate::new(contains("d")),
///     BoxPredicate::new(len_gt(4)),
/// ]);
/// assert!(all_rules.check("Alexander"));
/// assert!(!all_rules.check("Adam")); // fails the length rule
/// ```
pub fn conjoin<T, I>(predicates: I) -> BoxPredicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = BoxPredicate<T>>,
{
    fold(predicates, BoxPredicate::always(true), BoxPredicate::and)
}

/// OR-fold: the resulting predicate accepts a value iff at least one
/// predicate in the collection accepts it.
///
/// The fold identity is `always(false)`, so an empty collection rejects
/// everything.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let any_rule = disjoin(vec![
///     BoxPredicate::new(starts_with("A")),
///     BoxPredicate::new(contains("d")),
///     BoxPredicate::new(len_gt(4)),
/// ]);
/// assert!(any_rule.check("Adam"));
/// assert!(!any_rule.check("Tom"));
/// ```
pub fn disjoin<T, I>(predicates: I) -> BoxPredicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = BoxPredicate<T>>,
{
    fold(predicates, BoxPredicate::always(false), BoxPredicate::or)
}
