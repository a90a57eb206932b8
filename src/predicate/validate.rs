//! Fallible checking
//!
//! Predicates themselves are total and never fail. When a caller wants to
//! treat rejection as an error - admitting a value into a pipeline only if
//! it passes a predicate - these helpers turn a check into a `Result`.

use super::combinators::Predicate;

/// Check a value against a predicate, keeping the value on success.
///
/// Returns `Ok(value)` if the predicate accepts it, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let ok = validate(String::from("Adam"), starts_with("A"), "must start with A");
/// assert_eq!(ok, Ok(String::from("Adam")));
///
/// let err = validate(String::from("Tom"), starts_with("A"), "must start with A");
/// assert_eq!(err, Err("must start with A"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Check a value against a predicate with an error factory.
///
/// Like [`validate`], but takes a closure to build the error, allowing
/// access to the rejected value when constructing the message.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
///
/// let err = validate_with(String::from("Tom"), len_gt(4), |name| {
///     format!("'{}' is too short", name)
/// });
/// assert_eq!(err, Err("'Tom' is too short".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
