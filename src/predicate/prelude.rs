//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::prelude::*;
//!
//! let short_a_name = starts_with("A").and(len_lt(5));
//! assert!(short_a_name.check("Adam"));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{
    all_of, always_false, always_true, any_of, none_of, Always, And, Negate, Or,
};

// Type erasure and folds
pub use super::boxed::BoxPredicate;
pub use super::fold::{conjoin, disjoin, fold};

// String predicates
pub use super::string::{
    contains, ends_with, equals, len_between, len_eq, len_gt, len_lt, len_max, len_min, not_empty,
    starts_with,
};

// Fallible checking
pub use super::validate::{validate, validate_with};
