//! Predicate combinators for composable filtering logic
//!
//! This module provides composable predicate combinators for use in filtering
//! pipelines. Predicates can be combined using logical operators (`and`, `or`,
//! `negate`) to build complex filters from simple, reusable pieces.
//!
//! # Philosophy
//!
//! Instead of writing verbose boolean expressions or ad-hoc helper functions,
//! predicate combinators allow you to:
//!
//! - Build complex filters from simple, reusable pieces
//! - Compose predicates using familiar logical operators
//! - Reduce whole collections of predicates into one with [`conjoin`] and
//!   [`disjoin`]
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::*;
//!
//! // Define reusable predicates over names
//! let a_name = starts_with("A");
//! let short = len_lt(5);
//!
//! // Check individual predicates
//! assert!(a_name.check("Adam"));
//! assert!(!short.check("Alexander")); // too long
//!
//! // Combine them
//! let short_a_name = starts_with("A").and(len_lt(5));
//! assert!(short_a_name.check("Adam"));
//! assert!(!short_a_name.check("Alexander"));
//! ```
//!
//! # Reducing predicate collections
//!
//! Heterogeneous predicates can be type-erased with [`BoxPredicate`] and
//! folded into a single predicate with an explicit identity:
//!
//! ```rust
//! use weir::predicate::*;
//!
//! let all_rules = conjoin(vec![
//!     BoxPredicate::new(starts_with("A")),
//!     BoxPredicate::new(contains("d")),
//!     BoxPredicate::new(len_gt(4)),
//! ]);
//! assert!(all_rules.check("Alexander"));
//! assert!(!all_rules.check("Adam")); // too short
//! ```

mod boxed;
mod combinators;
mod fold;
mod string;
mod validate;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{
    all_of, always_false, always_true, any_of, none_of, AllOf, Always, And, AnyOf, Negate, NoneOf,
    Or,
};

// Re-export type erasure and folds
pub use boxed::BoxPredicate;
pub use fold::{conjoin, disjoin, fold};

// Re-export string predicates
pub use string::{
    contains, ends_with, equals, len_between, len_eq, len_gt, len_lt, len_max, len_min, not_empty,
    starts_with, Contains, EndsWith, Equals, LenBetween, LenGt, LenLt, NotEmpty, StartsWith,
};

// Re-export fallible checking
pub use validate::{validate, validate_with};
