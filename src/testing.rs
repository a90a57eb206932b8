//! Testing utilities and helpers for Weir
//!
//! This module provides assertion macros for predicate tests and, behind the
//! `proptest` feature, `Arbitrary` support for generating flag rules in
//! property-based tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use weir::predicate::*;
//! use weir::{assert_accepts, assert_rejects};
//!
//! assert_accepts!(starts_with("A"), "Adam");
//! assert_rejects!(starts_with("A"), "Tom");
//! ```

/// Assert that a predicate accepts a value.
///
/// This macro will panic, naming the rejected value, if the predicate
/// returns false.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::assert_accepts;
///
/// assert_accepts!(len_lt(5), "Adam");
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $value:expr) => {
        if !$crate::predicate::Predicate::check(&$predicate, $value) {
            panic!("Expected predicate to accept {:?}", $value);
        }
    };
}

/// Assert that a predicate rejects a value.
///
/// This macro will panic, naming the accepted value, if the predicate
/// returns true.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::assert_rejects;
///
/// assert_rejects!(len_lt(5), "Alexander");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $value:expr) => {
        if $crate::predicate::Predicate::check(&$predicate, $value) {
            panic!("Expected predicate to reject {:?}", $value);
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::flags::FlagRule;

#[cfg(feature = "proptest")]
impl Arbitrary for FlagRule {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        ("[A-Za-z]{1,12}", any::<bool>())
            .prop_map(|(value, enabled)| FlagRule { value, enabled })
            .boxed()
    }
}
