//! Flag-driven filtering
//!
//! A common filtering shape: an ordered list of candidate values, each
//! guarded by a boolean flag. Enabled values are admitted, disabled values
//! contribute nothing, and when every flag is off the result is empty
//! rather than an error. The rules OR-fold into a single predicate via
//! [`disjoin`](crate::predicate::disjoin), so the semantics follow directly
//! from the fold identity: no enabled rules means the always-false
//! predicate.

use crate::filter::filter;
use crate::predicate::{disjoin, equals, BoxPredicate};

/// One filtering rule: a target value guarded by a flag.
///
/// Disabled rules are inert - they neither admit nor exclude anything.
///
/// # Example
///
/// ```rust
/// use weir::FlagRule;
///
/// let rule = FlagRule::new("Adam", true);
/// assert!(rule.enabled);
///
/// // Tuples convert for terser call sites
/// let rule: FlagRule = ("Adam", false).into();
/// assert!(!rule.enabled);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagRule {
    /// The value this rule admits when enabled.
    pub value: String,
    /// Whether the rule participates in filtering.
    pub enabled: bool,
}

impl FlagRule {
    /// Create a rule for a target value.
    pub fn new(value: impl Into<String>, enabled: bool) -> Self {
        FlagRule {
            value: value.into(),
            enabled,
        }
    }
}

impl<S: Into<String>> From<(S, bool)> for FlagRule {
    fn from((value, enabled): (S, bool)) -> Self {
        FlagRule::new(value, enabled)
    }
}

impl From<&FlagRule> for FlagRule {
    fn from(rule: &FlagRule) -> Self {
        rule.clone()
    }
}

/// Filter a sequence of strings by an ordered list of flag rules.
///
/// The result contains exactly the elements equal to some enabled rule's
/// value, in input order. All flags off - or no rules at all - yields an
/// empty result, not an error. The input is never mutated.
///
/// # Example
///
/// ```rust
/// use weir::filter_by_flags;
///
/// let names: Vec<String> = ["Adam", "Alexander", "John", "Tom"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// let picked = filter_by_flags(
///     &names,
///     [("Adam", true), ("Alexander", false), ("John", true)],
/// );
/// assert_eq!(picked, ["Adam", "John"]);
///
/// let none = filter_by_flags(&names, [("Adam", false), ("John", false)]);
/// assert!(none.is_empty());
/// ```
pub fn filter_by_flags<I, R>(items: &[String], rules: I) -> Vec<String>
where
    I: IntoIterator<Item = R>,
    R: Into<FlagRule>,
{
    let rules: Vec<FlagRule> = rules.into_iter().map(Into::into).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rules = rules.len(),
        enabled = rules.iter().filter(|rule| rule.enabled).count(),
        "filtering by flag rules"
    );

    let combined = disjoin(
        rules
            .iter()
            .filter(|rule| rule.enabled)
            .map(|rule| BoxPredicate::new(equals(rule.value.clone()))),
    );
    filter(items, combined)
}
