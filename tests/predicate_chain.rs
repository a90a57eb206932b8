//! Integration tests for predicate chaining over a sequence of names.

use weir::predicate::*;
use weir::{filter, filter_by_flags, FilterExt, FlagRule};

fn names() -> Vec<String> {
    ["Adam", "Alexander", "John", "Tom"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn single_predicate_keeps_matching_names() {
    let result = filter(&names(), starts_with("A"));
    assert_eq!(result, ["Adam", "Alexander"]);
}

#[test]
fn sequential_filters_narrow_the_result() {
    let a_names = filter(&names(), starts_with("A"));
    let result = filter(&a_names, len_lt(5));
    assert_eq!(result, ["Adam"]);
}

#[test]
fn closure_predicate_matches_combined_form() {
    let result = filter(&names(), |name: &String| {
        name.starts_with('A') && name.len() < 5
    });
    assert_eq!(result, ["Adam"]);
}

#[test]
fn and_keeps_names_satisfying_both() {
    let result = filter(&names(), starts_with("A").and(len_lt(5)));
    assert_eq!(result, ["Adam"]);
}

#[test]
fn or_keeps_names_satisfying_either() {
    let result = filter(&names(), starts_with("J").or(len_lt(4)));
    assert_eq!(result, ["John", "Tom"]);
}

#[test]
fn or_with_negated_operand() {
    let result = filter(&names(), starts_with("J").or(len_lt(4).negate()));
    assert_eq!(result, ["Adam", "Alexander", "John"]);
}

#[test]
fn conjoined_collection_keeps_names_satisfying_all() {
    let rules = vec![
        BoxPredicate::new(starts_with("A")),
        BoxPredicate::new(contains("d")),
        BoxPredicate::new(len_gt(4)),
    ];
    let result = filter(&names(), conjoin(rules));
    assert_eq!(result, ["Alexander"]);
}

#[test]
fn disjoined_collection_keeps_names_satisfying_any() {
    let rules = vec![
        BoxPredicate::new(starts_with("A")),
        BoxPredicate::new(contains("d")),
        BoxPredicate::new(len_gt(4)),
    ];
    let result = filter(&names(), disjoin(rules));
    assert_eq!(result, ["Adam", "Alexander"]);
}

#[test]
fn explicit_fold_matches_conjoin() {
    let folded = fold(
        vec![
            BoxPredicate::new(starts_with("A")),
            BoxPredicate::new(contains("d")),
            BoxPredicate::new(len_gt(4)),
        ],
        BoxPredicate::always(true),
        BoxPredicate::and,
    );
    let result = filter(&names(), folded);
    assert_eq!(result, ["Alexander"]);
}

#[test]
fn flags_all_enabled() {
    let result = filter_by_flags(
        &names(),
        [("Adam", true), ("Alexander", true), ("John", true)],
    );
    assert_eq!(result, ["Adam", "Alexander", "John"]);
}

#[test]
fn flags_two_enabled() {
    let result = filter_by_flags(
        &names(),
        [("Adam", true), ("Alexander", true), ("John", false)],
    );
    assert_eq!(result, ["Adam", "Alexander"]);
}

#[test]
fn flags_one_enabled() {
    let result = filter_by_flags(
        &names(),
        [("Adam", true), ("Alexander", false), ("John", false)],
    );
    assert_eq!(result, ["Adam"]);
}

#[test]
fn flags_none_enabled_yields_empty() {
    let result = filter_by_flags(
        &names(),
        [("Adam", false), ("Alexander", false), ("John", false)],
    );
    assert!(result.is_empty());
}

#[test]
fn flag_rules_accept_structs_and_tuples() {
    let from_structs = filter_by_flags(
        &names(),
        vec![FlagRule::new("Adam", true), FlagRule::new("Tom", true)],
    );
    let from_tuples = filter_by_flags(&names(), [("Adam", true), ("Tom", true)]);
    assert_eq!(from_structs, from_tuples);
    assert_eq!(from_structs, ["Adam", "Tom"]);
}

#[test]
fn filtered_ext_reads_like_a_pipeline() {
    let result = names().filtered(starts_with("A").and(contains("x")));
    assert_eq!(result, ["Alexander"]);
}
