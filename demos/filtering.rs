//! Filtering Example
//!
//! This example demonstrates composing predicates and filtering a sequence
//! of names, including reducing whole predicate collections into one filter
//! and driving a filter from runtime flags.
//!
//! Run with: cargo run --example filtering

use weir::predicate::*;
use weir::{filter, filter_by_flags, FilterExt, FlagRule};

fn main() {
    println!("=== Sequence Filtering Example ===\n");

    let names: Vec<String> = ["Adam", "Alexander", "John", "Tom"]
        .iter()
        .map(ToString::to_string)
        .collect();

    simple_predicates(&names);
    combined_predicates(&names);
    reduced_collections(&names);
    flag_driven(&names);
}

/// Filtering with a single predicate
fn simple_predicates(names: &[String]) {
    println!("--- Single Predicates ---\n");

    println!("starts_with(\"A\"): {:?}", filter(names, starts_with("A")));
    println!("contains(\"d\"):    {:?}", filter(names, contains("d")));
    println!("len_lt(4):        {:?}", filter(names, len_lt(4)));

    // Closures are predicates too
    println!(
        "closure (ends with 'm'): {:?}",
        filter(names, |name: &String| name.ends_with('m'))
    );

    println!();
}

/// Combining predicates with and / or / negate
fn combined_predicates(names: &[String]) {
    println!("--- Combined Predicates ---\n");

    println!(
        "starts_with(\"A\").and(len_lt(5)): {:?}",
        filter(names, starts_with("A").and(len_lt(5)))
    );
    println!(
        "starts_with(\"J\").or(len_lt(4)): {:?}",
        filter(names, starts_with("J").or(len_lt(4)))
    );
    println!(
        "starts_with(\"J\").or(len_lt(4).negate()): {:?}",
        filter(names, starts_with("J").or(len_lt(4).negate()))
    );

    // The extension trait reads like a pipeline
    println!(
        "names.filtered(contains(\"x\")): {:?}",
        names.filtered(contains("x"))
    );

    println!();
}

/// Reducing a collection of predicates into one
fn reduced_collections(names: &[String]) {
    println!("--- Reduced Predicate Collections ---\n");

    let rules = || {
        vec![
            BoxPredicate::new(starts_with("A")),
            BoxPredicate::new(contains("d")),
            BoxPredicate::new(len_gt(4)),
        ]
    };

    println!("conjoin (all must hold): {:?}", filter(names, conjoin(rules())));
    println!("disjoin (any may hold):  {:?}", filter(names, disjoin(rules())));

    // The general fold with an explicit identity
    let folded = fold(rules(), BoxPredicate::always(true), BoxPredicate::and);
    println!("fold with always(true):  {:?}", filter(names, folded));

    println!();
}

/// Driving a filter from runtime flags
fn flag_driven(names: &[String]) {
    println!("--- Flag-Driven Filtering ---\n");

    let rules = vec![
        FlagRule::new("Adam", true),
        FlagRule::new("Alexander", true),
        FlagRule::new("John", false),
    ];
    println!("rules: {:?}", rules);
    println!("picked: {:?}", filter_by_flags(names, &rules));

    let all_off = vec![
        FlagRule::new("Adam", false),
        FlagRule::new("Alexander", false),
    ];
    println!("\nall flags off: {:?}", filter_by_flags(names, &all_off));
}
