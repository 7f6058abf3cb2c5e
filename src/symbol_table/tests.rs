//! Unit tests for the symbol table.
//!
//! This module contains tests for slot allocation, occurrence tracking
//! and hash collision behavior.

use crate::parser::parser::parse;

use super::symbol_table::{build_symbol_table, SymbolTable};

fn table_for(source: &str) -> super::symbol_table::SymbolTable {
    let root = parse(source.to_string(), Some("test.tiny".to_string())).unwrap();
    build_symbol_table(&root)
}

#[test]
fn test_slot_assignment_and_occurrence_order() {
    // "x:=1;y:=2;x:=3" -> x: slot 0, lines [1,3]; y: slot 1, lines [2].
    let table = table_for("x:=1;\ny:=2;\nx:=3");

    let x = table.find("x").expect("x recorded");
    assert_eq!(x.memloc, 0);
    assert_eq!(x.lines, vec![1, 3]);

    let y = table.find("y").expect("y recorded");
    assert_eq!(y.memloc, 1);
    assert_eq!(y.lines, vec![2]);

    assert_eq!(table.num_vars(), 2);
}

#[test]
fn test_slots_are_first_seen_order() {
    let table = table_for("read b;\nread a;\nwrite b");

    assert_eq!(table.find("b").unwrap().memloc, 0);
    assert_eq!(table.find("a").unwrap().memloc, 1);
}

#[test]
fn test_occurrences_inside_expressions() {
    // fact occurs as assign target and twice in expressions.
    let table = table_for("fact := 1;\nfact := fact * fact");

    let fact = table.find("fact").expect("fact recorded");
    assert_eq!(fact.lines, vec![1, 2, 2, 2]);
}

#[test]
fn test_read_target_is_recorded() {
    let table = table_for("read x;\nwrite x");

    let x = table.find("x").expect("x recorded");
    assert_eq!(x.lines, vec![1, 2]);
}

#[test]
fn test_nested_statements_are_traversed() {
    let table = table_for("if 0<n then\nrepeat n := n-1 until n=0\nend");

    let n = table.find("n").expect("n recorded");
    assert_eq!(n.memloc, 0);
    assert_eq!(n.lines, vec![1, 2, 2, 2]);
}

#[test]
fn test_find_missing_variable() {
    let table = table_for("read x");

    assert!(table.find("y").is_none());
}

#[test]
fn test_correct_under_hash_collision() {
    // Brute-force two distinct names that land in the same bucket, then
    // check both stay individually addressable.
    let names: Vec<String> = ('a'..='z')
        .flat_map(|a| ('a'..='z').map(move |b| format!("{}{}", a, b)))
        .collect();

    let first = &names[0];
    let colliding = names[1..]
        .iter()
        .find(|name| SymbolTable::hash(name) == SymbolTable::hash(first))
        .expect("some two-letter names collide");

    let mut table = SymbolTable::new();
    table.insert(first, 1);
    table.insert(colliding, 2);
    table.insert(first, 3);

    let a = table.find(first).expect("first name present");
    assert_eq!(a.memloc, 0);
    assert_eq!(a.lines, vec![1, 3]);

    let b = table.find(colliding).expect("colliding name present");
    assert_eq!(b.memloc, 1);
    assert_eq!(b.lines, vec![2]);
}

#[test]
fn test_report_format() {
    let table = table_for("x:=1;\ny:=2;\nx:=3");
    let report = table.report();

    assert!(report.contains("[Var=x][Mem=0][Line=1][Line=3]"));
    assert!(report.contains("[Var=y][Mem=1][Line=2]"));
    assert_eq!(report.lines().count(), 2);
}

#[test]
fn test_table_never_mutated_by_lookup() {
    let table = table_for("read x");
    let before = table.num_vars();

    let _ = table.find("x");
    let _ = table.find("missing");

    assert_eq!(table.num_vars(), before);
}
