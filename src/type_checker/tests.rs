//! Unit tests for the type checker.
//!
//! This module contains tests for the two-type rules and for error
//! aggregation across a whole program.

use crate::parser::parser::parse;

use super::type_checker::type_check;

fn check_source(source: &str) -> Vec<crate::errors::errors::Error> {
    let root = parse(source.to_string(), Some("test.tiny".to_string())).unwrap();
    type_check(&root, Some("test.tiny".to_string()))
}

#[test]
fn test_integer_if_condition_is_an_error() {
    // "if 1 then write 1 end" -> exactly one violation.
    let errors = check_source("if 1 then write 1 end");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "IfConditionNotBoolean");
}

#[test]
fn test_boolean_if_condition_is_accepted() {
    let errors = check_source("if 1<2 then write 1 end");

    assert!(errors.is_empty());
}

#[test]
fn test_repeat_condition_must_be_boolean() {
    let errors = check_source("repeat x := x-1 until x");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "RepeatConditionNotBoolean");
}

#[test]
fn test_repeat_with_boolean_condition() {
    let errors = check_source("repeat x := x-1 until x=0");

    assert!(errors.is_empty());
}

#[test]
fn test_assignment_of_comparison_is_an_error() {
    let errors = check_source("x := 1<2");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "AssignTypeMismatch");
}

#[test]
fn test_write_of_comparison_is_an_error() {
    let errors = check_source("write 1<2");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "WriteOperandNotInteger");
}

#[test]
fn test_operator_operands_must_be_integer() {
    // The grammar cannot produce a comparison inside another operator, so
    // build the shape by hand: Equal(LessThan(1, 2), 1). The relational
    // operand rule still holds uniformly.
    use crate::ast::ast::{NodeKind, Operator, TreeNode};

    let inner = TreeNode::new(
        NodeKind::Operator {
            op: Operator::LessThan,
            left: Box::new(TreeNode::new(NodeKind::NumberLiteral { value: 1 }, 1)),
            right: Box::new(TreeNode::new(NodeKind::NumberLiteral { value: 2 }, 1)),
        },
        1,
    );
    let outer = TreeNode::new(
        NodeKind::Operator {
            op: Operator::Equal,
            left: Box::new(inner),
            right: Box::new(TreeNode::new(NodeKind::NumberLiteral { value: 1 }, 1)),
        },
        1,
    );

    let errors = type_check(&outer, Some("test.tiny".to_string()));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "OperandNotInteger");
}

#[test]
fn test_all_violations_surface_in_one_run() {
    // Two independent violations: non-Boolean if condition and a Boolean
    // assignment value. The traversal never aborts.
    let errors = check_source("if 1 then x := 1<2 end");

    assert_eq!(errors.len(), 2);
    let names: Vec<&str> = errors.iter().map(|e| e.get_error_name()).collect();
    assert!(names.contains(&"IfConditionNotBoolean"));
    assert!(names.contains(&"AssignTypeMismatch"));
}

#[test]
fn test_violations_carry_line_numbers() {
    let errors = check_source("x := 1;\nif x then write x end");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_position().0, 2);
}

#[test]
fn test_every_error_is_a_type_error() {
    let errors = check_source("if 1 then x := 1<2 end");

    assert!(errors.iter().all(|e| e.is_type_error()));
}

#[test]
fn test_factorial_sample_is_well_typed() {
    let source = "read x;\n\
                  if 0<x then\n\
                  fact := 1;\n\
                  repeat\n\
                  fact := fact * x;\n\
                  x := x - 1\n\
                  until x = 0;\n\
                  write fact\n\
                  end";
    let errors = check_source(source);

    assert!(errors.is_empty());
}
