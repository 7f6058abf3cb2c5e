use std::rc::Rc;

use crate::{
    ast::ast::{ExprDataType, NodeKind, TreeNode},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Collects type violations over one postorder traversal. The file name is
/// only carried for error positions.
pub struct TypeChecker {
    errors: Vec<Error>,
    file: Rc<String>,
}

impl TypeChecker {
    pub fn new(file: Option<String>) -> TypeChecker {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        TypeChecker {
            errors: vec![],
            file: file_name,
        }
    }

    fn report(&mut self, error_impl: ErrorImpl, line: u32) {
        self.errors
            .push(Error::new(error_impl, Position(line, Rc::clone(&self.file))));
    }

    /// Postorder: children first, then the node itself, then the sibling
    /// chain. A violation never stops the traversal.
    fn check(&mut self, node: &TreeNode) {
        let mut current = Some(node);
        while let Some(node) = current {
            for child in node.children() {
                self.check(child);
            }

            self.check_node(node);

            current = node.sibling.as_deref();
        }
    }

    fn check_node(&mut self, node: &TreeNode) {
        match &node.kind {
            NodeKind::If { condition, .. } => {
                if condition.expr_type != ExprDataType::Boolean {
                    self.report(ErrorImpl::IfConditionNotBoolean, node.line);
                }
            }
            NodeKind::Repeat { condition, .. } => {
                if condition.expr_type != ExprDataType::Boolean {
                    self.report(ErrorImpl::RepeatConditionNotBoolean, node.line);
                }
            }
            NodeKind::Assign { name, target, value } => {
                if target.expr_type != ExprDataType::Integer
                    || value.expr_type != ExprDataType::Integer
                {
                    self.report(
                        ErrorImpl::AssignTypeMismatch {
                            variable: name.clone(),
                        },
                        node.line,
                    );
                }
            }
            NodeKind::Read { name, target } => {
                if target.expr_type != ExprDataType::Integer {
                    self.report(
                        ErrorImpl::ReadTargetNotInteger {
                            variable: name.clone(),
                        },
                        node.line,
                    );
                }
            }
            NodeKind::Write { operand } => {
                if operand.expr_type != ExprDataType::Integer {
                    self.report(ErrorImpl::WriteOperandNotInteger, node.line);
                }
            }
            // Uniform for arithmetic and relational operators: a relational
            // operator's Boolean result is a property of the node, not a
            // constraint on its operands.
            NodeKind::Operator { op, left, right } => {
                if left.expr_type != ExprDataType::Integer
                    || right.expr_type != ExprDataType::Integer
                {
                    self.report(
                        ErrorImpl::OperandNotInteger {
                            operator: op.to_string(),
                        },
                        node.line,
                    );
                }
            }
            // Sanity checks on construction, not user errors.
            NodeKind::NumberLiteral { .. } => {
                if node.expr_type != ExprDataType::Integer {
                    self.report(
                        ErrorImpl::LeafNotInteger {
                            kind: String::from("numeric constant"),
                        },
                        node.line,
                    );
                }
            }
            NodeKind::Identifier { .. } => {
                if node.expr_type != ExprDataType::Integer {
                    self.report(
                        ErrorImpl::LeafNotInteger {
                            kind: String::from("identifier"),
                        },
                        node.line,
                    );
                }
            }
        }
    }
}

/// Type checks a completed tree, returning every violation found in one
/// run. An empty vector means the program is well typed.
pub fn type_check(root: &TreeNode, file: Option<String>) -> Vec<Error> {
    let mut checker = TypeChecker::new(file);
    checker.check(root);
    checker.errors
}
