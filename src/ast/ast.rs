use std::fmt::Display;

/// Binary operators carried by Operator nodes.
///
/// LessThan and Equal are relational and give the node a Boolean result
/// type; the rest are arithmetic and give Integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Power,
    LessThan,
    Equal,
}

impl Operator {
    pub fn is_relational(&self) -> bool {
        matches!(self, Operator::LessThan | Operator::Equal)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Result type of an expression node. Statements stay Void.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprDataType {
    Void,
    Integer,
    Boolean,
}

impl Display for ExprDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The eight TINY node kinds. Each variant owns its children, so a node's
/// payload can never disagree with its kind.
///
/// Assign and Read keep the target variable both as their name payload and
/// as an owned Identifier node: the symbol-table builder records variable
/// occurrences uniformly through Identifier nodes, and the type checker
/// reads the target's expression type off the child.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    If {
        condition: Box<TreeNode>,
        then_branch: Box<TreeNode>,
        else_branch: Option<Box<TreeNode>>,
    },
    Repeat {
        body: Box<TreeNode>,
        condition: Box<TreeNode>,
    },
    Assign {
        name: String,
        target: Box<TreeNode>,
        value: Box<TreeNode>,
    },
    Read {
        name: String,
        target: Box<TreeNode>,
    },
    Write {
        operand: Box<TreeNode>,
    },
    Operator {
        op: Operator,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    NumberLiteral {
        value: i64,
    },
    Identifier {
        name: String,
    },
}

impl NodeKind {
    /// Debug name of the node kind, as used by the tree dump.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::If { .. } => "If",
            NodeKind::Repeat { .. } => "Repeat",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::Read { .. } => "Read",
            NodeKind::Write { .. } => "Write",
            NodeKind::Operator { .. } => "Oper",
            NodeKind::NumberLiteral { .. } => "Num",
            NodeKind::Identifier { .. } => "ID",
        }
    }
}

/// A node of the TINY syntax tree.
///
/// Statement sequences are singly linked sibling chains: the head node of a
/// sequence links each following statement through `sibling`, never through
/// a child slot. The tree is a strict ownership tree; it is built once by
/// the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub sibling: Option<Box<TreeNode>>,
    pub expr_type: ExprDataType,
    pub line: u32,
}

impl TreeNode {
    /// Creates a node with its expression type pre-tagged from the kind:
    /// number literals and identifiers are Integer, relational operators
    /// Boolean, arithmetic operators Integer, statements Void.
    pub fn new(kind: NodeKind, line: u32) -> TreeNode {
        let expr_type = match &kind {
            NodeKind::NumberLiteral { .. } | NodeKind::Identifier { .. } => ExprDataType::Integer,
            NodeKind::Operator { op, .. } => {
                if op.is_relational() {
                    ExprDataType::Boolean
                } else {
                    ExprDataType::Integer
                }
            }
            _ => ExprDataType::Void,
        };

        TreeNode {
            kind,
            sibling: None,
            expr_type,
            line,
        }
    }

    /// Children of this node in left-to-right order.
    pub fn children(&self) -> Vec<&TreeNode> {
        match &self.kind {
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut children = vec![condition.as_ref(), then_branch.as_ref()];
                if let Some(else_branch) = else_branch {
                    children.push(else_branch.as_ref());
                }
                children
            }
            NodeKind::Repeat { body, condition } => vec![body.as_ref(), condition.as_ref()],
            NodeKind::Assign { target, value, .. } => vec![target.as_ref(), value.as_ref()],
            NodeKind::Read { target, .. } => vec![target.as_ref()],
            NodeKind::Write { operand } => vec![operand.as_ref()],
            NodeKind::Operator { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeKind::NumberLiteral { .. } | NodeKind::Identifier { .. } => vec![],
        }
    }

    /// Renders the tree, one node per line, indented three spaces per
    /// depth level in the format `[Kind][payload?][Type?]`. Siblings print
    /// at the same depth as the node itself.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"   ".repeat(depth));
        out.push_str(&format!("[{}]", self.kind.name()));

        match &self.kind {
            NodeKind::Operator { op, .. } => out.push_str(&format!("[{}]", op)),
            NodeKind::NumberLiteral { value } => out.push_str(&format!("[{}]", value)),
            NodeKind::Identifier { name }
            | NodeKind::Assign { name, .. }
            | NodeKind::Read { name, .. } => out.push_str(&format!("[{}]", name)),
            _ => {}
        }

        if self.expr_type != ExprDataType::Void {
            out.push_str(&format!("[{}]", self.expr_type));
        }

        out.push('\n');

        for child in self.children() {
            child.dump_into(out, depth + 1);
        }
        if let Some(sibling) = &self.sibling {
            sibling.dump_into(out, depth);
        }
    }
}
