use crate::{
    ast::ast::{NodeKind, Operator, TreeNode},
    errors::errors::{Error, ErrorImpl},
    scanner::tokens::{Token, TokenKind},
};

use super::parser::Parser;

fn binary(op: Operator, left: TreeNode, right: TreeNode, line: u32) -> TreeNode {
    TreeNode::new(
        NodeKind::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        line,
    )
}

/// expr -> mathexpr [ ('<'|'=') mathexpr ]
///
/// At most one relational operator: comparisons are non-associative, and a
/// comparison result is Boolean so it could never feed another comparison
/// anyway.
pub fn parse_expr(parser: &mut Parser) -> Result<TreeNode, Error> {
    let left = parse_mathexpr(parser)?;

    if matches!(
        parser.current_token_kind(),
        TokenKind::LessThan | TokenKind::Equal
    ) {
        let op_token = parser.advance()?;
        let op = match op_token.kind {
            TokenKind::LessThan => Operator::LessThan,
            _ => Operator::Equal,
        };
        let right = parse_mathexpr(parser)?;

        return Ok(binary(op, left, right, op_token.line));
    }

    Ok(left)
}

/// mathexpr -> term { ('+'|'-') term }
///
/// Left associative: the accumulated subtree becomes the left child of
/// every new operator node.
pub fn parse_mathexpr(parser: &mut Parser) -> Result<TreeNode, Error> {
    let mut current = parse_term(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Minus
    ) {
        let op_token = parser.advance()?;
        let op = match op_token.kind {
            TokenKind::Plus => Operator::Plus,
            _ => Operator::Minus,
        };
        let right = parse_term(parser)?;

        current = binary(op, current, right, op_token.line);
    }

    Ok(current)
}

/// term -> factor { ('*'|'/') factor }    left associative
pub fn parse_term(parser: &mut Parser) -> Result<TreeNode, Error> {
    let mut current = parse_factor(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Times | TokenKind::Divide
    ) {
        let op_token = parser.advance()?;
        let op = match op_token.kind {
            TokenKind::Times => Operator::Times,
            _ => Operator::Divide,
        };
        let right = parse_factor(parser)?;

        current = binary(op, current, right, op_token.line);
    }

    Ok(current)
}

/// factor -> newexpr { '^' newexpr }
///
/// Right associative: the recursion nests the rest of the chain into the
/// right child, so `a^b^c` parses as `a^(b^c)`.
pub fn parse_factor(parser: &mut Parser) -> Result<TreeNode, Error> {
    let base = parse_newexpr(parser)?;

    if parser.current_token_kind() == TokenKind::Power {
        let op_token = parser.advance()?;
        let exponent = parse_factor(parser)?;

        return Ok(binary(Operator::Power, base, exponent, op_token.line));
    }

    Ok(base)
}

/// newexpr -> '(' mathexpr ')' | NUM | ID
///
/// Parenthesized expressions return the inner tree directly; parentheses
/// leave no node behind. Number values are parsed eagerly here.
pub fn parse_newexpr(parser: &mut Parser) -> Result<TreeNode, Error> {
    match parser.current_token_kind() {
        TokenKind::LeftParen => {
            parser.advance()?;
            let inner = parse_mathexpr(parser)?;
            parser.expect(TokenKind::RightParen)?;
            Ok(inner)
        }
        TokenKind::Number => {
            let token = parser.advance()?;
            let value = parse_number(parser, &token)?;

            Ok(TreeNode::new(
                NodeKind::NumberLiteral { value },
                token.line,
            ))
        }
        TokenKind::Identifier => {
            let token = parser.advance()?;

            Ok(TreeNode::new(
                NodeKind::Identifier { name: token.lexeme },
                token.line,
            ))
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: parser.current_token().lexeme.clone(),
            },
            parser.get_position(),
        )),
    }
}

fn parse_number(parser: &Parser, token: &Token) -> Result<i64, Error> {
    token.lexeme.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.lexeme.clone(),
            },
            parser.position_at(token.line),
        )
    })
}
