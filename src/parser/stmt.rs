use crate::{
    ast::ast::{NodeKind, TreeNode},
    errors::errors::{Error, ErrorImpl},
    scanner::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// stmtseq -> stmt { ';' stmt }
///
/// Returns the head of a sibling chain, never empty. Statements keep
/// attaching as siblings until the lookahead is a token that can follow a
/// sequence: end of file, `end`, `else` or `until`.
pub fn parse_stmtseq(parser: &mut Parser) -> Result<TreeNode, Error> {
    let mut root = parse_stmt(parser)?;

    let mut tail = &mut root;
    while !matches!(
        parser.current_token_kind(),
        TokenKind::EndFile | TokenKind::End | TokenKind::Else | TokenKind::Until
    ) {
        parser.expect(TokenKind::SemiColon)?;
        let stmt = parse_stmt(parser)?;

        tail.sibling = Some(Box::new(stmt));
        tail = tail.sibling.as_mut().unwrap();
    }

    Ok(root)
}

/// stmt -> ifstmt | repeatstmt | assignstmt | readstmt | writestmt
pub fn parse_stmt(parser: &mut Parser) -> Result<TreeNode, Error> {
    match parser.current_token_kind() {
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::Repeat => parse_repeat_stmt(parser),
        TokenKind::Identifier => parse_assign_stmt(parser),
        TokenKind::Read => parse_read_stmt(parser),
        TokenKind::Write => parse_write_stmt(parser),
        _ => Err(Error::new(
            ErrorImpl::ExpectedStatement {
                found: parser.current_token().lexeme.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// ifstmt -> 'if' expr 'then' stmtseq [ 'else' stmtseq ] 'end'
pub fn parse_if_stmt(parser: &mut Parser) -> Result<TreeNode, Error> {
    let if_token = parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;
    let then_branch = parse_stmtseq(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        Some(Box::new(parse_stmtseq(parser)?))
    } else {
        None
    };

    parser.expect(TokenKind::End)?;

    Ok(TreeNode::new(
        NodeKind::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch,
        },
        if_token.line,
    ))
}

/// repeatstmt -> 'repeat' stmtseq 'until' expr
pub fn parse_repeat_stmt(parser: &mut Parser) -> Result<TreeNode, Error> {
    let repeat_token = parser.expect(TokenKind::Repeat)?;

    let body = parse_stmtseq(parser)?;
    parser.expect(TokenKind::Until)?;
    let condition = parse_expr(parser)?;

    Ok(TreeNode::new(
        NodeKind::Repeat {
            body: Box::new(body),
            condition: Box::new(condition),
        },
        repeat_token.line,
    ))
}

/// assignstmt -> ID ':=' expr
///
/// The assigned variable is kept twice: as the Assign node's name payload
/// and as an owned Identifier child, so the symbol-table builder sees one
/// Identifier occurrence per assignment.
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<TreeNode, Error> {
    let id_token = parser.expect(TokenKind::Identifier)?;
    let target = TreeNode::new(
        NodeKind::Identifier {
            name: id_token.lexeme.clone(),
        },
        id_token.line,
    );

    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;

    Ok(TreeNode::new(
        NodeKind::Assign {
            name: id_token.lexeme,
            target: Box::new(target),
            value: Box::new(value),
        },
        id_token.line,
    ))
}

/// readstmt -> 'read' ID
pub fn parse_read_stmt(parser: &mut Parser) -> Result<TreeNode, Error> {
    let read_token = parser.expect(TokenKind::Read)?;

    let id_token = parser.expect(TokenKind::Identifier)?;
    let target = TreeNode::new(
        NodeKind::Identifier {
            name: id_token.lexeme.clone(),
        },
        id_token.line,
    );

    Ok(TreeNode::new(
        NodeKind::Read {
            name: id_token.lexeme,
            target: Box::new(target),
        },
        read_token.line,
    ))
}

/// writestmt -> 'write' expr
pub fn parse_write_stmt(parser: &mut Parser) -> Result<TreeNode, Error> {
    let write_token = parser.expect(TokenKind::Write)?;
    let operand = parse_expr(parser)?;

    Ok(TreeNode::new(
        NodeKind::Write {
            operand: Box::new(operand),
        },
        write_token.line,
    ))
}
