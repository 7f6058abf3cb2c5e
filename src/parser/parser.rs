//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level `parse`
//! entry point. The parser owns the scanner and keeps exactly one token of
//! lookahead; grammar rules live in `stmt.rs` and `expr.rs`.

use std::{mem, rc::Rc};

use crate::{
    ast::ast::TreeNode,
    errors::errors::{Error, ErrorImpl},
    scanner::{
        scanner::Scanner,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmtseq;

/// The parser state: the scanner it pulls from and the single lookahead
/// token. Threading this context through every producer function keeps
/// parsing reentrant, with no global state.
pub struct Parser {
    scanner: Scanner,
    lookahead: Token,
    file: Rc<String>,
}

impl Parser {
    /// Creates a parser over the given scanner, pulling the first token.
    pub fn new(mut scanner: Scanner) -> Result<Self, Error> {
        let file = scanner.file();
        let lookahead = pull(&mut scanner, &file)?;

        Ok(Parser {
            scanner,
            lookahead,
            file,
        })
    }

    /// Returns the current lookahead token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the current lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Advances by exactly one token and returns the consumed token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = pull(&mut self.scanner, &self.file)?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    /// Consumes the lookahead iff its kind equals `expected`; otherwise
    /// fails with the expected-vs-actual token kinds. This is the `match`
    /// operation of the grammar.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, Error> {
        if self.lookahead.kind == expected {
            self.advance()
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found: self.lookahead.kind,
                },
                self.get_position(),
            ))
        }
    }

    /// Returns the source position of the lookahead token.
    pub fn get_position(&self) -> Position {
        Position(self.lookahead.line, Rc::clone(&self.file))
    }

    /// Returns a position on the given line of the file being parsed.
    pub fn position_at(&self, line: u32) -> Position {
        Position(line, Rc::clone(&self.file))
    }
}

/// Pulls the next token, turning Error-kind tokens into fail-fast scan
/// errors before they ever reach a grammar rule.
fn pull(scanner: &mut Scanner, file: &Rc<String>) -> Result<Token, Error> {
    let token = scanner.next_token()?;

    if token.kind == TokenKind::Error {
        return Err(Error::new(
            ErrorImpl::UnrecognisedCharacter {
                character: token.lexeme,
            },
            Position(token.line, Rc::clone(file)),
        ));
    }

    Ok(token)
}

/// Parses TINY source text into a syntax tree.
///
/// program -> stmtseq. The whole input must be consumed; a parse failure
/// aborts the compilation and yields no tree.
pub fn parse(source: String, file: Option<String>) -> Result<TreeNode, Error> {
    let scanner = Scanner::new(source, file);
    let mut parser = Parser::new(scanner)?;

    let root = parse_stmtseq(&mut parser)?;
    parser.expect(TokenKind::EndFile)?;

    Ok(root)
}
