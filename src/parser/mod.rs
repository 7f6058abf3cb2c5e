//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! scanner's token stream into an Abstract Syntax Tree, one producer
//! function per grammar rule:
//!
//! ```text
//! program    -> stmtseq
//! stmtseq    -> stmt { ';' stmt }
//! stmt       -> ifstmt | repeatstmt | assignstmt | readstmt | writestmt
//! ifstmt     -> 'if' expr 'then' stmtseq [ 'else' stmtseq ] 'end'
//! repeatstmt -> 'repeat' stmtseq 'until' expr
//! assignstmt -> ID ':=' expr
//! readstmt   -> 'read' ID
//! writestmt  -> 'write' expr
//! expr       -> mathexpr [ ('<'|'=') mathexpr ]
//! mathexpr   -> term { ('+'|'-') term }       left-assoc
//! term       -> factor { ('*'|'/') factor }   left-assoc
//! factor     -> newexpr { '^' newexpr }       right-assoc
//! newexpr    -> '(' mathexpr ')' | NUM | ID
//! ```
//!
//! The parser pulls tokens from the scanner with one token of lookahead.
//! Any mismatch is a fatal parse error; there is no resynchronization.

pub mod expr;
pub mod parser;
pub mod stmt;
