use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map
    };
}

/// Symbolic tokens in match order. Tokens that are a prefix of a longer
/// token must come after it: `:=` has no single-character fallback, and a
/// lone `:` falls through to an Error token.
pub const SYMBOLIC_TOKENS: [(&str, TokenKind); 12] = [
    (":=", TokenKind::Assign),
    ("=", TokenKind::Equal),
    ("<", TokenKind::LessThan),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Times),
    ("/", TokenKind::Divide),
    ("^", TokenKind::Power),
    (";", TokenKind::SemiColon),
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("}", TokenKind::RightBrace),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndFile,
    Number,
    Identifier,
    Error,

    Assign,   // :=
    Equal,    // =
    LessThan, // <

    Plus,
    Minus,
    Times,
    Divide,
    Power,

    SemiColon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Reserved
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Error,
        ]) {
            println!("{} ({})", self.kind, self.lexeme);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
