use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOLIC_TOKENS};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WORD_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
}

/// Pull-based scanner over TINY source text.
///
/// One call to [`Scanner::next_token`] returns the next token and advances
/// the cursor. The only state carried between calls is the cursor position
/// and the line counter.
pub struct Scanner {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn consume(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
        }
        self.pos += ch.len_utf8();
    }

    /// Skips whitespace and brace comments, counting every newline consumed.
    /// Comments do not nest; an unterminated comment is a scan failure.
    fn skip_insignificant(&mut self) -> Result<(), Error> {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => self.consume(ch),
                '{' => {
                    let open_position = self.position();
                    self.consume(ch);
                    loop {
                        match self.peek() {
                            None => {
                                return Err(Error::new(
                                    ErrorImpl::UnterminatedComment,
                                    open_position,
                                ))
                            }
                            Some('}') => {
                                self.consume('}');
                                break;
                            }
                            Some(inner) => self.consume(inner),
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Returns the next token, advancing past it. Maximal munch: number and
    /// identifier lexemes extend as far as possible, and the first
    /// non-matching character is left for the next call. Unrecognised
    /// characters come back as Error-kind tokens holding that character.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_insignificant()?;

        let line = self.line;

        if self.at_eof() {
            return Ok(MK_TOKEN!(TokenKind::EndFile, String::new(), line));
        }

        let rest = self.remainder();

        for (text, kind) in SYMBOLIC_TOKENS.iter() {
            if rest.starts_with(text) {
                self.pos += text.len();
                return Ok(MK_TOKEN!(*kind, String::from(*text), line));
            }
        }

        if let Some(matched) = NUMBER_PATTERN.find(rest) {
            let lexeme = String::from(matched.as_str());
            self.pos += lexeme.len();
            return Ok(MK_TOKEN!(TokenKind::Number, lexeme, line));
        }

        if let Some(matched) = WORD_PATTERN.find(rest) {
            let lexeme = String::from(matched.as_str());
            self.pos += lexeme.len();

            // Reserved words are whole-lexeme matches, never prefixes.
            if let Some(kind) = RESERVED_LOOKUP.get(lexeme.as_str()) {
                return Ok(MK_TOKEN!(*kind, lexeme, line));
            }
            return Ok(MK_TOKEN!(TokenKind::Identifier, lexeme, line));
        }

        // Anything else, including a lone `:`, is an Error token holding
        // the single offending character.
        let ch = rest.chars().next().unwrap();
        self.consume(ch);
        Ok(MK_TOKEN!(TokenKind::Error, ch.to_string(), line))
    }
}

/// Tokenizes a whole source text, failing fast on the first scan error.
/// The returned stream always ends with an EndFile token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token()?;

        if token.kind == TokenKind::Error {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: token.lexeme,
                },
                Position(token.line, scanner.file()),
            ));
        }

        let done = token.kind == TokenKind::EndFile;
        tokens.push(token);
        if done {
            break;
        }
    }

    Ok(tokens)
}
