#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod scanner;
pub mod symbol_table;
pub mod type_checker;

extern crate regex;

/// A source position: 1-based line number plus the file it belongs to.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Returns the text of the given 1-based line, or an empty string when the
/// line number falls outside the source.
pub fn get_line(source: &str, line: u32) -> &str {
    if line == 0 {
        return "";
    }
    source.lines().nth(line as usize - 1).unwrap_or("")
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: name (tip)
        -> input.tiny:3
          |
        3 | if x then
          |
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}:{}", position.1, position.0);

    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");
    println!("{} | {}", line_string, get_line(source, position.0).trim_end());
    println!("{:>padding$}", "|");
}
