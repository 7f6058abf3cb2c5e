use std::fmt::Display;

use thiserror::Error;

use crate::{scanner::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::IfConditionNotBoolean => "IfConditionNotBoolean",
            ErrorImpl::RepeatConditionNotBoolean => "RepeatConditionNotBoolean",
            ErrorImpl::AssignTypeMismatch { .. } => "AssignTypeMismatch",
            ErrorImpl::ReadTargetNotInteger { .. } => "ReadTargetNotInteger",
            ErrorImpl::WriteOperandNotInteger => "WriteOperandNotInteger",
            ErrorImpl::OperandNotInteger { .. } => "OperandNotInteger",
            ErrorImpl::LeafNotInteger { .. } => "LeafNotInteger",
        }
    }

    /// Whether this error came out of the type checker, as opposed to the
    /// scanner or parser. Type errors are aggregated, never fatal.
    pub fn is_type_error(&self) -> bool {
        matches!(
            &self.internal_error,
            ErrorImpl::IfConditionNotBoolean
                | ErrorImpl::RepeatConditionNotBoolean
                | ErrorImpl::AssignTypeMismatch { .. }
                | ErrorImpl::ReadTargetNotInteger { .. }
                | ErrorImpl::WriteOperandNotInteger
                | ErrorImpl::OperandNotInteger { .. }
                | ErrorImpl::LeafNotInteger { .. }
        )
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of any TINY token",
                character
            )),
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "comment opened with `{` is never closed with `}`",
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedStatement { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement",
                found
            )),
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::IfConditionNotBoolean => ErrorTip::Suggestion(String::from(
                "condition in `if` statement must be of Boolean data type",
            )),
            ErrorImpl::RepeatConditionNotBoolean => ErrorTip::Suggestion(String::from(
                "`repeat` condition must be of Boolean data type",
            )),
            ErrorImpl::AssignTypeMismatch { variable } => ErrorTip::Suggestion(format!(
                "assignment to `{}` requires both sides to be of Integer data type",
                variable
            )),
            ErrorImpl::ReadTargetNotInteger { variable } => ErrorTip::Suggestion(format!(
                "`read` statement expects an Integer variable, `{}` is not",
                variable
            )),
            ErrorImpl::WriteOperandNotInteger => ErrorTip::Suggestion(String::from(
                "`write` statement expects an Integer value",
            )),
            ErrorImpl::OperandNotInteger { operator } => ErrorTip::Suggestion(format!(
                "`{}` must be applied to Integer values",
                operator
            )),
            ErrorImpl::LeafNotInteger { kind } => ErrorTip::Suggestion(format!(
                "{} must have Integer data type",
                kind
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unexpected token: expected {expected:?}, found {found:?}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected a statement, found {found:?}")]
    ExpectedStatement { found: String },
    #[error("expected an expression, found {found:?}")]
    ExpectedExpression { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("condition in `if` statement must be Boolean")]
    IfConditionNotBoolean,
    #[error("`repeat` condition must be Boolean")]
    RepeatConditionNotBoolean,
    #[error("assignment to {variable:?} requires Integer on both sides")]
    AssignTypeMismatch { variable: String },
    #[error("`read` expects an Integer variable: {variable:?}")]
    ReadTargetNotInteger { variable: String },
    #[error("`write` expects an Integer value")]
    WriteOperandNotInteger,
    #[error("operation {operator:?} must be applied to Integer values")]
    OperandNotInteger { operator: String },
    #[error("{kind} must have Integer data type")]
    LeafNotInteger { kind: String },
}
