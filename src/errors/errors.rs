use std::fmt::Display;

use thiserror::Error;

use crate::Position;

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
            ErrorImpl::MalformedIntegerLiteral { .. } => "MalformedIntegerLiteral",
            ErrorImpl::UnterminatedStringLiteral { .. } => "UnterminatedStringLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedIntegerLiteral { text } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, expected a decimal value between 0 and 65535",
                text
            )),
            ErrorImpl::UnterminatedStringLiteral { text } => ErrorTip::Suggestion(format!(
                "Reached end of input inside `\"{}`, did you miss a closing quote?",
                text
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
    #[error("malformed integer literal: {text:?}")]
    MalformedIntegerLiteral { text: String },
    #[error("unterminated string literal: {text:?}")]
    UnterminatedStringLiteral { text: String },
}
