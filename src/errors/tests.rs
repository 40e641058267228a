//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::MalformedIntegerLiteral {
            text: "65536".to_string(),
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "MalformedIntegerLiteral");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lang".to_string()));
    let error = Error::new(
        ErrorImpl::UnterminatedStringLiteral {
            text: "abc".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.lang");
}

#[test]
fn test_malformed_integer_tip() {
    let error = Error::new(
        ErrorImpl::MalformedIntegerLiteral {
            text: "3x".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("3x")),
        ErrorTip::None => panic!("Expected a suggestion"),
    }
}

#[test]
fn test_unterminated_string_tip() {
    let error = Error::new(
        ErrorImpl::UnterminatedStringLiteral {
            text: "never closed".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedStringLiteral");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("never closed")),
        ErrorTip::None => panic!("Expected a suggestion"),
    }
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::MalformedIntegerLiteral {
        text: "99999".to_string(),
    };
    assert_eq!(error.to_string(), "malformed integer literal: \"99999\"");

    let error = ErrorImpl::UnterminatedStringLiteral {
        text: "abc".to_string(),
    };
    assert_eq!(error.to_string(), "unterminated string literal: \"abc\"");
}

#[test]
fn test_format_error_points_at_offending_text() {
    let source = "let a = 65536;\n";
    let error = Error::new(
        ErrorImpl::MalformedIntegerLiteral {
            text: "65536".to_string(),
        },
        Position(8, Rc::new("test.lang".to_string())),
    );

    let rendered = crate::format_error(&error, source);

    assert!(rendered.contains("Error: MalformedIntegerLiteral"));
    assert!(rendered.contains("-> test.lang"));
    assert!(rendered.contains("1 | let a = 65536;"));
    assert!(rendered.contains("--------^"));
}
