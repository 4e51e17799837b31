//! Type-aware value formatting.
//!
//! Turns a resolved [`Literal`] into the text written after the colon of a
//! variable declaration. Strings always pass through untouched; numbers get a
//! unit or a rescale depending on the declared [`TokenType`]:
//!
//! | Type | `16` becomes |
//! |------|--------------|
//! | dimension, sizing, spacing | `16px` |
//! | duration | `16ms` |
//! | opacity | `0.16` (values above 1 are read as percentages) |
//! | anything else | `16` |

use crate::resolve::Literal;
use crate::store::TokenType;

/// Why a literal has no output form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("cannot format {kind} value as a single variable")]
    Composite { kind: &'static str },
    #[error("value is empty")]
    Empty,
}

/// Formats a resolved literal for output.
pub fn format_literal(literal: &Literal, token_type: &TokenType) -> Result<String, FormatError> {
    let text = match literal {
        Literal::Text(text) => text.clone(),
        Literal::Number(n) => format_number(*n, token_type),
        Literal::Bool(b) => b.to_string(),
        Literal::Composite(_) => {
            return Err(FormatError::Composite {
                kind: literal.kind(),
            })
        }
    };

    if text.trim().is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(text)
}

/// Formats a number according to its declared type.
pub fn format_number(n: f64, token_type: &TokenType) -> String {
    match token_type {
        t if t.is_pixel() => format!("{}px", n),
        TokenType::Duration => format!("{}ms", n),
        TokenType::Opacity => normalize_opacity(n).to_string(),
        _ => n.to_string(),
    }
}

/// Maps 0-100 and 0-1 opacity scales onto 0-1.
pub fn normalize_opacity(n: f64) -> f64 {
    if n.abs() > 1.0 {
        n / 100.0
    } else {
        n
    }
}
