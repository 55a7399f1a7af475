//! Turns a `lalrpop` parse failure into the single [`AdapterError::DotParse`] shape callers see,
//! regardless of whether the failure came from the lexer or the grammar.

use lalrpop_util::ParseError;

use super::tokens::{LexError, Tok};
use crate::error::AdapterError;

pub(super) fn describe(err: ParseError<usize, Tok, LexError>, input: &str) -> AdapterError {
    match err {
        ParseError::InvalidToken { location } => AdapterError::DotParse {
            message: "invalid token".to_string(),
            line: line_at(input, location),
        },
        ParseError::UnrecognizedEof { location, expected } => AdapterError::DotParse {
            message: format!("unexpected end of input (expected one of: {})", expected.join(", ")),
            line: line_at(input, location),
        },
        ParseError::UnrecognizedToken { token: (start, _, _), expected } => AdapterError::DotParse {
            message: format!("unexpected token (expected one of: {})", expected.join(", ")),
            line: line_at(input, start),
        },
        ParseError::ExtraToken { token: (start, _, _) } => AdapterError::DotParse {
            message: "unexpected trailing input".to_string(),
            line: line_at(input, start),
        },
        ParseError::User { error } => {
            let message = if error.message.is_empty() {
                "unrecognized character".to_string()
            } else {
                error.message
            };
            AdapterError::DotParse { message, line: line_at(input, error.offset) }
        }
    }
}

fn line_at(input: &str, offset: usize) -> usize {
    input[..offset.min(input.len())].matches('\n').count() + 1
}
