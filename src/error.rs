use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Owned form of a failed parse, for callers that propagate with `?`
///
/// Locations are flat char offsets into the input; there is no line or
/// column tracking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.expected, .position))]
pub struct ParseError {
    expected: Cow<'static, str>,
    position: usize,
    rest: String,
}

fn describe(expected: &str, position: &usize) -> String {
    if expected.is_empty() {
        format!("parse error at offset {}", position)
    } else {
        format!("parse error at offset {}: {}", position, expected)
    }
}

impl ParseError {
    pub fn new(expected: impl Into<Cow<'static, str>>, context: Context<'_>) -> Self {
        ParseError {
            expected: expected.into(),
            position: context.position(),
            rest: context.rest().to_owned(),
        }
    }

    /// The diagnostic reported by the failing parser
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Char offset at which the parser gave up
    pub fn position(&self) -> usize {
        self.position
    }

    /// Input left unconsumed at the failure point
    pub fn rest(&self) -> &str {
        &self.rest
    }
}
