use crate::context::Context;
use crate::error::ParseError;
use serde::Serialize;
use std::borrow::Cow;

/// Outcome of running a parser against a context
///
/// Serializes as `{"kind": "success", "value", "context"}` or
/// `{"kind": "error", "expected", "context"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ParseResult<'code, T> {
    /// The parser matched; `context` is the state after consuming
    #[serde(rename = "success")]
    Success { value: T, context: Context<'code> },
    /// The parser did not match; `context` is where it gave up
    #[serde(rename = "error")]
    Failure {
        expected: Cow<'static, str>,
        context: Context<'code>,
    },
}

/// Build a success whose context is `ctx` advanced by `consumed` characters
pub fn success<'code, T>(ctx: Context<'code>, value: T, consumed: usize) -> ParseResult<'code, T> {
    ParseResult::Success {
        value,
        context: ctx.advance(consumed),
    }
}

/// Build a failure that reports `ctx` unchanged
pub fn failure<'code, T>(
    ctx: Context<'code>,
    expected: impl Into<Cow<'static, str>>,
) -> ParseResult<'code, T> {
    ParseResult::Failure {
        expected: expected.into(),
        context: ctx,
    }
}

impl<'code, T> ParseResult<'code, T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure { .. })
    }

    /// The context carried by either variant
    pub fn context(&self) -> Context<'code> {
        match self {
            ParseResult::Success { context, .. } | ParseResult::Failure { context, .. } => {
                *context
            }
        }
    }

    /// The parsed value, if the parse succeeded
    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    /// The failure message, if the parse failed
    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { expected, .. } => Some(expected),
        }
    }

    /// Rewrite the value of a success, passing failures through
    pub fn map_value<U>(self, mapper: impl FnOnce(T) -> U) -> ParseResult<'code, U> {
        match self {
            ParseResult::Success { value, context } => ParseResult::Success {
                value: mapper(value),
                context,
            },
            ParseResult::Failure { expected, context } => {
                ParseResult::Failure { expected, context }
            }
        }
    }

    /// Convert into a standard `Result` so callers can use `?`
    pub fn into_result(self) -> Result<(T, Context<'code>), ParseError> {
        match self {
            ParseResult::Success { value, context } => Ok((value, context)),
            ParseResult::Failure { expected, context } => Err(ParseError::new(expected, context)),
        }
    }
}
