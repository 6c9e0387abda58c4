use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};

/// Parser that consumes and returns a single character
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match ctx.peek() {
            Some(ch) => success(ctx, ch, 1),
            None => failure(ctx, "empty character"),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches a specific character
pub struct Char(char);

impl<'code> Parser<'code> for Char {
    type Output = char;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match ctx.peek() {
            Some(ch) if ch == self.0 => success(ctx, ch, 1),
            Some(ch) => failure(ctx, format!("{} is not {}", ch, self.0)),
            None => failure(ctx, format!(" is not {}", self.0)),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn char(expected: char) -> Char {
    Char(expected)
}

/// Parser that matches a single character accepted by a predicate
///
/// At end of input the predicate is not consulted and the parser fails.
pub struct Satisfy<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match ctx.peek() {
            Some(ch) if (self.predicate)(ch) => success(ctx, ch, 1),
            _ => failure(ctx, "no match predicate"),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy { predicate }
}
