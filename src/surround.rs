use crate::character::{Char, char};
use crate::context::Context;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::skip::Skip;

/// Parser that matches content between an opening and a closing character
///
/// Parses `open + content + close` and returns only the content value.
/// Whichever of the three parts fails first is reported unchanged.
///
/// # Examples
/// - `"[content]"` → `content`
/// - `"(value)"` → `value`
pub struct Surround<P> {
    open: Skip<Char>,
    content: P,
    close: Skip<Char>,
}

impl<P> Surround<P> {
    pub fn new(open: char, close: char, content: P) -> Self {
        Surround {
            open: Skip::new(char(open)),
            content,
            close: Skip::new(char(close)),
        }
    }
}

impl<'code, P> Parser<'code> for Surround<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let ctx = match self.open.parse(ctx) {
            ParseResult::Success { context, .. } => context,
            ParseResult::Failure { expected, context } => {
                return ParseResult::Failure { expected, context };
            }
        };
        let (value, ctx) = match self.content.parse(ctx) {
            ParseResult::Success { value, context } => (value, context),
            failure @ ParseResult::Failure { .. } => return failure,
        };
        match self.close.parse(ctx) {
            ParseResult::Success { context, .. } => ParseResult::Success { value, context },
            ParseResult::Failure { expected, context } => {
                ParseResult::Failure { expected, context }
            }
        }
    }
}

/// Creates a parser that matches content between `open` and `close`
pub fn surround<'code, P>(open: char, close: char, content: P) -> Surround<P>
where
    P: Parser<'code>,
{
    Surround::new(open, close, content)
}
