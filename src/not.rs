use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};

/// Parser combinator that succeeds where the given parser fails
///
/// Unlike a zero-width negative lookahead, a successful `Not` consumes one
/// character (none at end of input). When the inner parser matches, `Not`
/// fails with "matched" and consumes nothing.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(ctx) {
            ParseResult::Success { .. } => failure(ctx, "matched"),
            ParseResult::Failure { .. } => success(ctx, (), 1),
        }
    }
}

/// Convenience function to create a Not parser
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
