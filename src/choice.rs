use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, failure};

/// Parser combinator that tries each parser from the same starting context
/// and returns the first success
///
/// When every alternative fails the result is a failure with an empty
/// message at the starting context; individual failure messages are not
/// kept.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            let result = parser.parse(ctx);
            if result.is_success() {
                return result;
            }
        }

        tracing::trace!(
            position = ctx.position(),
            alternatives = self.parsers.len(),
            "no alternative matched"
        );
        failure(ctx, "")
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers.into_iter().collect())
}
