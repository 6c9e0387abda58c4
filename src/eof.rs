use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};

/// Parser that succeeds only when the whole input has been consumed
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        if ctx.is_empty() {
            success(ctx, (), 0)
        } else {
            failure(ctx, "not EOF")
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}
