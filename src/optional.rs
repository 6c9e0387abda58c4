use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, success};

/// Parser combinator that turns a failure into a successful `None`
///
/// On failure nothing is consumed.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(ctx) {
            ParseResult::Success { value, context } => success(context, Some(value), 0),
            ParseResult::Failure { .. } => success(ctx, None, 0),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
