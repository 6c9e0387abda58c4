use crate::context::Context;
use crate::many::Many;
use crate::parser::Parser;
use crate::result::{ParseResult, success};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    many: Many<P>,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 {
            many: Many::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (head, after_head) = match self.many.inner().parse(ctx) {
            ParseResult::Success { value, context } => (value, context),
            ParseResult::Failure { expected, context } => {
                return ParseResult::Failure { expected, context };
            }
        };

        let (tail, context) = self.many.repeat(after_head);
        let mut values = Vec::with_capacity(tail.len() + 1);
        values.push(head);
        values.extend(tail);

        success(context, values, 0)
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
