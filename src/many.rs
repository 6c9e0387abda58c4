use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, success};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first failure, at end of input, or at a success
/// that did not advance the position. `Many` itself never fails.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }

    /// The repeated parser
    pub fn inner(&self) -> &P {
        &self.parser
    }

    /// Run the repetition and return the collected values together with
    /// the context after the last successful application
    pub fn repeat<'code>(&self, ctx: Context<'code>) -> (Vec<P::Output>, Context<'code>)
    where
        P: Parser<'code>,
    {
        let mut values = Vec::new();
        let mut current = ctx;

        while !current.is_empty() {
            match self.parser.parse(current) {
                ParseResult::Success { value, context } => {
                    if context.position() == current.position() {
                        break;
                    }
                    values.push(value);
                    current = context;
                }
                ParseResult::Failure { .. } => break,
            }
        }

        (values, current)
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let (values, context) = self.repeat(ctx);
        success(context, values, 0)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> crate::many1::Many1<Self> {
        crate::many1::Many1::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
