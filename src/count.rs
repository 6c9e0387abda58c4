use crate::context::Context;
use crate::many::Many;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};

/// Parser combinator that applies a parser exactly `count` times
pub struct Count<P> {
    count: usize,
    parser: P,
}

impl<P> Count<P> {
    pub fn new(count: usize, parser: P) -> Self {
        Count { count, parser }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::new();
        let mut current = ctx;

        for matched in 0..self.count {
            match self.parser.parse(current) {
                ParseResult::Success { value, context } => {
                    values.push(value);
                    current = context;
                }
                ParseResult::Failure { .. } => {
                    return failure(
                        current,
                        format!("expected count {} actual {}", self.count, matched),
                    );
                }
            }
        }

        success(current, values, 0)
    }
}

/// Convenience function to create a Count parser
pub fn count<'code, P>(count: usize, parser: P) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(count, parser)
}

/// Parser combinator that matches as many repetitions as possible and then
/// checks that their number lies within `min..=max`
///
/// A rejected count still reports the context reached by the repetition.
pub struct CountMinMax<P> {
    min: usize,
    max: usize,
    many: Many<P>,
}

impl<P> CountMinMax<P> {
    pub fn new(min: usize, max: usize, parser: P) -> Self {
        CountMinMax {
            min,
            max,
            many: Many::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for CountMinMax<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let (values, context) = self.many.repeat(ctx);

        if values.len() < self.min {
            tracing::trace!(matched = values.len(), min = self.min, "too few repetitions");
            return failure(context, format!("match count < {}", self.min));
        }
        if self.max < values.len() {
            tracing::trace!(matched = values.len(), max = self.max, "too many repetitions");
            return failure(context, format!("{} < match count", self.max));
        }

        success(context, values, 0)
    }
}

/// Convenience function to create a CountMinMax parser
pub fn count_min_max<'code, P>(min: usize, max: usize, parser: P) -> CountMinMax<P>
where
    P: Parser<'code>,
{
    CountMinMax::new(min, max, parser)
}
