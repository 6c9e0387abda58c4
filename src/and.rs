use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, success};

/// Parser combinator that runs a list of parsers in order and collects
/// their values
///
/// The first failure is returned as is, message and context included.
/// Parsers of different concrete types can be mixed by boxing them
/// (see [`BoxedExt`](crate::parser::BoxedExt)); for a fixed number of
/// parsers with different outputs use [`seq`].
pub struct And<P> {
    parsers: Vec<P>,
}

impl<P> And<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        And { parsers }
    }
}

impl<'code, P> Parser<'code> for And<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut current = ctx;

        for parser in &self.parsers {
            match parser.parse(current) {
                ParseResult::Success { value, context } => {
                    values.push(value);
                    current = context;
                }
                ParseResult::Failure { expected, context } => {
                    return ParseResult::Failure { expected, context };
                }
            }
        }

        success(current, values, 0)
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P>(parsers: impl IntoIterator<Item = P>) -> And<P>
where
    P: Parser<'code>,
{
    And::new(parsers.into_iter().collect())
}

/// A tuple of parsers that can be run one after another
pub trait Sequence<'code> {
    type Output;

    fn parse_sequence(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output>;
}

macro_rules! impl_sequence {
    ($($parser:ident $value:ident $idx:tt),+) => {
        impl<'code, $($parser),+> Sequence<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code>),+
        {
            type Output = ($(<$parser as Parser<'code>>::Output,)+);

            fn parse_sequence(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
                let mut current = ctx;
                $(
                    let $value = match self.$idx.parse(current) {
                        ParseResult::Success { value, context } => {
                            current = context;
                            value
                        }
                        ParseResult::Failure { expected, context } => {
                            return ParseResult::Failure { expected, context };
                        }
                    };
                )+
                success(current, ($($value,)+), 0)
            }
        }
    };
}

impl_sequence!(P1 v1 0);
impl_sequence!(P1 v1 0, P2 v2 1);
impl_sequence!(P1 v1 0, P2 v2 1, P3 v3 2);
impl_sequence!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3);
impl_sequence!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4);
impl_sequence!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5);
impl_sequence!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6);
impl_sequence!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7);

/// Parser combinator that sequences a tuple of parsers with different
/// output types, producing a flat tuple of their values
///
/// Behaves like [`and`]: the first failure is forwarded unchanged.
pub struct Seq<S> {
    parsers: S,
}

impl<'code, S> Parser<'code> for Seq<S>
where
    S: Sequence<'code>,
{
    type Output = S::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        self.parsers.parse_sequence(ctx)
    }
}

/// Convenience function to create a Seq parser from a tuple of parsers
pub fn seq<'code, S>(parsers: S) -> Seq<S>
where
    S: Sequence<'code>,
{
    Seq { parsers }
}
