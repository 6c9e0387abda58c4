use crate::context::Context;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that rewrites the message of a failed parse
///
/// The failure context and any success pass through untouched.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F, M> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(Cow<'static, str>) -> M,
    M: Into<Cow<'static, str>>,
{
    type Output = P::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(ctx) {
            ParseResult::Failure { expected, context } => ParseResult::Failure {
                expected: (self.mapper)(expected).into(),
                context,
            },
            success => success,
        }
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F, M>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(Cow<'static, str>) -> M,
    M: Into<Cow<'static, str>>,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F, M>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Cow<'static, str>) -> M,
        M: Into<Cow<'static, str>>,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}
