use crate::context::Context;
use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a [`Context`] to a [`ParseResult`].
/// Implementations must not keep mutable state: running the same parser on
/// the same context twice yields the same result.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given context
    ///
    /// Failures should report the context they were given, i.e. not consume
    /// input.
    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output>;
}

/// A type-erased parser, used where parsers of different concrete types
/// must share a collection
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(ctx)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(ctx)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    f: F,
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(Context<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        (self.f)(ctx)
    }
}

/// Lift a function from context to result into a parser
pub fn from_fn<'code, F, T>(f: F) -> FromFn<F>
where
    F: Fn(Context<'code>) -> ParseResult<'code, T>,
{
    FromFn { f }
}
