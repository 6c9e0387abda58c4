use crate::context::Context;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Turn a parser into a function over plain input strings
///
/// Each call builds a fresh [`Context`] at position 0 and runs the parser
/// once. Trailing input is not rejected; sequence with
/// [`eof`](crate::eof::eof) to require a full match.
pub fn create_parser<'code, P>(parser: P) -> impl Fn(&'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    move |input: &'code str| run(&parser, input)
}

/// Run a parser once against `input`
pub fn run<'code, P>(parser: &P, input: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let span = tracing::trace_span!("parse", len = input.len());
    let _enter = span.enter();

    let result = parser.parse(Context::new(input));
    match &result {
        ParseResult::Success { context, .. } => {
            tracing::debug!(position = context.position(), "parse succeeded");
        }
        ParseResult::Failure { expected, context } => {
            tracing::debug!(position = context.position(), expected = %expected, "parse failed");
        }
    }
    result
}
