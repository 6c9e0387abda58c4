use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};

/// Parser combinator that runs a parser for its consumption only and
/// discards its value
///
/// A failure keeps the inner message but always reports the context the
/// skip was invoked with.
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<'code, P> Parser<'code> for Skip<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(ctx) {
            ParseResult::Success { context, .. } => success(context, (), 0),
            ParseResult::Failure { expected, .. } => failure(ctx, expected),
        }
    }
}

/// Convenience function to create a Skip parser
pub fn skip<'code, P>(parser: P) -> Skip<P>
where
    P: Parser<'code>,
{
    Skip::new(parser)
}

/// Extension trait to add .skip() method support for parsers
pub trait SkipExt<'code>: Parser<'code> + Sized {
    fn skip(self) -> Skip<Self> {
        Skip::new(self)
    }
}

/// Implement SkipExt for all parsers
impl<'code, P> SkipExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::char;
    use crate::count::count;
    use crate::parser::from_fn;

    #[test]
    fn test_skip_success() {
        let result = skip(char('a')).parse(Context::new("ab"));

        assert_eq!(result.value(), Some(&()));
        assert_eq!(result.context().rest(), "b");
        assert_eq!(result.context().position(), 1);
    }

    #[test]
    fn test_skip_repetition() {
        let result = count(2, char('a')).skip().parse(Context::new("aab"));

        assert_eq!(result.value(), Some(&()));
        assert_eq!(result.context().rest(), "b");
        assert_eq!(result.context().position(), 2);
    }

    #[test]
    fn test_skip_failure() {
        let ctx = Context::new("ab");
        let result = skip(char('b')).parse(ctx);

        assert_eq!(result.expected(), Some("a is not b"));
        assert_eq!(result.context(), ctx);
    }

    #[test]
    fn test_skip_failure_rewinds_to_start() {
        // count reports the context after its partial matches
        let ctx = Context::new("ab");
        let inner = count(2, char('a')).parse(ctx);
        assert_eq!(inner.context().position(), 1);

        let result = skip(count(2, char('a'))).parse(ctx);
        assert_eq!(result.expected(), Some("expected count 2 actual 1"));
        assert_eq!(result.context(), ctx);
    }

    #[test]
    fn test_skip_zero_width() {
        let ctx = Context::new("abc");
        let result = skip(from_fn(|ctx| success(ctx, 'x', 0))).parse(ctx);

        assert!(result.is_success());
        assert_eq!(result.context(), ctx);
    }
}
