use crate::context::Context;
use crate::parser::Parser;
use crate::result::ParseResult;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(ctx)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::char;
    use crate::choice::choice;
    use crate::map::MapExt;
    use crate::many::many;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::surround::surround;

    /// Nesting depth of balanced parentheses, e.g. "(())" has depth 2
    fn nested<'code>() -> BoxedParser<'code, usize> {
        choice([
            surround('(', ')', lazy(nested)).map(|depth| depth + 1).boxed(),
            char('x').map(|_| 0).boxed(),
        ])
        .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let result = lazy(|| char('a')).parse(Context::new("aaaa"));

        assert_eq!(result.value(), Some(&'a'));
        assert_eq!(result.context().position(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let result = lazy(|| many(char('a'))).parse(Context::new("aaaa"));

        assert_eq!(result.value().map(Vec::len), Some(4));
        assert_eq!(result.context().position(), 4);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let parser = nested();

        assert_eq!(parser.parse(Context::new("x")).value(), Some(&0));
        assert_eq!(parser.parse(Context::new("((x))")).value(), Some(&2));
        assert!(parser.parse(Context::new("((x)")).is_failure());
    }
}
