use crate::context::Context;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the value of a successful parse
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(ctx).map_value(&self.mapper)
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{char, satisfy};
    use crate::choice::choice;
    use crate::many1::many1;
    use crate::parser::BoxedExt;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Digit(u32),
    }

    #[test]
    fn test_map_char_to_string() {
        let result = map(char('a'), |c| c.to_string()).parse(Context::new("ab"));

        assert_eq!(result.value(), Some(&"a".to_string()));
        assert_eq!(result.context().rest(), "b");
    }

    #[test]
    fn test_map_preserves_failure() {
        let ctx = Context::new("b");
        let result = char('a').map(|c| c.to_string()).parse(ctx);

        assert_eq!(result.expected(), Some("b is not a"));
        assert_eq!(result.context(), ctx);
    }

    #[test]
    fn test_map_chaining() {
        let parser = satisfy(|c| c.is_ascii_digit())
            .map(|c| c.to_digit(10).unwrap_or_default())
            .map(|d| format!("Digit: {}", d));

        let result = parser.parse(Context::new("5"));
        assert_eq!(result.value(), Some(&"Digit: 5".to_string()));
    }

    #[test]
    fn test_map_to_enum_with_choice() {
        let parser = choice([
            satisfy(|c| c.is_ascii_alphabetic()).map(Token::Letter).boxed(),
            satisfy(|c| c.is_ascii_digit())
                .map(|c| Token::Digit(c.to_digit(10).unwrap_or_default()))
                .boxed(),
        ]);

        assert_eq!(
            parser.parse(Context::new("x")).value(),
            Some(&Token::Letter('x'))
        );
        assert_eq!(
            parser.parse(Context::new("7")).value(),
            Some(&Token::Digit(7))
        );
    }

    #[test]
    fn test_map_joins_repetition() {
        let parser = many1(satisfy(|c| c.is_ascii_digit()))
            .map(|digits| digits.into_iter().collect::<String>());

        let result = parser.parse(Context::new("123x"));
        assert_eq!(result.value(), Some(&"123".to_string()));
        assert_eq!(result.context().rest(), "x");
    }
}
