use crate::character::{Char, char};
use crate::context::Context;
use crate::parser::Parser;
use crate::result::{ParseResult, success};

/// Parser that matches an exact string character by character
///
/// The value is the list of matched characters, not a joined string.
/// The first mismatching character's failure is returned unchanged.
pub struct Str {
    chars: Vec<Char>,
}

impl Str {
    pub fn new(expected: &str) -> Self {
        Str {
            chars: expected.chars().map(char).collect(),
        }
    }
}

impl<'code> Parser<'code> for Str {
    type Output = Vec<char>;

    fn parse(&self, ctx: Context<'code>) -> ParseResult<'code, Self::Output> {
        let mut matched = Vec::with_capacity(self.chars.len());
        let mut current = ctx;

        for parser in &self.chars {
            match parser.parse(current) {
                ParseResult::Success { value, context } => {
                    matched.push(value);
                    current = context;
                }
                ParseResult::Failure { expected, context } => {
                    return ParseResult::Failure { expected, context };
                }
            }
        }

        success(current, matched, 0)
    }
}

/// Convenience function to create a Str parser
pub fn str(expected: &str) -> Str {
    Str::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let result = str("abc").parse(Context::new("abc"));

        assert_eq!(result.value(), Some(&vec!['a', 'b', 'c']));
        assert!(result.context().is_empty());
        assert_eq!(result.context().position(), 3);
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let result = str("hello").parse(Context::new("hello world"));

        assert_eq!(result.context().rest(), " world");
        assert_eq!(result.context().position(), 5);
    }

    #[test]
    fn test_mismatch_reports_failing_char() {
        let result = str("abc").parse(Context::new("abd"));

        assert_eq!(result.expected(), Some("d is not c"));
        assert_eq!(result.context().rest(), "d");
        assert_eq!(result.context().position(), 2);
    }

    #[test]
    fn test_input_too_short() {
        let result = str("abc").parse(Context::new("ab"));

        assert_eq!(result.expected(), Some(" is not c"));
        assert_eq!(result.context().position(), 2);
    }

    #[test]
    fn test_unicode_string() {
        let result = str("こんにちは").parse(Context::new("こんにちは世界"));

        assert_eq!(result.value().map(Vec::len), Some(5));
        assert_eq!(result.context().rest(), "世界");
        assert_eq!(result.context().position(), 5);
    }

    #[test]
    fn test_empty_string() {
        let ctx = Context::new("abc");
        let result = str("").parse(ctx);

        assert_eq!(result.value(), Some(&vec![]));
        assert_eq!(result.context(), ctx);
    }
}
