use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Scanning state threaded through every parser call
///
/// A context is a window onto the parsed input: the full `text`, the
/// unconsumed `rest`, and the `position` of `rest` within `text`. Positions
/// count Unicode scalar values, not bytes.
///
/// Contexts are `Copy` and never change after construction. Advancing
/// returns a new context, so an earlier context stays valid for
/// backtracking.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Context<'code> {
    text: &'code str,
    /// Byte offset of `rest` in `text`
    offset: usize,
    /// Char offset of `rest` in `text`
    position: usize,
}

impl<'code> Context<'code> {
    /// Create a context positioned at the start of `text`
    pub fn new(text: &'code str) -> Self {
        Context {
            text,
            offset: 0,
            position: 0,
        }
    }

    /// The entire input
    pub fn text(&self) -> &'code str {
        self.text
    }

    /// The suffix of `text` not yet consumed
    pub fn rest(&self) -> &'code str {
        &self.text[self.offset..]
    }

    /// Zero-based char offset of `rest` within `text`
    pub fn position(&self) -> usize {
        self.position
    }

    /// First unconsumed character, if any
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// True when nothing remains to be consumed
    pub fn is_empty(&self) -> bool {
        self.offset == self.text.len()
    }

    /// Return a context advanced by `n` characters
    ///
    /// Advancing past the end of the input stops at the end.
    pub fn advance(self, n: usize) -> Self {
        let mut offset = self.offset;
        let mut consumed = 0;
        for ch in self.rest().chars().take(n) {
            offset += ch.len_utf8();
            consumed += 1;
        }
        Context {
            text: self.text,
            offset,
            position: self.position + consumed,
        }
    }
}

impl Serialize for Context<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Context", 3)?;
        state.serialize_field("text", self.text)?;
        state.serialize_field("rest", self.rest())?;
        state.serialize_field("position", &self.position)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let ctx = Context::new("hello");
        assert_eq!(ctx.text(), "hello");
        assert_eq!(ctx.rest(), "hello");
        assert_eq!(ctx.position(), 0);
        assert_eq!(ctx.peek(), Some('h'));
    }

    #[test]
    fn test_advance() {
        let ctx = Context::new("abc");
        let ctx = ctx.advance(1);
        assert_eq!(ctx.rest(), "bc");
        assert_eq!(ctx.position(), 1);

        let ctx = ctx.advance(2);
        assert_eq!(ctx.rest(), "");
        assert_eq!(ctx.position(), 3);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_advance_zero() {
        let ctx = Context::new("abc").advance(0);
        assert_eq!(ctx, Context::new("abc"));
    }

    #[test]
    fn test_advance_past_end_is_clamped() {
        let ctx = Context::new("ab").advance(5);
        assert_eq!(ctx.rest(), "");
        assert_eq!(ctx.position(), 2);
    }

    #[test]
    fn test_empty_text() {
        let ctx = Context::new("");
        assert!(ctx.is_empty());
        assert_eq!(ctx.peek(), None);

        let ctx = ctx.advance(1);
        assert_eq!(ctx.position(), 0);
    }

    #[test]
    fn test_multibyte_positions_count_chars() {
        let ctx = Context::new("åäö!");
        let ctx = ctx.advance(2);
        assert_eq!(ctx.rest(), "ö!");
        assert_eq!(ctx.position(), 2);
        assert_eq!(ctx.peek(), Some('ö'));
    }

    #[test]
    fn test_copy_independence() {
        let ctx = Context::new("abcd");
        let saved = ctx;

        let advanced = ctx.advance(2);
        assert_eq!(advanced.rest(), "cd");

        // Saved copy is unaffected
        assert_eq!(saved.rest(), "abcd");
        assert_eq!(saved.advance(1).rest(), "bcd");
    }

    #[test]
    fn test_position_plus_rest_is_text_length() {
        let text = "xyzzy";
        let mut ctx = Context::new(text);
        for _ in 0..7 {
            assert_eq!(
                ctx.position() + ctx.rest().chars().count(),
                text.chars().count()
            );
            ctx = ctx.advance(1);
        }
    }
}
