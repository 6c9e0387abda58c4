//! # CharComb - Character Parser Combinators
//!
//! A small combinator library for parsing text one character at a time.
//!
//! Parsers are pure values: each one maps a [`Context`] (the input, what is
//! left of it, and the current offset) to a [`ParseResult`]. Small parsers
//! combine into larger ones:
//!
//! - **Failures are values**: a failed parse returns [`ParseResult::Failure`]
//!   with a message and the context it gave up at, never a panic
//! - **Backtracking is free**: contexts are `Copy`, so `choice`, `optional`
//!   and `many` simply retry from an earlier context
//! - **Serializable results**: results serialize to
//!   `{"kind": "success" | "error", ...}` through `serde`
//!
//! ```
//! use charcomb::{choice, create_parser, str, BoxedExt, MapExt};
//!
//! let boolean = choice([
//!     str("true").map(|_| true).boxed(),
//!     str("false").map(|_| false).boxed(),
//! ]);
//! let parse = create_parser(boolean);
//!
//! assert_eq!(parse("true").value(), Some(&true));
//! assert!(parse("maybe").is_failure());
//! ```

pub mod and;
pub mod character;
pub mod choice;
pub mod context;
pub mod count;
pub mod driver;
pub mod eof;
pub mod error;
pub mod lazy;
pub mod many;
pub mod many1;
pub mod map;
pub mod map_err;
pub mod not;
pub mod optional;
pub mod parser;
pub mod result;
pub mod skip;
pub mod string;
pub mod surround;

pub use and::{And, Seq, Sequence, and, seq};
pub use character::{AnyChar, Char, Satisfy, any_char, char, satisfy};
pub use choice::{Choice, choice};
pub use context::Context;
pub use count::{Count, CountMinMax, count, count_min_max};
pub use driver::{create_parser, run};
pub use eof::{Eof, eof};
pub use error::ParseError;
pub use lazy::{Lazy, lazy};
pub use many::{Many, ManyExt, many};
pub use many1::{Many1, many1};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt, map_err};
pub use not::{Not, NotExt, not};
pub use optional::{Optional, OptionalExt, optional};
pub use parser::{BoxedExt, BoxedParser, FromFn, Parser, from_fn};
pub use result::{ParseResult, failure, success};
pub use skip::{Skip, SkipExt, skip};
pub use string::{Str, str};
pub use surround::{Surround, surround};
