//! Parse boolean literals and print the outcome for a few inputs.
//!
//! Run with `RUST_LOG=debug cargo run --example boolean` to see parse traces.

use charcomb::{BoxedExt, MapExt, ParseResult, choice, create_parser, str};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let boolean = choice([
        str("true").map(|_| true).boxed(),
        str("false").map(|_| false).boxed(),
    ]);
    let parse = create_parser(boolean);

    for input in ["true", "false", "asdfasdf"] {
        match parse(input) {
            ParseResult::Success { value, .. } => println!("{}", value),
            ParseResult::Failure { .. } => println!("failed parse"),
        }
    }
}
