//! Textual tag syntax.
//!
//! Tags are written the way [`Tag`](crate::Tag) displays them, with
//! modifiers wrapping their argument in brackets:
//! `Coord<DivideByCount<Central<PowerSum<2>>>>`. Parentheses may stand in for
//! angle brackets.

mod lexer;
mod parser;

pub use parser::{MAX_NESTING, parse_tag};
