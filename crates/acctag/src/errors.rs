//! Error types shared by the rewriting engine and the tag parser.

use std::fmt;
use thiserror::Error;

use crate::tag::Tag;

/// Failure raised while standardizing a tag.
///
/// # Examples
/// ```
/// use acctag::{standardize, GrammarError, Symbol, Tag};
///
/// let tag = Tag::divide_by_count(Tag::divide_unbiased(Symbol::SUM));
/// let Err(GrammarError::IncompatibleModifierCombination(offending)) = standardize(&tag) else {
///     panic!("two normalizations cannot be combined");
/// };
/// assert_eq!(offending, tag);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Two distinct modifiers of the same priority class met with no rule to
    /// merge them. Carries the offending composite node.
    #[error("incompatible modifier combination in `{0}`: modifiers of the same class cannot be nested")]
    IncompatibleModifierCombination(Tag),
}

impl GrammarError {
    /// The composite node that triggered the failure.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        match self {
            Self::IncompatibleModifierCombination(tag) => tag,
        }
    }
}

/// Failure raised while parsing tag text.
///
/// # Examples
/// ```
/// use acctag::TagParseError;
/// let err = TagParseError::new("unknown tag name", 6, Some("Median".into()));
/// assert_eq!(err.position, 6);
/// assert_eq!(err.to_string(), "unknown tag name for `Median` at byte 6 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParseError {
    /// Description of the problem.
    pub message: &'static str,
    /// Zero-based byte offset of the offending token.
    pub position: usize,
    /// Text of the offending token, absent at end of input.
    pub token: Option<String>,
}

impl TagParseError {
    /// Create a new parse error.
    #[must_use]
    pub fn new(message: &'static str, position: usize, token: Option<String>) -> Self {
        Self {
            message,
            position,
            token,
        }
    }
}

impl fmt::Display for TagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "{} for `{}` at byte {} (zero-based)",
                self.message, token, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

impl std::error::Error for TagParseError {}
