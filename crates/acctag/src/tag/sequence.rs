//! Ordered sequences of tags.

use std::fmt;
use std::ops::Deref;

use super::Tag;

/// An ordered sequence of tags.
///
/// Generic over the element so the same wrapper carries plain input tags and
/// the [`CanonicalTag`](super::CanonicalTag)s produced by
/// [`transfer_all`](crate::transfer_all).
///
/// # Examples
///
/// ```
/// use acctag::{Alias, TagSequence};
///
/// let tags: TagSequence = [Alias::Mean, Alias::Variance].into_iter().map(Into::into).collect();
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.to_string(), "Mean, Variance");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct TagSequence<T = Tag>(Vec<T>);

impl<T> TagSequence<T> {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Consume the sequence and return its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for TagSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TagSequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<T>> for TagSequence<T> {
    fn from(tags: Vec<T>) -> Self {
        Self(tags)
    }
}

impl<T> FromIterator<T> for TagSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for TagSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TagSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display> fmt::Display for TagSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            tag.fmt(f)?;
        }
        Ok(())
    }
}
