//! Tags proven to be in canonical form.

use std::fmt;
use std::ops::Deref;

use super::Tag;

/// A tag produced by the standardizer.
///
/// The only way to obtain one is through [`standardize`](crate::standardize)
/// or the functions built on it, so holding a `CanonicalTag` means the
/// canonical-form invariant holds. It dereferences to [`Tag`] and compares
/// equal to plain tags with the same structure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct CanonicalTag(Tag);

impl CanonicalTag {
    pub(crate) const fn new_unchecked(tag: Tag) -> Self {
        Self(tag)
    }

    /// Borrow the underlying tag.
    #[must_use]
    pub const fn as_tag(&self) -> &Tag {
        &self.0
    }

    /// Consume the wrapper and return the underlying tag.
    #[must_use]
    pub fn into_inner(self) -> Tag {
        self.0
    }
}

impl Deref for CanonicalTag {
    type Target = Tag;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Tag> for CanonicalTag {
    fn as_ref(&self) -> &Tag {
        &self.0
    }
}

impl From<CanonicalTag> for Tag {
    fn from(tag: CanonicalTag) -> Self {
        tag.0
    }
}

impl PartialEq<Tag> for CanonicalTag {
    fn eq(&self, other: &Tag) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CanonicalTag> for Tag {
    fn eq(&self, other: &CanonicalTag) -> bool {
        *self == other.0
    }
}

impl fmt::Display for CanonicalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
