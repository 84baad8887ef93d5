//! Slot-aligned expansion of canonical tags.
//!
//! A [`LongTag`] has one slot per modifier class from its starting class up
//! to [`PriorityClass::PrepareData`], followed by the accumulator-level base.
//! Classes the tag does not use hold a transparent placeholder, so two long
//! tags with the same start can be compared and merged slot by slot.

use std::fmt;

use crate::priority::{PriorityClass, classify};
use crate::tag::{CanonicalTag, Modifier, Tag};

/// Content of one class slot of a [`LongTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Slot {
    /// The class is not used; collapses to nothing.
    Placeholder,
    /// The modifier the tag carries at this class.
    Modifier(Modifier),
}

impl Slot {
    /// The modifier held by the slot, if any.
    #[must_use]
    pub const fn modifier(self) -> Option<Modifier> {
        match self {
            Self::Placeholder => None,
            Self::Modifier(modifier) => Some(modifier),
        }
    }

    /// Whether the slot is a placeholder.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// A canonical tag with explicit placeholders at every unused class.
///
/// # Examples
///
/// ```
/// use acctag::{standardize, Alias, LongTag};
///
/// let variance = standardize(&Alias::Variance.into()).unwrap();
/// let long = LongTag::expand(&variance);
/// assert_eq!(long.to_string(), "_<DivideByCount<Central<PowerSum<2>>>>");
/// assert_eq!(long.collapse(), variance);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LongTag {
    start: PriorityClass,
    slots: Vec<Slot>,
    base: Tag,
}

impl LongTag {
    /// Expand `tag` from [`PriorityClass::AccessData`].
    #[must_use]
    pub fn expand(tag: &CanonicalTag) -> Self {
        Self::fill(PriorityClass::MIN, tag)
    }

    /// Expand `tag` starting at `start`.
    ///
    /// Returns `None` when the tag has a modifier below `start`, since that
    /// modifier would have no slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use acctag::{standardize, Alias, LongTag, PriorityClass};
    ///
    /// let mean = standardize(&Alias::Mean.into()).unwrap();
    /// let long = LongTag::expand_from(&mean, PriorityClass::Normalize).unwrap();
    /// assert_eq!(long.to_string(), "DivideByCount<_<PowerSum<1>>>");
    /// assert!(LongTag::expand_from(&mean, PriorityClass::PrepareData).is_none());
    /// ```
    #[must_use]
    pub fn expand_from(tag: &CanonicalTag, start: PriorityClass) -> Option<Self> {
        if classify(tag) < start {
            return None;
        }
        Some(Self::fill(start, tag))
    }

    fn fill(start: PriorityClass, tag: &Tag) -> Self {
        let mut node = tag;
        let mut slots = Vec::new();
        for class in start.ladder().take_while(|class| *class < PriorityClass::Accumulator) {
            match node {
                Tag::Modified(modifier, inner) if modifier.class() == class => {
                    slots.push(Slot::Modifier(*modifier));
                    node = inner;
                }
                _ => slots.push(Slot::Placeholder),
            }
        }
        Self {
            start,
            slots,
            base: node.clone(),
        }
    }

    /// Class of the first slot.
    #[must_use]
    pub const fn start(&self) -> PriorityClass {
        self.start
    }

    /// The accumulator-level base.
    #[must_use]
    pub const fn base(&self) -> &Tag {
        &self.base
    }

    /// Iterate the slots with their classes, outermost first.
    pub fn slots(&self) -> impl Iterator<Item = (PriorityClass, Slot)> + '_ {
        self.start.ladder().zip(self.slots.iter().copied())
    }

    /// The slot for `class`, or `None` when the class lies outside the
    /// expansion.
    #[must_use]
    pub fn slot(&self, class: PriorityClass) -> Option<Slot> {
        self.slots()
            .find(|(slot_class, _)| *slot_class == class)
            .map(|(_, slot)| slot)
    }

    /// Number of placeholder slots.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_placeholder()).count()
    }

    /// Drop the placeholders and rebuild the short form.
    #[must_use]
    pub fn collapse(&self) -> Tag {
        self.slots
            .iter()
            .rev()
            .fold(self.base.clone(), |inner, slot| match slot {
                Slot::Placeholder => inner,
                Slot::Modifier(modifier) => inner.wrap(*modifier),
            })
    }

    /// Lay this tag's substitutable modifiers over `target`.
    ///
    /// Every slot of the result comes from `target` except where the class is
    /// substitutable and this tag holds a modifier there. The base always
    /// comes from `target`.
    #[must_use]
    pub fn substitute_into(&self, target: &Self) -> Self {
        let slots = target
            .slots()
            .map(|(class, theirs)| match self.slot(class) {
                Some(Slot::Modifier(ours)) if class.is_substitutable() => Slot::Modifier(ours),
                _ => theirs,
            })
            .collect();
        Self {
            start: target.start,
            slots,
            base: target.base.clone(),
        }
    }
}

impl fmt::Display for LongTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Placeholder => f.write_str("_<")?,
                Slot::Modifier(modifier) => write!(f, "{modifier}<")?,
            }
        }
        self.base.fmt(f)?;
        for _ in &self.slots {
            f.write_str(">")?;
        }
        Ok(())
    }
}
