//! Tag values: symbols, aliases and modifier chains.
//!
//! A [`Tag`] is an immutable linear chain of [`Modifier`] nodes ending in a
//! [`Symbol`] or an [`Alias`]. Values are built with the constructor helpers
//! on [`Tag`] or parsed from text through [`FromStr`].

mod alias;
mod canonical;
mod modifier;
mod sequence;
mod symbol;

use std::fmt;
use std::str::FromStr;

use crate::errors::TagParseError;

pub use alias::Alias;
pub use canonical::CanonicalTag;
pub use modifier::Modifier;
pub use sequence::TagSequence;
pub use symbol::Symbol;

/// A composite accumulator tag.
///
/// # Examples
///
/// ```
/// use acctag::{Alias, Symbol, Tag};
///
/// let tag = Tag::coord(Tag::central(Alias::Mean));
/// assert_eq!(tag.to_string(), "Coord<Central<Mean>>");
/// assert_eq!(tag.depth(), 2);
/// assert_eq!(tag.leaf(), &Tag::Alias(Alias::Mean));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// A base statistic.
    Symbol(Symbol),
    /// A named shorthand for a fixed chain.
    Alias(Alias),
    /// A modifier wrapped around exactly one child.
    Modified(Modifier, Box<Tag>),
}

macro_rules! modifier_constructors {
    ($($name:ident => $variant:ident),* $(,)?) => {
        $(
            #[doc = concat!("Wrap `inner` in [`Modifier::", stringify!($variant), "`].")]
            #[must_use]
            pub fn $name(inner: impl Into<Self>) -> Self {
                inner.into().wrap(Modifier::$variant)
            }
        )*
    };
}

impl Tag {
    modifier_constructors! {
        coord => Coord,
        weighted => Weighted,
        coord_weighted => CoordWeighted,
        data_from_handle => DataFromHandle,
        divide_by_count => DivideByCount,
        root_divide_by_count => RootDivideByCount,
        divide_unbiased => DivideUnbiased,
        root_divide_unbiased => RootDivideUnbiased,
        central => Central,
        principal => Principal,
        whitened => Whitened,
    }

    /// Wrap this tag in `modifier`.
    #[must_use]
    pub fn wrap(self, modifier: Modifier) -> Self {
        Self::Modified(modifier, Box::new(self))
    }

    /// Modifier at the root, if the tag is a modifier node.
    #[must_use]
    pub const fn outer_modifier(&self) -> Option<Modifier> {
        match self {
            Self::Modified(modifier, _) => Some(*modifier),
            Self::Symbol(_) | Self::Alias(_) => None,
        }
    }

    /// Direct child of a modifier node.
    #[must_use]
    pub fn inner(&self) -> Option<&Self> {
        match self {
            Self::Modified(_, inner) => Some(inner),
            Self::Symbol(_) | Self::Alias(_) => None,
        }
    }

    /// The symbol or alias at the end of the chain.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        let mut node = self;
        while let Self::Modified(_, inner) = node {
            node = inner;
        }
        node
    }

    /// Iterate the modifiers from the root towards the leaf.
    ///
    /// Aliases are not looked through.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers<'_> {
        Modifiers { node: Some(self) }
    }

    /// Number of modifier nodes in the chain.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.modifiers().count()
    }

    /// Whether an alias appears anywhere in the chain.
    #[must_use]
    pub fn contains_alias(&self) -> bool {
        matches!(self.leaf(), Self::Alias(_))
    }

    /// Replace every alias with its expansion.
    ///
    /// # Examples
    ///
    /// ```
    /// use acctag::{Alias, Symbol, Tag};
    ///
    /// let expanded = Tag::coord(Alias::Mean).expand_aliases();
    /// assert_eq!(expanded, Tag::coord(Tag::divide_by_count(Symbol::SUM)));
    /// ```
    #[must_use]
    pub fn expand_aliases(&self) -> Self {
        match self {
            Self::Symbol(_) => self.clone(),
            Self::Alias(alias) => alias.expand(),
            Self::Modified(modifier, inner) => inner.expand_aliases().wrap(*modifier),
        }
    }
}

impl From<Symbol> for Tag {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Alias> for Tag {
    fn from(alias: Alias) -> Self {
        Self::Alias(alias)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => symbol.fmt(f),
            Self::Alias(alias) => alias.fmt(f),
            Self::Modified(modifier, inner) => write!(f, "{modifier}<{inner}>"),
        }
    }
}

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::syntax::parse_tag(text)
    }
}

/// Iterator over the modifiers of a tag, root first.
#[derive(Debug, Clone)]
pub struct Modifiers<'a> {
    node: Option<&'a Tag>,
}

impl Iterator for Modifiers<'_> {
    type Item = Modifier;

    fn next(&mut self) -> Option<Self::Item> {
        match self.node.take()? {
            Tag::Modified(modifier, inner) => {
                self.node = Some(inner);
                Some(*modifier)
            }
            Tag::Symbol(_) | Tag::Alias(_) => None,
        }
    }
}
