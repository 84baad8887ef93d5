//! Priority classes and the comparisons the ordering engine is built on.
//!
//! Every node of a tag belongs to exactly one [`PriorityClass`]. Modifier
//! kinds carry a fixed class, symbols always sit in
//! [`PriorityClass::Accumulator`], and an alias is classified by the
//! outermost node of its expansion. Class ranks form a power-of-two ladder so
//! the long-form expansion can walk it by doubling.

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::tag::Tag;

/// Bit mask of the ranks whose modifiers are copied by a transfer.
const SUBSTITUTION_MASK: u8 = PriorityClass::PrepareData.rank() | PriorityClass::AccessData.rank();

/// Fixed, globally ranked class of a tag node.
///
/// The derived ordering follows the rank, lowest first.
///
/// # Examples
///
/// ```
/// use acctag::PriorityClass;
///
/// assert!(PriorityClass::AccessData < PriorityClass::Normalize);
/// assert_eq!(PriorityClass::PrepareData.rank(), 4);
/// assert_eq!(PriorityClass::Normalize.next(), Some(PriorityClass::PrepareData));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PriorityClass {
    /// Selects which data the accumulator sees (coordinates, weights).
    AccessData,
    /// Normalizes the accumulated result by the sample count.
    Normalize,
    /// Transforms the data before accumulation (centering, projection).
    PrepareData,
    /// The base statistic itself.
    Accumulator,
}

impl PriorityClass {
    /// Lowest class on the ladder.
    pub const MIN: Self = Self::AccessData;
    /// Highest class on the ladder.
    pub const MAX: Self = Self::Accumulator;
    /// All classes in ascending rank.
    pub const ALL: [Self; 4] = [
        Self::AccessData,
        Self::Normalize,
        Self::PrepareData,
        Self::Accumulator,
    ];

    /// Power-of-two rank of the class.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::AccessData => 1,
            Self::Normalize => 2,
            Self::PrepareData => 4,
            Self::Accumulator => 8,
        }
    }

    /// Look up the class with the given rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use acctag::PriorityClass;
    ///
    /// assert_eq!(PriorityClass::from_rank(8), Some(PriorityClass::Accumulator));
    /// assert_eq!(PriorityClass::from_rank(3), None);
    /// ```
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::AccessData),
            2 => Some(Self::Normalize),
            4 => Some(Self::PrepareData),
            8 => Some(Self::Accumulator),
            _ => None,
        }
    }

    /// The class one step up the ladder, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_rank(self.rank() << 1)
    }

    /// Iterate from this class up to [`PriorityClass::MAX`].
    pub fn ladder(self) -> impl Iterator<Item = Self> {
        iter::successors(Some(self), |class| class.next())
    }

    /// Whether a transfer copies modifiers of this class from its source.
    #[must_use]
    pub const fn is_substitutable(self) -> bool {
        self.rank() & SUBSTITUTION_MASK != 0
    }

    /// Kebab-case name used in diagnostics and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessData => "access-data",
            Self::Normalize => "normalize",
            Self::PrepareData => "prepare-data",
            Self::Accumulator => "accumulator",
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`PriorityClass`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPriorityClass(pub String);

impl fmt::Display for UnknownPriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown priority class '{}', expected one of: access-data, normalize, prepare-data, accumulator",
            self.0
        )
    }
}

impl std::error::Error for UnknownPriorityClass {}

impl FromStr for PriorityClass {
    type Err = UnknownPriorityClass;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "accessdata" => Ok(Self::AccessData),
            "normalize" => Ok(Self::Normalize),
            "preparedata" => Ok(Self::PrepareData),
            "accumulator" => Ok(Self::Accumulator),
            _ => Err(UnknownPriorityClass(trimmed.to_string())),
        }
    }
}

/// Priority class of the outermost node of `tag`.
///
/// # Examples
///
/// ```
/// use acctag::{classify, Alias, PriorityClass, Symbol, Tag};
///
/// assert_eq!(classify(&Tag::coord(Symbol::SUM)), PriorityClass::AccessData);
/// assert_eq!(classify(&Symbol::Skewness.into()), PriorityClass::Accumulator);
/// assert_eq!(classify(&Alias::Variance.into()), PriorityClass::Normalize);
/// ```
#[must_use]
pub fn classify(tag: &Tag) -> PriorityClass {
    match tag {
        Tag::Symbol(_) => PriorityClass::Accumulator,
        Tag::Alias(alias) => classify(&alias.expand()),
        Tag::Modified(modifier, _) => modifier.class(),
    }
}

/// Three-way comparison of the classes of `outer` and `inner`.
#[must_use]
pub fn compare(outer: &Tag, inner: &Tag) -> Ordering {
    classify(outer).cmp(&classify(inner))
}

/// Compare a modifier node with its child; `None` for leaves.
///
/// [`Ordering::Less`] means the node is already in canonical order.
#[must_use]
pub fn compare_to_inner(tag: &Tag) -> Option<Ordering> {
    match tag {
        Tag::Modified(modifier, inner) => Some(modifier.class().cmp(&classify(inner))),
        Tag::Symbol(_) | Tag::Alias(_) => None,
    }
}

/// Whether any node along the chain of `tag` belongs to `class`.
///
/// Aliases are looked through.
///
/// # Examples
///
/// ```
/// use acctag::{contains_class, Alias, PriorityClass, Tag};
///
/// let tag = Tag::coord(Alias::Variance);
/// assert!(contains_class(&tag, PriorityClass::PrepareData));
/// assert!(!contains_class(&Alias::Mean.into(), PriorityClass::AccessData));
/// ```
#[must_use]
pub fn contains_class(tag: &Tag, class: PriorityClass) -> bool {
    match tag {
        Tag::Symbol(_) => class == PriorityClass::Accumulator,
        Tag::Alias(alias) => contains_class(&alias.expand(), class),
        Tag::Modified(modifier, inner) => {
            modifier.class() == class || contains_class(inner, class)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Alias, Modifier, Symbol};
    use rstest::rstest;

    #[rstest]
    #[case(Modifier::Coord, PriorityClass::AccessData)]
    #[case(Modifier::Weighted, PriorityClass::AccessData)]
    #[case(Modifier::CoordWeighted, PriorityClass::AccessData)]
    #[case(Modifier::DataFromHandle, PriorityClass::AccessData)]
    #[case(Modifier::DivideByCount, PriorityClass::Normalize)]
    #[case(Modifier::RootDivideByCount, PriorityClass::Normalize)]
    #[case(Modifier::DivideUnbiased, PriorityClass::Normalize)]
    #[case(Modifier::RootDivideUnbiased, PriorityClass::Normalize)]
    #[case(Modifier::Central, PriorityClass::PrepareData)]
    #[case(Modifier::Principal, PriorityClass::PrepareData)]
    #[case(Modifier::Whitened, PriorityClass::PrepareData)]
    fn classifies_modifier_nodes(#[case] modifier: Modifier, #[case] expected: PriorityClass) {
        let tag = Tag::Symbol(Symbol::Kurtosis).wrap(modifier);
        assert_eq!(classify(&tag), expected);
    }

    #[test]
    fn class_does_not_depend_on_depth() {
        let shallow = Tag::central(Symbol::SUM);
        let deep = Tag::central(Tag::coord(Tag::divide_by_count(Symbol::SUM)));
        assert_eq!(classify(&shallow), classify(&deep));
    }

    #[test]
    fn ladder_doubles_rank() {
        let ranks: Vec<u8> = PriorityClass::MIN.ladder().map(PriorityClass::rank).collect();
        assert_eq!(ranks, vec![1, 2, 4, 8]);
        assert_eq!(PriorityClass::MAX.next(), None);
    }

    #[test]
    fn substitution_mask_selects_access_and_preparation() {
        let flagged: Vec<_> = PriorityClass::ALL
            .into_iter()
            .filter(|class| class.is_substitutable())
            .collect();
        assert_eq!(
            flagged,
            vec![PriorityClass::AccessData, PriorityClass::PrepareData]
        );
    }

    #[test]
    fn compares_outer_with_inner() {
        let coord = Tag::coord(Symbol::SUM);
        let central = Tag::central(Symbol::SUM);
        assert_eq!(compare(&coord, &central), Ordering::Less);
        assert_eq!(compare(&central, &coord), Ordering::Greater);
        assert_eq!(compare(&central, &central), Ordering::Equal);
    }

    #[test]
    fn compare_to_inner_reports_inversions() {
        assert_eq!(
            compare_to_inner(&Tag::central(Tag::coord(Symbol::SUM))),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare_to_inner(&Tag::coord(Tag::central(Symbol::SUM))),
            Some(Ordering::Less)
        );
        assert_eq!(compare_to_inner(&Symbol::SUM.into()), None);
    }

    #[test]
    fn aliases_are_classified_by_expansion() {
        assert_eq!(
            classify(&Alias::CenterOfMass.into()),
            PriorityClass::AccessData
        );
        assert_eq!(classify(&Alias::Sum.into()), PriorityClass::Accumulator);
    }

    #[rstest]
    #[case("access-data", PriorityClass::AccessData)]
    #[case("AccessData", PriorityClass::AccessData)]
    #[case(" normalize ", PriorityClass::Normalize)]
    #[case("prepare_data", PriorityClass::PrepareData)]
    #[case("ACCUMULATOR", PriorityClass::Accumulator)]
    fn parses_class_names(#[case] input: &str, #[case] expected: PriorityClass) {
        assert_eq!(input.parse::<PriorityClass>().ok(), Some(expected));
    }

    #[test]
    fn rejects_unknown_class_names() {
        let Err(err) = "storage".parse::<PriorityClass>() else {
            panic!("unknown class should be rejected");
        };
        assert_eq!(err.0, "storage");
        assert!(err.to_string().contains("unknown priority class"));
    }
}
