//! Modifier kinds and their priority classes.

use std::fmt;

use crate::priority::PriorityClass;

/// A unary wrapper kind applied to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// Accumulate over pixel coordinates instead of values.
    Coord,
    /// Weight each sample.
    Weighted,
    /// Accumulate weighted coordinates.
    CoordWeighted,
    /// Read the data through an explicit handle.
    DataFromHandle,
    /// Divide the result by the sample count.
    DivideByCount,
    /// Take the square root after dividing by the count.
    RootDivideByCount,
    /// Divide by the count minus one.
    DivideUnbiased,
    /// Take the square root after dividing by the count minus one.
    RootDivideUnbiased,
    /// Subtract the mean before accumulating.
    Central,
    /// Project centered data onto the principal axes.
    Principal,
    /// Project onto the principal axes and scale to unit variance.
    Whitened,
}

impl Modifier {
    /// Every modifier kind, grouped by class.
    pub const ALL: [Self; 11] = [
        Self::Coord,
        Self::Weighted,
        Self::CoordWeighted,
        Self::DataFromHandle,
        Self::DivideByCount,
        Self::RootDivideByCount,
        Self::DivideUnbiased,
        Self::RootDivideUnbiased,
        Self::Central,
        Self::Principal,
        Self::Whitened,
    ];

    /// Fixed priority class of the kind.
    #[must_use]
    pub const fn class(self) -> PriorityClass {
        match self {
            Self::Coord | Self::Weighted | Self::CoordWeighted | Self::DataFromHandle => {
                PriorityClass::AccessData
            }
            Self::DivideByCount
            | Self::RootDivideByCount
            | Self::DivideUnbiased
            | Self::RootDivideUnbiased => PriorityClass::Normalize,
            Self::Central | Self::Principal | Self::Whitened => PriorityClass::PrepareData,
        }
    }

    /// Name used by the tag syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use acctag::Modifier;
    ///
    /// assert_eq!(Modifier::RootDivideUnbiased.as_str(), "RootDivideUnbiased");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coord => "Coord",
            Self::Weighted => "Weighted",
            Self::CoordWeighted => "CoordWeighted",
            Self::DataFromHandle => "DataFromHandle",
            Self::DivideByCount => "DivideByCount",
            Self::RootDivideByCount => "RootDivideByCount",
            Self::DivideUnbiased => "DivideUnbiased",
            Self::RootDivideUnbiased => "RootDivideUnbiased",
            Self::Central => "Central",
            Self::Principal => "Principal",
            Self::Whitened => "Whitened",
        }
    }

    /// Look up a modifier by its syntax name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|modifier| modifier.as_str() == name)
    }

    /// Whether the kind applies sample weights.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Weighted | Self::CoordWeighted)
    }

    /// Whether this data preparation subsumes `inner` when nested directly
    /// around it.
    ///
    /// Principal projection implies centering and whitening implies both.
    ///
    /// # Examples
    ///
    /// ```
    /// use acctag::Modifier;
    ///
    /// assert!(Modifier::Whitened.absorbs(Modifier::Central));
    /// assert!(!Modifier::Central.absorbs(Modifier::Principal));
    /// ```
    #[must_use]
    pub const fn absorbs(self, inner: Self) -> bool {
        matches!(
            (self, inner),
            (Self::Principal | Self::Whitened, Self::Central) | (Self::Whitened, Self::Principal)
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
