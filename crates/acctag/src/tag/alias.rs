//! Named shorthands over the modifier and symbol vocabulary.

use std::fmt;

use super::{Modifier, Symbol, Tag};

/// A named leaf that stands for a fixed modifier chain.
///
/// Aliases carry no semantics of their own: [`Alias::expand`] yields the
/// chain they abbreviate, and the standardizer replaces them before anything
/// else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alias {
    /// `PowerSum<0>`.
    Count,
    /// `PowerSum<1>`.
    Sum,
    /// `PowerSum<2>`.
    SumOfSquares,
    /// `DivideByCount<Sum>`.
    Mean,
    /// `RootDivideByCount<SumOfSquares>`.
    RootMeanSquares,
    /// `DivideByCount<PowerSum<N>>`.
    Moment(u32),
    /// `DivideByCount<Central<PowerSum<N>>>`.
    CentralMoment(u32),
    /// `Central<PowerSum<2>>`, also spelled `SSD`.
    SumOfSquaredDifferences,
    /// `DivideByCount<Central<PowerSum<2>>>`.
    Variance,
    /// `RootDivideByCount<Central<PowerSum<2>>>`.
    StdDev,
    /// `DivideUnbiased<Central<PowerSum<2>>>`.
    UnbiasedVariance,
    /// `RootDivideUnbiased<Central<PowerSum<2>>>`.
    UnbiasedStdDev,
    /// `DivideByCount<FlatScatterMatrix>`.
    Covariance,
    /// `DivideUnbiased<FlatScatterMatrix>`.
    UnbiasedCovariance,
    /// `AbsPowerSum<1>`.
    AbsSum,
    /// `Central<AbsSum>`.
    SumOfAbsDifferences,
    /// `DivideByCount<SumOfAbsDifferences>`.
    MeanAbsoluteDeviation,
    /// `Coord<Mean>`.
    GeometricCenter,
    /// `Coord<Principal<StdDev>>`.
    PrincipalRadii,
    /// `Coord<Principal<CoordinateSystem>>`.
    PrincipalCoordSystem,
    /// `CoordWeighted<Mean>`.
    CenterOfMass,
    /// `CoordWeighted<Principal<Variance>>`.
    MomentsOfInertia,
    /// `CoordWeighted<Principal<CoordinateSystem>>`.
    CoordSystemOfInertia,
    /// `Quantile<0>`.
    Minimum,
    /// `Quantile<100>`.
    Maximum,
}

impl Alias {
    /// Name used by the tag syntax, without arguments.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Sum => "Sum",
            Self::SumOfSquares => "SumOfSquares",
            Self::Mean => "Mean",
            Self::RootMeanSquares => "RootMeanSquares",
            Self::Moment(_) => "Moment",
            Self::CentralMoment(_) => "CentralMoment",
            Self::SumOfSquaredDifferences => "SumOfSquaredDifferences",
            Self::Variance => "Variance",
            Self::StdDev => "StdDev",
            Self::UnbiasedVariance => "UnbiasedVariance",
            Self::UnbiasedStdDev => "UnbiasedStdDev",
            Self::Covariance => "Covariance",
            Self::UnbiasedCovariance => "UnbiasedCovariance",
            Self::AbsSum => "AbsSum",
            Self::SumOfAbsDifferences => "SumOfAbsDifferences",
            Self::MeanAbsoluteDeviation => "MeanAbsoluteDeviation",
            Self::GeometricCenter => "GeometricCenter",
            Self::PrincipalRadii => "PrincipalRadii",
            Self::PrincipalCoordSystem => "PrincipalCoordSystem",
            Self::CenterOfMass => "CenterOfMass",
            Self::MomentsOfInertia => "MomentsOfInertia",
            Self::CoordSystemOfInertia => "CoordSystemOfInertia",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
        }
    }

    /// The alias-free chain this alias abbreviates.
    ///
    /// # Examples
    ///
    /// ```
    /// use acctag::{Alias, Symbol, Tag};
    ///
    /// assert_eq!(
    ///     Alias::Variance.expand(),
    ///     Tag::divide_by_count(Tag::central(Symbol::PowerSum(2))),
    /// );
    /// ```
    #[must_use]
    pub fn expand(self) -> Tag {
        let central_squares = || Tag::central(Symbol::SUM_OF_SQUARES);
        match self {
            Self::Count => Symbol::COUNT.into(),
            Self::Sum => Symbol::SUM.into(),
            Self::SumOfSquares => Symbol::SUM_OF_SQUARES.into(),
            Self::Mean => Tag::divide_by_count(Symbol::SUM),
            Self::RootMeanSquares => Tag::root_divide_by_count(Symbol::SUM_OF_SQUARES),
            Self::Moment(n) => Tag::divide_by_count(Symbol::PowerSum(n)),
            Self::CentralMoment(n) => Tag::divide_by_count(Tag::central(Symbol::PowerSum(n))),
            Self::SumOfSquaredDifferences => central_squares(),
            Self::Variance => Tag::divide_by_count(central_squares()),
            Self::StdDev => Tag::root_divide_by_count(central_squares()),
            Self::UnbiasedVariance => Tag::divide_unbiased(central_squares()),
            Self::UnbiasedStdDev => Tag::root_divide_unbiased(central_squares()),
            Self::Covariance => Tag::divide_by_count(Symbol::FlatScatterMatrix),
            Self::UnbiasedCovariance => Tag::divide_unbiased(Symbol::FlatScatterMatrix),
            Self::AbsSum => Symbol::AbsPowerSum(1).into(),
            Self::SumOfAbsDifferences => Tag::central(Symbol::AbsPowerSum(1)),
            Self::MeanAbsoluteDeviation => Tag::divide_by_count(Self::SumOfAbsDifferences.expand()),
            Self::GeometricCenter => Tag::coord(Self::Mean.expand()),
            Self::PrincipalRadii => Tag::coord(Tag::principal(Self::StdDev.expand())),
            Self::PrincipalCoordSystem => {
                Tag::coord(Tag::principal(Symbol::CoordinateSystem))
            }
            Self::CenterOfMass => Tag::coord_weighted(Self::Mean.expand()),
            Self::MomentsOfInertia => {
                Tag::coord_weighted(Tag::principal(Self::Variance.expand()))
            }
            Self::CoordSystemOfInertia => {
                Tag::coord_weighted(Tag::principal(Symbol::CoordinateSystem))
            }
            Self::Minimum => Symbol::Quantile(0).into(),
            Self::Maximum => Symbol::Quantile(100).into(),
        }
    }

    /// Modifier at the root of the expansion, if any.
    #[must_use]
    pub fn outer_modifier(self) -> Option<Modifier> {
        self.expand().outer_modifier()
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moment(n) | Self::CentralMoment(n) => write!(f, "{}<{n}>", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Alias::Mean)]
    #[case(Alias::MeanAbsoluteDeviation)]
    #[case(Alias::PrincipalRadii)]
    #[case(Alias::MomentsOfInertia)]
    #[case(Alias::CentralMoment(3))]
    fn expansions_contain_no_aliases(#[case] alias: Alias) {
        assert!(!alias.expand().contains_alias());
    }

    #[test]
    fn principal_radii_expands_through_std_dev() {
        let expected = Tag::coord(Tag::principal(Tag::root_divide_by_count(Tag::central(
            Symbol::PowerSum(2),
        ))));
        assert_eq!(Alias::PrincipalRadii.expand(), expected);
    }

    #[test]
    fn renders_numbered_aliases() {
        assert_eq!(Alias::Moment(4).to_string(), "Moment<4>");
        assert_eq!(Alias::Variance.to_string(), "Variance");
    }
}
