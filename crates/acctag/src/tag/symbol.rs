//! Base statistic symbols.

use std::fmt;

/// An irreducible base statistic.
///
/// Symbols are leaves of a tag and always belong to the accumulator class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Coordinate system of the data, usually the identity.
    CoordinateSystem,
    /// Sum of the data raised to the given power.
    PowerSum(u32),
    /// Sum of the absolute data raised to the given power.
    AbsPowerSum(u32),
    /// Third standardized moment.
    Skewness,
    /// Fourth standardized moment.
    Kurtosis,
    /// Scatter matrix stored as its upper triangle.
    FlatScatterMatrix,
    /// Eigenvalues and eigenvectors of the covariance matrix.
    CovarianceEigensystem,
    /// Quantile at the given percent.
    Quantile(u32),
    /// Histogram with the given bin count; zero defers the choice to run time.
    Histogram(u32),
    /// Quantile estimated from a histogram.
    HistogramQuantile {
        /// Quantile position in percent.
        percent: u32,
        /// Bin count of the underlying histogram.
        bins: u32,
    },
    /// Multi-band histogram with the given band count.
    MultiHistogram(u32),
    /// Array of per-region accumulators.
    AccumulatorArray,
    /// Cache holding the centered data.
    Centralize,
    /// Cache holding the data projected onto the principal axes.
    PrincipalProjection,
    /// Cache holding the whitened data.
    Whiten,
    /// Mapping of the data range onto histogram bins.
    RangeMapping,
    /// Unmodified sample.
    PlainData,
}

impl Symbol {
    /// Number of samples.
    pub const COUNT: Self = Self::PowerSum(0);
    /// Sum of samples.
    pub const SUM: Self = Self::PowerSum(1);
    /// Sum of squared samples.
    pub const SUM_OF_SQUARES: Self = Self::PowerSum(2);

    /// Name used by the tag syntax, without arguments.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CoordinateSystem => "CoordinateSystem",
            Self::PowerSum(_) => "PowerSum",
            Self::AbsPowerSum(_) => "AbsPowerSum",
            Self::Skewness => "Skewness",
            Self::Kurtosis => "Kurtosis",
            Self::FlatScatterMatrix => "FlatScatterMatrix",
            Self::CovarianceEigensystem => "CovarianceEigensystem",
            Self::Quantile(_) => "Quantile",
            Self::Histogram(_) => "Histogram",
            Self::HistogramQuantile { .. } => "HistogramQuantile",
            Self::MultiHistogram(_) => "MultiHistogram",
            Self::AccumulatorArray => "AccumulatorArray",
            Self::Centralize => "Centralize",
            Self::PrincipalProjection => "PrincipalProjection",
            Self::Whiten => "Whiten",
            Self::RangeMapping => "RangeMapping",
            Self::PlainData => "PlainData",
        }
    }

    /// Whether the symbol counts samples.
    #[must_use]
    pub const fn is_count(&self) -> bool {
        matches!(self, Self::PowerSum(0))
    }

    /// Whether the statistic is computed on centered data anyway.
    #[must_use]
    pub const fn is_inherently_centered(&self) -> bool {
        matches!(
            self,
            Self::Skewness
                | Self::Kurtosis
                | Self::FlatScatterMatrix
                | Self::CovarianceEigensystem
                | Self::Centralize
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Self::PowerSum(n)
            | Self::AbsPowerSum(n)
            | Self::Quantile(n)
            | Self::Histogram(n)
            | Self::MultiHistogram(n) => write!(f, "{name}<{n}>"),
            Self::HistogramQuantile { percent, bins } => {
                write!(f, "{name}<{percent}, Histogram<{bins}>>")
            }
            _ => f.write_str(name),
        }
    }
}
