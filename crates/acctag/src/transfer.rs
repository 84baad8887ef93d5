//! Moving data access and data preparation modifiers between tags.

use log::debug;

use crate::errors::GrammarError;
use crate::long_form::LongTag;
use crate::rules::drop_redundant_preparation;
use crate::standardize::standardize;
use crate::tag::{CanonicalTag, Tag, TagSequence};

/// Apply the data access and data preparation modifiers of `source` to
/// `target`.
///
/// Both tags are standardized and aligned in long form. Every substitutable
/// slot where `source` carries a modifier takes that modifier; all other
/// slots, the normalization and the base statistic come from `target`. The
/// merged tag is stripped of preparations that do nothing to its base and
/// standardized again.
///
/// # Errors
///
/// Returns [`GrammarError::IncompatibleModifierCombination`] when either
/// input or the merged result cannot be standardized.
///
/// # Examples
///
/// ```
/// use acctag::{standardize, transfer, Alias, Tag};
///
/// let source = Tag::coord(Alias::Mean);
/// let moved = transfer(&source, &Alias::Variance.into()).unwrap();
/// assert_eq!(moved, standardize(&Tag::coord(Alias::Variance)).unwrap());
/// ```
pub fn transfer(source: &Tag, target: &Tag) -> Result<CanonicalTag, GrammarError> {
    let source = LongTag::expand(&standardize(source)?);
    let target = LongTag::expand(&standardize(target)?);
    let merged = drop_redundant_preparation(&source.substitute_into(&target).collapse());
    debug!("transferring {source} onto {target} gives {merged}");
    standardize(&merged)
}

/// Apply [`transfer`] from `source` to every tag of `targets`.
///
/// The result has the same length and order as `targets`.
///
/// # Errors
///
/// Returns the first [`GrammarError`] raised by an element.
pub fn transfer_all(
    source: &Tag,
    targets: &TagSequence,
) -> Result<TagSequence<CanonicalTag>, GrammarError> {
    targets.iter().map(|target| transfer(source, target)).collect()
}
