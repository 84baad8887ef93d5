//! Priority-driven reordering of a single modifier node.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::errors::GrammarError;
use crate::tag::{Modifier, Tag};

/// Apply one ordering step to the node `modifier<inner>`.
///
/// - A lower outer class leaves the node unchanged.
/// - A higher outer class swaps the modifier below its child, producing
///   `inner_modifier<modifier<grandchild>>`. The grandchild is not revisited
///   here; the standardizer drives further passes.
/// - Equal classes collapse a repeated kind, let a stronger data preparation
///   absorb a weaker one, and fail otherwise.
///
/// An alias passed as `inner` is expanded first.
///
/// # Errors
///
/// Returns [`GrammarError::IncompatibleModifierCombination`] when two distinct
/// modifiers of one class meet and neither absorbs the other.
///
/// # Examples
///
/// ```
/// use acctag::{order, Modifier, Symbol, Tag};
///
/// let swapped = order(Modifier::Central, Tag::coord(Symbol::SUM)).unwrap();
/// assert_eq!(swapped, Tag::coord(Tag::central(Symbol::SUM)));
///
/// let collapsed = order(Modifier::Coord, Tag::coord(Symbol::SUM)).unwrap();
/// assert_eq!(collapsed, Tag::coord(Symbol::SUM));
/// ```
pub fn order(modifier: Modifier, inner: Tag) -> Result<Tag, GrammarError> {
    let inner = match inner {
        Tag::Alias(alias) => alias.expand(),
        other => other,
    };
    let (inner_modifier, grandchild) = match inner {
        Tag::Modified(inner_modifier, grandchild) => (inner_modifier, grandchild),
        // symbols rank above every modifier
        leaf => return Ok(leaf.wrap(modifier)),
    };
    match modifier.class().cmp(&inner_modifier.class()) {
        Ordering::Less => Ok(Tag::Modified(inner_modifier, grandchild).wrap(modifier)),
        Ordering::Greater => {
            trace!("moving {modifier} below {inner_modifier}");
            Ok(Tag::Modified(modifier, grandchild).wrap(inner_modifier))
        }
        Ordering::Equal if modifier == inner_modifier => {
            trace!("collapsing repeated {modifier}");
            Ok(Tag::Modified(modifier, grandchild))
        }
        Ordering::Equal if modifier.absorbs(inner_modifier) => {
            trace!("{modifier} absorbs {inner_modifier}");
            Ok(Tag::Modified(modifier, grandchild))
        }
        Ordering::Equal => {
            let composite = Tag::Modified(inner_modifier, grandchild).wrap(modifier);
            debug!("conflicting modifiers in {composite}");
            Err(GrammarError::IncompatibleModifierCombination(composite))
        }
    }
}

/// Whether modifier classes strictly increase from the root to the leaf.
///
/// Tags containing an alias are never ordered.
#[must_use]
pub fn is_ordered(tag: &Tag) -> bool {
    let mut node = tag;
    loop {
        match node {
            Tag::Symbol(_) => return true,
            Tag::Alias(_) => return false,
            Tag::Modified(modifier, inner) => {
                if let Some(next) = inner.outer_modifier() {
                    if modifier.class() >= next.class() {
                        return false;
                    }
                }
                node = inner;
            }
        }
    }
}
