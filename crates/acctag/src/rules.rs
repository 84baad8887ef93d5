//! Algebraic identities applied ahead of generic ordering.
//!
//! The identity table is consulted at every node before the ordering step,
//! in declaration order, and the first rule that matches wins. Each rule
//! either shrinks the tag or maps it into a smaller set of shapes, so rule
//! application alone always terminates.
//!
//! The preparation cleanup at the end of this module is not part of the
//! table. It runs only on the result of a transfer, where it strips data
//! preparations that have no effect on the new base statistic.

use log::trace;

use crate::tag::{Modifier, Symbol, Tag};

/// A named rewrite from one tag shape to a simpler one.
#[derive(Debug, Clone, Copy)]
pub struct IdentityRule {
    name: &'static str,
    description: &'static str,
    apply: fn(&Tag) -> Option<Tag>,
}

impl IdentityRule {
    /// Short identifier of the rule.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable summary of the rewrite.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Rewrite `tag` at its root, or `None` when the rule does not match.
    #[must_use]
    pub fn apply(&self, tag: &Tag) -> Option<Tag> {
        (self.apply)(tag)
    }
}

static IDENTITY_RULES: [IdentityRule; 8] = [
    IdentityRule {
        name: "alias-expansion",
        description: "replace an alias by the chain it abbreviates",
        apply: expand_alias,
    },
    IdentityRule {
        name: "central-coordinate-system",
        description: "Central<CoordinateSystem> is CoordinateSystem",
        apply: central_coordinate_system,
    },
    IdentityRule {
        name: "whitened-coordinate-system",
        description: "Whitened<CoordinateSystem> is Principal<CoordinateSystem>",
        apply: whitened_coordinate_system,
    },
    IdentityRule {
        name: "count-invariance",
        description: "modifiers leave Count unchanged except for weighting",
        apply: count_invariance,
    },
    IdentityRule {
        name: "centered-statistic",
        description: "statistics computed on centered data absorb Central",
        apply: centered_statistic,
    },
    IdentityRule {
        name: "projection-cache",
        description: "projections of the centered data cache select the projection cache",
        apply: projection_cache,
    },
    IdentityRule {
        name: "coord-weighted",
        description: "Coord and Weighted in either nesting combine to CoordWeighted",
        apply: coord_weighted,
    },
    IdentityRule {
        name: "even-absolute-power",
        description: "AbsPowerSum<N> with even N is PowerSum<N>",
        apply: even_absolute_power,
    },
];

/// The identity rules in the order they are tried.
///
/// # Examples
///
/// ```
/// use acctag::identity_rules;
///
/// let first = &identity_rules()[0];
/// assert_eq!(first.name(), "alias-expansion");
/// ```
#[must_use]
pub fn identity_rules() -> &'static [IdentityRule] {
    &IDENTITY_RULES
}

/// Apply the first matching identity rule at the root of `tag`.
pub(crate) fn rewrite_root(tag: &Tag) -> Option<Tag> {
    IDENTITY_RULES.iter().find_map(|rule| {
        let rewritten = rule.apply(tag)?;
        trace!("rule {} rewrote {tag} to {rewritten}", rule.name);
        Some(rewritten)
    })
}

fn expand_alias(tag: &Tag) -> Option<Tag> {
    match tag {
        Tag::Alias(alias) => Some(alias.expand()),
        _ => None,
    }
}

fn central_coordinate_system(tag: &Tag) -> Option<Tag> {
    match tag {
        Tag::Modified(Modifier::Central, inner)
            if matches!(**inner, Tag::Symbol(Symbol::CoordinateSystem)) =>
        {
            Some(Symbol::CoordinateSystem.into())
        }
        _ => None,
    }
}

fn whitened_coordinate_system(tag: &Tag) -> Option<Tag> {
    match tag {
        Tag::Modified(Modifier::Whitened, inner)
            if matches!(**inner, Tag::Symbol(Symbol::CoordinateSystem)) =>
        {
            Some(Tag::principal(Symbol::CoordinateSystem))
        }
        _ => None,
    }
}

fn count_invariance(tag: &Tag) -> Option<Tag> {
    let Tag::Modified(modifier, inner) = tag else {
        return None;
    };
    if !matches!(**inner, Tag::Symbol(symbol) if symbol.is_count()) {
        return None;
    }
    match modifier {
        Modifier::CoordWeighted => Some(Tag::weighted(Symbol::COUNT)),
        weighting if weighting.is_weighted() => None,
        _ => Some(Symbol::COUNT.into()),
    }
}

fn centered_statistic(tag: &Tag) -> Option<Tag> {
    match tag {
        Tag::Modified(Modifier::Central, inner) => match **inner {
            Tag::Symbol(symbol) if symbol.is_inherently_centered() => Some(symbol.into()),
            _ => None,
        },
        _ => None,
    }
}

fn projection_cache(tag: &Tag) -> Option<Tag> {
    let Tag::Modified(modifier, inner) = tag else {
        return None;
    };
    let Tag::Symbol(cache) = **inner else {
        return None;
    };
    let projected = match (modifier, cache) {
        (Modifier::Principal, Symbol::Centralize | Symbol::PrincipalProjection) => {
            Symbol::PrincipalProjection
        }
        (
            Modifier::Whitened,
            Symbol::Centralize | Symbol::PrincipalProjection | Symbol::Whiten,
        ) => Symbol::Whiten,
        _ => return None,
    };
    Some(projected.into())
}

fn coord_weighted(tag: &Tag) -> Option<Tag> {
    let Tag::Modified(outer, inner) = tag else {
        return None;
    };
    match (outer, &**inner) {
        (Modifier::Weighted, Tag::Modified(Modifier::Coord, grandchild))
        | (Modifier::Coord, Tag::Modified(Modifier::Weighted, grandchild)) => {
            Some(Tag::coord_weighted((**grandchild).clone()))
        }
        _ => None,
    }
}

fn even_absolute_power(tag: &Tag) -> Option<Tag> {
    match tag {
        Tag::Symbol(Symbol::AbsPowerSum(n)) if n & 1 == 0 => Some(Symbol::PowerSum(*n).into()),
        _ => None,
    }
}

/// Whether `modifier` has no effect on `symbol` once modifiers were moved
/// onto it from another tag.
const fn is_redundant_preparation(modifier: Modifier, symbol: Symbol) -> bool {
    match modifier {
        Modifier::Central => matches!(symbol, Symbol::PowerSum(1)),
        Modifier::Principal | Modifier::Whitened => matches!(
            symbol,
            Symbol::PowerSum(1) | Symbol::FlatScatterMatrix | Symbol::CovarianceEigensystem
        ),
        _ => false,
    }
}

/// Drop data preparations that are meaningless on the base statistic.
///
/// Applied bottom-up, so a cascade of redundant preparations is removed in a
/// single call.
pub(crate) fn drop_redundant_preparation(tag: &Tag) -> Tag {
    match tag {
        Tag::Modified(modifier, inner) => {
            let inner = drop_redundant_preparation(inner);
            match inner {
                Tag::Symbol(symbol) if is_redundant_preparation(*modifier, symbol) => {
                    trace!("dropping {modifier} from {symbol}");
                    inner
                }
                _ => inner.wrap(*modifier),
            }
        }
        Tag::Symbol(_) | Tag::Alias(_) => tag.clone(),
    }
}
