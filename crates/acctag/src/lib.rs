//! Canonicalization of composite accumulator tags.
//!
//! An accumulator tag describes a statistic as a base symbol wrapped in
//! modifiers such as `Coord`, `DivideByCount` or `Central`. Users may stack
//! modifiers in any order; before an implementation can be chosen the tag
//! must be reduced to a unique canonical form. This crate provides that
//! reduction as a small term-rewriting system: priority-based ordering,
//! algebraic identity rules and conflict detection, plus a transfer
//! operation that moves modifiers from one tag onto another.
//!
//! ```
//! use acctag::{standardize, transfer, Tag};
//!
//! let tag: Tag = "Central<Coord<Mean>>".parse().unwrap();
//! let canonical = standardize(&tag).unwrap();
//! assert_eq!(canonical.to_string(), "Coord<DivideByCount<Central<PowerSum<1>>>>");
//!
//! let moved = transfer(&"Coord<Mean>".parse().unwrap(), &"Variance".parse().unwrap()).unwrap();
//! assert_eq!(moved.to_string(), "Coord<DivideByCount<Central<PowerSum<2>>>>");
//! ```

mod errors;
mod long_form;
mod ordering;
mod priority;
mod rules;
mod standardize;
mod syntax;
mod tag;
mod transfer;

pub use errors::{GrammarError, TagParseError};
pub use long_form::{LongTag, Slot};
pub use ordering::{is_ordered, order};
pub use priority::{
    PriorityClass, UnknownPriorityClass, classify, compare, compare_to_inner, contains_class,
};
pub use rules::{IdentityRule, identity_rules};
pub use standardize::{Standardization, Standardizer, is_canonical, standardize, standardize_traced};
pub use syntax::{MAX_NESTING, parse_tag};
pub use tag::{Alias, CanonicalTag, Modifier, Modifiers, Symbol, Tag, TagSequence};
pub use transfer::{transfer, transfer_all};
