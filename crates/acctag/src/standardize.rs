//! Fixpoint driver that reduces tags to canonical form.
//!
//! Rewriting is innermost first. One rewrite step on a modifier node
//! standardizes its child; if the child changed the node is rebuilt and the
//! step ends. Only once the child is canonical are the identity rules tried
//! at the node, and only when none applies does the ordering step run. Rules
//! that look past the child therefore never see an unchecked subtree, and a
//! conflict anywhere below a node fails the whole tag. Steps repeat until a
//! pass changes nothing.

use hashbrown::HashMap;
use log::debug;

use crate::errors::GrammarError;
use crate::ordering::{is_ordered, order};
use crate::rules::rewrite_root;
use crate::tag::{CanonicalTag, Tag, TagSequence};

/// Outcome of [`standardize_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standardization {
    tag: CanonicalTag,
    rewrites: usize,
}

impl Standardization {
    /// The canonical tag.
    #[must_use]
    pub const fn tag(&self) -> &CanonicalTag {
        &self.tag
    }

    /// Number of rewrite steps that changed the tag, across all nodes.
    #[must_use]
    pub const fn rewrites(&self) -> usize {
        self.rewrites
    }

    /// Discard the trace and keep the canonical tag.
    #[must_use]
    pub fn into_tag(self) -> CanonicalTag {
        self.tag
    }
}

/// Reduce `tag` to its canonical form.
///
/// Rewriting recurses once per nesting level, as do `Display` and `Drop` of
/// [`Tag`]. Tags from [`parse_tag`](crate::parse_tag) are at most
/// [`MAX_NESTING`](crate::MAX_NESTING) deep; tags assembled through the constructors should stay
/// within the same limit.
///
/// # Errors
///
/// Returns [`GrammarError::IncompatibleModifierCombination`] when the tag
/// nests two modifiers of the same class that cannot be merged.
///
/// # Examples
///
/// ```
/// use acctag::{standardize, Alias, Symbol, Tag};
///
/// let tag = Tag::central(Tag::coord(Alias::Mean));
/// let canonical = standardize(&tag).unwrap();
/// assert_eq!(
///     canonical,
///     Tag::coord(Tag::divide_by_count(Tag::central(Symbol::SUM))),
/// );
/// ```
pub fn standardize(tag: &Tag) -> Result<CanonicalTag, GrammarError> {
    standardize_traced(tag).map(Standardization::into_tag)
}

/// Reduce `tag` to its canonical form and report the work done.
///
/// # Errors
///
/// Fails exactly when [`standardize`] fails.
pub fn standardize_traced(tag: &Tag) -> Result<Standardization, GrammarError> {
    let mut rewrites = 0;
    let canonical = fixpoint(tag, &mut rewrites).inspect_err(|err| {
        debug!("standardization of {tag} failed: {err}");
    })?;
    debug_assert!(is_canonical(&canonical), "{canonical} is not canonical");
    debug!("standardized {tag} to {canonical} in {rewrites} rewrites");
    Ok(Standardization {
        tag: CanonicalTag::new_unchecked(canonical),
        rewrites,
    })
}

fn fixpoint(tag: &Tag, rewrites: &mut usize) -> Result<Tag, GrammarError> {
    let mut current = tag.clone();
    loop {
        let next = rewrite(&current, rewrites)?;
        if next == current {
            return Ok(current);
        }
        *rewrites += 1;
        current = next;
    }
}

fn rewrite(tag: &Tag, rewrites: &mut usize) -> Result<Tag, GrammarError> {
    if let Tag::Modified(modifier, inner) = tag {
        let standardized = fixpoint(inner, rewrites)?;
        if standardized != **inner {
            return Ok(standardized.wrap(*modifier));
        }
    }
    if let Some(rewritten) = rewrite_root(tag) {
        return Ok(rewritten);
    }
    match tag {
        Tag::Modified(modifier, inner) => order(*modifier, (**inner).clone()),
        Tag::Symbol(_) | Tag::Alias(_) => Ok(tag.clone()),
    }
}

/// Whether `tag` satisfies the canonical-form invariant.
///
/// Classes strictly increase towards the leaf, no alias remains and no
/// identity rule applies at any node.
///
/// # Examples
///
/// ```
/// use acctag::{is_canonical, Symbol, Tag};
///
/// assert!(is_canonical(&Tag::coord(Tag::central(Symbol::SUM))));
/// assert!(!is_canonical(&Tag::central(Tag::coord(Symbol::SUM))));
/// assert!(!is_canonical(&Tag::central(Symbol::Kurtosis)));
/// ```
#[must_use]
pub fn is_canonical(tag: &Tag) -> bool {
    if !is_ordered(tag) {
        return false;
    }
    let mut node = Some(tag);
    while let Some(current) = node {
        if rewrite_root(current).is_some() {
            return false;
        }
        node = current.inner();
    }
    true
}

/// Memoizing front end to [`standardize`].
///
/// Results, failures included, are cached by structural identity of the
/// input tag. The cache belongs to its owner; share a `Standardizer` by
/// handing out `&mut` access, or give each worker its own.
///
/// # Examples
///
/// ```
/// use acctag::{Alias, Standardizer};
///
/// let mut standardizer = Standardizer::new();
/// let first = standardizer.standardize(&Alias::StdDev.into()).unwrap();
/// let second = standardizer.standardize(&Alias::StdDev.into()).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(standardizer.hits(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Standardizer {
    cache: HashMap<Tag, Result<CanonicalTag, GrammarError>>,
    caching: bool,
    hits: usize,
}

impl Standardizer {
    /// Create a standardizer with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            caching: true,
            hits: 0,
        }
    }

    /// Create a standardizer that never caches.
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            caching: false,
            ..Self::new()
        }
    }

    /// Standardize `tag`, consulting the cache first.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`standardize`] fails.
    pub fn standardize(&mut self, tag: &Tag) -> Result<CanonicalTag, GrammarError> {
        if let Some(cached) = self.cache.get(tag) {
            self.hits += 1;
            return cached.clone();
        }
        let result = standardize(tag);
        if self.caching {
            self.cache.insert(tag.clone(), result.clone());
        }
        result
    }

    /// Standardize every tag in `tags`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`GrammarError`] encountered.
    pub fn standardize_all(
        &mut self,
        tags: &TagSequence,
    ) -> Result<TagSequence<CanonicalTag>, GrammarError> {
        tags.iter().map(|tag| self.standardize(tag)).collect()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of lookups answered from the cache.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Drop every cached entry and reset the hit counter.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
    }
}

impl Default for Standardizer {
    fn default() -> Self {
        Self::new()
    }
}
