//! rulefilter - namespace and tag predicates for automation rules
//!
//! Filters collections of rules by the namespace encoded in their UID and by
//! the tags they carry. Nothing here stores, mutates or orders rules; every
//! operation builds or evaluates a boolean test.
//!
//! # Architecture
//!
//! - [`Rule`] — The collaborator contract: an optional UID and tag lookups
//! - [`namespace_of`] / [`extract_namespace`] — UID prefix parsing
//! - [`RuleMatcher`] — Leaf capability: `matches(&dyn Rule) -> bool`
//! - [`Predicate`] — Immutable value with boolean composition (And, Or, Not)
//! - [`FilterConfig`] — Serde-deserializable filter description (feature = `"config"`)
//!
//! # Key Conventions
//!
//! 1. **Absent namespace is first-class**: a UID without a separator, or with an
//!    empty prefix, has namespace `None`, and `None` can be matched like any value.
//!
//! 2. **Empty tag selector means untagged**: [`matches_all_tags`] and
//!    [`matches_any_tag`] given no tags behave exactly like [`has_no_tags`].
//!    They do NOT match everything.
//!
//! 3. **Total**: no factory or evaluation can fail. Errors only exist when
//!    loading config or validating composite limits.
//!
//! # Example
//!
//! ```
//! use rulefilter::prelude::*;
//!
//! let rules = vec![
//!     RuleRecord::new("hue:wakeup").with_tags(["lights", "morning"]),
//!     RuleRecord::new("hue:sleep").with_tag("lights"),
//!     RuleRecord::new("standalone"),
//! ];
//!
//! let morning_lights = matches_namespace(Some("hue")) & matches_all_tags(["morning"]);
//! let hits: Vec<_> = rules.iter().filter(|r| morning_lights.evaluate(*r)).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].uid(), Some("hue:wakeup"));
//!
//! // Untagged rules without a namespace
//! let loose = matches_namespace(None) & matches_any_tag(Vec::<String>::new());
//! assert_eq!(rules.iter().filter(|r| loose.evaluate(*r)).count(), 1);
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod matcher;
mod namespace;
mod predicate;
mod rule;
mod tags;
mod trace;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use matcher::RuleMatcher;
pub use predicate::Predicate;
pub use rule::{Rule, RuleRecord, TagSet};
pub use trace::PredicateTrace;

// Namespace parsing and predicates
pub use namespace::{
    extract_namespace, matches_any_namespace, matches_namespace, namespace_of,
    AnyNamespaceMatcher, NamespaceMatcher,
};

// Tag predicates
pub use tags::{
    has_any_tag, has_no_tags, matches_all_tags, matches_any_tag, AllTagsMatcher, AnyTagMatcher,
    HasAnyTagMatcher, HasNoTagsMatcher,
};

#[cfg(feature = "config")]
pub use config::FilterConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use rulefilter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Factories
        extract_namespace,
        has_any_tag,
        has_no_tags,
        matches_all_tags,
        matches_any_namespace,
        matches_any_tag,
        matches_namespace,
        namespace_of,
        // Errors
        FilterError,
        // Core types
        Predicate,
        PredicateTrace,
        Rule,
        RuleMatcher,
        RuleRecord,
        TagSet,
    };

    #[cfg(feature = "config")]
    pub use crate::FilterConfig;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Separator between the namespace and the local part of a rule UID.
///
/// Shared with the identifier format of the platform that owns the rules
/// (`binding:thing:channel` style UIDs), so only the first occurrence splits
/// off a namespace.
pub const SEPARATOR: &str = ":";

/// Maximum allowed nesting depth for composite predicates.
///
/// Checked by [`Predicate::validate`] and when compiling a config, never during
/// evaluation.
pub const MAX_DEPTH: usize = 32;

/// Maximum number of children in a single `And` or `Or` predicate.
pub const MAX_PREDICATES_PER_COMPOUND: usize = 256;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from filter construction and validation.
///
/// Predicate factories and evaluation never fail. These errors only come from
/// loading a filter description or validating composite limits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Predicate nesting exceeds [`MAX_DEPTH`].
    #[error(
        "filter nesting depth is {depth}, but maximum allowed is {max} \
         — flatten nested and/or groups"
    )]
    DepthExceeded {
        /// Actual depth of the predicate tree.
        depth: usize,
        /// Maximum allowed depth.
        max: usize,
    },

    /// Too many children in a compound `And` or `Or`.
    #[error("compound filter has {count} children, but maximum allowed is {max}")]
    TooManyPredicates {
        /// Actual count of children.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Filter description could not be parsed.
    #[error("invalid filter config: {message}")]
    InvalidConfig {
        /// The underlying parser message.
        message: String,
    },
}
