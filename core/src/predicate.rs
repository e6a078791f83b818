//! Predicate — Boolean expressions over rules
//!
//! A [`Predicate`] wraps [`RuleMatcher`]s and composes them with AND/OR/NOT.
//! Every factory in this crate returns a `Predicate`, so results combine with
//! `&`, `|` and `!` without special-casing.

use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use crate::{
    extract_namespace, FilterError, PredicateTrace, Rule, RuleMatcher, MAX_DEPTH, MAX_PREDICATES_PER_COMPOUND,
};

/// An immutable, composable test over a rule.
///
/// Cloning is cheap: leaves are shared behind `Arc`. A predicate holds no
/// reference to mutable state and can be evaluated from any thread.
///
/// # Variants
///
/// - `Single` — A single matcher
/// - `And` — All children must match (short-circuit on first false)
/// - `Or` — Any child must match (short-circuit on first true)
/// - `Not` — Inverts the inner predicate
///
/// # Example
///
/// ```
/// use rulefilter::prelude::*;
///
/// // Rules in "hue" or "astro" that are tagged "night" but not "disabled"
/// let pred = matches_any_namespace([Some("hue"), Some("astro")])
///     & matches_all_tags(["night"])
///     & !matches_any_tag(["disabled"]);
///
/// let rule = RuleRecord::new("astro:dusk").with_tag("night");
/// assert!(pred.evaluate(&rule));
/// assert!(!pred.evaluate(&rule.clone().with_tag("disabled")));
/// ```
#[derive(Debug, Clone)]
pub enum Predicate {
    /// A single matcher.
    Single(Arc<dyn RuleMatcher>),

    /// All predicates must match (logical AND).
    /// Short-circuits on the first `false`.
    And(Vec<Predicate>),

    /// Any predicate must match (logical OR).
    /// Short-circuits on the first `true`.
    Or(Vec<Predicate>),

    /// Inverts the result of the inner predicate (logical NOT).
    Not(Box<Predicate>),
}

impl Predicate {
    /// Wrap a matcher as a `Single` predicate.
    pub fn single(matcher: impl RuleMatcher + 'static) -> Self {
        Self::Single(Arc::new(matcher))
    }

    /// Evaluate this predicate against the given rule.
    pub fn evaluate(&self, rule: &dyn Rule) -> bool {
        match self {
            Self::Single(m) => m.matches(rule),
            Self::And(predicates) => predicates.iter().all(|p| p.evaluate(rule)),
            Self::Or(predicates) => predicates.iter().any(|p| p.evaluate(rule)),
            Self::Not(p) => !p.evaluate(rule),
        }
    }

    /// Evaluate with full trace for debugging.
    ///
    /// Unlike [`evaluate()`](Self::evaluate), this does NOT short-circuit
    /// And/Or. The `matched` result is still identical.
    #[must_use]
    pub fn evaluate_with_trace(&self, rule: &dyn Rule) -> PredicateTrace {
        match self {
            Self::Single(m) => PredicateTrace::Single {
                matched: m.matches(rule),
                matcher: format!("{m:?}"),
                uid: rule.uid().map(str::to_owned),
                namespace: extract_namespace(Some(rule)).map(str::to_owned),
            },
            Self::And(predicates) => {
                let children: Vec<PredicateTrace> = predicates
                    .iter()
                    .map(|p| p.evaluate_with_trace(rule))
                    .collect();
                let matched = children.iter().all(PredicateTrace::matched);
                PredicateTrace::And { matched, children }
            }
            Self::Or(predicates) => {
                let children: Vec<PredicateTrace> = predicates
                    .iter()
                    .map(|p| p.evaluate_with_trace(rule))
                    .collect();
                let matched = children.iter().any(PredicateTrace::matched);
                PredicateTrace::Or { matched, children }
            }
            Self::Not(p) => {
                let inner = p.evaluate_with_trace(rule);
                PredicateTrace::Not {
                    matched: !inner.matched(),
                    inner: Box::new(inner),
                }
            }
        }
    }

    /// Borrow this predicate as a closure, e.g. for [`Iterator::filter`].
    ///
    /// ```
    /// use rulefilter::prelude::*;
    ///
    /// let rules = [RuleRecord::new("a:1"), RuleRecord::new("b:1")];
    /// let pred = matches_namespace(Some("a"));
    /// let hits: Vec<&RuleRecord> = rules.iter().filter(pred.as_fn()).collect();
    /// assert_eq!(hits.len(), 1);
    /// ```
    pub fn as_fn<R: Rule>(&self) -> impl Fn(&R) -> bool + '_ {
        move |rule| self.evaluate(rule)
    }

    /// Compose predicates with AND semantics, optimizing for common cases.
    ///
    /// - Empty → `catch_all`
    /// - Single → unwrapped
    /// - Multiple → `And(predicates)`
    #[must_use]
    pub fn from_all(predicates: Vec<Self>, catch_all: Self) -> Self {
        Self::collapse(predicates, catch_all, Self::And)
    }

    /// Compose predicates with OR semantics, optimizing for common cases.
    ///
    /// Symmetric with [`from_all`](Self::from_all).
    #[must_use]
    pub fn from_any(predicates: Vec<Self>, catch_all: Self) -> Self {
        Self::collapse(predicates, catch_all, Self::Or)
    }

    fn collapse(mut predicates: Vec<Self>, catch_all: Self, wrap: fn(Vec<Self>) -> Self) -> Self {
        match predicates.len() {
            0 => catch_all,
            1 => predicates.swap_remove(0),
            _ => wrap(predicates),
        }
    }

    /// Returns `true` if this is a `Single` predicate.
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Returns `true` if this is an `And` predicate.
    #[must_use]
    pub fn is_and(&self) -> bool {
        matches!(self, Self::And(_))
    }

    /// Returns `true` if this is an `Or` predicate.
    #[must_use]
    pub fn is_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }

    /// Returns `true` if this is a `Not` predicate.
    #[must_use]
    pub fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }

    /// Calculate the depth of this predicate tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::And(ps) | Self::Or(ps) => 1 + ps.iter().map(Self::depth).max().unwrap_or(0),
            Self::Not(p) => 1 + p.depth(),
        }
    }

    /// Check depth and width limits.
    ///
    /// # Errors
    ///
    /// - [`FilterError::DepthExceeded`] if nesting exceeds [`MAX_DEPTH`]
    /// - [`FilterError::TooManyPredicates`] if an `And`/`Or` has more than
    ///   [`MAX_PREDICATES_PER_COMPOUND`] children
    pub fn validate(&self) -> Result<(), FilterError> {
        let depth = self.depth();
        if depth > MAX_DEPTH {
            tracing::warn!(depth, max = MAX_DEPTH, "predicate rejected: too deep");
            return Err(FilterError::DepthExceeded {
                depth,
                max: MAX_DEPTH,
            });
        }
        self.validate_width()
    }

    fn validate_width(&self) -> Result<(), FilterError> {
        match self {
            Self::Single(_) => Ok(()),
            Self::And(ps) | Self::Or(ps) => {
                if ps.len() > MAX_PREDICATES_PER_COMPOUND {
                    tracing::warn!(
                        count = ps.len(),
                        max = MAX_PREDICATES_PER_COMPOUND,
                        "predicate rejected: too wide"
                    );
                    return Err(FilterError::TooManyPredicates {
                        count: ps.len(),
                        max: MAX_PREDICATES_PER_COMPOUND,
                    });
                }
                ps.iter().try_for_each(Self::validate_width)
            }
            Self::Not(p) => p.validate_width(),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Predicate;

    /// `a & b & c` builds one flat `And`.
    fn bitand(self, rhs: Self) -> Self {
        match self {
            Self::And(mut ps) => {
                ps.push(rhs);
                Self::And(ps)
            }
            lhs => Self::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    /// `a | b | c` builds one flat `Or`.
    fn bitor(self, rhs: Self) -> Self {
        match self {
            Self::Or(mut ps) => {
                ps.push(rhs);
                Self::Or(ps)
            }
            lhs => Self::Or(vec![lhs, rhs]),
        }
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self {
        match self {
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }
}
