//! Tag predicates — presence and set tests over a rule's tags
//!
//! # Empty selector convention
//!
//! [`matches_all_tags`] and [`matches_any_tag`] treat an empty selector as
//! "untagged rules only" and return [`has_no_tags`]. An empty selector does NOT
//! match every rule. Callers rely on an empty filter meaning "untagged".
//!
//! An absent selector is the same as an empty one. Flatten an `Option` before
//! passing it in:
//!
//! ```
//! use rulefilter::prelude::*;
//!
//! let selector: Option<Vec<String>> = None;
//! let pred = matches_all_tags(selector.into_iter().flatten());
//! assert!(pred.evaluate(&RuleRecord::new("a")));
//! assert!(!pred.evaluate(&RuleRecord::new("b").with_tag("x")));
//! ```

use std::collections::HashSet;

use crate::{Predicate, Rule, RuleMatcher};

/// Matches rules carrying at least one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasAnyTagMatcher;

impl RuleMatcher for HasAnyTagMatcher {
    fn matches(&self, rule: &dyn Rule) -> bool {
        rule.tag_count() > 0
    }
}

/// Matches rules carrying no tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasNoTagsMatcher;

impl RuleMatcher for HasNoTagsMatcher {
    fn matches(&self, rule: &dyn Rule) -> bool {
        rule.tag_count() == 0
    }
}

/// Matches rules whose tags are a superset of a required set.
///
/// The rule may carry more tags than required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllTagsMatcher {
    tags: HashSet<String>,
}

impl AllTagsMatcher {
    /// Returns the required tags.
    #[must_use]
    pub fn tags(&self) -> &HashSet<String> {
        &self.tags
    }
}

impl RuleMatcher for AllTagsMatcher {
    fn matches(&self, rule: &dyn Rule) -> bool {
        self.tags.iter().all(|tag| rule.has_tag(tag))
    }
}

/// Matches rules sharing at least one tag with a target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyTagMatcher {
    tags: HashSet<String>,
}

impl AnyTagMatcher {
    /// Returns the target tags.
    #[must_use]
    pub fn tags(&self) -> &HashSet<String> {
        &self.tags
    }
}

impl RuleMatcher for AnyTagMatcher {
    fn matches(&self, rule: &dyn Rule) -> bool {
        rule.tag_count() > 0 && self.tags.iter().any(|tag| rule.has_tag(tag))
    }
}

/// Create a predicate matching rules with one or more tags.
#[must_use]
pub fn has_any_tag() -> Predicate {
    Predicate::single(HasAnyTagMatcher)
}

/// Create a predicate matching rules without tags.
#[must_use]
pub fn has_no_tags() -> Predicate {
    Predicate::single(HasNoTagsMatcher)
}

/// Create a predicate matching rules carrying ALL of the given tags.
///
/// An empty selector returns [`has_no_tags`] (see the module docs).
///
/// ```
/// use rulefilter::prelude::*;
///
/// let rule = RuleRecord::new("r").with_tags(["x", "y", "z"]);
/// assert!(matches_all_tags(["x", "y"]).evaluate(&rule));
/// assert!(!matches_all_tags(["x", "w"]).evaluate(&rule));
/// assert!(!matches_all_tags(Vec::<&str>::new()).evaluate(&rule));
/// ```
pub fn matches_all_tags<I>(tags: I) -> Predicate
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let tags = collect_selector(tags);
    if tags.is_empty() {
        tracing::debug!("empty all-tags selector, matching untagged rules only");
        return has_no_tags();
    }
    Predicate::single(AllTagsMatcher { tags })
}

/// Create a predicate matching rules carrying ANY of the given tags.
///
/// An empty selector returns [`has_no_tags`] (see the module docs).
///
/// ```
/// use rulefilter::prelude::*;
///
/// let pred = matches_any_tag(["x", "y"]);
/// assert!(pred.evaluate(&RuleRecord::new("r").with_tag("y")));
/// assert!(!pred.evaluate(&RuleRecord::new("r")));
/// ```
pub fn matches_any_tag<I>(tags: I) -> Predicate
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let tags = collect_selector(tags);
    if tags.is_empty() {
        tracing::debug!("empty any-tag selector, matching untagged rules only");
        return has_no_tags();
    }
    Predicate::single(AnyTagMatcher { tags })
}

fn collect_selector<I>(tags: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}
