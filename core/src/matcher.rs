//! `RuleMatcher` — The single capability every predicate shares
//!
//! A `RuleMatcher` answers one question about one rule. Concrete matchers live
//! next to their factories in `namespace` and `tags`; composition lives in
//! [`Predicate`](crate::Predicate).

use crate::Rule;
use std::fmt::Debug;

/// Decides whether a rule matches.
///
/// Takes `&dyn Rule`, so the same matcher works for every rule type and can be
/// shared behind an `Arc`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Matchers capture their criteria at
/// construction and never mutate afterwards.
///
/// # Example
///
/// ```
/// use rulefilter::{Predicate, Rule, RuleMatcher, RuleRecord};
///
/// #[derive(Debug)]
/// struct HasUid;
///
/// impl RuleMatcher for HasUid {
///     fn matches(&self, rule: &dyn Rule) -> bool {
///         rule.uid().is_some()
///     }
/// }
///
/// let pred = Predicate::single(HasUid);
/// assert!(pred.evaluate(&RuleRecord::new("x")));
/// assert!(!pred.evaluate(&RuleRecord::anonymous()));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RuleMatcher`",
    label = "this type cannot test rules",
    note = "use the built-in factories (matches_namespace, matches_all_tags, ...) or implement `matches(&self, &dyn Rule) -> bool`"
)]
pub trait RuleMatcher: Send + Sync + Debug {
    /// Check if the given rule matches.
    fn matches(&self, rule: &dyn Rule) -> bool;
}

#[diagnostic::do_not_recommend]
impl RuleMatcher for Box<dyn RuleMatcher> {
    fn matches(&self, rule: &dyn Rule) -> bool {
        (**self).matches(rule)
    }
}
