//! Namespace — UID prefix parsing and namespace predicates
//!
//! A rule UID may be composed as `<namespace>:<local-id>`. The namespace is
//! everything before the FIRST [`SEPARATOR`]. It is never stored, only derived.
//!
//! | UID          | Namespace     |
//! |--------------|---------------|
//! | `"hue:wake"` | `Some("hue")` |
//! | `"a:b:c"`    | `Some("a")`   |
//! | `":wake"`    | `None`        |
//! | `"wake"`     | `None`        |
//! | absent       | `None`        |

use std::collections::HashSet;

use crate::{Predicate, Rule, RuleMatcher, SEPARATOR};

/// Extract the namespace from a raw UID.
///
/// Returns the prefix before the first [`SEPARATOR`], or `None` if there is no
/// separator or the prefix would be empty. Never fails.
///
/// ```
/// use rulefilter::namespace_of;
///
/// assert_eq!(namespace_of("hue:wakeup"), Some("hue"));
/// assert_eq!(namespace_of(":wakeup"), None);
/// assert_eq!(namespace_of("wakeup"), None);
/// ```
#[must_use]
pub fn namespace_of(uid: &str) -> Option<&str> {
    match uid.find(SEPARATOR) {
        // empty prefix is "no namespace", not ""
        None | Some(0) => None,
        Some(index) => Some(&uid[..index]),
    }
}

/// Extract the namespace of a rule, if any.
///
/// Absent rule, absent UID, missing separator and empty prefix all yield `None`.
///
/// ```
/// use rulefilter::{extract_namespace, RuleRecord};
///
/// let rule = RuleRecord::new("astro:sunset");
/// assert_eq!(extract_namespace(Some(&rule)), Some("astro"));
/// assert_eq!(extract_namespace::<RuleRecord>(None), None);
/// ```
#[must_use]
pub fn extract_namespace<R: Rule + ?Sized>(rule: Option<&R>) -> Option<&str> {
    rule.and_then(|r| r.uid()).and_then(namespace_of)
}

/// Matches rules whose namespace equals a target, where the target may be absent.
///
/// `None` matches rules without a namespace. `Some("")` never matches, since a
/// derived namespace is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMatcher {
    namespace: Option<String>,
}

impl NamespaceMatcher {
    /// Create a matcher for the given target namespace.
    #[must_use]
    pub fn new(namespace: Option<&str>) -> Self {
        Self {
            namespace: namespace.map(str::to_owned),
        }
    }

    /// Returns the target namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl RuleMatcher for NamespaceMatcher {
    fn matches(&self, rule: &dyn Rule) -> bool {
        extract_namespace(Some(rule)) == self.namespace.as_deref()
    }
}

/// Matches rules whose namespace is a member of a set, where absent is a valid member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnyNamespaceMatcher {
    namespaces: HashSet<String>,
    include_absent: bool,
}

impl AnyNamespaceMatcher {
    /// Build the set from the given targets. Duplicates collapse.
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut matcher = Self::default();
        for target in targets {
            match target {
                Some(ns) => {
                    matcher.namespaces.insert(ns.into());
                }
                None => matcher.include_absent = true,
            }
        }
        matcher
    }

    /// Returns `true` if rules without a namespace are members.
    #[must_use]
    pub fn includes_absent(&self) -> bool {
        self.include_absent
    }

    /// Number of distinct targets, counting absent once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len() + usize::from(self.include_absent)
    }

    /// Returns `true` if no target was given (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RuleMatcher for AnyNamespaceMatcher {
    fn matches(&self, rule: &dyn Rule) -> bool {
        match extract_namespace(Some(rule)) {
            Some(ns) => self.namespaces.contains(ns),
            None => self.include_absent,
        }
    }
}

/// Create a predicate matching rules in the given namespace, or without one.
///
/// ```
/// use rulefilter::prelude::*;
///
/// let unscoped = matches_namespace(None);
/// assert!(unscoped.evaluate(&RuleRecord::new("wakeup")));
/// assert!(!unscoped.evaluate(&RuleRecord::new("hue:wakeup")));
/// ```
#[must_use]
pub fn matches_namespace(target: Option<&str>) -> Predicate {
    Predicate::single(NamespaceMatcher::new(target))
}

/// Create a predicate matching rules in any of the given namespaces.
///
/// Include `None` among the targets to also match rules without a namespace.
/// An empty target list matches nothing.
///
/// ```
/// use rulefilter::prelude::*;
///
/// let pred = matches_any_namespace([Some("hue"), None]);
/// assert!(pred.evaluate(&RuleRecord::new("hue:wakeup")));
/// assert!(pred.evaluate(&RuleRecord::new("wakeup")));
/// assert!(!pred.evaluate(&RuleRecord::new("astro:sunset")));
/// ```
pub fn matches_any_namespace<I, S>(targets: I) -> Predicate
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    Predicate::single(AnyNamespaceMatcher::new(targets))
}
