//! `Rule` — The contract every filterable rule satisfies
//!
//! Rules are owned by an external engine. Filtering only needs two accessors:
//! the optional UID and the tag set. [`RuleRecord`] is a plain implementation
//! for tools, fixtures and tests.

use std::collections::BTreeSet;
use std::sync::Arc;

/// Tag storage of [`RuleRecord`].
///
/// Ordered so that iteration, traces and serialized output are deterministic.
pub type TagSet = BTreeSet<String>;

/// A rule that can be filtered by namespace and tags.
///
/// # Contract
///
/// - [`uid`](Self::uid) may be absent (rules not yet registered with an engine).
/// - [`has_tag`](Self::has_tag) and [`tag_count`](Self::tag_count) describe the
///   same collection. A rule without tags has a count of zero.
///
/// The trait only asks for lookups, so an engine can keep its tags in whatever
/// container it already has. The namespace is not part of the contract: it is
/// always derived from the UID by [`extract_namespace`](crate::extract_namespace).
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
///
/// use rulefilter::{extract_namespace, Rule};
///
/// struct EngineRule {
///     id: String,
///     labels: HashSet<String>,
/// }
///
/// impl Rule for EngineRule {
///     fn uid(&self) -> Option<&str> {
///         Some(&self.id)
///     }
///
///     fn has_tag(&self, tag: &str) -> bool {
///         self.labels.contains(tag)
///     }
///
///     fn tag_count(&self) -> usize {
///         self.labels.len()
///     }
/// }
///
/// let rule = EngineRule { id: "astro:sunset".into(), labels: HashSet::new() };
/// assert_eq!(extract_namespace(Some(&rule)), Some("astro"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Rule`",
    label = "this type cannot be filtered",
    note = "implement `uid()`, `has_tag()` and `tag_count()` for your rule type, or convert it into a `RuleRecord`"
)]
pub trait Rule {
    /// The rule's UID, if it has one.
    fn uid(&self) -> Option<&str>;

    /// Returns `true` if the rule carries `tag`.
    fn has_tag(&self, tag: &str) -> bool;

    /// Number of distinct tags the rule carries.
    fn tag_count(&self) -> usize;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn uid(&self) -> Option<&str> {
        (**self).uid()
    }

    fn has_tag(&self, tag: &str) -> bool {
        (**self).has_tag(tag)
    }

    fn tag_count(&self) -> usize {
        (**self).tag_count()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn uid(&self) -> Option<&str> {
        (**self).uid()
    }

    fn has_tag(&self, tag: &str) -> bool {
        (**self).has_tag(tag)
    }

    fn tag_count(&self) -> usize {
        (**self).tag_count()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn uid(&self) -> Option<&str> {
        (**self).uid()
    }

    fn has_tag(&self, tag: &str) -> bool {
        (**self).has_tag(tag)
    }

    fn tag_count(&self) -> usize {
        (**self).tag_count()
    }
}

/// A plain rule: optional UID plus tags.
///
/// With the `serde` feature, both fields are optional on input:
///
/// ```yaml
/// - uid: "hue:wakeup"
///   tags: [lights, morning]
/// - tags: [draft]        # no UID yet
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleRecord {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    uid: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    tags: TagSet,
}

impl RuleRecord {
    /// Create an untagged rule with the given UID.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            tags: TagSet::new(),
        }
    }

    /// Create an untagged rule without a UID.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add several tags (builder pattern). Duplicates collapse.
    #[must_use]
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The rule's tags, in order.
    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

impl Rule for RuleRecord {
    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
