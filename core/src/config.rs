//! Config types for declarative filter construction.
//!
//! [`FilterConfig`] describes a filter as data (YAML or JSON) and compiles into
//! a runtime [`Predicate`] through the same factories code would call.
//!
//! | Config `type`   | Runtime factory |
//! |-----------------|-----------------|
//! | `namespace`     | [`matches_namespace`](crate::matches_namespace) |
//! | `any_namespace` | [`matches_any_namespace`](crate::matches_any_namespace) |
//! | `has_any_tag`   | [`has_any_tag`](crate::has_any_tag) |
//! | `has_no_tags`   | [`has_no_tags`](crate::has_no_tags) |
//! | `all_tags`      | [`matches_all_tags`](crate::matches_all_tags) |
//! | `any_tag`       | [`matches_any_tag`](crate::matches_any_tag) |
//! | `and` / `or` / `not` | [`Predicate`] composition |
//!
//! ```yaml
//! type: and
//! filters:
//!   - type: any_namespace
//!     namespaces: [hue, null]     # null = rules without a namespace
//!   - type: all_tags
//!     tags: [lights]
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    has_any_tag, has_no_tags, matches_all_tags, matches_any_namespace, matches_any_tag,
    matches_namespace, FilterError, Predicate,
};

/// Configuration for a [`Predicate`].
///
/// Uses `#[serde(tag = "type")]` for discriminated union deserialization.
/// A missing or `null` `namespace` means "no namespace". Missing or `null`
/// `tags` is an empty selector, which matches untagged rules only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Rule namespace equals the target.
    Namespace {
        /// Target namespace, or `None` for rules without one.
        #[serde(default)]
        namespace: Option<String>,
    },

    /// Rule namespace is any of the targets.
    AnyNamespace {
        /// Target namespaces; `null` entries match rules without one.
        namespaces: Vec<Option<String>>,
    },

    /// Rule carries at least one tag.
    HasAnyTag,

    /// Rule carries no tags.
    HasNoTags,

    /// Rule carries every listed tag.
    AllTags {
        /// Required tags. Absent or empty means untagged only.
        #[serde(default)]
        tags: Option<Vec<String>>,
    },

    /// Rule carries at least one listed tag.
    AnyTag {
        /// Candidate tags. Absent or empty means untagged only.
        #[serde(default)]
        tags: Option<Vec<String>>,
    },

    /// All child filters must match.
    And {
        /// Child filters.
        filters: Vec<FilterConfig>,
    },

    /// Any child filter must match.
    Or {
        /// Child filters.
        filters: Vec<FilterConfig>,
    },

    /// Inverts the inner filter.
    Not {
        /// The filter to negate.
        filter: Box<FilterConfig>,
    },
}

impl FilterConfig {
    /// Parse a filter from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfig`] if the text is not a valid filter.
    pub fn from_yaml(text: &str) -> Result<Self, FilterError> {
        serde_yaml::from_str(text).map_err(|e| FilterError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Parse a filter from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfig`] if the text is not a valid filter.
    pub fn from_json(text: &str) -> Result<Self, FilterError> {
        serde_json::from_str(text).map_err(|e| FilterError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Compile into a runtime [`Predicate`] and validate its limits.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::DepthExceeded`] or [`FilterError::TooManyPredicates`]
    /// if the compiled tree is too deep or too wide.
    pub fn compile(&self) -> Result<Predicate, FilterError> {
        let predicate = self.build();
        predicate.validate()?;
        tracing::debug!(depth = predicate.depth(), "compiled filter config");
        Ok(predicate)
    }

    fn build(&self) -> Predicate {
        match self {
            Self::Namespace { namespace } => matches_namespace(namespace.as_deref()),
            Self::AnyNamespace { namespaces } => matches_any_namespace(namespaces.iter().cloned()),
            Self::HasAnyTag => has_any_tag(),
            Self::HasNoTags => has_no_tags(),
            Self::AllTags { tags } => matches_all_tags(tags.iter().flatten()),
            Self::AnyTag { tags } => matches_any_tag(tags.iter().flatten()),
            Self::And { filters } => Predicate::And(filters.iter().map(Self::build).collect()),
            Self::Or { filters } => Predicate::Or(filters.iter().map(Self::build).collect()),
            Self::Not { filter } => Predicate::Not(Box::new(filter.build())),
        }
    }
}
