//! rulefilter-test: Shared helpers and conformance fixtures
//!
//! Provides terse rule constructors, a tracing initializer for tests, and the
//! YAML fixture runner used by the conformance suite.
//!
//! # Example
//!
//! ```
//! use rulefilter_test::prelude::*;
//!
//! let r = rule("hue:wakeup", &["lights", "morning"]);
//! assert!(matches_all_tags(["lights"]).evaluate(&r));
//! assert!(has_no_tags().evaluate(&anonymous(&[])));
//! ```

pub mod fixture;

use rulefilter::RuleRecord;
use tracing_subscriber::EnvFilter;

/// Build a rule with the given UID and tags.
#[must_use]
pub fn rule(uid: &str, tags: &[&str]) -> RuleRecord {
    RuleRecord::new(uid).with_tags(tags.iter().copied())
}

/// Build a rule without a UID.
#[must_use]
pub fn anonymous(tags: &[&str]) -> RuleRecord {
    RuleRecord::anonymous().with_tags(tags.iter().copied())
}

/// Initialise a tracing subscriber that writes to the test-harness writer
/// and respects `RUST_LOG` (default `debug` for this crate family).
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rulefilter=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{anonymous, init_test_tracing, rule};
    pub use rulefilter::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulefilter::Rule;

    #[test]
    fn rule_helper_sets_uid_and_tags() {
        let r = rule("a:b", &["x", "y", "x"]);
        assert_eq!(r.uid(), Some("a:b"));
        assert_eq!(r.tags().len(), 2);
    }

    #[test]
    fn anonymous_helper_has_no_uid() {
        let r = anonymous(&["x"]);
        assert_eq!(r.uid(), None);
        assert!(r.tags().contains("x"));
    }

    #[test]
    fn init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
        tracing::debug!("still fine");
    }
}
