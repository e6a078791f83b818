//! Evaluation trace types for debugging filters.
//!
//! [`PredicateTrace`] mirrors [`Predicate`](crate::Predicate) but captures
//! results instead of criteria. Use
//! [`Predicate::evaluate_with_trace`](crate::Predicate::evaluate_with_trace)
//! to see why a rule was kept or dropped.

use std::fmt;

/// Trace of a predicate evaluation.
///
/// In And/Or, ALL children are evaluated (no short-circuit). The `matched`
/// result is still correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateTrace {
    /// A single matcher evaluation.
    Single {
        /// Whether this matcher matched.
        matched: bool,
        /// Debug description of the matcher (e.g., `AllTagsMatcher { tags: {"x"} }`).
        matcher: String,
        /// UID of the evaluated rule.
        uid: Option<String>,
        /// Namespace derived from the UID.
        namespace: Option<String>,
    },
    /// AND: all children must match.
    And {
        /// Whether all children matched.
        matched: bool,
        /// Trace of each child.
        children: Vec<PredicateTrace>,
    },
    /// OR: any child must match.
    Or {
        /// Whether any child matched.
        matched: bool,
        /// Trace of each child.
        children: Vec<PredicateTrace>,
    },
    /// NOT: inverts inner result.
    Not {
        /// Whether the NOT predicate matched (i.e., inner did NOT match).
        matched: bool,
        /// Trace of the inner predicate.
        inner: Box<PredicateTrace>,
    },
}

impl PredicateTrace {
    /// Get the overall match result of this predicate.
    #[must_use]
    pub fn matched(&self) -> bool {
        match self {
            Self::Single { matched, .. }
            | Self::And { matched, .. }
            | Self::Or { matched, .. }
            | Self::Not { matched, .. } => *matched,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let mark = if self.matched() { "+" } else { "-" };
        let pad = "  ".repeat(indent);
        match self {
            Self::Single {
                matcher, namespace, ..
            } => {
                let ns = namespace.as_deref().unwrap_or("(none)");
                writeln!(f, "{pad}{mark} {matcher} [namespace: {ns}]")
            }
            Self::And { children, .. } | Self::Or { children, .. } => {
                let op = if matches!(self, Self::And { .. }) { "and" } else { "or" };
                writeln!(f, "{pad}{mark} {op}")?;
                children
                    .iter()
                    .try_for_each(|c| c.write_indented(f, indent + 1))
            }
            Self::Not { inner, .. } => {
                writeln!(f, "{pad}{mark} not")?;
                inner.write_indented(f, indent + 1)
            }
        }
    }
}

/// Indented tree, one line per node. `+` marks a match, `-` a miss.
impl fmt::Display for PredicateTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(matched: bool) -> PredicateTrace {
        PredicateTrace::Single {
            matched,
            matcher: "HasAnyTagMatcher".into(),
            uid: Some("hue:wake".into()),
            namespace: Some("hue".into()),
        }
    }

    #[test]
    fn predicate_trace_matched_single() {
        assert!(leaf(true).matched());
        assert!(!leaf(false).matched());
    }

    #[test]
    fn predicate_trace_matched_compound() {
        let and = PredicateTrace::And {
            matched: false,
            children: vec![leaf(true), leaf(false)],
        };
        assert!(!and.matched());

        let not = PredicateTrace::Not {
            matched: true,
            inner: Box::new(and),
        };
        assert!(not.matched());
    }

    #[test]
    fn display_renders_tree() {
        let trace = PredicateTrace::Or {
            matched: true,
            children: vec![
                leaf(true),
                PredicateTrace::Not {
                    matched: false,
                    inner: Box::new(leaf(true)),
                },
            ],
        };
        let rendered = trace.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+ or");
        assert_eq!(lines[1], "  + HasAnyTagMatcher [namespace: hue]");
        assert_eq!(lines[2], "  - not");
        assert_eq!(lines[3], "    + HasAnyTagMatcher [namespace: hue]");
    }

    #[test]
    fn display_absent_namespace() {
        let trace = PredicateTrace::Single {
            matched: false,
            matcher: "NamespaceMatcher".into(),
            uid: None,
            namespace: None,
        };
        assert_eq!(trace.to_string(), "- NamespaceMatcher [namespace: (none)]\n");
    }
}
