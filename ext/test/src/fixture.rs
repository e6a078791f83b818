//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the rulefilter predicates.
//!
//! ```yaml
//! name: namespace basics
//! description: absent namespace is matchable
//! rules:
//!   - { label: scoped, uid: "hue:wakeup" }
//!   - { label: bare, uid: "wakeup", tags: [lights] }
//! cases:
//!   - name: only unscoped
//!     filter: { type: namespace }
//!     expect: [bare]
//! ```

use rulefilter::{FilterConfig, FilterError, RuleRecord};
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rules: Vec<LabeledRule>,
    pub cases: Vec<TestCase>,
}

/// A rule with a fixture-local label, so cases can reference rules without a UID.
///
/// Unknown keys are rejected: a misspelled `tag:` must not turn into an
/// untagged rule.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabeledRule {
    pub label: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl LabeledRule {
    /// Build the rule this entry describes.
    #[must_use]
    pub fn to_record(&self) -> RuleRecord {
        let rule = match &self.uid {
            Some(uid) => RuleRecord::new(uid.as_str()),
            None => RuleRecord::anonymous(),
        };
        rule.with_tags(self.tags.iter().map(String::as_str))
    }
}

/// Test case: a filter and the labels of the rules it must keep, in order.
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub filter: FilterConfig,
    pub expect: Vec<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Vec<String>,
    pub actual: Result<Vec<String>, FilterError>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Vec<CaseResult> {
        let records: Vec<(&str, RuleRecord)> = self
            .rules
            .iter()
            .map(|r| (r.label.as_str(), r.to_record()))
            .collect();
        self.cases
            .iter()
            .map(|case| {
                let actual = case.filter.compile().map(|pred| {
                    records
                        .iter()
                        .filter(|(_, rule)| pred.evaluate(rule))
                        .map(|(label, _)| label.to_string())
                        .collect::<Vec<_>>()
                });
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual.as_ref().is_ok_and(|labels| *labels == case.expect),
                    expected: case.expect.clone(),
                    actual,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        for result in self.run() {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: inline
rules:
  - { label: scoped, uid: "hue:wakeup", tags: [lights] }
  - { label: bare, uid: "wakeup" }
  - { label: nameless, tags: [draft] }
cases:
  - name: unscoped
    filter: { type: namespace }
    expect: [bare, nameless]
  - name: wrong on purpose
    filter: { type: has_any_tag }
    expect: [scoped]
"#;

    #[test]
    fn parses_labeled_rules() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        assert_eq!(fixture.rules.len(), 3);
        assert_eq!(fixture.rules[2].label, "nameless");
        assert!(fixture.description.is_empty());
    }

    #[test]
    fn run_reports_each_case() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        let results = fixture.run();
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(
            results[1].actual.as_ref().unwrap(),
            &vec!["scoped".to_string(), "nameless".to_string()]
        );
    }

    #[test]
    fn multi_document_parse() {
        let yaml = format!("{FIXTURE}\n---\n{FIXTURE}");
        assert_eq!(Fixture::from_yaml_multi(&yaml).unwrap().len(), 2);
    }

    #[test]
    fn misspelled_rule_key_is_rejected() {
        let yaml = r#"
name: typo
rules:
  - { label: oops, uid: "hue:a", tag: [lights] }
cases: []
"#;
        let err = Fixture::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown field `tag`"));
    }

    #[test]
    fn labeled_rule_builds_record() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        let scoped = fixture.rules[0].to_record();
        assert_eq!(scoped, RuleRecord::new("hue:wakeup").with_tag("lights"));
        assert_eq!(fixture.rules[2].to_record(), RuleRecord::anonymous().with_tag("draft"));
    }
}
