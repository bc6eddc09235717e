//! Data-driven extraction rule tables.
//!
//! A rule is a `(pattern, label)` pair; a table is an ordered list of rules.
//! The conflict policy is explicit first-wins by table order: the first rule
//! whose pattern matches populates its label, and later rules for an
//! already-populated label are skipped. New attributes are added by extending
//! a table (built-in or YAML), never by touching extraction control flow.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// One extraction rule: a pattern with at least one capture group, and the
/// attribute label its captures are stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecRule {
    pub pattern: String,
    pub label: String,
}

/// On-disk shape of a YAML rule file.
#[derive(Debug, Deserialize)]
pub struct RulesFile {
    pub rules: Vec<SpecRule>,
}

#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub(crate) regex: Regex,
    pub(crate) label: String,
}

/// An ordered, compiled rule table ready for extraction. Rule order is
/// precedence order.
#[derive(Debug)]
pub struct RuleTable {
    pub(crate) rules: Vec<CompiledRule>,
}

impl RuleTable {
    /// Compiles an ordered list of rules into a table.
    ///
    /// Every pattern is compiled case-insensitively. Validation rejects empty
    /// labels, patterns that fail to compile, and patterns without a capture
    /// group (a rule that captures nothing can never contribute a value).
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::EmptyTable`] for an empty list and
    /// [`RulesError::InvalidRule`] naming the first offending rule otherwise.
    pub fn compile(rules: &[SpecRule]) -> Result<Self, RulesError> {
        if rules.is_empty() {
            return Err(RulesError::EmptyTable);
        }

        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if rule.label.trim().is_empty() {
                return Err(RulesError::InvalidRule {
                    label: rule.label.clone(),
                    reason: "label must be non-empty".to_string(),
                });
            }

            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| RulesError::InvalidRule {
                    label: rule.label.clone(),
                    reason: e.to_string(),
                })?;

            if regex.captures_len() < 2 {
                return Err(RulesError::InvalidRule {
                    label: rule.label.clone(),
                    reason: "pattern must have at least one capture group".to_string(),
                });
            }

            compiled.push(CompiledRule {
                regex,
                label: rule.label.clone(),
            });
        }

        Ok(Self { rules: compiled })
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Built-in table for CPU listings: core/thread counts, base and boost
    /// clocks, product series.
    #[must_use]
    pub fn cpu() -> Self {
        let rules = [
            (r"(\d+)\s*Cores?", "Cores"),
            (r"(\d+)\s*Threads?", "Threads"),
            (r"(\d+(?:\.\d+)?)\s*GHz\s*Base", "Base Clock"),
            (r"(\d+(?:\.\d+)?)\s*GHz\s*Boost", "Boost Clock"),
            (r"(Ryzen\s*\d+|Core\s*i\d+)", "Series"),
        ];
        Self::from_static(&rules)
    }

    /// Built-in table for laptop listings with combined Latin/Arabic keyword
    /// alternations: RAM, SSD, HDD, processor, screen size, operating system.
    #[must_use]
    pub fn laptop() -> Self {
        let rules = [
            (r"(\d+)\s*(?:جيجابايت|GB)\s*(?:رام|ذاكرة|RAM)", "RAM"),
            (r"(\d+)\s*(?:جيجابايت|GB)\s*SSD", "SSD"),
            (r"(\d+)\s*(?:تيرابايت|TB)\s*(?:قرص صلب|HDD)", "HDD"),
            (
                r"(إنتل|Intel|AMD)\s+(?:كور|Core|رايزن|Ryzen)\s*(\w+)",
                "Processor",
            ),
            (r"(\d+(?:\.\d+)?)\s*(?:بوصة|inch)", "Screen Size"),
            (
                r"(ويندوز|Windows|لينكس|Linux|ماك\s*أو\s*إس|MacOS)",
                "Operating System",
            ),
        ];
        Self::from_static(&rules)
    }

    fn from_static(rules: &[(&str, &str)]) -> Self {
        let rules: Vec<SpecRule> = rules
            .iter()
            .map(|(pattern, label)| SpecRule {
                pattern: (*pattern).to_string(),
                label: (*label).to_string(),
            })
            .collect();
        Self::compile(&rules).expect("built-in rule table is valid")
    }
}

/// Loads and compiles a rule table from a YAML file.
///
/// # Errors
///
/// Returns [`RulesError`] if the file cannot be read, parsed, or compiled.
pub fn load_rules(path: &Path) -> Result<RuleTable, RulesError> {
    let content = std::fs::read_to_string(path).map_err(|e| RulesError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: RulesFile = serde_yaml::from_str(&content)?;
    RuleTable::compile(&file.rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, label: &str) -> SpecRule {
        SpecRule {
            pattern: pattern.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn compile_accepts_valid_rules() {
        let table = RuleTable::compile(&[rule(r"(\d+)\s*GB", "RAM")]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn compile_rejects_empty_table() {
        assert!(matches!(
            RuleTable::compile(&[]),
            Err(RulesError::EmptyTable)
        ));
    }

    #[test]
    fn compile_rejects_empty_label() {
        let result = RuleTable::compile(&[rule(r"(\d+)", "  ")]);
        assert!(matches!(
            result,
            Err(RulesError::InvalidRule { reason, .. }) if reason.contains("non-empty")
        ));
    }

    #[test]
    fn compile_rejects_bad_pattern() {
        let result = RuleTable::compile(&[rule(r"(\d+", "RAM")]);
        assert!(matches!(result, Err(RulesError::InvalidRule { label, .. }) if label == "RAM"));
    }

    #[test]
    fn compile_rejects_pattern_without_capture_group() {
        let result = RuleTable::compile(&[rule(r"\d+\s*GB", "RAM")]);
        assert!(matches!(
            result,
            Err(RulesError::InvalidRule { reason, .. }) if reason.contains("capture group")
        ));
    }

    #[test]
    fn built_in_cpu_table_compiles() {
        assert_eq!(RuleTable::cpu().len(), 5);
    }

    #[test]
    fn built_in_laptop_table_compiles() {
        assert_eq!(RuleTable::laptop().len(), 6);
    }

    #[test]
    fn patterns_are_case_insensitive() {
        let table = RuleTable::compile(&[rule(r"(\d+)\s*gb\s*ram", "RAM")]).unwrap();
        assert!(table.rules[0].regex.is_match("16 GB RAM"));
    }

    #[test]
    fn yaml_rules_file_parses() {
        let yaml = "rules:\n  - pattern: '(\\d+)\\s*GB\\s*RAM'\n    label: RAM\n";
        let file: RulesFile = serde_yaml::from_str(yaml).unwrap();
        let table = RuleTable::compile(&file.rules).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rules[0].label, "RAM");
    }
}
