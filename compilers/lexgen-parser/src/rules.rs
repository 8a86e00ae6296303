use std::fs;
use std::path::Path;

use lexgen_morph::GRADATIONS;
use lexgen_protocol::{RuleTableSource, WordClassSet};
use regex::{Regex, RegexBuilder};
use rkyv::{AlignedVec, Deserialize};

use crate::error::RuleError;

/// A sub-rule with its pattern compiled.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub gradation: Option<String>,
    pub pattern: Regex,
    pub continuation: String,
    pub word_classes: Option<WordClassSet>,
}

impl ClassificationRule {
    /// Stem captured by the pattern if it matches the whole form.
    pub fn stem<'f>(&self, form: &'f str) -> Option<&'f str> {
        self.pattern
            .captures(form)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub infclass: String,
    pub rules: Vec<ClassificationRule>,
}

/// Ordered, immutable classification rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    groups: Vec<RuleGroup>,
}

impl RuleTable {
    /// Compiles every pattern so that it must match the whole form,
    /// ignoring case.
    pub fn compile(source: &RuleTableSource) -> Result<Self, RuleError> {
        let mut groups = Vec::with_capacity(source.groups.len());

        for group in &source.groups {
            let mut rules = Vec::with_capacity(group.rules.len());
            for rule in &group.rules {
                if let Some(gradation) = &rule.gradation {
                    if !GRADATIONS.iter().any(|g| g.gradation_type == gradation) {
                        return Err(RuleError::UnknownGradation {
                            infclass: group.infclass.clone(),
                            gradation: gradation.clone(),
                        });
                    }
                }

                let pattern = RegexBuilder::new(&format!("^(?:{})$", rule.pattern))
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RuleError::Pattern {
                        infclass: group.infclass.clone(),
                        pattern: rule.pattern.clone(),
                        source,
                    })?;

                // Group 0 is the whole match.
                if pattern.captures_len() < 2 {
                    return Err(RuleError::MissingStemCapture {
                        infclass: group.infclass.clone(),
                        pattern: rule.pattern.clone(),
                    });
                }

                rules.push(ClassificationRule {
                    gradation: rule.gradation.clone(),
                    pattern,
                    continuation: rule.continuation.clone(),
                    word_classes: rule
                        .word_classes
                        .as_ref()
                        .map(|classes| classes.iter().copied().collect()),
                });
            }
            groups.push(RuleGroup {
                infclass: group.infclass.clone(),
                rules,
            });
        }

        Ok(Self { groups })
    }

    pub fn from_json(text: &str) -> Result<Self, RuleError> {
        let source: RuleTableSource = serde_json::from_str(text)?;
        Self::compile(&source)
    }

    /// Loads a table produced by `rules-compiler`.
    pub fn from_rkyv(bytes: &[u8]) -> Result<Self, RuleError> {
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<RuleTableSource>(&aligned)
            .map_err(|e| RuleError::Archive(e.to_string()))?;
        let source: RuleTableSource = archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|_| RuleError::Archive("deserialization failed".to_string()))?;

        Self::compile(&source)
    }

    /// Reads a JSON table if the file name ends in `.json`, a compiled one otherwise.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&fs::read_to_string(path)?)
        } else {
            Self::from_rkyv(&fs::read(path)?)
        }
    }

    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}
