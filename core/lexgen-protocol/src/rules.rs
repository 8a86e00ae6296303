use rkyv::{Archive, Deserialize, Serialize};

use crate::morphology::RuleWordClass;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One sub-rule of an inflection class.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RuleSource {
    /// Gradation type (`av1`..`av6`) required by this rule, `None` for words without gradation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gradation: Option<String>,
    /// Must match the whole form; the first capture group is the stem.
    pub pattern: String,
    pub continuation: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub word_classes: Option<Vec<RuleWordClass>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RuleGroupSource {
    pub infclass: String,
    pub rules: Vec<RuleSource>,
}

/// Uncompiled rule table, as stored in JSON or in a compiled rkyv file.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RuleTableSource {
    pub version: u32,
    pub groups: Vec<RuleGroupSource>,
}

impl RuleTableSource {
    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}
