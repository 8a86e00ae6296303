use lexgen_morph::{compatible_gradations, split_infclass, strip_markers};
use lexgen_protocol::{RuleWordClass, WordClassSet};
use thiserror::Error;
use tracing::trace;

use crate::rules::RuleTable;

/// Stem and continuation class resolved for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub stem: String,
    pub continuation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The word-class tags map to no structural class.
    NoWordClass,
    NoMatchingRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malaga class not found for ({form}, {infclass})")]
pub struct Unresolved {
    pub form: String,
    pub infclass: String,
    pub reason: UnresolvedReason,
}

impl RuleTable {
    /// Resolves the stem and continuation class of `form`.
    ///
    /// Groups are scanned in table order and sub-rules in declaration order;
    /// the first sub-rule that accepts the word class and gradation and whose
    /// pattern matches wins.
    pub fn classify<S: AsRef<str>>(
        &self,
        form: &str,
        infclass: &str,
        word_classes: &[S],
    ) -> Result<Classification, Unresolved> {
        let wordform = strip_markers(form);
        let unresolved = |reason: UnresolvedReason| Unresolved {
            form: wordform.clone(),
            infclass: infclass.to_string(),
            reason,
        };

        let (base, letter) = split_infclass(infclass);
        let gradations = compatible_gradations(letter);

        let class = RuleWordClass::from_tags(word_classes)
            .map(WordClassSet::from)
            .ok_or_else(|| unresolved(UnresolvedReason::NoWordClass))?;

        for group in self.groups().iter().filter(|g| g.infclass == base) {
            for rule in &group.rules {
                if let Some(allowed) = rule.word_classes {
                    if !allowed.intersects(class) {
                        continue;
                    }
                }
                if !gradations.iter().any(|g| *g == rule.gradation.as_deref()) {
                    continue;
                }
                if let Some(stem) = rule.stem(&wordform) {
                    trace!(form = %wordform, infclass, continuation = %rule.continuation, "classified");
                    return Ok(Classification {
                        stem: stem.to_string(),
                        continuation: rule.continuation.clone(),
                    });
                }
            }
        }

        Err(unresolved(UnresolvedReason::NoMatchingRule))
    }
}

/// Free-function form of [`RuleTable::classify`].
pub fn classify<S: AsRef<str>>(
    form: &str,
    infclass: &str,
    word_classes: &[S],
    rules: &RuleTable,
) -> Result<Classification, Unresolved> {
    rules.classify(form, infclass, word_classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexgen_protocol::{RuleGroupSource, RuleSource, RuleTableSource, RuleWordClass};

    fn rule(gradation: Option<&str>, pattern: &str, continuation: &str, classes: Option<Vec<RuleWordClass>>) -> RuleSource {
        RuleSource {
            gradation: gradation.map(str::to_string),
            pattern: pattern.to_string(),
            continuation: continuation.to_string(),
            word_classes: classes,
        }
    }

    fn table(groups: Vec<(&str, Vec<RuleSource>)>) -> RuleTable {
        let source = RuleTableSource {
            version: 1,
            groups: groups
                .into_iter()
                .map(|(infclass, rules)| RuleGroupSource {
                    infclass: infclass.to_string(),
                    rules,
                })
                .collect(),
        };
        RuleTable::compile(&source).unwrap()
    }

    #[test]
    fn test_simple_match() {
        let rules = table(vec![("talo", vec![rule(None, "(.*)", "talo", None)])]);
        let result = rules.classify("talo", "talo", &["noun"]).unwrap();

        assert_eq!(result.stem, "talo");
        assert_eq!(result.continuation, "talo");
    }

    #[test]
    fn test_rule_order_decides() {
        let first = rule(None, "(.*)o", "valo", None);
        let second = rule(None, "(.*)", "talo", None);

        let forward = table(vec![("valo", vec![first.clone(), second.clone()])]);
        let swapped = table(vec![("valo", vec![second, first])]);

        assert_eq!(forward.classify("talo", "valo", &["noun"]).unwrap().continuation, "valo");
        assert_eq!(forward.classify("talo", "valo", &["noun"]).unwrap().stem, "tal");
        assert_eq!(swapped.classify("talo", "valo", &["noun"]).unwrap().continuation, "talo");
    }

    #[test]
    fn test_later_group_is_consulted() {
        let rules = table(vec![
            ("valo", vec![rule(None, "(.*)x", "first", None)]),
            ("valo", vec![rule(None, "(.*)o", "second", None)]),
        ]);
        assert_eq!(rules.classify("talo", "valo", &["noun"]).unwrap().continuation, "second");
    }

    #[test]
    fn test_word_class_restriction() {
        let rules = table(vec![(
            "valo",
            vec![
                rule(None, "(.*)", "verbi", Some(vec![RuleWordClass::Verb])),
                rule(None, "(.*)", "nomini", Some(vec![RuleWordClass::Noun, RuleWordClass::Adjective])),
            ],
        )]);

        assert_eq!(rules.classify("talo", "valo", &["noun"]).unwrap().continuation, "nomini");
        assert_eq!(rules.classify("sataa", "valo", &["verb"]).unwrap().continuation, "verbi");
        assert_eq!(rules.classify("Pori", "valo", &["pnoun_place"]).unwrap().continuation, "nomini");
    }

    #[test]
    fn test_gradation_constraint() {
        let rules = table(vec![(
            "valo",
            vec![
                rule(None, "(.*)", "ilman", None),
                rule(Some("av1"), "(.*[kpt])o", "astevaihtelu", None),
            ],
        )]);

        assert_eq!(rules.classify("mato", "valo-F", &["noun"]).unwrap().continuation, "astevaihtelu");
        assert_eq!(rules.classify("mato", "valo", &["noun"]).unwrap().continuation, "ilman");
        // av1 does not cover L, and gradated words never use rules without gradation
        let err = rules.classify("mato", "valo-L", &["noun"]).unwrap_err();
        assert_eq!(err.reason, UnresolvedReason::NoMatchingRule);
    }

    #[test]
    fn test_markers_are_stripped_before_matching() {
        let rules = table(vec![("talo", vec![rule(None, "(.*)o", "talo", None)])]);
        let result = rules.classify("kerros=ta|lo", "talo", &["noun"]).unwrap();
        assert_eq!(result.stem, "kerrostal");
    }

    #[test]
    fn test_unresolved() {
        let rules = table(vec![("talo", vec![rule(None, "(.*)o", "talo", None)])]);

        let err = classify("kynä", "talo", &["noun"], &rules).unwrap_err();
        assert_eq!(err.reason, UnresolvedReason::NoMatchingRule);
        assert_eq!(err.to_string(), "Malaga class not found for (kynä, talo)");

        let err = rules.classify("talo", "talo", &["adverb"]).unwrap_err();
        assert_eq!(err.reason, UnresolvedReason::NoWordClass);

        let err = rules.classify("talo", "kala", &["noun"]).unwrap_err();
        assert_eq!(err.reason, UnresolvedReason::NoMatchingRule);
    }
}
