use lexgen_morph::{strip_markers, title_case};
use lexgen_parser::{Classification, FlagAttributeTable};
use lexgen_protocol::{FlagSet, Target, VowelType, WordClass, WordRecord};
use tracing::warn;

/// Continuation classes the lexc lexicon has sublexicons for.
const LEXC_CONTINUATIONS: [&str; 2] = ["nainen", "hattu"];

/// Flags that become flag diacritics in the lexc notation.
const LEXC_DIACRITICS: [(&str, &str); 2] = [("ei_yks", "@P.EI_YKS@"), ("ysj", "@R.YS_ALKANUT@")];

pub fn word_class_marker(class: WordClass, target: Target) -> &'static str {
    match target {
        Target::Malaga => match class {
            WordClass::PlaceName => "paikannimi",
            WordClass::FirstName => "etunimi",
            WordClass::LastName => "sukunimi",
            WordClass::ProperName => "nimi",
            WordClass::Verb => "teonsana",
            WordClass::NounAdjective => "nimi_laatusana",
            WordClass::Adjective => "laatusana",
            WordClass::Noun => "nimisana",
        },
        Target::Lexc => match class {
            WordClass::PlaceName => "[Lep]",
            WordClass::FirstName => "[Lee]",
            WordClass::LastName => "[Les]",
            WordClass::ProperName => "[Lem]",
            WordClass::Verb => "[Lt]",
            WordClass::NounAdjective => "[Lnl]",
            WordClass::Adjective => "[Ll]",
            WordClass::Noun => "[Ln]",
        },
    }
}

/// Everything known about one form by the time its entry is written.
#[derive(Debug, Clone)]
pub struct EntryInput<'a> {
    pub record: &'a WordRecord,
    /// Raw form, markers included.
    pub form: &'a str,
    pub word_class: WordClass,
    pub classification: &'a Classification,
    pub annotation: &'a str,
    /// Record-level feature markers from [`EntryFormatter::feature_markers`].
    pub features: &'a str,
    pub vowel_type: VowelType,
}

/// Assembles lexicon lines in the notation of one target.
#[derive(Debug, Clone, Copy)]
pub struct EntryFormatter<'a> {
    target: Target,
    flag_attributes: &'a FlagAttributeTable,
    source_ids: bool,
}

impl<'a> EntryFormatter<'a> {
    pub fn new(target: Target, flag_attributes: &'a FlagAttributeTable, source_ids: bool) -> Self {
        Self {
            target,
            flag_attributes,
            source_ids,
        }
    }

    /// Feature markers derived from the record's flags; computed once per record.
    ///
    /// Malaga lists the flag-attribute tokens of every flag as `tiedot`, lexc
    /// appends a flag diacritic for each mapped flag.
    pub fn feature_markers(&self, flags: &FlagSet) -> String {
        match self.target {
            Target::Malaga => {
                let tokens: Vec<&str> = flags
                    .iter()
                    .filter_map(|(group, flag)| {
                        if self.flag_attributes.get(group, flag).is_none() {
                            warn!(group, flag, "flag has no attribute entry");
                        }
                        self.flag_attributes.token(group, flag)
                    })
                    .collect();
                if tokens.is_empty() {
                    String::new()
                } else {
                    format!(", tiedot: <{}>", tokens.join(","))
                }
            }
            Target::Lexc => flags
                .iter()
                .filter_map(|(_, flag)| {
                    LEXC_DIACRITICS
                        .iter()
                        .find(|(name, _)| *name == flag)
                        .map(|(_, diacritic)| *diacritic)
                })
                .collect(),
        }
    }

    /// Whether this target can express `continuation` for `class`.
    pub fn supports(&self, class: WordClass, continuation: &str) -> bool {
        match self.target {
            Target::Malaga => true,
            Target::Lexc => {
                LEXC_CONTINUATIONS.contains(&continuation)
                    && matches!(class, WordClass::Noun | WordClass::LastName)
            }
        }
    }

    /// One lexicon line, or `None` if the continuation class is not wired
    /// for this target.
    pub fn format(&self, entry: &EntryInput<'_>) -> Option<String> {
        let continuation = entry.classification.continuation.as_str();
        if !self.supports(entry.word_class, continuation) {
            return None;
        }

        let wordform = strip_markers(entry.form);
        let class = word_class_marker(entry.word_class, self.target);
        let vowel = entry.vowel_type.marker();

        let line = match self.target {
            Target::Malaga => {
                let source_id = if self.source_ids {
                    format!(", sourceid: \"{}\"", entry.record.id)
                } else {
                    String::new()
                };
                format!(
                    "[perusmuoto: \"{}\", alku: \"{}\", luokka: {}, jatko: <{}>, äs: {}{}{}{}];",
                    wordform,
                    entry.classification.stem,
                    class,
                    continuation,
                    vowel,
                    entry.features,
                    entry.annotation,
                    source_id,
                )
            }
            Target::Lexc => {
                let stem = entry.classification.stem.to_lowercase();
                let mut line = format!(
                    "{class}[Xp]{wordform}[X]{annotation}{stem}{features}:{stem}{features} Nom{cont}_{vowel} ;",
                    annotation = entry.annotation,
                    features = entry.features,
                    cont = title_case(continuation),
                );
                if self.source_ids {
                    line.push_str(&format!(" ! sourceid: {}", entry.record.id));
                }
                line
            }
        };
        Some(line)
    }
}
