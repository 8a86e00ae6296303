use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Word-class tags as they appear in the source dictionary.
pub mod tags {
    pub const NOUN: &str = "noun";
    pub const ADJECTIVE: &str = "adjective";
    pub const VERB: &str = "verb";
    pub const PNOUN_PLACE: &str = "pnoun_place";
    pub const PNOUN_FIRSTNAME: &str = "pnoun_firstname";
    pub const PNOUN_LASTNAME: &str = "pnoun_lastname";
    pub const PNOUN_MISC: &str = "pnoun_misc";

    pub const PROPER_NOUNS: [&str; 4] = [PNOUN_PLACE, PNOUN_FIRSTNAME, PNOUN_LASTNAME, PNOUN_MISC];
}

/// Output word class of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    PlaceName,
    FirstName,
    LastName,
    ProperName,
    Verb,
    NounAdjective,
    Adjective,
    Noun,
}

impl WordClass {
    /// Resolves the output class from the record's tags. Proper-noun tags win
    /// over common classes, and `adjective` together with `noun` is its own class.
    pub fn from_tags<S: AsRef<str>>(word_classes: &[S]) -> Option<Self> {
        let has = |tag: &str| word_classes.iter().any(|t| t.as_ref() == tag);

        if has(tags::PNOUN_PLACE) {
            Some(WordClass::PlaceName)
        } else if has(tags::PNOUN_FIRSTNAME) {
            Some(WordClass::FirstName)
        } else if has(tags::PNOUN_LASTNAME) {
            Some(WordClass::LastName)
        } else if has(tags::PNOUN_MISC) {
            Some(WordClass::ProperName)
        } else if has(tags::VERB) {
            Some(WordClass::Verb)
        } else if has(tags::ADJECTIVE) && has(tags::NOUN) {
            Some(WordClass::NounAdjective)
        } else if has(tags::ADJECTIVE) {
            Some(WordClass::Adjective)
        } else if has(tags::NOUN) {
            Some(WordClass::Noun)
        } else {
            None
        }
    }

    pub fn is_proper_noun(self) -> bool {
        matches!(
            self,
            WordClass::PlaceName | WordClass::FirstName | WordClass::LastName | WordClass::ProperName
        )
    }
}

/// Structural class used when matching classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum RuleWordClass {
    Adjective = 0,
    Noun = 1,
    Verb = 2,
}

impl RuleWordClass {
    /// Adjective takes precedence, proper nouns count as nouns.
    pub fn from_tags<S: AsRef<str>>(word_classes: &[S]) -> Option<Self> {
        let has = |tag: &str| word_classes.iter().any(|t| t.as_ref() == tag);

        if has(tags::ADJECTIVE) {
            Some(RuleWordClass::Adjective)
        } else if has(tags::NOUN) || tags::PROPER_NOUNS.iter().any(|&t| has(t)) {
            Some(RuleWordClass::Noun)
        } else if has(tags::VERB) {
            Some(RuleWordClass::Verb)
        } else {
            None
        }
    }
}

bitflags! {
    /// Set of rule word classes a classification rule applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct WordClassSet: u8 {
        const ADJECTIVE = 1;
        const NOUN = 2;
        const VERB = 4;
    }
}

impl From<RuleWordClass> for WordClassSet {
    fn from(class: RuleWordClass) -> Self {
        match class {
            RuleWordClass::Adjective => WordClassSet::ADJECTIVE,
            RuleWordClass::Noun => WordClassSet::NOUN,
            RuleWordClass::Verb => WordClassSet::VERB,
        }
    }
}

impl FromIterator<RuleWordClass> for WordClassSet {
    fn from_iter<I: IntoIterator<Item = RuleWordClass>>(iter: I) -> Self {
        iter.into_iter()
            .fold(WordClassSet::empty(), |set, class| set | WordClassSet::from(class))
    }
}

/// Vowel harmony type of an inflected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelType {
    Front,
    Back,
    Both,
}

impl VowelType {
    /// Interprets a forced `vtype` value from the source dictionary.
    pub fn from_forced(value: &str) -> Self {
        match value {
            "a" => VowelType::Back,
            "ä" => VowelType::Front,
            _ => VowelType::Both,
        }
    }

    /// Marker used by both target notations.
    pub fn marker(self) -> &'static str {
        match self {
            VowelType::Front => "ä",
            VowelType::Back => "a",
            VowelType::Both => "aä",
        }
    }
}
