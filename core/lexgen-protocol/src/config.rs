use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Frequency classes above this are dropped unless configured otherwise.
pub const DEFAULT_MAX_FREQUENCY: u8 = 9;

/// Styles accepted when no `style` option is given.
pub const DEFAULT_STYLES: [&str; 2] = ["old", "international"];

/// Flag groups and flags with fixed meaning for the generator.
pub mod flags {
    pub const GROUP_STYLE: &str = "style";
    pub const GROUP_USAGE: &str = "usage";

    /// Style flag never checked against the accepted styles.
    pub const FOREIGN_LOAN: &str = "foreignloan";
    pub const NOT_INCLUDED: &str = "not_voikko";
    pub const CONFUSING: &str = "confusing";

    /// Inflection class of words that are too irregular for automatic classification.
    pub const IRREGULAR_CLASS: &str = "poikkeava";
}

/// Output destination for entries whose flags match `(group, flag)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyPartition {
    pub group: &'static str,
    pub flag: &'static str,
    pub file_name: &'static str,
}

impl VocabularyPartition {
    pub const fn new(group: &'static str, flag: &'static str, file_name: &'static str) -> Self {
        Self { group, flag, file_name }
    }
}

const MALAGA_PARTITIONS: [VocabularyPartition; 5] = [
    VocabularyPartition::new("usage", "it", "atk.lex"),
    VocabularyPartition::new("usage", "medicine", "laaketiede.lex"),
    VocabularyPartition::new("usage", "science", "matluonnontiede.lex"),
    VocabularyPartition::new("usage", "education", "kasvatustiede.lex"),
    VocabularyPartition::new("style", "foreign", "vieraskieliset.lex"),
];

const PROVENANCE: [&str; 7] = [
    "This is automatically generated intermediate lexicon file for",
    "{engine}. The original source data is",
    "distributed under the GNU General Public License, version 2 or",
    "later, as published by the Free Software Foundation. You should",
    "have received the original data, tools and instructions to",
    "generate this file (or instructions to obtain them) wherever",
    "you got this file from.",
];

/// Downstream morphology engine the lexicon is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Bracketed-feature notation.
    #[default]
    Malaga,
    /// Two-column stem/continuation notation.
    Lexc,
}

impl Target {
    pub fn main_file_name(self) -> &'static str {
        match self {
            Target::Malaga => "joukahainen.lex",
            Target::Lexc => "joukahainen.lexc",
        }
    }

    pub fn partitions(self) -> &'static [VocabularyPartition] {
        match self {
            Target::Malaga => &MALAGA_PARTITIONS,
            Target::Lexc => &[],
        }
    }

    fn comment_prefix(self) -> &'static str {
        match self {
            Target::Malaga => "#",
            Target::Lexc => "!",
        }
    }

    fn engine_name(self) -> &'static str {
        match self {
            Target::Malaga => "Suomi-malaga Voikko edition",
            Target::Lexc => "VVFST morphology",
        }
    }

    /// Provenance comment block written at the top of every output file.
    pub fn header(self) -> String {
        let prefix = self.comment_prefix();
        let mut header = String::new();
        for line in PROVENANCE {
            header.push_str(prefix);
            header.push(' ');
            header.push_str(&line.replace("{engine}", self.engine_name()));
            header.push('\n');
        }
        header.push('\n');
        if self == Target::Lexc {
            header.push_str("LEXICON Nimisana\n");
        }
        header
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Malaga => write!(f, "malaga"),
            Target::Lexc => write!(f, "lexc"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown target '{0}', expected 'malaga' or 'lexc'")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "malaga" => Ok(Target::Malaga),
            "lexc" | "vvfst" => Ok(Target::Lexc),
            other => Err(UnknownTarget(other.to_string())),
        }
    }
}

/// Options controlling which words are included and how entries are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Inclusive upper bound on the frequency class.
    pub max_frequency: u8,
    /// Usage domains accepted in addition to words without any usage flag.
    pub extra_usage: BTreeSet<String>,
    pub styles: BTreeSet<String>,
    /// Annotate entries with the originating record id.
    pub source_ids: bool,
    pub target: Target,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_frequency: DEFAULT_MAX_FREQUENCY,
            extra_usage: BTreeSet::new(),
            styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
            source_ids: false,
            target: Target::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_frequency, 9);
        assert!(config.styles.contains("old"));
        assert!(config.styles.contains("international"));
        assert!(config.extra_usage.is_empty());
        assert_eq!(config.target, Target::Malaga);
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("lexc".parse::<Target>(), Ok(Target::Lexc));
        assert_eq!("malaga".parse::<Target>(), Ok(Target::Malaga));
        assert!("hfst".parse::<Target>().is_err());
    }

    #[test]
    fn test_headers() {
        let malaga = Target::Malaga.header();
        assert!(malaga.starts_with("# This is automatically generated"));
        assert!(malaga.contains("Suomi-malaga Voikko edition"));

        let lexc = Target::Lexc.header();
        assert!(lexc.starts_with("! This is"));
        assert!(lexc.ends_with("\nLEXICON Nimisana\n"));
        assert!(Target::Lexc.partitions().is_empty());
    }
}
