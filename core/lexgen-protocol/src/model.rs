use std::collections::BTreeMap;

use crate::morphology::VowelType;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Frequency class assumed when a record has none.
pub const DEFAULT_FREQUENCY: u8 = 7;

/// Flag groups of a record, keyed by group name.
///
/// Built once per record so that eligibility, diacritics and partition routing
/// can ask `(group, flag)` questions without walking the source tree again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>"))]
pub struct FlagSet {
    groups: BTreeMap<String, Vec<String>>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `flag` to `group`, ignoring duplicates.
    pub fn insert(&mut self, group: impl Into<String>, flag: impl Into<String>) {
        let flags = self.groups.entry(group.into()).or_default();
        let flag = flag.into();
        if !flags.contains(&flag) {
            flags.push(flag);
        }
    }

    pub fn contains(&self, group: &str, flag: &str) -> bool {
        self.group(group).iter().any(|f| f == flag)
    }

    /// True if any group carries `flag`.
    pub fn contains_flag(&self, flag: &str) -> bool {
        self.groups.values().flatten().any(|f| f == flag)
    }

    /// Flags of one group in source order; empty if the group is absent.
    pub fn group(&self, group: &str) -> &[String] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All `(group, flag)` pairs. Groups come in name order, not in the
    /// order of the source record; flags keep their order within a group.
    /// `tiedot` tokens and lexc diacritics are written in this order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .iter()
            .flat_map(|(group, flags)| flags.iter().map(move |f| (group.as_str(), f.as_str())))
    }
}

impl From<BTreeMap<String, Vec<String>>> for FlagSet {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut set = FlagSet::new();
        for (group, flags) in raw {
            set.groups.entry(group.clone()).or_default();
            for flag in flags {
                set.insert(group.clone(), flag);
            }
        }
        set
    }
}

impl From<FlagSet> for BTreeMap<String, Vec<String>> {
    fn from(set: FlagSet) -> Self {
        set.groups
    }
}

/// One inflection-class declaration, e.g. `valo-A`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct InflectionDecl {
    pub code: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub historical: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Inflection {
    #[cfg_attr(feature = "serde", serde(default, rename = "infclass"))]
    pub declarations: Vec<InflectionDecl>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vtype: Option<String>,
}

impl Inflection {
    pub fn forced_vowel_type(&self) -> Option<VowelType> {
        self.vtype.as_deref().map(VowelType::from_forced)
    }
}

/// One dictionary headword as produced by the source reader.
///
/// `classes`, `inflection` and `forms` are required groups, but their absence
/// is only an error for records that survive the eligibility filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordRecord {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub classes: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inflection: Option<Inflection>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub forms: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, rename = "fclass"))]
    pub frequency: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default, rename = "groups"))]
    pub flags: FlagSet,
}

impl WordRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn frequency(&self) -> u8 {
        self.frequency.unwrap_or(DEFAULT_FREQUENCY)
    }

    /// Every declaration, historical ones included.
    pub fn declarations(&self) -> &[InflectionDecl] {
        self.inflection
            .as_ref()
            .map(|i| i.declarations.as_slice())
            .unwrap_or(&[])
    }

    /// The first declaration not tagged historical.
    pub fn current_infclass(&self) -> Option<&str> {
        self.declarations()
            .iter()
            .find(|d| !d.historical)
            .map(|d| d.code.as_str())
    }

    pub fn forced_vowel_type(&self) -> Option<VowelType> {
        self.inflection.as_ref().and_then(Inflection::forced_vowel_type)
    }

    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_forms<S: Into<String>>(mut self, forms: impl IntoIterator<Item = S>) -> Self {
        self.forms = Some(forms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_infclass(self, code: impl Into<String>) -> Self {
        self.with_declaration(code, false)
    }

    pub fn with_historical_infclass(self, code: impl Into<String>) -> Self {
        self.with_declaration(code, true)
    }

    fn with_declaration(mut self, code: impl Into<String>, historical: bool) -> Self {
        self.inflection
            .get_or_insert_with(Inflection::default)
            .declarations
            .push(InflectionDecl { code: code.into(), historical });
        self
    }

    pub fn with_vtype(mut self, vtype: impl Into<String>) -> Self {
        self.inflection.get_or_insert_with(Inflection::default).vtype = Some(vtype.into());
        self
    }

    pub fn with_frequency(mut self, frequency: u8) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_flag(mut self, group: impl Into<String>, flag: impl Into<String>) -> Self {
        self.flags.insert(group, flag);
        self
    }
}
