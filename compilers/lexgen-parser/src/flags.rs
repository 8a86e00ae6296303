use std::collections::HashMap;
use std::fs;
use std::path::Path;

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, space0},
    combinator::{all_consuming, map, rest},
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::FlagTableError;

/// Output-affecting attributes of one `(group, flag)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagAttribute {
    pub joukahainen: Option<u32>,
    pub group: String,
    pub flag: String,
    /// Token written to the Malaga `tiedot` list; `None` if the flag does not affect output.
    pub malaga_flag: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Line<'a> {
    Section(&'a str),
    Entry(&'a str, &'a str),
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn section(input: &str) -> IResult<&str, &str> {
    delimited(char('['), take_till(|c: char| c == ']'), char(']'))(input)
}

fn entry(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_while1(is_key_char), delimited(space0, char('='), space0), rest)(input)
}

fn line(input: &str) -> IResult<&str, Line<'_>> {
    all_consuming(alt((
        map(section, Line::Section),
        map(entry, |(key, value)| Line::Entry(key, value.trim())),
    )))(input)
}

/// Lookup table from `(group, flag)` to its attributes, loaded from the
/// line-oriented `flags.txt` resource.
#[derive(Debug, Clone, Default)]
pub struct FlagAttributeTable {
    attributes: HashMap<(String, String), FlagAttribute>,
}

impl FlagAttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, FlagTableError> {
        let text = fs::read_to_string(path).map_err(|e| FlagTableError::Io(e.kind()))?;
        Self::parse(&text)
    }

    /// Parses `[section]` blocks of `key = value` lines. Blank lines and lines
    /// starting with `#` are ignored; unknown keys are skipped.
    pub fn parse(text: &str) -> Result<Self, FlagTableError> {
        let mut table = Self::new();
        let mut current: Option<(String, FlagAttribute)> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (_, parsed) = line(trimmed).map_err(|_| FlagTableError::Syntax {
                line: line_no,
                text: trimmed.to_string(),
            })?;

            match parsed {
                Line::Section(name) => {
                    if let Some((name, attribute)) = current.take() {
                        table.finish_section(name, attribute)?;
                    }
                    current = Some((name.to_string(), FlagAttribute::default()));
                }
                Line::Entry(key, value) => {
                    let Some((_, attribute)) = current.as_mut() else {
                        return Err(FlagTableError::OutsideSection {
                            line: line_no,
                            key: key.to_string(),
                        });
                    };
                    match key {
                        "joukahainen" => {
                            let id = value.parse().map_err(|_| FlagTableError::InvalidValue {
                                line: line_no,
                                key: key.to_string(),
                                value: value.to_string(),
                            })?;
                            attribute.joukahainen = Some(id);
                        }
                        "xmlgroup" => attribute.group = value.to_string(),
                        "xmlflag" => attribute.flag = value.to_string(),
                        "malagaflag" if !value.is_empty() => attribute.malaga_flag = Some(value.to_string()),
                        "description" => attribute.description = Some(value.to_string()),
                        _ => {}
                    }
                }
            }
        }

        if let Some((name, attribute)) = current {
            table.finish_section(name, attribute)?;
        }
        Ok(table)
    }

    fn finish_section(&mut self, section: String, attribute: FlagAttribute) -> Result<(), FlagTableError> {
        if attribute.group.is_empty() {
            return Err(FlagTableError::MissingKey { section, key: "xmlgroup" });
        }
        if attribute.flag.is_empty() {
            return Err(FlagTableError::MissingKey { section, key: "xmlflag" });
        }
        self.insert(attribute);
        Ok(())
    }

    pub fn insert(&mut self, attribute: FlagAttribute) {
        self.attributes
            .insert((attribute.group.clone(), attribute.flag.clone()), attribute);
    }

    pub fn get(&self, group: &str, flag: &str) -> Option<&FlagAttribute> {
        self.attributes.get(&(group.to_string(), flag.to_string()))
    }

    /// Output token of a flag, if it has one.
    pub fn token(&self, group: &str, flag: &str) -> Option<&str> {
        self.get(group, flag).and_then(|a| a.malaga_flag.as_deref())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
# Flag attributes
[not_voikko]
joukahainen = 12
xmlgroup = flags
xmlflag = not_voikko
malagaflag =
description = Not included in Voikko

[ei_ys]
xmlgroup=flags
xmlflag=ei_ys
malagaflag=ei_ys
";

    #[test]
    fn test_line_parser() {
        assert_eq!(line("[foo]").unwrap().1, Line::Section("foo"));
        assert_eq!(line("key = some value").unwrap().1, Line::Entry("key", "some value"));
        assert_eq!(line("key=").unwrap().1, Line::Entry("key", ""));
        assert!(line("no equals sign").is_err());
        assert!(line("[unterminated").is_err());
    }

    #[test]
    fn test_parse_sample() {
        let table = FlagAttributeTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);

        let not_voikko = table.get("flags", "not_voikko").unwrap();
        assert_eq!(not_voikko.joukahainen, Some(12));
        assert_eq!(not_voikko.malaga_flag, None);
        assert_eq!(not_voikko.description.as_deref(), Some("Not included in Voikko"));

        assert_eq!(table.token("flags", "ei_ys"), Some("ei_ys"));
        assert_eq!(table.token("flags", "not_voikko"), None);
        assert_eq!(table.token("usage", "ei_ys"), None);
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let err = FlagAttributeTable::parse("[a]\nxmlgroup = x\nbroken line\n").unwrap_err();
        assert_eq!(
            err,
            FlagTableError::Syntax { line: 3, text: "broken line".to_string() }
        );
    }

    #[test]
    fn test_entry_outside_section() {
        let err = FlagAttributeTable::parse("xmlgroup = flags\n").unwrap_err();
        assert!(matches!(err, FlagTableError::OutsideSection { line: 1, .. }));
    }

    #[test]
    fn test_missing_flag_key() {
        let err = FlagAttributeTable::parse("[a]\nxmlgroup = flags\n").unwrap_err();
        assert_eq!(err, FlagTableError::MissingKey { section: "a".to_string(), key: "xmlflag" });
    }

    #[test]
    fn test_invalid_number() {
        let err = FlagAttributeTable::parse("[a]\njoukahainen = x\n").unwrap_err();
        assert!(matches!(err, FlagTableError::InvalidValue { line: 2, .. }));
    }
}
