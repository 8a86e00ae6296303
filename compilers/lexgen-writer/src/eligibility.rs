use lexgen_protocol::flags::{
    CONFUSING, FOREIGN_LOAN, GROUP_STYLE, GROUP_USAGE, IRREGULAR_CLASS, NOT_INCLUDED,
};
use lexgen_protocol::{GeneratorConfig, WordRecord};

/// Why a record was left out of the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotIncluded,
    Style(String),
    Usage,
    Frequency(u8),
    /// Frequency exactly at the limit and flagged as confusing.
    ConfusingAtLimit,
    NoInflectionClass,
    Irregular,
}

/// Decides whether `record` is included under `config` and, if it is,
/// returns its current inflection class code.
pub fn eligibility<'r>(record: &'r WordRecord, config: &GeneratorConfig) -> Result<&'r str, Rejection> {
    let flags = &record.flags;

    if flags.contains_flag(NOT_INCLUDED) {
        return Err(Rejection::NotIncluded);
    }

    if let Some(style) = flags
        .group(GROUP_STYLE)
        .iter()
        .find(|s| s.as_str() != FOREIGN_LOAN && !config.styles.contains(s.as_str()))
    {
        return Err(Rejection::Style(style.clone()));
    }

    let usage = flags.group(GROUP_USAGE);
    if !usage.is_empty() && !usage.iter().any(|u| config.extra_usage.contains(u.as_str())) {
        return Err(Rejection::Usage);
    }

    let frequency = record.frequency();
    if frequency > config.max_frequency {
        return Err(Rejection::Frequency(frequency));
    }
    if frequency == config.max_frequency && flags.contains_flag(CONFUSING) {
        return Err(Rejection::ConfusingAtLimit);
    }

    match record.current_infclass() {
        None => Err(Rejection::NoInflectionClass),
        Some(IRREGULAR_CLASS) => Err(Rejection::Irregular),
        Some(infclass) => Ok(infclass),
    }
}

pub fn is_eligible(record: &WordRecord, config: &GeneratorConfig) -> bool {
    eligibility(record, config).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word() -> WordRecord {
        WordRecord::new("w1")
            .with_classes(["noun"])
            .with_forms(["talo"])
            .with_infclass("talo")
            .with_frequency(3)
    }

    #[test]
    fn test_plain_word_is_eligible() {
        let config = GeneratorConfig::default();
        assert_eq!(eligibility(&word(), &config), Ok("talo"));
        assert!(is_eligible(&word(), &config));
        // repeated calls agree
        assert_eq!(is_eligible(&word(), &config), is_eligible(&word(), &config));
    }

    #[test]
    fn test_excluded_flag_in_any_group() {
        let record = word().with_flag("flags", "not_voikko");
        assert_eq!(eligibility(&record, &GeneratorConfig::default()), Err(Rejection::NotIncluded));
    }

    #[test]
    fn test_style_filter() {
        let config = GeneratorConfig::default();

        assert!(is_eligible(&word().with_flag("style", "old"), &config));
        assert!(is_eligible(&word().with_flag("style", "foreignloan"), &config));
        assert_eq!(
            eligibility(&word().with_flag("style", "dialect"), &config),
            Err(Rejection::Style("dialect".to_string()))
        );
    }

    #[test]
    fn test_usage_filter() {
        let mut config = GeneratorConfig::default();
        let record = word().with_flag("usage", "medicine");
        assert_eq!(eligibility(&record, &config), Err(Rejection::Usage));

        config.extra_usage.insert("medicine".to_string());
        assert!(is_eligible(&record, &config));
        assert!(is_eligible(&record.with_flag("usage", "science"), &config));
    }

    #[test]
    fn test_frequency_limits() {
        let config = GeneratorConfig { max_frequency: 5, ..GeneratorConfig::default() };

        assert!(is_eligible(&word().with_frequency(5), &config));
        assert_eq!(eligibility(&word().with_frequency(6), &config), Err(Rejection::Frequency(6)));
        assert_eq!(
            eligibility(&word().with_frequency(5).with_flag("flags", "confusing"), &config),
            Err(Rejection::ConfusingAtLimit)
        );
        assert!(is_eligible(&word().with_frequency(4).with_flag("flags", "confusing"), &config));
    }

    #[test]
    fn test_missing_frequency_uses_default_class() {
        let config = GeneratorConfig { max_frequency: 6, ..GeneratorConfig::default() };
        let mut record = word();
        record.frequency = None;
        assert_eq!(eligibility(&record, &config), Err(Rejection::Frequency(7)));
    }

    #[test]
    fn test_inflection_class_requirements() {
        let config = GeneratorConfig::default();

        let historical = WordRecord::new("w2").with_forms(["talo"]).with_historical_infclass("talo");
        assert_eq!(eligibility(&historical, &config), Err(Rejection::NoInflectionClass));

        let irregular = WordRecord::new("w3").with_forms(["olla"]).with_infclass("poikkeava");
        assert_eq!(eligibility(&irregular, &config), Err(Rejection::Irregular));
    }
}
