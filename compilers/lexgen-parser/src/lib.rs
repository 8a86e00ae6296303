//! Loaders for the generator's inputs (word records, flag attributes and the
//! classification rule table) and the inflection classifier that runs over
//! the compiled table.

pub mod classifier;
pub mod error;
pub mod flags;
pub mod rules;
pub mod source;

pub use classifier::{classify, Classification, Unresolved, UnresolvedReason};
pub use error::{FlagTableError, RuleError, SourceError};
pub use flags::{FlagAttribute, FlagAttributeTable};
pub use rules::{ClassificationRule, RuleGroup, RuleTable};
pub use source::RecordReader;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_table() -> RuleTable {
        RuleTable::from_json(
            r#"{
                "version": 1,
                "groups": [
                    {"infclass": "valo", "rules": [
                        {"gradation": "av1", "pattern": "(.*[kpt])([aeiouyäö])", "continuation": "valo_av1"},
                        {"pattern": "(.*)([ou])", "continuation": "valo", "word_classes": ["noun", "adjective"]}
                    ]},
                    {"infclass": "talo", "rules": [
                        {"pattern": "(.*)", "continuation": "talo"}
                    ]}
                ]
            }"#,
        )
        .expect("sample table compiles")
    }

    #[test]
    fn test_json_records_classify_end_to_end() {
        let table = sample_table();
        let input = r#"{"id": "w1", "classes": ["noun"], "forms": ["Talo"], "inflection": {"infclass": [{"code": "valo"}]}}"#;
        let record = RecordReader::new(input.as_bytes()).next().unwrap().unwrap();

        let classes = record.classes.as_deref().unwrap();
        let form = &record.forms.as_ref().unwrap()[0];
        let result = table.classify(form, record.current_infclass().unwrap(), classes).unwrap();

        assert_eq!(result, Classification { stem: "Tal".to_string(), continuation: "valo".to_string() });
    }

    proptest! {
        #[test]
        fn test_classification_is_deterministic_and_stem_is_substring(
            form in "[a-zäö]{1,6}(=[a-zäö]{1,6})?o",
        ) {
            let table = sample_table();
            let first = table.classify(&form, "talo", &["noun"]);
            let second = table.classify(&form, "talo", &["noun"]);
            prop_assert_eq!(&first, &second);

            let stripped = lexgen_morph::strip_markers(&form);
            let valo = table.classify(&form, "valo", &["noun"]).unwrap();
            prop_assert!(stripped.contains(&valo.stem));
            prop_assert!(stripped.contains(&first.unwrap().stem));
        }
    }
}
