use std::io::Write;

use lexgen_morph::vowel_type;
use lexgen_parser::{FlagAttributeTable, RuleTable, SourceError};
use lexgen_protocol::{GeneratorConfig, WordClass, WordRecord};
use tracing::{debug, error, info, trace};

use crate::consistency::check_alternative_forms;
use crate::eligibility::{eligibility, Rejection};
use crate::entry::{EntryFormatter, EntryInput};
use crate::error::GenerateError;
use crate::router::OutputRouter;
use crate::structure::annotate;

/// What happened to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Rejected(Rejection),
    /// Eligible, but its word classes have no lexicon category.
    NoWordClass,
    Written { entries: usize, skipped_forms: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub rejected: usize,
    pub entries: usize,
    pub skipped_forms: usize,
}

/// Single pass over the word records, writing each eligible form through
/// the router.
pub struct Generator<'a, W: Write> {
    config: &'a GeneratorConfig,
    rules: &'a RuleTable,
    formatter: EntryFormatter<'a>,
    router: OutputRouter<W>,
    summary: RunSummary,
}

impl<'a, W: Write> Generator<'a, W> {
    pub fn new(
        config: &'a GeneratorConfig,
        rules: &'a RuleTable,
        flag_attributes: &'a FlagAttributeTable,
        router: OutputRouter<W>,
    ) -> Self {
        Self {
            config,
            rules,
            formatter: EntryFormatter::new(config.target, flag_attributes, config.source_ids),
            router,
            summary: RunSummary::default(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn router(&self) -> &OutputRouter<W> {
        &self.router
    }

    pub fn process(&mut self, record: &WordRecord) -> Result<RecordOutcome, GenerateError> {
        self.summary.records += 1;

        let infclass = match eligibility(record, self.config) {
            Ok(infclass) => infclass,
            Err(rejection) => {
                trace!(id = %record.id, ?rejection, "record rejected");
                self.summary.rejected += 1;
                return Ok(RecordOutcome::Rejected(rejection));
            }
        };

        let classes = record
            .classes
            .as_deref()
            .ok_or_else(|| missing(record, "classes"))?;
        let forms = record.forms.as_deref().ok_or_else(|| missing(record, "forms"))?;

        let Some(word_class) = WordClass::from_tags(classes) else {
            debug!(id = %record.id, ?classes, "no lexicon word class");
            return Ok(RecordOutcome::NoWordClass);
        };

        let features = self.formatter.feature_markers(&record.flags);
        let forced_vowel_type = record.forced_vowel_type();
        let mut entries = 0;
        let mut skipped_forms = 0;

        for form in forms {
            let classification = match self.rules.classify(form, infclass, classes) {
                Ok(classification) => classification,
                Err(unresolved) => {
                    error!(id = %record.id, "{unresolved}");
                    self.router
                        .write_entry(&record.flags, &format!("ERROR: {unresolved}"))?;
                    return Err(unresolved.into());
                }
            };

            let annotation = annotate(form, word_class, self.config.target);
            let entry = EntryInput {
                record,
                form,
                word_class,
                classification: &classification,
                annotation: &annotation,
                features: &features,
                vowel_type: forced_vowel_type.unwrap_or_else(|| vowel_type(form)),
            };

            match self.formatter.format(&entry) {
                Some(line) => {
                    self.router.write_entry(&record.flags, &line)?;
                    entries += 1;
                }
                None => {
                    debug!(form = %form, continuation = %classification.continuation, "continuation not wired for target");
                    skipped_forms += 1;
                }
            }
        }

        check_alternative_forms(forms).map_err(|form| GenerateError::SuspiciousForm { form })?;

        self.summary.entries += entries;
        self.summary.skipped_forms += skipped_forms;
        Ok(RecordOutcome::Written {
            entries,
            skipped_forms,
        })
    }

    /// Processes `records` in order and stops at the first fatal error,
    /// flushing whatever was written so far.
    pub fn run<I>(&mut self, records: I) -> Result<RunSummary, GenerateError>
    where
        I: IntoIterator<Item = Result<WordRecord, SourceError>>,
    {
        for record in records {
            let result = record
                .map_err(GenerateError::from)
                .and_then(|record| self.process(&record));
            if let Err(err) = result {
                self.router.flush()?;
                return Err(err);
            }
        }

        info!(
            records = self.summary.records,
            rejected = self.summary.rejected,
            entries = self.summary.entries,
            skipped_forms = self.summary.skipped_forms,
            "lexicon generated"
        );
        Ok(self.summary)
    }

    pub fn finish(mut self) -> Result<(RunSummary, OutputRouter<W>), GenerateError> {
        self.router.flush()?;
        Ok((self.summary, self.router))
    }
}

fn missing(record: &WordRecord, group: &'static str) -> GenerateError {
    GenerateError::MissingGroup {
        id: record.id.clone(),
        group,
    }
}

