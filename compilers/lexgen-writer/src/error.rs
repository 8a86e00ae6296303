use std::io;

use lexgen_parser::{SourceError, Unresolved};
use thiserror::Error;

/// Conditions that abort a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Unresolved(#[from] Unresolved),

    #[error("suspicious alternative spelling: {form}")]
    SuspiciousForm { form: String },

    #[error("record {id} has no {group} group")]
    MissingGroup { id: String, group: &'static str },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Lexicon I/O Error: {0}")]
    Io(#[from] io::Error),
}
