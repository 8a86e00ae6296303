use std::io;

use thiserror::Error;

/// Errors raised while compiling or loading a classification rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern '{pattern}' in class '{infclass}': {source}")]
    Pattern {
        infclass: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern '{pattern}' in class '{infclass}' has no stem capture group")]
    MissingStemCapture { infclass: String, pattern: String },

    #[error("unknown gradation type '{gradation}' in class '{infclass}'")]
    UnknownGradation { infclass: String, gradation: String },

    #[error("invalid compiled rule table: {0}")]
    Archive(String),

    #[error("invalid JSON rule table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rule table I/O Error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while reading the flag attribute resource.
#[derive(Debug, Error, PartialEq)]
pub enum FlagTableError {
    #[error("line {line}: cannot parse '{text}'")]
    Syntax { line: usize, text: String },

    #[error("line {line}: '{key}' outside of a section")]
    OutsideSection { line: usize, key: String },

    #[error("line {line}: invalid value '{value}' for '{key}'")]
    InvalidValue { line: usize, key: String, value: String },

    #[error("section [{section}] has no '{key}'")]
    MissingKey { section: String, key: &'static str },

    #[error("Flag table I/O Error: {0}")]
    Io(io::ErrorKind),
}

/// Errors raised while reading word records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed source record #{index}: {source}")]
    Json {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Source I/O Error: {0}")]
    Io(#[from] io::Error),
}
