use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use lexgen_protocol::WordRecord;
use serde_json::de::IoRead;
use serde_json::StreamDeserializer;

use crate::error::SourceError;

/// Lazy reader over a stream of JSON word records (one object per headword,
/// separated by whitespace). Records are yielded in source order and the
/// stream cannot be restarted.
pub struct RecordReader<R: Read> {
    inner: StreamDeserializer<'static, IoRead<R>, WordRecord>,
    index: usize,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: serde_json::Deserializer::from_reader(reader).into_iter(),
            index: 0,
        }
    }
}

impl RecordReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<WordRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.index += 1;
        let index = self.index;
        Some(item.map_err(|source| SourceError::Json { index, source }))
    }
}
