use std::io::{self, Write};

use lexgen_protocol::{FlagSet, VocabularyPartition};

/// Where the entries of one record go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Main,
    /// Indices into the router's partitions, in configuration order.
    Partitions(Vec<usize>),
}

/// Owns the main lexicon stream and one stream per vocabulary partition.
pub struct OutputRouter<W: Write> {
    main: W,
    partitions: Vec<(VocabularyPartition, W)>,
}

impl<W: Write> OutputRouter<W> {
    pub fn new(main: W) -> Self {
        Self {
            main,
            partitions: Vec::new(),
        }
    }

    pub fn with_partition(mut self, partition: VocabularyPartition, stream: W) -> Self {
        self.partitions.push((partition, stream));
        self
    }

    /// Every partition whose group is present and carries its trigger flag
    /// claims the record; unclaimed records go to the main lexicon.
    pub fn route(&self, flags: &FlagSet) -> Route {
        let claimed: Vec<usize> = self
            .partitions
            .iter()
            .enumerate()
            .filter(|(_, (partition, _))| {
                let group = flags.group(partition.group);
                !group.is_empty() && group.iter().any(|f| f == partition.flag)
            })
            .map(|(idx, _)| idx)
            .collect();

        if claimed.is_empty() {
            Route::Main
        } else {
            Route::Partitions(claimed)
        }
    }

    pub fn write_entry(&mut self, flags: &FlagSet, line: &str) -> io::Result<()> {
        match self.route(flags) {
            Route::Main => writeln!(self.main, "{line}"),
            Route::Partitions(indices) => {
                for idx in indices {
                    writeln!(self.partitions[idx].1, "{line}")?;
                }
                Ok(())
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.main.flush()?;
        for (_, stream) in &mut self.partitions {
            stream.flush()?;
        }
        Ok(())
    }

    pub fn main(&self) -> &W {
        &self.main
    }

    /// Stream of the partition writing to `file_name`.
    pub fn partition(&self, file_name: &str) -> Option<&W> {
        self.partitions
            .iter()
            .find(|(p, _)| p.file_name == file_name)
            .map(|(_, stream)| stream)
    }
}
