use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use lexgen_parser::{FlagAttributeTable, RecordReader, RuleTable};
use lexgen_protocol::{GeneratorConfig, Target};
use lexgen_writer::{Generator, OutputRouter, RunSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates morphology lexicons from a word record dictionary")]
struct Cli {
    /// Word records as a stream of JSON objects
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Inflection class rule table (.json or compiled rkyv)
    #[arg(short, long, value_name = "FILE")]
    rules: PathBuf,

    /// Flag attribute table
    #[arg(short, long, value_name = "FILE")]
    flags: PathBuf,

    /// Directory the lexicon files are written to
    #[arg(short, long, value_name = "DIR")]
    destdir: PathBuf,

    #[arg(short, long, default_value_t = Target::Malaga)]
    target: Target,

    /// Largest frequency class still included
    #[arg(long, value_name = "N")]
    min_frequency: Option<u8>,

    /// Usage domains to include, comma separated
    #[arg(long, value_delimiter = ',')]
    extra_usage: Vec<String>,

    /// Accepted styles, comma separated
    #[arg(long, value_delimiter = ',')]
    style: Option<Vec<String>>,

    /// Annotate entries with the source record id
    #[arg(long, visible_alias = "debug")]
    sourceid: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig {
            target: self.target,
            source_ids: self.sourceid,
            extra_usage: self.extra_usage.iter().cloned().collect(),
            ..GeneratorConfig::default()
        };
        if let Some(max_frequency) = self.min_frequency {
            config.max_frequency = max_frequency;
        }
        if let Some(styles) = &self.style {
            config.styles = styles.iter().cloned().collect();
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn create_lexicon_file(destdir: &Path, file_name: &str, target: Target) -> anyhow::Result<BufWriter<File>> {
    let path = destdir.join(file_name);
    let file = File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(target.header().as_bytes())?;
    Ok(writer)
}

fn open_router(destdir: &Path, target: Target) -> anyhow::Result<OutputRouter<BufWriter<File>>> {
    fs::create_dir_all(destdir).with_context(|| format!("cannot create {}", destdir.display()))?;

    let mut router = OutputRouter::new(create_lexicon_file(destdir, target.main_file_name(), target)?);
    for partition in target.partitions() {
        router = router.with_partition(*partition, create_lexicon_file(destdir, partition.file_name, target)?);
    }
    Ok(router)
}

fn generate(cli: &Cli) -> anyhow::Result<RunSummary> {
    let config = cli.config();

    let rules = RuleTable::load(&cli.rules)
        .with_context(|| format!("cannot load rule table {}", cli.rules.display()))?;
    let flag_attributes = FlagAttributeTable::load(&cli.flags)
        .with_context(|| format!("cannot load flag attributes {}", cli.flags.display()))?;
    info!(rules = rules.rule_count(), flags = flag_attributes.len(), target = %config.target, "tables loaded");

    let records = RecordReader::open(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?;
    let router = open_router(&cli.destdir, config.target)?;

    let mut generator = Generator::new(&config, &rules, &flag_attributes, router);
    generator.run(records)?;
    let (summary, _) = generator.finish()?;
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let summary = generate(&cli)?;
    info!(
        records = summary.records,
        entries = summary.entries,
        "lexicon written to {}",
        cli.destdir.display()
    );
    Ok(())
}
