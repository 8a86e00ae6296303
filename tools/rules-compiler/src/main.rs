use clap::Parser;
use std::fs;
use std::path::PathBuf;
use anyhow::Context;
use lexgen_parser::RuleTable;
use lexgen_protocol::RuleTableSource;
use rkyv::ser::{serializers::AllocSerializer, Serializer};

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON inflection rule table to rkyv binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

/// Validates `source` the way the generator will load it, then serializes it.
fn compile(source: &RuleTableSource) -> anyhow::Result<Vec<u8>> {
    let table = RuleTable::compile(source)?;
    println!("⚙️  Compiling rule table version {} with {} groups and {} rules...",
        source.version, source.groups.len(), table.rule_count());

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(source)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {e:?}"))?;
    Ok(serializer.into_serializer().into_inner().to_vec())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("📖 Reading JSON from {:?}...", cli.input);
    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let source: RuleTableSource = serde_json::from_str(&input_data)?;

    let bytes = compile(&source)?;
    fs::write(&cli.output, bytes)?;

    println!("✅ Success! Binary written to {:?}", cli.output);
    Ok(())
}
