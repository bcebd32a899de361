//! Parse command - extract raw fields from a single bill.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use fatura_core::parse_invoice;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let raw = parse_invoice(&data)?;
    let json = serde_json::to_string_pretty(&raw)?;

    match args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
