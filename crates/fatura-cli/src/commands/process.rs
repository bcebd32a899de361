//! Process command - extract, derive metrics, and store one bill.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;
use tracing::info;

use fatura_core::{InvoiceProcessor, ProcessError};

use crate::store::JsonFileStore;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Invoice store file
    #[arg(short, long, default_value = "invoices.json")]
    store: PathBuf,

    /// Output file for the stored invoice (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let store = Arc::new(JsonFileStore::new(&args.store));
    let processor = InvoiceProcessor::new(store);

    let invoice = match processor.process(&data).await {
        Ok(invoice) => invoice,
        Err(ProcessError::Duplicate(key)) => {
            anyhow::bail!(
                "{} an invoice already exists for {}",
                style("duplicate:").red().bold(),
                key
            );
        }
        Err(err) => return Err(err.into()),
    };

    eprintln!(
        "{} invoice {} stored ({}, total R$ {:.2})",
        style("ok:").green().bold(),
        invoice.id,
        invoice.reference_month,
        invoice.total_amount
    );

    let json = serde_json::to_string_pretty(&invoice)?;
    match args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
