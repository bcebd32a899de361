//! List command - show stored invoices.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;

use fatura_core::InvoiceStore;

use crate::store::JsonFileStore;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Invoice store file
    #[arg(short, long, default_value = "invoices.json")]
    store: PathBuf,

    /// Filter by client number
    #[arg(short, long)]
    client: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ListArgs) -> anyhow::Result<()> {
    let store = Arc::new(JsonFileStore::new(&args.store));
    let invoices = store.list(args.client.as_deref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&invoices)?);
        return Ok(());
    }

    if invoices.is_empty() {
        eprintln!("no invoices stored in {}", args.store.display());
        return Ok(());
    }

    println!(
        "{}",
        style(format!(
            "{:>4}  {:<12} {:<12} {:<9} {:>12} {:>12}",
            "id", "client", "installation", "month", "kWh", "total R$"
        ))
        .bold()
    );
    for invoice in invoices {
        println!(
            "{:>4}  {:<12} {:<12} {:<9} {:>12.0} {:>12.2}",
            invoice.id,
            invoice.client_number,
            invoice.installation_number,
            invoice.reference_month,
            invoice.total_energy_consumption,
            invoice.total_amount
        );
    }

    Ok(())
}
