use clap::Parser;
use invoice_payments::application::engine::InvoiceService;
use invoice_payments::domain::ports::InvoiceStoreBox;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;
#[cfg(feature = "storage-rocksdb")]
use invoice_payments::infrastructure::rocksdb::RocksDBInvoiceStore;
use invoice_payments::interfaces::csv::outcome_writer::OutcomeWriter;
use invoice_payments::interfaces::csv::payment_reader::PaymentReader;
use invoice_payments::interfaces::json::invoice_io::{read_invoices, write_invoices};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (columns: reference, amount)
    input: PathBuf,

    /// JSON file with the invoices to seed the store with
    #[arg(long)]
    invoices: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write the final state of every invoice as JSON to this path
    #[arg(long)]
    final_state: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn open_store(db_path: Option<PathBuf>) -> Result<InvoiceStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = RocksDBInvoiceStore::open(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to open database at {}", path.display()))?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryInvoiceStore::new()))
        }
        None => Ok(Box::new(InMemoryInvoiceStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let service = InvoiceService::new(open_store(cli.db_path)?);

    if let Some(path) = cli.invoices {
        let file = File::open(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to open invoices file {}", path.display()))?;
        for invoice in read_invoices(file).into_diagnostic()? {
            service.add_invoice(invoice).await.into_diagnostic()?;
        }
    }

    let file = File::open(&cli.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to open payments file {}", cli.input.display()))?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    for payment in reader.payments() {
        let payment = match payment {
            Ok(payment) => payment,
            Err(e) => {
                tracing::warn!("Error reading payment: {}", e);
                continue;
            }
        };

        let reference = payment.reference.clone();
        let amount = payment.amount;
        match service.process_payment(payment).await {
            Ok(outcome) => writer
                .write_outcome(&reference, amount, outcome)
                .into_diagnostic()?,
            Err(e) => tracing::error!(%reference, "Error processing payment: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    if let Some(path) = cli.final_state {
        let invoices = service.into_invoices().await.into_diagnostic()?;
        let file = File::create(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to create final state file {}", path.display()))?;
        write_invoices(file, &invoices)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write final state to {}", path.display()))?;
    }

    Ok(())
}
