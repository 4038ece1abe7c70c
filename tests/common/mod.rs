#![allow(dead_code)]

use invoice_payments::domain::invoice::Invoice;
use invoice_payments::interfaces::json::invoice_io::write_invoices;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a payments CSV with the given `(reference, amount)` rows.
pub fn payments_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.reopen()?);

    wtr.write_record(["reference", "amount"])?;
    for (reference, amount) in rows {
        wtr.write_record([*reference, *amount])?;
    }

    wtr.flush()?;
    Ok(file)
}

/// Writes a payments CSV verbatim, for rows a CSV writer would not produce.
pub fn raw_payments_csv(lines: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "reference, amount")?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(file)
}

/// Writes the invoices as a JSON seed file.
pub fn invoices_json(invoices: &[Invoice]) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new()?;
    write_invoices(file.reopen()?, invoices)?;
    Ok(file)
}
