use crate::domain::invoice::Invoice;
use crate::error::Result;
use std::io::{Read, Write};

/// Reads a JSON array of invoices, e.g. the seed file handed to the CLI.
pub fn read_invoices<R: Read>(source: R) -> Result<Vec<Invoice>> {
    Ok(serde_json::from_reader(source)?)
}

/// Writes invoices as a pretty-printed JSON array.
pub fn write_invoices<W: Write>(sink: W, invoices: &[Invoice]) -> Result<()> {
    serde_json::to_writer_pretty(sink, invoices)?;
    Ok(())
}
