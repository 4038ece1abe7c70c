use crate::domain::payment::Payment;
use crate::error::{InvoiceError, Result};
use std::io::Read;

/// Reads payments from a CSV source with `reference, amount` columns.
///
/// Whitespace around fields is trimmed and rows with extra columns are tolerated.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes payments.
    ///
    /// A malformed row yields an error for that row only; reading continues.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(InvoiceError::from))
    }
}
