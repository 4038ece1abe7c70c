use crate::domain::money::Money;
use crate::domain::outcome::PaymentOutcome;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One line of the payment report.
#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    reference: &'a str,
    amount: String,
    applied: bool,
    message: PaymentOutcome,
}

/// Writes one CSV row per processed payment.
///
/// Columns: `reference,amount,applied,message`.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(
        &mut self,
        reference: &str,
        amount: Money,
        outcome: PaymentOutcome,
    ) -> Result<()> {
        self.writer.serialize(OutcomeRecord {
            reference,
            amount: amount.to_string(),
            applied: outcome.is_applied(),
            message: outcome,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
