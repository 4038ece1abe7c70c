use super::money::Money;
use serde::{Deserialize, Serialize};

/// A monetary amount applied against the invoice identified by `reference`.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Payment {
    #[serde(default)]
    pub reference: String,
    pub amount: Money,
}

impl Payment {
    pub fn new(reference: impl Into<String>, amount: impl Into<Money>) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_deserialization_from_csv() {
        let csv = "reference, amount\nINV-1, 12.50\nINV-2, -3";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let payments: Vec<Payment> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("Failed to deserialize payments");

        assert_eq!(payments[0], Payment::new("INV-1", dec!(12.5)));
        assert_eq!(payments[1], Payment::new("INV-2", dec!(-3)));
    }

    #[test]
    fn test_default_payment_is_empty() {
        let payment = Payment::default();
        assert!(payment.reference.is_empty());
        assert!(payment.amount.is_zero());
    }
}
