use super::money::Money;
use super::payment::Payment;
use serde::{Deserialize, Serialize};

/// Tax policy applied to an invoice's payments.
///
/// Type names not known to this build deserialize as `Unrecognized`, which the
/// decision tree answers without touching the invoice.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Standard,
    Commercial,
    #[serde(other)]
    Unrecognized,
}

/// A billable record and its payment history.
///
/// `amount_paid` and `tax_amount` are running totals kept alongside `payments`;
/// nothing forces them to agree with the history.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Invoice {
    /// Key the invoice is stored and looked up under.
    pub reference: String,
    /// Total amount billed.
    pub amount: Money,
    /// Sum of applied payments. Zero when missing.
    #[serde(default)]
    pub amount_paid: Money,
    /// Tax accrued from applied payments. Zero when missing.
    #[serde(default)]
    pub tax_amount: Money,
    /// Applied payments, oldest first. A missing list reads as empty.
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub r#type: InvoiceType,
}

impl Invoice {
    pub fn new(reference: impl Into<String>, amount: impl Into<Money>, r#type: InvoiceType) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
            r#type,
            ..Self::default()
        }
    }

    /// Replaces the payment history and sets `amount_paid` to `amount_paid`.
    pub fn with_payments(mut self, amount_paid: impl Into<Money>, payments: Vec<Payment>) -> Self {
        self.amount_paid = amount_paid.into();
        self.payments = payments;
        self
    }

    pub fn has_payments(&self) -> bool {
        !self.payments.is_empty()
    }

    /// Sum of the amounts in the payment history, `None` on overflow.
    pub fn total_paid(&self) -> Option<Money> {
        Money::checked_sum(self.payments.iter().map(|p| p.amount))
    }

    /// Balance still owed according to `amount_paid`, `None` on overflow.
    pub fn remaining(&self) -> Option<Money> {
        self.amount.checked_sub(self.amount_paid)
    }
}
