//! Classification of a payment against an invoice.
//!
//! [`decide`] is the whole decision tree: it consumes the invoice and the
//! payment and hands back the outcome together with the invoice as it should
//! be persisted. It never fails; every boundary case is an outcome.

use super::invoice::{Invoice, InvoiceType};
use super::outcome::PaymentOutcome;
use super::payment::Payment;

/// Result of evaluating one payment.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Decision {
    pub outcome: PaymentOutcome,
    /// The invoice to write back, `None` when no invoice matched.
    pub invoice: Option<Invoice>,
}

impl Decision {
    fn resolved(outcome: PaymentOutcome, invoice: Invoice) -> Self {
        Self {
            outcome,
            invoice: Some(invoice),
        }
    }

    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }
}

/// Evaluates `payment` against `invoice`, first matching rule wins.
pub fn decide(invoice: Option<Invoice>, payment: Payment) -> Decision {
    let Some(invoice) = invoice else {
        return Decision {
            outcome: PaymentOutcome::NoMatchingInvoice,
            invoice: None,
        };
    };

    if invoice.amount.is_zero() {
        let outcome = if invoice.has_payments() {
            PaymentOutcome::InvalidZeroAmountWithPayments
        } else {
            PaymentOutcome::NoPaymentNeeded
        };
        return Decision::resolved(outcome, invoice);
    }

    if invoice.has_payments() {
        decide_with_history(invoice, payment)
    } else {
        decide_fresh(invoice, payment)
    }
}

fn decide_with_history(invoice: Invoice, payment: Payment) -> Decision {
    let Some(total_paid) = invoice.total_paid() else {
        return Decision::resolved(PaymentOutcome::AmountOutOfRange, invoice);
    };

    // A history summing to zero skips both guards, even for overpayments.
    if !total_paid.is_zero() && total_paid == invoice.amount {
        return Decision::resolved(PaymentOutcome::AlreadyFullyPaid, invoice);
    }
    let Some(remaining) = invoice.remaining() else {
        return Decision::resolved(PaymentOutcome::AmountOutOfRange, invoice);
    };
    if !total_paid.is_zero() && payment.amount > remaining {
        return Decision::resolved(PaymentOutcome::ExceedsRemainingBalance, invoice);
    }

    let outcome = if remaining == payment.amount {
        PaymentOutcome::FinalPartialPayment
    } else {
        PaymentOutcome::AnotherPartialPayment
    };
    apply_partial(invoice, payment, outcome)
}

fn decide_fresh(invoice: Invoice, payment: Payment) -> Decision {
    if payment.amount > invoice.amount {
        return Decision::resolved(PaymentOutcome::ExceedsInvoiceAmount, invoice);
    }

    let outcome = if payment.amount == invoice.amount {
        PaymentOutcome::FullyPaid
    } else {
        PaymentOutcome::PartiallyPaid
    };
    apply_fresh(invoice, payment, outcome)
}

/// Accumulates a payment onto an invoice that already has history.
///
/// Totals that would overflow leave the invoice untouched.
fn apply_partial(mut invoice: Invoice, payment: Payment, outcome: PaymentOutcome) -> Decision {
    let totals = match invoice.r#type {
        InvoiceType::Standard => invoice
            .amount_paid
            .checked_add(payment.amount)
            .map(|paid| (paid, invoice.tax_amount)),
        InvoiceType::Commercial => invoice
            .amount_paid
            .checked_add(payment.amount)
            .zip(invoice.tax_amount.checked_add(payment.amount.tax())),
        InvoiceType::Unrecognized => {
            return Decision::resolved(PaymentOutcome::TypeNotRecognized, invoice);
        }
    };
    let Some((amount_paid, tax_amount)) = totals else {
        return Decision::resolved(PaymentOutcome::AmountOutOfRange, invoice);
    };

    invoice.amount_paid = amount_paid;
    invoice.tax_amount = tax_amount;
    invoice.payments.push(payment);
    Decision::resolved(outcome, invoice)
}

/// Records the first payment on an invoice, overwriting the running totals.
///
/// Tax is charged for every recognized type here, standard invoices included.
fn apply_fresh(mut invoice: Invoice, payment: Payment, outcome: PaymentOutcome) -> Decision {
    match invoice.r#type {
        InvoiceType::Standard | InvoiceType::Commercial => {
            invoice.amount_paid = payment.amount;
            invoice.tax_amount = payment.amount.tax();
        }
        InvoiceType::Unrecognized => {
            return Decision::resolved(PaymentOutcome::TypeNotRecognized, invoice);
        }
    }
    invoice.payments.push(payment);
    Decision::resolved(outcome, invoice)
}
