use serde::{Serialize, Serializer};
use std::fmt;

/// Every answer the decision tree can give a payment.
///
/// `Display` renders the status message handed back to the caller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    NoMatchingInvoice,
    NoPaymentNeeded,
    /// Zero-amount invoice that nonetheless carries payments.
    InvalidZeroAmountWithPayments,
    AlreadyFullyPaid,
    ExceedsRemainingBalance,
    ExceedsInvoiceAmount,
    FinalPartialPayment,
    AnotherPartialPayment,
    FullyPaid,
    PartiallyPaid,
    TypeNotRecognized,
    /// The invoice's balances, or the payment applied to them, fall outside
    /// the representable decimal range.
    AmountOutOfRange,
}

impl PaymentOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoMatchingInvoice => "There is no invoice matching this payment",
            Self::NoPaymentNeeded => "no payment needed",
            Self::InvalidZeroAmountWithPayments => {
                "The invoice is in an invalid state, it has an amount of 0 and it has payments."
            }
            Self::AlreadyFullyPaid => "invoice was already fully paid",
            Self::ExceedsRemainingBalance => {
                "the payment is greater than the partial amount remaining"
            }
            Self::ExceedsInvoiceAmount => "the payment is greater than the invoice amount",
            Self::FinalPartialPayment => "final partial payment received, invoice is now fully paid",
            Self::AnotherPartialPayment => "another partial payment received, still not fully paid",
            Self::FullyPaid => "invoice is now fully paid",
            Self::PartiallyPaid => "invoice is now partially paid",
            Self::TypeNotRecognized => "invoice type not recognized",
            Self::AmountOutOfRange => {
                "the payment could not be applied, the invoice amounts are out of range"
            }
        }
    }

    /// Whether the payment was recorded against the invoice.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            Self::FinalPartialPayment
                | Self::AnotherPartialPayment
                | Self::FullyPaid
                | Self::PartiallyPaid
        )
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for PaymentOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.message())
    }
}
