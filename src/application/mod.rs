//! Application layer orchestrating the payment decision.
//!
//! `InvoiceService` fetches the invoice a payment targets, runs the decision
//! tree over it and writes the result back, one payment per reference at a time.

pub mod engine;
