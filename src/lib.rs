//! Payment validation for invoices.
//!
//! A payment is classified against the invoice its reference points at; the
//! invoice is updated when the payment is accepted and a status message is
//! returned either way. See [`domain::decision::decide`] for the rules and
//! [`application::engine::InvoiceService`] for the store-backed entry point.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
