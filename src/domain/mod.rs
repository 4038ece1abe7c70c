//! Domain model: invoices, payments and the rules deciding between them.

pub mod decision;
pub mod invoice;
pub mod money;
pub mod outcome;
pub mod payment;
pub mod ports;
