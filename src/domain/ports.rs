use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;

/// Key-value access to invoices, keyed by payment reference.
///
/// Holds at most one invoice per reference. Implementations give no
/// isolation between concurrent callers; the engine serializes work per
/// reference on top of this.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn get(&self, reference: &str) -> Result<Option<Invoice>>;
    async fn save(&self, invoice: Invoice) -> Result<()>;
    /// Seeds an invoice, replacing any held under the same reference.
    async fn add(&self, invoice: Invoice) -> Result<()>;
    async fn all_invoices(&self) -> Result<Vec<Invoice>>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;
pub type InvoiceStoreFactory = Box<dyn Fn() -> InvoiceStoreBox + Send + Sync>;
