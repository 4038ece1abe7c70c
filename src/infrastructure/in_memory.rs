use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for invoices.
///
/// Uses `Arc<RwLock<HashMap<String, Invoice>>>` so clones share the same
/// invoices. Meant for tests and one-shot CLI runs; nothing is durable.
#[derive(Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Creates a new, empty in-memory invoice store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(reference).cloned())
    }

    async fn save(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        invoices.insert(invoice.reference.clone(), invoice);
        Ok(())
    }

    async fn add(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        if invoices.contains_key(&invoice.reference) {
            tracing::debug!(reference = %invoice.reference, "replacing seeded invoice");
        }
        invoices.insert(invoice.reference.clone(), invoice);
        Ok(())
    }

    async fn all_invoices(&self) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        let mut all: Vec<Invoice> = invoices.values().cloned().collect();
        all.sort_by(|a, b| a.reference.cmp(&b.reference));
        Ok(all)
    }
}
