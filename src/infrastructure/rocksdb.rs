use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::{InvoiceError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing invoices.
pub const CF_INVOICES: &str = "invoices";

/// A persistent invoice store backed by RocksDB.
///
/// Invoices live in their own column family, keyed by the UTF-8 bytes of the
/// reference and encoded as JSON. Every `save` is a write, so callers that
/// save back unchanged invoices pay for it here.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBInvoiceStore {
    db: Arc<DB>,
}

impl RocksDBInvoiceStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "invoices" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_invoices = ColumnFamilyDescriptor::new(CF_INVOICES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_invoices])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn put(&self, invoice: &Invoice) -> Result<()> {
        let cf = self.invoices_cf()?;
        let value = serde_json::to_vec(invoice)?;
        self.db.put_cf(cf, invoice.reference.as_bytes(), value)?;
        Ok(())
    }

    fn invoices_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_INVOICES).ok_or_else(|| {
            InvoiceError::InternalError(Box::new(std::io::Error::other(
                "Invoices column family not found",
            )))
        })
    }
}

#[async_trait]
impl InvoiceStore for RocksDBInvoiceStore {
    async fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        let cf = self.invoices_cf()?;
        match self.db.get_cf(cf, reference.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, invoice: Invoice) -> Result<()> {
        self.put(&invoice)
    }

    async fn add(&self, invoice: Invoice) -> Result<()> {
        self.put(&invoice)
    }

    async fn all_invoices(&self) -> Result<Vec<Invoice>> {
        let cf = self.invoices_cf()?;
        let mut invoices = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            invoices.push(serde_json::from_slice(&value)?);
        }
        Ok(invoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::InvoiceType;
    use crate::domain::money::Money;
    use crate::domain::payment::Payment;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBInvoiceStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_INVOICES).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_invoice_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBInvoiceStore::open(dir.path()).unwrap();

        let invoice = Invoice::new("INV-1", dec!(10), InvoiceType::Commercial)
            .with_payments(dec!(5), vec![Payment::new("INV-1", dec!(5))]);

        store.add(invoice.clone()).await.unwrap();

        let retrieved = store.get("INV-1").await.unwrap().unwrap();
        assert_eq!(retrieved, invoice);

        let all = store.all_invoices().await.unwrap();
        assert_eq!(all, vec![invoice]);

        assert!(store.get("INV-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = RocksDBInvoiceStore::open(dir.path()).unwrap();
            store
                .save(Invoice::new("INV-9", dec!(42), InvoiceType::Standard))
                .await
                .unwrap();
        }

        let store = RocksDBInvoiceStore::open(dir.path()).unwrap();
        let retrieved = store.get("INV-9").await.unwrap().unwrap();
        assert_eq!(retrieved.amount, Money::new(dec!(42)));
    }
}
