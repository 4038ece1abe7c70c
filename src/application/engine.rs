use crate::domain::decision::decide;
use crate::domain::invoice::Invoice;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::domain::ports::InvoiceStoreBox;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The main entry point for applying payments to invoices.
///
/// `InvoiceService` owns the invoice store. Each payment is evaluated under a
/// lock keyed by its reference, so concurrent payments against one invoice
/// are applied one after another while different invoices proceed in parallel.
pub struct InvoiceService {
    store: InvoiceStoreBox,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl InvoiceService {
    /// Creates a new `InvoiceService` over the given store.
    pub fn new(store: InvoiceStoreBox) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds an invoice into the underlying store.
    pub async fn add_invoice(&self, invoice: Invoice) -> Result<()> {
        self.store.add(invoice).await
    }

    /// Applies a payment to the invoice it references.
    ///
    /// The returned outcome's `Display` is the status message for the caller.
    /// A matched invoice is saved back whether or not the payment was applied.
    /// Errors only come from the store.
    pub async fn process_payment(&self, payment: Payment) -> Result<PaymentOutcome> {
        let reference = payment.reference.clone();
        let lock = self.reference_lock(&reference).await;
        let result = {
            let _guard = lock.lock().await;
            self.apply_payment(payment).await
        };
        self.release_reference_lock(&reference, lock).await;
        result
    }

    async fn apply_payment(&self, payment: Payment) -> Result<PaymentOutcome> {
        let reference = payment.reference.clone();
        let amount = payment.amount;
        let invoice = self.store.get(&reference).await?;
        let decision = decide(invoice, payment);

        if let Some(invoice) = decision.invoice {
            self.store.save(invoice).await?;
        }

        if decision.outcome.is_applied() {
            tracing::info!(%reference, %amount, outcome = %decision.outcome, "payment applied");
        } else {
            tracing::debug!(%reference, %amount, outcome = %decision.outcome, "payment not applied");
        }

        Ok(decision.outcome)
    }

    /// Consumes the service and returns the final state of all invoices.
    pub async fn into_invoices(self) -> Result<Vec<Invoice>> {
        self.store.all_invoices().await
    }

    async fn reference_lock(&self, reference: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(reference.to_owned()).or_default().clone()
    }

    /// Drops the map entry once no other payment holds or awaits the lock.
    async fn release_reference_lock(&self, reference: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        // One count for the map entry, one for `lock`.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(reference);
        }
        // Released under the map mutex so a concurrent release sees the final count.
        drop(lock);
    }
}
