use invoice_payments::application::engine::InvoiceService;
use invoice_payments::domain::invoice::{Invoice, InvoiceType};
use invoice_payments::domain::outcome::PaymentOutcome;
use invoice_payments::domain::payment::Payment;
use invoice_payments::domain::ports::{InvoiceStoreBox, InvoiceStoreFactory};
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_factory_instantiation() {
    let factory: InvoiceStoreFactory =
        Box::new(|| Box::new(InMemoryInvoiceStore::new()) as InvoiceStoreBox);

    let store = factory();
    store
        .add(Invoice::new("INV-1", dec!(1), InvoiceType::Standard))
        .await
        .unwrap();
    let retrieved = store.get("INV-1").await.unwrap().unwrap();
    assert_eq!(retrieved.reference, "INV-1");

    // Each call yields an independent store.
    assert!(factory().get("INV-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_factory_in_task() {
    let factory: InvoiceStoreFactory =
        Box::new(|| Box::new(InMemoryInvoiceStore::new()) as InvoiceStoreBox);

    let handle = tokio::spawn(async move {
        let service = InvoiceService::new(factory());
        service
            .add_invoice(Invoice::new("INV-2", dec!(5), InvoiceType::Standard))
            .await
            .unwrap();
        service
            .process_payment(Payment::new("INV-2", dec!(5)))
            .await
            .unwrap()
    });

    assert_eq!(handle.await.unwrap(), PaymentOutcome::FullyPaid);
}
