#![cfg(feature = "storage-rocksdb")]

mod common;

use assert_cmd::cargo_bin;
use invoice_payments::domain::invoice::{Invoice, InvoiceType};
use rust_decimal_macros::dec;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: seed the invoice and pay part of it
    let invoices =
        common::invoices_json(&[Invoice::new("INV-1", dec!(100), InvoiceType::Standard)]).unwrap();
    let payments1 = common::payments_csv(&[("INV-1", "40")]).unwrap();

    let mut cmd1 = Command::new(cargo_bin!("invoice-payments"));
    cmd1.arg(payments1.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--db-path")
        .arg(&db_path);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("INV-1,40,true,invoice is now partially paid"));

    // 2. Second run: no seed, the invoice comes back from the database
    let payments2 = common::payments_csv(&[("INV-1", "60")]).unwrap();

    let mut cmd2 = Command::new(cargo_bin!("invoice-payments"));
    cmd2.arg(payments2.path()).arg("--db-path").arg(&db_path);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);

    // 40 recovered + 60 closes the invoice
    assert!(stdout2.contains(
        "INV-1,60,true,\"final partial payment received, invoice is now fully paid\""
    ));
}
