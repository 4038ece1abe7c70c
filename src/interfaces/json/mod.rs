pub mod invoice_io;
