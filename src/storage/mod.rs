pub mod store;

pub use store::{InvoiceStore, StoreError};
