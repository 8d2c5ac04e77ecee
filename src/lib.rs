pub mod document;
pub mod editor;
pub mod generators;
pub mod models;
pub mod money;
pub mod storage;
pub mod templates;

// Re-export commonly used types
pub use document::{DocumentTree, REFERENCE_WIDTH};
pub use editor::{InvoiceEditor, DEFAULT_TAX_RATE};
pub use models::{
    validate_invoice, BusinessInfo, ClientInfo, Invoice, InvoiceItem,
    InvoiceStatus, TemplateId, ValidationIssue,
};

pub use generators::{save_download, PdfExporter};
pub use templates::{available_templates, render, render_named, TemplateRegistry};
pub use storage::{InvoiceStore, StoreError};
