use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{BusinessInfo, Invoice};

const INVOICES_FILE: &str = "invoices.json";
const BUSINESS_INFO_FILE: &str = "business-info.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Flat-file store for saved invoices and the reusable business profile.
/// One JSON document per concern, rewritten whole on every save, so the
/// last writer wins. Reads never fail: a missing or unreadable file is
/// treated as an empty store.
pub struct InvoiceStore {
    dir: PathBuf,
}

impl InvoiceStore {
    /// Opens a store rooted at `dir`. The directory is created on first
    /// write, not here.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store at `DATA_DIR`, defaulting to `./data`.
    pub fn open_default() -> Self {
        let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Inserts or replaces the invoice with the same id.
    pub fn save_invoice(&self, invoice: &Invoice) -> Result<(), StoreError> {
        let mut invoices = self.list_invoices();
        invoices.retain(|existing| existing.id != invoice.id);
        invoices.push(invoice.clone());
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.write_json(INVOICES_FILE, &invoices)?;
        debug!(invoice_number = %invoice.invoice_number, "invoice saved");
        Ok(())
    }

    /// Every saved invoice, newest first.
    pub fn list_invoices(&self) -> Vec<Invoice> {
        let mut invoices: Vec<Invoice> = self.read_json(INVOICES_FILE).unwrap_or_default();
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        invoices
    }

    pub fn load_invoice(&self, id: Uuid) -> Option<Invoice> {
        self.list_invoices().into_iter().find(|invoice| invoice.id == id)
    }

    /// Returns whether an invoice with that id existed.
    pub fn delete_invoice(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut invoices = self.list_invoices();
        let before = invoices.len();
        invoices.retain(|invoice| invoice.id != id);
        if invoices.len() == before {
            return Ok(false);
        }
        self.write_json(INVOICES_FILE, &invoices)?;
        Ok(true)
    }

    pub fn save_business_profile(&self, info: &BusinessInfo) -> Result<(), StoreError> {
        self.write_json(BUSINESS_INFO_FILE, info)
    }

    pub fn load_business_profile(&self) -> Option<BusinessInfo> {
        self.read_json(BUSINESS_INFO_FILE)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "store file unreadable, treating as empty");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "store file corrupt, treating as empty");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(file), raw)?;
        Ok(())
    }
}
