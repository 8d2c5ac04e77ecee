use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    default_due_date, invoice_number_for, BusinessInfo, ClientInfo, Invoice, InvoiceItem,
    InvoiceStatus, TemplateId,
};
use crate::money;
use crate::storage::{InvoiceStore, StoreError};

/// Default tax rate for new drafts: Manitoba GST (5%) + PST (7%).
pub const DEFAULT_TAX_RATE: f64 = 12.0;

/// Authoring state for one invoice. Setters sanitize what they are given
/// and keep the derived totals current, so the invoice inside is always
/// renderable.
pub struct InvoiceEditor {
    invoice: Invoice,
}

impl InvoiceEditor {
    /// Starts a fresh draft dated `today` with one blank line, pre-filled
    /// from the saved business profile when one exists.
    pub fn new(today: NaiveDate, profile: Option<BusinessInfo>) -> Self {
        let now = Utc::now();
        let mut invoice = Invoice {
            id: Uuid::new_v4(),
            invoice_number: invoice_number_for(today),
            date: today,
            due_date: default_due_date(today),
            business_info: profile.unwrap_or_default(),
            client_info: ClientInfo::default(),
            items: vec![InvoiceItem::blank()],
            subtotal: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
            tax_amount: 0.0,
            total: 0.0,
            notes: None,
            template: TemplateId::default(),
            status: InvoiceStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        invoice.recalculate_totals();
        Self { invoice }
    }

    /// Resumes editing a stored invoice.
    pub fn load(invoice: Invoice) -> Self {
        Self { invoice }
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    /// Appends a blank line and returns its id.
    pub fn add_item(&mut self) -> Uuid {
        let item = InvoiceItem::blank();
        let id = item.id;
        self.invoice.items.push(item);
        self.invoice.recalculate_totals();
        id
    }

    /// Removes a line. Refused when it would leave the invoice empty.
    pub fn remove_item(&mut self, id: Uuid) -> bool {
        if self.invoice.items.len() <= 1 {
            return false;
        }
        let before = self.invoice.items.len();
        self.invoice.items.retain(|item| item.id != id);
        let removed = self.invoice.items.len() < before;
        if removed {
            self.invoice.recalculate_totals();
        }
        removed
    }

    /// Description edits never touch the stored amount.
    pub fn set_item_description(&mut self, id: Uuid, description: &str) -> bool {
        match self.invoice.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.description = description.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_item_quantity(&mut self, id: Uuid, quantity: f64) -> bool {
        let quantity = sanitize_amount(quantity);
        match self.invoice.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity;
                item.amount = money::line_amount(item.quantity, item.rate);
                self.invoice.recalculate_totals();
                true
            }
            None => false,
        }
    }

    pub fn set_item_rate(&mut self, id: Uuid, rate: f64) -> bool {
        let rate = sanitize_amount(rate);
        match self.invoice.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.rate = rate;
                item.amount = money::line_amount(item.quantity, item.rate);
                self.invoice.recalculate_totals();
                true
            }
            None => false,
        }
    }

    /// Clamped to the 0..=100 percent range.
    pub fn set_tax_rate(&mut self, rate: f64) {
        self.invoice.tax_rate = sanitize_amount(rate).min(100.0);
        self.invoice.recalculate_totals();
    }

    /// Whitespace-only notes collapse to none.
    pub fn set_notes(&mut self, notes: &str) {
        let trimmed = notes.trim();
        self.invoice.notes = if trimmed.is_empty() {
            None
        } else {
            Some(notes.to_string())
        };
    }

    pub fn set_template(&mut self, template: TemplateId) {
        self.invoice.template = template;
    }

    pub fn set_invoice_number(&mut self, number: &str) {
        self.invoice.invoice_number = number.to_string();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.invoice.date = date;
    }

    pub fn set_due_date(&mut self, date: NaiveDate) {
        self.invoice.due_date = date;
    }

    pub fn set_business_info(&mut self, info: BusinessInfo) {
        self.invoice.business_info = info;
    }

    pub fn set_client_info(&mut self, info: ClientInfo) {
        self.invoice.client_info = info;
    }

    /// Persists the draft and the business profile for the next invoice.
    /// Returns the saved snapshot.
    pub fn save(&mut self, store: &InvoiceStore) -> Result<Invoice, StoreError> {
        self.invoice.recalculate_totals();
        self.invoice.status = InvoiceStatus::Draft;
        self.invoice.updated_at = Utc::now();
        store.save_invoice(&self.invoice)?;
        store.save_business_profile(&self.invoice.business_info)?;
        Ok(self.invoice.clone())
    }
}

/// Rejected inputs become 0 rather than an error: NaN, infinities and
/// negatives all collapse to a harmless zero.
fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}
