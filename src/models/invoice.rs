use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: Uuid,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64, // derived from quantity * rate, stored for display
}

impl InvoiceItem {
    /// A fresh row with the defaults a newly added line gets.
    pub fn blank() -> Self {
        InvoiceItem {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: 1.0,
            rate: 0.0,
            amount: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>, // data URI, the only asset a document may embed
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

/// The closed set of layout variants. Wire names are persisted inside
/// stored invoices, so they are a stable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    Classic,
    Modern,
    Professional,
    Minimalist,
    Elegant,
    Cxo,
    Creative,
    Brutalist,
    Pastel,
    Eco,
}

impl TemplateId {
    /// Resolves a raw selector. Unknown names fall back to the default
    /// variant instead of failing.
    pub fn parse(value: &str) -> Self {
        match value {
            "classic" => TemplateId::Classic,
            "modern" => TemplateId::Modern,
            "professional" => TemplateId::Professional,
            "minimalist" => TemplateId::Minimalist,
            "elegant" => TemplateId::Elegant,
            "cxo" => TemplateId::Cxo,
            "creative" => TemplateId::Creative,
            "brutalist" => TemplateId::Brutalist,
            "pastel" => TemplateId::Pastel,
            "eco" => TemplateId::Eco,
            _ => TemplateId::Classic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Professional => "professional",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Elegant => "elegant",
            TemplateId::Cxo => "cxo",
            TemplateId::Creative => "creative",
            TemplateId::Brutalist => "brutalist",
            TemplateId::Pastel => "pastel",
            TemplateId::Eco => "eco",
        }
    }

    pub fn all() -> [TemplateId; 10] {
        [
            TemplateId::Classic,
            TemplateId::Modern,
            TemplateId::Professional,
            TemplateId::Minimalist,
            TemplateId::Elegant,
            TemplateId::Cxo,
            TemplateId::Creative,
            TemplateId::Brutalist,
            TemplateId::Pastel,
            TemplateId::Eco,
        ]
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId::Classic
    }
}

impl From<String> for TemplateId {
    fn from(value: String) -> Self {
        TemplateId::parse(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub business_info: BusinessInfo,
    pub client_info: ClientInfo,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub notes: Option<String>,
    #[serde(default)]
    pub template: TemplateId,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Recomputes subtotal, tax and total from the stored item amounts.
    /// Stored derived values are never trusted while editing.
    pub fn recalculate_totals(&mut self) {
        self.subtotal = money::subtotal(&self.items);
        self.tax_amount = money::tax_amount(self.subtotal, self.tax_rate);
        self.total = money::total(self.subtotal, self.tax_amount);
    }
}

/// Invoice number for a given issue date: `INV-YYYYMMDD-NNN` with a random
/// zero-padded 3-digit suffix. Same-day collisions are possible and
/// accepted; uniqueness lives on `Invoice.id`.
pub fn invoice_number_for(date: NaiveDate) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("INV-{}-{:03}", date.format("%Y%m%d"), suffix)
}

/// Invoice number for today's local calendar date.
pub fn new_invoice_number() -> String {
    invoice_number_for(Local::now().date_naive())
}

/// Due dates default to 30 calendar days after the issue date.
pub fn default_due_date(from: NaiveDate) -> NaiveDate {
    from + Duration::days(30)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn sample_business() -> BusinessInfo {
        BusinessInfo {
            name: "North Wind Studio".to_string(),
            email: "billing@northwindstudio.ca".to_string(),
            phone: Some("+1 204 555 0134".to_string()),
            address: Some("12 Portage Ave\nWinnipeg, MB R3B 2B9".to_string()),
            website: Some("northwindstudio.ca".to_string()),
            logo: None,
        }
    }

    pub fn sample_client() -> ClientInfo {
        ClientInfo {
            name: "Prairie Supply Co.".to_string(),
            email: "accounts@prairiesupply.ca".to_string(),
            phone: None,
            address: Some("88 Main St, Brandon, MB".to_string()),
        }
    }

    pub fn item(description: &str, quantity: f64, rate: f64) -> InvoiceItem {
        InvoiceItem {
            id: Uuid::new_v4(),
            description: description.to_string(),
            quantity,
            rate,
            amount: money::line_amount(quantity, rate),
        }
    }

    pub fn sample_invoice() -> Invoice {
        let created = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        let mut invoice = Invoice {
            id: Uuid::new_v4(),
            invoice_number: "INV-20260115-042".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            business_info: sample_business(),
            client_info: sample_client(),
            items: vec![item("Brand design", 2.0, 50.0), item("Hosting setup", 1.0, 25.5)],
            subtotal: 0.0,
            tax_rate: 12.0,
            tax_amount: 0.0,
            total: 0.0,
            notes: Some("Payment due within 30 days.".to_string()),
            template: TemplateId::Classic,
            status: InvoiceStatus::Draft,
            created_at: created,
            updated_at: created,
        };
        invoice.recalculate_totals();
        invoice
    }
}
