use serde::Serialize;
use validator::ValidateEmail;

use super::Invoice;

/// One field-scoped validation failure. `field` is a dotted path into the
/// invoice (`businessInfo.email`, `items[2].quantity`) so callers can
/// surface the message inline next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

fn issue(field: impl Into<String>, message: &str) -> ValidationIssue {
    ValidationIssue {
        field: field.into(),
        message: message.to_string(),
    }
}

/// Checks an invoice against the record rules and returns every failure.
/// An empty result means the invoice is ready to render and persist.
/// Failures are data, never panics or errors.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if invoice.business_info.name.trim().is_empty() {
        issues.push(issue("businessInfo.name", "Business name is required"));
    }
    if !invoice.business_info.email.validate_email() {
        issues.push(issue("businessInfo.email", "Valid email is required"));
    }
    if let Some(logo) = &invoice.business_info.logo {
        // rendered documents may not reference external assets
        if !logo.starts_with("data:image/") {
            issues.push(issue("businessInfo.logo", "Logo must be an embedded data URI"));
        }
    }

    if invoice.client_info.name.trim().is_empty() {
        issues.push(issue("clientInfo.name", "Client name is required"));
    }
    if !invoice.client_info.email.validate_email() {
        issues.push(issue("clientInfo.email", "Valid email is required"));
    }

    if invoice.items.is_empty() {
        issues.push(issue("items", "At least one item is required"));
    }
    for (index, item) in invoice.items.iter().enumerate() {
        if item.description.trim().is_empty() {
            issues.push(issue(
                format!("items[{index}].description"),
                "Description is required",
            ));
        }
        // written as a negated comparison so NaN fails too
        if !(item.quantity > 0.0) {
            issues.push(issue(
                format!("items[{index}].quantity"),
                "Quantity must be greater than 0",
            ));
        }
        if !(item.rate >= 0.0) {
            issues.push(issue(format!("items[{index}].rate"), "Rate must be 0 or greater"));
        }
    }

    if !(invoice.tax_rate >= 0.0 && invoice.tax_rate <= 100.0) {
        issues.push(issue("taxRate", "Tax rate must be between 0 and 100"));
    }

    issues
}
