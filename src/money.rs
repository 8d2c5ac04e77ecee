use crate::models::InvoiceItem;

/// Rounds a monetary value to two decimal places, half away from zero
/// (nearest cent).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Line total for a quantity at a unit rate.
pub fn line_amount(quantity: f64, rate: f64) -> f64 {
    round2(quantity * rate)
}

/// Sum of the *stored* item amounts. Amounts are not recomputed from
/// quantity and rate here, so the subtotal always matches what each line
/// displays even if the two ever diverge.
pub fn subtotal(items: &[InvoiceItem]) -> f64 {
    round2(items.iter().map(|item| item.amount).sum::<f64>())
}

/// Tax on a subtotal at a flat percentage rate.
pub fn tax_amount(subtotal: f64, tax_rate_percent: f64) -> f64 {
    round2(subtotal * tax_rate_percent / 100.0)
}

/// Grand total from an already-rounded subtotal and tax amount.
pub fn total(subtotal: f64, tax_amount: f64) -> f64 {
    round2(subtotal + tax_amount)
}
