use std::collections::HashMap;
use std::sync::Arc;

use crate::document::DocumentTree;
use crate::models::{Invoice, TemplateId};

/// A named layout variant. Implementations are pure: the same invoice
/// always yields the same tree, with no I/O and no clock access.
pub trait InvoiceTemplate: Send + Sync {
    /// Builds the fully resolved document for an invoice.
    fn build(&self, invoice: &Invoice) -> DocumentTree;

    /// Stable identifier persisted inside invoices.
    fn template_id(&self) -> TemplateId;

    /// Display name for template pickers.
    fn name(&self) -> &str;

    /// One-line description of the look.
    fn description(&self) -> &str;
}

/// Registry of every layout variant.
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, Arc<dyn InvoiceTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        use crate::templates::templates::*;

        let mut templates: HashMap<TemplateId, Arc<dyn InvoiceTemplate>> = HashMap::new();

        let classic = Arc::new(ClassicTemplate);
        templates.insert(classic.template_id(), classic);

        let modern = Arc::new(ModernTemplate);
        templates.insert(modern.template_id(), modern);

        let professional = Arc::new(ProfessionalTemplate);
        templates.insert(professional.template_id(), professional);

        let minimalist = Arc::new(MinimalistTemplate);
        templates.insert(minimalist.template_id(), minimalist);

        let elegant = Arc::new(ElegantTemplate);
        templates.insert(elegant.template_id(), elegant);

        let cxo = Arc::new(CxoTemplate);
        templates.insert(cxo.template_id(), cxo);

        let creative = Arc::new(CreativeTemplate);
        templates.insert(creative.template_id(), creative);

        let brutalist = Arc::new(BrutalistTemplate);
        templates.insert(brutalist.template_id(), brutalist);

        let pastel = Arc::new(PastelTemplate);
        templates.insert(pastel.template_id(), pastel);

        let eco = Arc::new(EcoTemplate);
        templates.insert(eco.template_id(), eco);

        Self { templates }
    }

    /// Variant for an id. The registry holds every enum value, but a miss
    /// still resolves to the default variant rather than failing.
    pub fn get(&self, id: TemplateId) -> Arc<dyn InvoiceTemplate> {
        match self.templates.get(&id) {
            Some(template) => template.clone(),
            None => Arc::new(crate::templates::templates::ClassicTemplate),
        }
    }

    /// Every variant with its display name and description, in enum order.
    pub fn list(&self) -> Vec<(TemplateId, String, String)> {
        TemplateId::all()
            .into_iter()
            .map(|id| {
                let template = self.get(id);
                (id, template.name().to_string(), template.description().to_string())
            })
            .collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout fragments most variants share.
pub mod layout {
    use crate::document::{Align, Block, Columns, Paragraph, TextStyle, TrackSize};

    /// A label on the left edge and a value flush right, spanning the
    /// enclosing width. The backbone of every totals panel.
    pub fn amount_row(
        label: impl Into<String>,
        label_style: TextStyle,
        value: impl Into<String>,
        value_style: TextStyle,
    ) -> Block {
        Columns::new(0.0)
            .column(
                TrackSize::Fr(1.0),
                Align::Left,
                vec![Paragraph::text(label, label_style).into_block()],
            )
            .column(
                TrackSize::Auto,
                Align::Right,
                vec![Paragraph::text(value, value_style).align(Align::Right).into_block()],
            )
            .into_block()
    }

    /// Pins a fixed-width stack of blocks to the right edge.
    pub fn pin_right(width: f32, blocks: Vec<Block>) -> Block {
        Columns::new(0.0)
            .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
            .column(TrackSize::Pt(width), Align::Left, blocks)
            .into_block()
    }

    /// One paragraph per contact line.
    pub fn line_stack(lines: &[String], style: &TextStyle) -> Vec<Block> {
        lines
            .iter()
            .map(|line| Paragraph::text(line, style.clone()).into_block())
            .collect()
    }
}

/// Shared formatting primitives. Every variant goes through these, so
/// monetary and date display is digit-identical across templates.
pub mod utils {
    use chrono::NaiveDate;

    use crate::models::{BusinessInfo, ClientInfo};

    /// Formats an amount as dollars: `$1,234.56`, negative as `-$1,234.56`.
    pub fn format_currency(amount: f64) -> String {
        let formatted = format_number_with_separators(amount.abs(), 2);
        if amount < 0.0 {
            format!("-${}", formatted)
        } else {
            format!("${}", formatted)
        }
    }

    /// Fixed-decimal number with thousands separators.
    pub fn format_number_with_separators(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value, decimals = decimals);
        let (integer, decimal) = match formatted.split_once('.') {
            Some((integer, decimal)) => (integer, Some(decimal)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::new();
        let mut count = 0;
        for c in integer.chars().rev() {
            if count == 3 {
                grouped.push(',');
                count = 0;
            }
            grouped.push(c);
            count += 1;
        }
        let integer_formatted: String = grouped.chars().rev().collect();

        match decimal {
            Some(decimal) => format!("{}.{}", integer_formatted, decimal),
            None => integer_formatted,
        }
    }

    /// Long-form calendar date: `January 5, 2026`.
    pub fn format_long_date(date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    /// Quantities print bare: `2`, not `2.00`; fractional quantities keep
    /// their digits (`2.5`).
    pub fn format_quantity(quantity: f64) -> String {
        format!("{}", quantity)
    }

    /// A bare percentage: `12%`, `12.5%`.
    pub fn format_percent(rate: f64) -> String {
        format!("{}%", rate)
    }

    /// Issuer contact lines in display order with empty fields dropped, so
    /// a missing phone never leaves a blank line.
    pub fn business_contact_lines(info: &BusinessInfo) -> Vec<String> {
        let mut lines = Vec::new();
        push_line(&mut lines, Some(&info.email));
        push_line(&mut lines, info.phone.as_deref());
        push_line(&mut lines, info.address.as_deref());
        push_line(&mut lines, info.website.as_deref());
        lines
    }

    /// Issuer lines without the website, for variants with tighter
    /// contact blocks.
    pub fn business_compact_lines(info: &BusinessInfo) -> Vec<String> {
        let mut lines = Vec::new();
        push_line(&mut lines, Some(&info.email));
        push_line(&mut lines, info.phone.as_deref());
        push_line(&mut lines, info.address.as_deref());
        lines
    }

    /// Recipient contact lines, same omission rule.
    pub fn client_contact_lines(info: &ClientInfo) -> Vec<String> {
        let mut lines = Vec::new();
        push_line(&mut lines, Some(&info.email));
        push_line(&mut lines, info.phone.as_deref());
        push_line(&mut lines, info.address.as_deref());
        lines
    }

    fn push_line(lines: &mut Vec<String>, value: Option<&str>) {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                lines.push(value.to_string());
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::fixtures::{sample_business, sample_client};

        #[test]
        fn test_format_currency() {
            assert_eq!(format_currency(0.0), "$0.00");
            assert_eq!(format_currency(25.5), "$25.50");
            assert_eq!(format_currency(1234.56), "$1,234.56");
            assert_eq!(format_currency(1234567.89), "$1,234,567.89");
            assert_eq!(format_currency(-1234.56), "-$1,234.56");
        }

        #[test]
        fn test_format_long_date() {
            let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
            assert_eq!(format_long_date(date), "January 5, 2026");
            let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
            assert_eq!(format_long_date(date), "December 31, 2026");
        }

        #[test]
        fn test_format_quantity() {
            assert_eq!(format_quantity(2.0), "2");
            assert_eq!(format_quantity(2.5), "2.5");
            assert_eq!(format_quantity(0.25), "0.25");
        }

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(12.0), "12%");
            assert_eq!(format_percent(7.5), "7.5%");
        }

        #[test]
        fn test_business_contact_lines_drop_empty_fields() {
            let mut info = sample_business();
            info.phone = None;
            info.website = Some("   ".to_string());
            let lines = business_contact_lines(&info);
            assert_eq!(
                lines,
                vec![
                    "billing@northwindstudio.ca".to_string(),
                    "12 Portage Ave\nWinnipeg, MB R3B 2B9".to_string(),
                ]
            );
        }

        #[test]
        fn test_client_contact_lines_keep_order() {
            let mut info = sample_client();
            info.phone = Some("+1 204 555 0000".to_string());
            let lines = client_contact_lines(&info);
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], "accounts@prairiesupply.ca");
            assert_eq!(lines[1], "+1 204 555 0000");
        }
    }
}
