pub mod template_trait;
pub mod templates;

use once_cell::sync::Lazy;

use crate::document::DocumentTree;
use crate::models::{Invoice, TemplateId};

pub use template_trait::{utils, InvoiceTemplate, TemplateRegistry};

static REGISTRY: Lazy<TemplateRegistry> = Lazy::new(TemplateRegistry::new);

/// Renders an invoice with the given layout variant.
pub fn render(invoice: &Invoice, template: TemplateId) -> DocumentTree {
    REGISTRY.get(template).build(invoice)
}

/// Renders by wire name. Unknown names fall back to the default variant.
pub fn render_named(invoice: &Invoice, template: &str) -> DocumentTree {
    render(invoice, TemplateId::parse(template))
}

/// Every variant with display name and description, for template pickers.
pub fn available_templates() -> Vec<(TemplateId, String, String)> {
    REGISTRY.list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Span, REFERENCE_WIDTH};
    use crate::models::fixtures::sample_invoice;

    fn spans_of(block: &Block, out: &mut Vec<Span>) {
        match block {
            Block::Paragraph(p) => out.extend(p.spans.iter().cloned()),
            Block::Columns(c) => {
                for column in &c.columns {
                    for block in &column.blocks {
                        spans_of(block, out);
                    }
                }
            }
            Block::Table(t) => {
                for cell in t.header.iter().chain(t.rows.iter().flatten()) {
                    out.extend(cell.iter().cloned());
                }
            }
            Block::Boxed(b) => {
                for block in &b.blocks {
                    spans_of(block, out);
                }
            }
            _ => {}
        }
    }

    fn all_text(tree: &DocumentTree) -> String {
        let mut spans = Vec::new();
        for block in &tree.blocks {
            spans_of(block, &mut spans);
        }
        spans.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_every_variant_renders_core_fields() {
        let invoice = sample_invoice();
        for id in TemplateId::all() {
            let tree = render(&invoice, id);
            assert_eq!(tree.width, REFERENCE_WIDTH);
            let text = all_text(&tree);
            assert!(text.contains("INV-20260115"), "{:?} missing invoice number", id);
            // Some variants uppercase the letterhead.
            assert!(
                text.to_uppercase().contains("NORTH WIND STUDIO"),
                "{:?} missing issuer",
                id
            );
            assert!(text.contains("Prairie Supply Co."), "{:?} missing client", id);
            assert!(text.contains("Brand design"), "{:?} missing line item", id);
            assert!(text.contains("$140.56"), "{:?} missing grand total", id);
            assert!(text.contains("WPEG.app"), "{:?} missing attribution", id);
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let invoice = sample_invoice();
        for id in TemplateId::all() {
            let first = render(&invoice, id);
            let second = render(&invoice, id);
            assert_eq!(first, second, "{:?} is not deterministic", id);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap(),
            );
        }
    }

    #[test]
    fn test_tax_line_only_when_rate_positive() {
        let mut invoice = sample_invoice();
        for id in TemplateId::all() {
            invoice.tax_rate = 12.0;
            invoice.recalculate_totals();
            assert!(all_text(&render(&invoice, id)).contains("12%"), "{:?} lost tax line", id);

            invoice.tax_rate = 0.0;
            invoice.recalculate_totals();
            let text = all_text(&render(&invoice, id));
            assert!(!text.contains("Tax"), "{:?} shows tax at rate 0", id);
            assert!(!text.contains("TAX"), "{:?} shows tax at rate 0", id);
        }
    }

    #[test]
    fn test_empty_optional_fields_leave_no_blank_lines() {
        let mut invoice = sample_invoice();
        invoice.business_info.phone = None;
        invoice.business_info.website = Some(String::new());
        invoice.client_info.address = None;
        invoice.notes = None;
        for id in TemplateId::all() {
            let text = all_text(&render(&invoice, id));
            for line in text.lines() {
                assert!(!line.trim().is_empty() || line.is_empty(), "{:?}: {:?}", id, line);
            }
            assert!(!text.contains("Notes"), "{:?} renders empty notes section", id);
        }
    }

    #[test]
    fn test_notes_render_verbatim() {
        let mut invoice = sample_invoice();
        invoice.notes = Some("Wire to account #42.\nNo partial payments.".to_string());
        for id in TemplateId::all() {
            let text = all_text(&render(&invoice, id));
            assert!(text.contains("Wire to account #42."), "{:?}", id);
            assert!(text.contains("No partial payments."), "{:?}", id);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_classic() {
        let invoice = sample_invoice();
        let fallback = render_named(&invoice, "letterpress");
        let classic = render(&invoice, TemplateId::Classic);
        assert_eq!(fallback, classic);
    }

    #[test]
    fn test_available_templates_lists_all_ten() {
        let listed = available_templates();
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0].0, TemplateId::Classic);
        assert_eq!(listed[0].1, "Classic");
        assert_eq!(listed[0].2, "Traditional, clean design");
        assert!(listed.iter().all(|(_, name, desc)| !name.is_empty() && !desc.is_empty()));
    }
}
