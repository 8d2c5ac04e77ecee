//! End-to-end tests for the invoicing pipeline: authoring, the validation
//! gate, persistence, layout rendering and source generation.

use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use invoiceflow::document::Block;
use invoiceflow::models::{BusinessInfo, ClientInfo, TemplateId};
use invoiceflow::{InvoiceEditor, InvoiceStore};

fn create_test_business() -> BusinessInfo {
    BusinessInfo {
        name: "Aurora Borealis Consulting".to_string(),
        email: "invoices@auroraborealis.ca".to_string(),
        phone: Some("+1 867 555 0199".to_string()),
        address: Some("4 Franklin Rd\nYellowknife, NT X1A 2N3".to_string()),
        website: Some("auroraborealis.ca".to_string()),
        logo: None,
    }
}

fn create_test_client() -> ClientInfo {
    ClientInfo {
        name: "Tamarack Outfitters".to_string(),
        email: "office@tamarackoutfitters.ca".to_string(),
        phone: None,
        address: Some("210 Lakeshore Dr, Kenora, ON".to_string()),
    }
}

fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
}

/// A complete, valid draft: two lines, 12% tax, notes.
fn create_test_editor() -> InvoiceEditor {
    let mut editor = InvoiceEditor::new(issue_date(), None);
    editor.set_business_info(create_test_business());
    editor.set_client_info(create_test_client());

    let first = editor.invoice().items[0].id;
    editor.set_item_description(first, "Site audit");
    editor.set_item_quantity(first, 3.0);
    editor.set_item_rate(first, 19.99);

    let second = editor.add_item();
    editor.set_item_description(second, "Retainer");
    editor.set_item_quantity(second, 1.0);
    editor.set_item_rate(second, 150.0);

    editor.set_notes("Payable within 30 days of receipt.");
    editor
}

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("invoiceflow-{tag}-{}", Uuid::new_v4()))
}

/// Every visible character in a tree, in document order.
fn collect_text(blocks: &[Block], out: &mut String) {
    for block in blocks {
        match block {
            Block::Paragraph(paragraph) => {
                for span in &paragraph.spans {
                    out.push_str(&span.text);
                    out.push('\n');
                }
            }
            Block::Columns(columns) => {
                for column in &columns.columns {
                    collect_text(&column.blocks, out);
                }
            }
            Block::Table(table) => {
                for cell in table.header.iter().chain(table.rows.iter().flatten()) {
                    for span in cell {
                        out.push_str(&span.text);
                        out.push('\n');
                    }
                }
            }
            Block::Boxed(boxed) => collect_text(&boxed.blocks, out),
            _ => {}
        }
    }
}

fn rendered_text(invoice: &invoiceflow::Invoice, template: TemplateId) -> String {
    let tree = invoiceflow::render(invoice, template);
    let mut text = String::new();
    collect_text(&tree.blocks, &mut text);
    text
}

// ============= AUTHORING TESTS =============
mod authoring_tests {
    use super::*;

    #[test]
    fn test_draft_carries_derived_totals() {
        let editor = create_test_editor();
        let invoice = editor.invoice();

        assert!(invoice.invoice_number.starts_with("INV-20260410-"));
        assert_eq!(invoice.invoice_number.len(), "INV-20260410-000".len());
        assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2026, 5, 10).unwrap());

        assert_eq!(invoice.items[0].amount, 59.97);
        assert_eq!(invoice.items[1].amount, 150.0);
        assert_eq!(invoice.subtotal, 209.97);
        assert_eq!(invoice.tax_rate, 12.0);
        assert_eq!(invoice.tax_amount, 25.2);
        assert_eq!(invoice.total, 235.17);
    }

    #[test]
    fn test_rate_edit_flows_through_to_total() {
        let mut editor = create_test_editor();
        let second = editor.invoice().items[1].id;
        editor.set_item_rate(second, 175.5);

        let invoice = editor.invoice();
        assert_eq!(invoice.items[1].amount, 175.5);
        assert_eq!(invoice.subtotal, 235.47);
        assert_eq!(invoice.total, 263.73);
    }

    #[test]
    fn test_zero_tax_total_equals_subtotal() {
        let mut editor = create_test_editor();
        editor.set_tax_rate(0.0);
        let invoice = editor.invoice();
        assert_eq!(invoice.tax_amount, 0.0);
        assert_eq!(invoice.total, invoice.subtotal);
    }
}

// ============= VALIDATION GATE TESTS =============
mod validation_tests {
    use super::*;
    use invoiceflow::validate_invoice;

    #[test]
    fn test_fresh_draft_fails_the_export_gate() {
        let editor = InvoiceEditor::new(issue_date(), None);
        let issues = validate_invoice(editor.invoice());
        let fields: Vec<&str> = issues.iter().map(|issue| issue.field.as_str()).collect();

        for expected in [
            "businessInfo.name",
            "businessInfo.email",
            "clientInfo.name",
            "clientInfo.email",
            "items[0].description",
        ] {
            assert!(fields.contains(&expected), "missing issue for {expected}");
        }
    }

    #[test]
    fn test_completed_draft_passes_the_gate() {
        let editor = create_test_editor();
        assert!(validate_invoice(editor.invoice()).is_empty());
    }

    #[test]
    fn test_fixing_reported_issues_clears_them() {
        let mut editor = InvoiceEditor::new(issue_date(), None);
        assert!(!validate_invoice(editor.invoice()).is_empty());

        editor.set_business_info(create_test_business());
        editor.set_client_info(create_test_client());
        let first = editor.invoice().items[0].id;
        editor.set_item_description(first, "Site audit");
        editor.set_item_quantity(first, 1.0);

        assert!(validate_invoice(editor.invoice()).is_empty());
    }
}

// ============= PERSISTENCE TESTS =============
mod persistence_tests {
    use super::*;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = scratch_dir("roundtrip");
        let saved = {
            let store = InvoiceStore::open(&dir);
            create_test_editor().save(&store).unwrap()
        };

        // a fresh handle on the same directory sees the same records
        let reopened = InvoiceStore::open(&dir);
        let loaded = reopened.load_invoice(saved.id).unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(reopened.list_invoices().len(), 1);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_saving_twice_updates_in_place() {
        let dir = scratch_dir("upsert");
        let store = InvoiceStore::open(&dir);

        let mut editor = create_test_editor();
        let saved = editor.save(&store).unwrap();

        let mut editor = InvoiceEditor::load(saved);
        let first = editor.invoice().items[0].id;
        editor.set_item_rate(first, 25.0);
        let resaved = editor.save(&store).unwrap();

        let listed = store.list_invoices();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subtotal, resaved.subtotal);
        assert_eq!(listed[0].items[0].amount, 75.0);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_saved_profile_seeds_the_next_invoice() {
        let dir = scratch_dir("profile");
        let store = InvoiceStore::open(&dir);
        create_test_editor().save(&store).unwrap();

        let next = InvoiceEditor::new(issue_date(), store.load_business_profile());
        assert_eq!(next.invoice().business_info.name, "Aurora Borealis Consulting");
        assert!(next.invoice().client_info.name.is_empty());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_corrupt_store_degrades_to_empty() {
        let dir = scratch_dir("corrupt");
        let store = InvoiceStore::open(&dir);
        create_test_editor().save(&store).unwrap();

        std::fs::write(dir.join("invoices.json"), "][ not json").unwrap();
        assert!(store.list_invoices().is_empty());

        let _ = std::fs::remove_dir_all(dir);
    }
}

// ============= RENDERING TESTS =============
mod rendering_tests {
    use super::*;
    use invoiceflow::REFERENCE_WIDTH;

    #[test]
    fn test_every_variant_carries_the_core_facts() {
        let invoice = {
            let mut editor = create_test_editor();
            editor.set_invoice_number("INV-20260410-314");
            editor.invoice().clone()
        };

        for template in TemplateId::all() {
            let tree = invoiceflow::render(&invoice, template);
            assert_eq!(tree.width, REFERENCE_WIDTH, "{}", template.as_str());

            let text = rendered_text(&invoice, template);
            let upper = text.to_uppercase();
            assert!(text.contains("INV-20260410-314"), "{}", template.as_str());
            assert!(upper.contains("TAMARACK OUTFITTERS"), "{}", template.as_str());
            assert!(text.contains("$235.17"), "{}", template.as_str());
            assert!(text.contains("WPEG.app"), "{}", template.as_str());
        }
    }

    #[test]
    fn test_selected_template_drives_rendering() {
        let mut editor = create_test_editor();
        editor.set_template(TemplateId::Pastel);
        let invoice = editor.invoice().clone();

        let selected = invoiceflow::render(&invoice, invoice.template);
        let pastel = invoiceflow::render(&invoice, TemplateId::Pastel);
        assert_eq!(selected, pastel);
    }

    #[test]
    fn test_unknown_selector_falls_back_to_classic() {
        let invoice = create_test_editor().invoice().clone();
        let fallback = invoiceflow::render_named(&invoice, "letterpress");
        let classic = invoiceflow::render(&invoice, TemplateId::Classic);
        assert_eq!(fallback, classic);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let invoice = create_test_editor().invoice().clone();
        for template in TemplateId::all() {
            let first = invoiceflow::render(&invoice, template);
            let second = invoiceflow::render(&invoice, template);
            assert_eq!(first, second, "{}", template.as_str());
        }
    }

    #[test]
    fn test_persisted_invoice_renders_identically() {
        let dir = scratch_dir("render");
        let store = InvoiceStore::open(&dir);
        let saved = create_test_editor().save(&store).unwrap();

        let loaded = store.load_invoice(saved.id).unwrap();
        assert_eq!(
            invoiceflow::render(&saved, saved.template),
            invoiceflow::render(&loaded, loaded.template)
        );

        let _ = std::fs::remove_dir_all(dir);
    }
}

// ============= SOURCE WRITER TESTS =============
mod writer_tests {
    use super::*;
    use invoiceflow::generators::typst::{write_document, AssetMap};

    #[test]
    fn test_writer_lays_out_the_reference_page() {
        let invoice = create_test_editor().invoice().clone();
        let tree = invoiceflow::render(&invoice, TemplateId::Classic);
        let source = write_document(&tree, &AssetMap::new());

        assert!(source.contains("width: 800pt"));
        assert!(source.contains("height: auto"));
        assert!(source.contains(&format!("title: \"Invoice {}\"", invoice.invoice_number)));
    }

    #[test]
    fn test_invoice_text_survives_into_source() {
        let invoice = create_test_editor().invoice().clone();
        let source = write_document(
            &invoiceflow::render(&invoice, TemplateId::Minimalist),
            &AssetMap::new(),
        );

        assert!(source.contains("Tamarack Outfitters"));
        assert!(source.contains("$235.17"));
        assert!(source.contains("Site audit"));
    }

    #[test]
    fn test_unmaterialized_logo_becomes_a_placeholder() {
        let mut editor = create_test_editor();
        let mut business = create_test_business();
        business.logo = Some("data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==".to_string());
        editor.set_business_info(business);
        let invoice = editor.invoice().clone();

        let source = write_document(
            &invoiceflow::render(&invoice, TemplateId::Classic),
            &AssetMap::new(),
        );
        assert!(source.contains("rect("));
        assert!(!source.contains("base64"));
    }
}
