use std::path::Path;

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use invoiceflow::models::{BusinessInfo, ClientInfo, TemplateId};
use invoiceflow::{
    available_templates, render, save_download, validate_invoice, InvoiceEditor, InvoiceStore,
    PdfExporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    println!("InvoiceFlow demo");
    println!("================\n");

    let store = InvoiceStore::open_default();

    // Returning users start from their saved letterhead.
    let profile = store.load_business_profile();
    let mut editor = InvoiceEditor::new(Local::now().date_naive(), profile);

    editor.set_business_info(BusinessInfo {
        name: "North Wind Studio".to_string(),
        email: "billing@northwindstudio.ca".to_string(),
        phone: Some("+1 204 555 0134".to_string()),
        address: Some("12 Portage Ave\nWinnipeg, MB R3B 2B9".to_string()),
        website: Some("northwindstudio.ca".to_string()),
        logo: None,
    });
    editor.set_client_info(ClientInfo {
        name: "Prairie Supply Co.".to_string(),
        email: "accounts@prairiesupply.ca".to_string(),
        phone: None,
        address: Some("88 Main St, Brandon, MB".to_string()),
    });

    let first = editor.invoice().items[0].id;
    editor.set_item_description(first, "Brand design");
    editor.set_item_quantity(first, 2.0);
    editor.set_item_rate(first, 50.0);

    let second = editor.add_item();
    editor.set_item_description(second, "Hosting setup");
    editor.set_item_quantity(second, 1.0);
    editor.set_item_rate(second, 25.5);

    editor.set_notes("Payment due within 30 days.");
    editor.set_template(TemplateId::Modern);

    // Exports are gated on a clean validation pass.
    let issues = validate_invoice(editor.invoice());
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("  ✗ {}: {}", issue.field, issue.message);
        }
        anyhow::bail!("invoice failed validation");
    }

    let invoice = editor.save(&store)?;
    println!(
        "✓ Saved {} for {} (total ${:.2})",
        invoice.invoice_number, invoice.client_info.name, invoice.total
    );

    let exporter = PdfExporter::new();
    let bytes = exporter.export_invoice(&invoice).await?;
    let path = save_download(&bytes, &invoice.invoice_number, Path::new("output")).await?;
    println!("✓ Exported {}", path.display());

    println!("\nRendering every layout variant...");
    for (id, name, _) in available_templates() {
        let tree = render(&invoice, id);
        let bytes = exporter.render_to_binary(&tree).await?;
        let path = save_download(&bytes, id.as_str(), Path::new("output/previews")).await?;
        println!("  ✓ {:<12} {}", name, path.display());
    }

    println!("\n{} invoice(s) on file", store.list_invoices().len());
    Ok(())
}
