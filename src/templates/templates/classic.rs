use crate::document::{
    cell, Align, Block, Color, Columns, DocumentTree, ImageBlock, Paragraph, Stroke, Table,
    TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x33, 0x33, 0x33);
const HEADING: Color = Color::rgb(0x1e, 0x29, 0x3b);
const ACCENT: Color = Color::rgb(0x08, 0x91, 0xb2);
const RULE: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const LABEL: Color = Color::rgb(0x37, 0x41, 0x51);
const MUTED: Color = Color::rgb(0x6b, 0x72, 0x80);

/// The default look: dark text, cyan accents, a fully ruled items grid.
pub struct ClassicTemplate;

impl InvoiceTemplate for ClassicTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(14.0, INK).font("Arial");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());

        // Header: identity left, number and dates right.
        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 120.0, 80.0).into_block());
            identity.push(Block::spacer(10.0));
        }
        identity.push(
            Paragraph::text(&invoice.business_info.name, TextStyle::new(32.0, HEADING).bold())
                .into_block(),
        );

        let mut meta = vec![
            Paragraph::text("INVOICE", TextStyle::new(28.0, ACCENT).bold())
                .align(Align::Right)
                .into_block(),
            Block::spacer(10.0),
        ];
        for (label, value) in [
            ("Invoice #:", invoice.invoice_number.clone()),
            ("Date:", utils::format_long_date(invoice.date)),
            ("Due Date:", utils::format_long_date(invoice.due_date)),
        ] {
            meta.push(
                Paragraph::text(label, base.clone().bold())
                    .span(format!(" {}", value), base.clone())
                    .align(Align::Right)
                    .into_block(),
            );
            meta.push(Block::spacer(5.0));
        }

        tree.push(
            Columns::new(20.0)
                .column(TrackSize::Fr(1.0), Align::Left, identity)
                .column(TrackSize::Fr(1.0), Align::Right, meta)
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // From / Bill To.
        tree.push(
            Columns::new(40.0)
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    party(
                        "From:",
                        &invoice.business_info.name,
                        utils::business_contact_lines(&invoice.business_info),
                        &base,
                    ),
                )
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    party(
                        "Bill To:",
                        &invoice.client_info.name,
                        utils::client_contact_lines(&invoice.client_info),
                        &base,
                    ),
                )
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Items.
        let header = base.clone().bold();
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(80.0), Align::Center),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
        ])
        .inset(12.0)
        .grid(Stroke::solid(1.0, RULE))
        .header_fill(Color::rgb(0xf8, 0xfa, 0xfc))
        .header(vec![
            cell("Description", header.clone()),
            cell("Qty", header.clone()),
            cell("Rate", header.clone()),
            cell("Amount", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, base.clone()),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), base.clone()),
            ]);
        }
        tree.push(items.into_block());
        tree.push(Block::spacer(30.0));

        // Totals, pinned right.
        let mut totals = vec![
            layout::amount_row(
                "Subtotal:",
                base.clone(),
                utils::format_currency(invoice.subtotal),
                base.clone(),
            ),
            Block::spacer(8.0),
            Block::divider(Stroke::solid(1.0, RULE)),
            Block::spacer(8.0),
        ];
        if invoice.tax_rate > 0.0 {
            totals.push(layout::amount_row(
                format!("Tax ({}):", utils::format_percent(invoice.tax_rate)),
                base.clone(),
                utils::format_currency(invoice.tax_amount),
                base.clone(),
            ));
            totals.push(Block::spacer(8.0));
            totals.push(Block::divider(Stroke::solid(1.0, RULE)));
            totals.push(Block::spacer(8.0));
        }
        let grand = TextStyle::new(18.0, ACCENT).bold();
        totals.push(layout::amount_row(
            "Total:",
            grand.clone(),
            utils::format_currency(invoice.total),
            grand,
        ));
        totals.push(Block::spacer(12.0));
        totals.push(Block::divider(Stroke::solid(2.0, ACCENT)));
        tree.push(layout::pin_right(300.0, totals));

        // Notes.
        if let Some(notes) = &invoice.notes {
            tree.push(Block::spacer(40.0));
            tree.push(Paragraph::text("Notes:", TextStyle::new(16.0, LABEL).bold()).into_block());
            tree.push(Block::spacer(10.0));
            tree.push(Paragraph::text(notes, TextStyle::new(14.0, MUTED)).into_block());
        }

        // Footer.
        tree.push(Block::spacer(60.0));
        tree.push(Block::divider(Stroke::solid(1.0, Color::rgb(0xe5, 0xe7, 0xeb))));
        tree.push(Block::spacer(20.0));
        tree.push(
            Paragraph::text("Free Invoice by WPEG.app", TextStyle::new(10.0, Color::rgb(0x9c, 0xa3, 0xaf)))
                .align(Align::Center)
                .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn name(&self) -> &str {
        "Classic"
    }

    fn description(&self) -> &str {
        "Traditional, clean design"
    }
}

fn party(heading: &str, name: &str, lines: Vec<String>, base: &TextStyle) -> Vec<Block> {
    let mut blocks = vec![
        Paragraph::text(heading, TextStyle::new(16.0, LABEL).bold()).into_block(),
        Block::spacer(10.0),
        Paragraph::text(name, base.clone().bold()).into_block(),
    ];
    blocks.extend(layout::line_stack(&lines, base));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_invoice;

    #[test]
    fn test_logo_block_only_when_present() {
        let mut invoice = sample_invoice();
        let without = ClassicTemplate.build(&invoice);
        assert!(!format!("{:?}", without).contains("Image"));

        invoice.business_info.logo =
            Some("data:image/png;base64,iVBORw0KGgo=".to_string());
        let with = ClassicTemplate.build(&invoice);
        assert!(format!("{:?}", with).contains("data:image/png;base64,iVBORw0KGgo="));
    }

    #[test]
    fn test_title_carries_invoice_number() {
        let invoice = sample_invoice();
        let tree = ClassicTemplate.build(&invoice);
        assert_eq!(tree.title, "Invoice INV-20260115-042");
    }
}
