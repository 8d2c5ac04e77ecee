use crate::document::{
    cell, Align, Block, Borders, Boxed, Color, Columns, DocumentTree, ImageBlock, Paragraph,
    Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x1e, 0x29, 0x3b);
const FAINT: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const SHADE: Color = Color::rgb(0xf8, 0xfa, 0xfc);

/// Serif letterhead with heavy black rules and boxed sections.
pub struct ProfessionalTemplate;

impl InvoiceTemplate for ProfessionalTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(14.0, INK).font("Times New Roman");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());

        // Letterhead.
        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 120.0, 80.0).into_block());
            identity.push(Block::spacer(15.0));
        }
        identity.push(
            Paragraph::text(
                invoice.business_info.name.to_uppercase(),
                TextStyle::new(28.0, INK).bold().tracking(2.0),
            )
            .into_block(),
        );
        tree.push(
            Columns::new(30.0)
                .column(TrackSize::Fr(3.0), Align::Left, identity)
                .column(
                    TrackSize::Fr(2.0),
                    Align::Right,
                    vec![Paragraph::text("INVOICE", TextStyle::new(36.0, INK).bold().tracking(3.0))
                        .align(Align::Right)
                        .into_block()],
                )
                .into_block(),
        );
        tree.push(Block::spacer(20.0));
        tree.push(Block::divider(Stroke::solid(3.0, INK)));
        tree.push(Block::spacer(40.0));

        // Invoice details, ruled like a ledger.
        let mut details = Vec::new();
        let rows = [
            ("Invoice #:", invoice.invoice_number.clone()),
            ("Issue Date:", utils::format_long_date(invoice.date)),
            ("Due Date:", utils::format_long_date(invoice.due_date)),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            details.push(
                Columns::new(0.0)
                    .column(
                        TrackSize::Pt(100.0),
                        Align::Left,
                        vec![Paragraph::text(label, base.clone().bold()).into_block()],
                    )
                    .column(
                        TrackSize::Fr(1.0),
                        Align::Left,
                        vec![Paragraph::text(value, base.clone()).into_block()],
                    )
                    .into_block(),
            );
            if i < 2 {
                details.push(Block::spacer(8.0));
                details.push(Block::divider(Stroke::solid(1.0, FAINT)));
                details.push(Block::spacer(8.0));
            }
        }
        tree.push(
            Columns::new(0.0)
                .column(TrackSize::Pt(240.0), Align::Left, details)
                .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Remit To / Bill To in bordered panels.
        let present = |value: &Option<String>| {
            value.as_deref().filter(|value| !value.trim().is_empty()).map(str::to_string)
        };

        let mut remit = vec![
            Paragraph::text(&invoice.business_info.name, base.clone().bold()).into_block(),
        ];
        if let Some(address) = present(&invoice.business_info.address) {
            remit.push(Paragraph::text(address, base.clone()).into_block());
        }
        if let Some(phone) = present(&invoice.business_info.phone) {
            remit.push(Paragraph::text(format!("Tel: {}", phone), base.clone()).into_block());
        }
        remit.push(
            Paragraph::text(format!("Email: {}", invoice.business_info.email), base.clone())
                .into_block(),
        );
        if let Some(website) = present(&invoice.business_info.website) {
            remit.push(Paragraph::text(format!("Web: {}", website), base.clone()).into_block());
        }

        let mut bill = vec![
            Paragraph::text(&invoice.client_info.name, base.clone().bold()).into_block(),
        ];
        if let Some(address) = present(&invoice.client_info.address) {
            bill.push(Paragraph::text(address, base.clone()).into_block());
        }
        if let Some(phone) = present(&invoice.client_info.phone) {
            bill.push(Paragraph::text(format!("Tel: {}", phone), base.clone()).into_block());
        }
        bill.push(
            Paragraph::text(format!("Email: {}", invoice.client_info.email), base.clone())
                .into_block(),
        );

        tree.push(
            Columns::new(30.0)
                .column(TrackSize::Fr(1.0), Align::Left, vec![panel("Remit To:", remit)])
                .column(TrackSize::Fr(1.0), Align::Left, vec![panel("Bill To:", bill)])
                .into_block(),
        );
        tree.push(Block::spacer(50.0));

        // Items, zebra-striped inside a heavy frame.
        let header = TextStyle::new(14.0, Color::WHITE).bold().tracking(1.0);
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(80.0), Align::Center),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
        ])
        .inset(15.0)
        .header_fill(INK)
        .row_rule(Stroke::solid(1.0, INK))
        .zebra(SHADE)
        .header(vec![
            cell("DESCRIPTION OF SERVICES/PRODUCTS", header.clone()),
            cell("QTY", header.clone()),
            cell("UNIT PRICE", header.clone()),
            cell("TOTAL", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, base.clone()),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), base.clone().bold()),
            ]);
        }
        tree.push(
            Boxed::new()
                .borders(Borders::all(Stroke::solid(2.0, INK)))
                .block(items.into_block())
                .into_block(),
        );
        tree.push(Block::spacer(30.0));

        // Totals panel ending in a black band.
        let line = base.clone().bold();
        let mut totals = Boxed::new().borders(Borders::all(Stroke::solid(2.0, INK))).block(
            Boxed::new().fill(SHADE).inset(12.0).block(layout::amount_row(
                "SUBTOTAL:",
                line.clone(),
                utils::format_currency(invoice.subtotal),
                line.clone(),
            ))
            .into_block(),
        );
        totals = totals.block(Block::divider(Stroke::solid(1.0, INK)));
        if invoice.tax_rate > 0.0 {
            totals = totals
                .block(
                    Boxed::new().fill(SHADE).inset(12.0).block(layout::amount_row(
                        format!("TAX ({}):", utils::format_percent(invoice.tax_rate)),
                        line.clone(),
                        utils::format_currency(invoice.tax_amount),
                        line,
                    ))
                    .into_block(),
                )
                .block(Block::divider(Stroke::solid(1.0, INK)));
        }
        let band = TextStyle::new(18.0, Color::WHITE).bold().tracking(1.0);
        totals = totals.block(
            Boxed::new().fill(INK).inset(20.0).block(layout::amount_row(
                "TOTAL DUE:",
                band.clone(),
                utils::format_currency(invoice.total),
                band,
            ))
            .into_block(),
        );
        tree.push(layout::pin_right(300.0, vec![totals.into_block()]));

        // Terms.
        if let Some(notes) = &invoice.notes {
            tree.push(Block::spacer(50.0));
            tree.push(
                Boxed::new()
                    .borders(Borders::all(Stroke::solid(1.0, INK)))
                    .inset(25.0)
                    .block(
                        Paragraph::text(
                            "TERMS & CONDITIONS:",
                            TextStyle::new(16.0, INK).bold().tracking(1.0),
                        )
                        .into_block(),
                    )
                    .block(Block::spacer(15.0))
                    .block(Paragraph::text(notes, base.clone()).into_block())
                    .into_block(),
            );
        }

        tree.push(Block::spacer(40.0));
        tree.push(Block::divider(Stroke::solid(1.0, INK)));
        tree.push(Block::spacer(20.0));
        tree.push(
            Paragraph::text(
                "Thank you for your business. Payment is due within the terms specified above.",
                TextStyle::new(12.0, Color::rgb(0x64, 0x74, 0x8b)),
            )
            .align(Align::Center)
            .into_block(),
        );
        tree.push(Block::spacer(15.0));
        tree.push(
            Paragraph::text("Free Invoice by WPEG.app", TextStyle::new(10.0, Color::rgb(0x9c, 0xa3, 0xaf)))
                .align(Align::Center)
                .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn name(&self) -> &str {
        "Professional"
    }

    fn description(&self) -> &str {
        "Formal business style"
    }
}

fn panel(heading: &str, mut body: Vec<Block>) -> Block {
    let mut blocks = vec![
        Paragraph::text(heading.to_uppercase(), TextStyle::new(16.0, INK).bold().tracking(1.0))
            .into_block(),
        Block::spacer(8.0),
        Block::divider(Stroke::solid(1.0, INK)),
        Block::spacer(15.0),
    ];
    blocks.append(&mut body);
    let mut boxed = Boxed::new().borders(Borders::all(Stroke::solid(2.0, INK))).inset(25.0);
    for block in blocks {
        boxed = boxed.block(block);
    }
    boxed.into_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_invoice;

    #[test]
    fn test_contact_lines_carry_prefixes() {
        let tree = ProfessionalTemplate.build(&sample_invoice());
        let debug = format!("{:?}", tree);
        assert!(debug.contains("Tel: +1 204 555 0134"));
        assert!(debug.contains("Email: billing@northwindstudio.ca"));
        assert!(debug.contains("Web: northwindstudio.ca"));
    }

    #[test]
    fn test_headline_is_uppercased() {
        let tree = ProfessionalTemplate.build(&sample_invoice());
        assert!(format!("{:?}", tree).contains("NORTH WIND STUDIO"));
    }
}
