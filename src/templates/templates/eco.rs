use crate::document::{
    cell, Align, Block, Borders, Boxed, Color, Columns, DocumentTree, ImageBlock, Paragraph,
    Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const MOSS: Color = Color::rgb(0x3f, 0x62, 0x12);
const LEAF: Color = Color::rgb(0x65, 0xa3, 0x0d);
const FERN: Color = Color::rgb(0x4d, 0x7c, 0x0f);
const LIME: Color = Color::rgb(0x84, 0xcc, 0x16);
const SPROUT: Color = Color::rgb(0xd9, 0xf9, 0x9d);
const FIELD: Color = Color::rgb(0xf7, 0xfe, 0xe7);

/// Green letterhead with a leafy palette and a closing banner.
pub struct EcoTemplate;

impl InvoiceTemplate for EcoTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(15.0, MOSS).font("Georgia");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());
        tree.background = Some(FIELD);
        tree.frame = Borders::top(Stroke::solid(15.0, LEAF));
        tree.padding = 50.0;

        // Header.
        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 130.0, 130.0).into_block());
            identity.push(Block::spacer(15.0));
        }
        identity.push(
            Paragraph::text(&invoice.business_info.name, TextStyle::new(38.0, FERN).italic())
                .into_block(),
        );

        let label = TextStyle::new(14.0, LEAF);
        let mut meta = vec![
            Paragraph::text("INVOICE", TextStyle::new(20.0, LEAF).tracking(2.0))
                .align(Align::Right)
                .into_block(),
            Block::spacer(15.0),
        ];
        for (name, value) in [
            ("Number:", invoice.invoice_number.clone()),
            ("Date:", utils::format_long_date(invoice.date)),
            ("Due:", utils::format_long_date(invoice.due_date)),
        ] {
            meta.push(
                Paragraph::text(name, label.clone())
                    .span(format!(" {}", value), base.clone().bold())
                    .align(Align::Right)
                    .into_block(),
            );
            meta.push(Block::spacer(5.0));
        }
        tree.push(
            Columns::new(30.0)
                .column(TrackSize::Fr(1.0), Align::Left, identity)
                .column(TrackSize::Fr(1.0), Align::Right, meta)
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Parties between sprout-green rules.
        tree.push(Block::divider(Stroke::solid(1.0, SPROUT)));
        tree.push(Block::spacer(30.0));
        tree.push(
            Columns::new(0.0)
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![Boxed::new()
                        .borders(Borders {
                            right: Some(Stroke::solid(1.0, SPROUT)),
                            ..Borders::none()
                        })
                        .inset(20.0)
                        .block(party(
                            "From:",
                            &invoice.business_info.name,
                            utils::business_compact_lines(&invoice.business_info),
                        ))
                        .into_block()],
                )
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![Boxed::new()
                        .inset(20.0)
                        .block(party(
                            "To:",
                            &invoice.client_info.name,
                            utils::client_contact_lines(&invoice.client_info),
                        ))
                        .into_block()],
                )
                .into_block(),
        );
        tree.push(Block::spacer(30.0));
        tree.push(Block::divider(Stroke::solid(1.0, SPROUT)));
        tree.push(Block::spacer(40.0));

        // Items.
        let header = TextStyle::new(15.0, LEAF).italic();
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(90.0), Align::Center),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
        ])
        .inset(12.0)
        .header_rule(Stroke::solid(2.0, LIME))
        .row_rule(Stroke::solid(1.0, SPROUT))
        .header(vec![
            cell("Description", header.clone()),
            cell("Hours/Qty", header.clone()),
            cell("Rate", header.clone()),
            cell("Amount", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, TextStyle::new(16.0, MOSS)),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), base.clone().bold()),
            ]);
        }
        tree.push(items.into_block());
        tree.push(Block::spacer(40.0));

        // Totals.
        let mut totals = vec![
            layout::amount_row(
                "Subtotal:",
                base.clone(),
                utils::format_currency(invoice.subtotal),
                base.clone(),
            ),
            Block::spacer(10.0),
            Block::divider(Stroke::solid(1.0, SPROUT)),
            Block::spacer(10.0),
        ];
        if invoice.tax_rate > 0.0 {
            totals.push(layout::amount_row(
                format!("Tax ({}):", utils::format_percent(invoice.tax_rate)),
                base.clone(),
                utils::format_currency(invoice.tax_amount),
                base.clone(),
            ));
            totals.push(Block::spacer(10.0));
            totals.push(Block::divider(Stroke::solid(1.0, SPROUT)));
            totals.push(Block::spacer(10.0));
        }
        totals.push(Block::spacer(10.0));
        totals.push(layout::amount_row(
            "Total Due:",
            TextStyle::new(24.0, MOSS).bold(),
            utils::format_currency(invoice.total),
            TextStyle::new(24.0, MOSS).bold(),
        ));
        tree.push(layout::pin_right(320.0, totals));
        tree.push(Block::spacer(50.0));

        if let Some(notes) = &invoice.notes {
            tree.push(
                Boxed::new()
                    .fill(Color::rgb(0xec, 0xfc, 0xcb))
                    .radius(8.0)
                    .inset(25.0)
                    .block(Paragraph::text("Notes:", TextStyle::new(15.0, FERN).bold()).into_block())
                    .block(Block::spacer(10.0))
                    .block(Paragraph::text(notes, TextStyle::new(15.0, MOSS)).into_block())
                    .into_block(),
            );
            tree.push(Block::spacer(20.0));
        }

        tree.push(
            Paragraph::text("Powered by WPEG.app", TextStyle::new(10.0, LEAF).italic())
                .align(Align::Center)
                .into_block(),
        );
        tree.push(Block::spacer(30.0));
        tree.push(
            Boxed::new()
                .fill(LEAF)
                .inset(15.0)
                .block(
                    Paragraph::text(
                        "Thank you for your business. Please consider the environment before printing.",
                        TextStyle::new(13.0, Color::WHITE).italic(),
                    )
                    .align(Align::Center)
                    .into_block(),
                )
                .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Eco
    }

    fn name(&self) -> &str {
        "Eco"
    }

    fn description(&self) -> &str {
        "Earthy green letterhead"
    }
}

fn party(heading: &str, name: &str, lines: Vec<String>) -> Block {
    let mut blocks = vec![
        Paragraph::text(heading, TextStyle::new(13.0, LIME).italic()).into_block(),
        Block::spacer(10.0),
        Paragraph::text(name, TextStyle::new(18.0, MOSS).bold()).into_block(),
        Block::spacer(5.0),
    ];
    blocks.extend(layout::line_stack(&lines, &TextStyle::new(15.0, FERN)));
    Columns::new(0.0)
        .column(TrackSize::Fr(1.0), Align::Left, blocks)
        .into_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_invoice;

    #[test]
    fn test_banner_and_top_rule() {
        let tree = EcoTemplate.build(&sample_invoice());
        assert_eq!(tree.frame.top, Some(Stroke::solid(15.0, LEAF)));
        let debug = format!("{:?}", tree);
        assert!(debug.contains("consider the environment"));
        assert!(debug.contains("Powered by WPEG.app"));
    }
}
