use crate::document::{
    cell, Align, Block, Borders, Boxed, Color, Columns, DocumentTree, FontWeight, ImageBlock,
    Paragraph, Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x1a, 0x1a, 0x1a);
const HEADLINE: Color = Color::rgb(0x0f, 0x17, 0x2a);
const ACCENT: Color = Color::rgb(0x63, 0x66, 0xf1);
const SECONDARY: Color = Color::rgb(0x10, 0xb9, 0x81);
const CARD: Color = Color::rgb(0xfa, 0xfa, 0xfa);
const MUTED: Color = Color::rgb(0x64, 0x74, 0x8b);
const BODY: Color = Color::rgb(0x37, 0x41, 0x51);

/// Indigo accents, rounded cards, a filled table header.
pub struct ModernTemplate;

impl InvoiceTemplate for ModernTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(15.0, INK).font("Inter");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());

        // Header row with an info card on the right.
        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 140.0, 90.0).into_block());
            identity.push(Block::spacer(20.0));
        }
        identity.push(
            Paragraph::text(
                &invoice.business_info.name,
                TextStyle::new(36.0, HEADLINE).bold().tracking(-0.9),
            )
            .into_block(),
        );

        let meta_label = TextStyle::new(14.0, Color::rgb(0x47, 0x55, 0x69));
        let mut card = Boxed::new()
            .fill(Color::rgb(0xf8, 0xfa, 0xfc))
            .radius(12.0)
            .inset(20.0);
        for (i, (label, value)) in [
            ("Invoice #:", invoice.invoice_number.clone()),
            ("Date:", utils::format_long_date(invoice.date)),
            ("Due Date:", utils::format_long_date(invoice.due_date)),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                card = card.block(Block::spacer(8.0));
            }
            card = card.block(
                Paragraph::text(label, meta_label.clone().weight(FontWeight::Semibold))
                    .span(format!(" {}", value), meta_label.clone())
                    .into_block(),
            );
        }
        let meta = vec![
            Paragraph::text("INVOICE", TextStyle::new(32.0, ACCENT).weight(FontWeight::Light))
                .align(Align::Right)
                .into_block(),
            Block::spacer(20.0),
            card.into_block(),
        ];

        tree.push(
            Columns::new(40.0)
                .column(TrackSize::Fr(1.0), Align::Left, identity)
                .column(TrackSize::Fr(1.0), Align::Right, meta)
                .into_block(),
        );
        tree.push(Block::spacer(30.0));
        tree.push(Block::divider(Stroke::solid(2.0, Color::rgb(0xf1, 0xf5, 0xf9))));
        tree.push(Block::spacer(60.0));

        // Party cards with a colored left edge.
        tree.push(
            Columns::new(40.0)
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![party_card(
                        "From",
                        &invoice.business_info.name,
                        utils::business_contact_lines(&invoice.business_info),
                        ACCENT,
                        &base,
                    )],
                )
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![party_card(
                        "To",
                        &invoice.client_info.name,
                        utils::client_contact_lines(&invoice.client_info),
                        SECONDARY,
                        &base,
                    )],
                )
                .into_block(),
        );
        tree.push(Block::spacer(50.0));

        // Items card.
        let header = TextStyle::new(15.0, Color::WHITE).weight(FontWeight::Semibold);
        let body = TextStyle::new(15.0, BODY);
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(100.0), Align::Center),
            TableColumn::new(TrackSize::Pt(120.0), Align::Right),
            TableColumn::new(TrackSize::Pt(120.0), Align::Right),
        ])
        .inset(20.0)
        .header_fill(ACCENT)
        .row_rule(Stroke::solid(1.0, Color::rgb(0xf1, 0xf5, 0xf9)))
        .header(vec![
            cell("Description", header.clone()),
            cell("Qty", header.clone()),
            cell("Rate", header.clone()),
            cell("Amount", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, body.clone()),
                cell(utils::format_quantity(item.quantity), body.clone()),
                cell(utils::format_currency(item.rate), body.clone()),
                cell(
                    utils::format_currency(item.amount),
                    TextStyle::new(15.0, HEADLINE).weight(FontWeight::Semibold),
                ),
            ]);
        }
        tree.push(Boxed::new().radius(16.0).block(items.into_block()).into_block());
        tree.push(Block::spacer(40.0));

        // Totals card.
        let label = TextStyle::new(15.0, MUTED);
        let value = TextStyle::new(15.0, HEADLINE).weight(FontWeight::Semibold);
        let mut card = Boxed::new().fill(CARD).radius(16.0).inset(30.0).block(
            layout::amount_row(
                "Subtotal",
                label.clone(),
                utils::format_currency(invoice.subtotal),
                value.clone(),
            ),
        );
        card = card
            .block(Block::spacer(12.0))
            .block(Block::divider(Stroke::solid(1.0, Color::rgb(0xe2, 0xe8, 0xf0))))
            .block(Block::spacer(12.0));
        if invoice.tax_rate > 0.0 {
            card = card
                .block(layout::amount_row(
                    format!("Tax ({})", utils::format_percent(invoice.tax_rate)),
                    label,
                    utils::format_currency(invoice.tax_amount),
                    value,
                ))
                .block(Block::spacer(12.0))
                .block(Block::divider(Stroke::solid(1.0, Color::rgb(0xe2, 0xe8, 0xf0))))
                .block(Block::spacer(12.0));
        }
        let grand = TextStyle::new(20.0, ACCENT).bold();
        card = card.block(Block::spacer(8.0)).block(layout::amount_row(
            "Total",
            grand.clone(),
            utils::format_currency(invoice.total),
            grand,
        ));
        tree.push(layout::pin_right(350.0, vec![card.into_block()]));
        tree.push(Block::spacer(40.0));

        // Notes card.
        if let Some(notes) = &invoice.notes {
            tree.push(
                Boxed::new()
                    .fill(CARD)
                    .radius(16.0)
                    .inset(30.0)
                    .block(
                        Paragraph::text("Notes", TextStyle::new(18.0, HEADLINE).weight(FontWeight::Semibold))
                            .into_block(),
                    )
                    .block(Block::spacer(15.0))
                    .block(Paragraph::text(notes, TextStyle::new(15.0, MUTED)).into_block())
                    .into_block(),
            );
        }

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
        TemplateId::Modern
    }

    fn name(&self) -> &str {
        "Modern"
    }

    fn description(&self) -> &str {
        "Sleek, minimalist style"
    }
}

fn party_card(
    heading: &str,
    name: &str,
    lines: Vec<String>,
    edge: Color,
    base: &TextStyle,
) -> Block {
    let mut card = Boxed::new()
        .fill(CARD)
        .radius(16.0)
        .inset(30.0)
        .borders(Borders::left(Stroke::solid(4.0, edge)))
        .block(
            Paragraph::text(heading, TextStyle::new(18.0, HEADLINE).weight(FontWeight::Semibold))
                .into_block(),
        )
        .block(Block::spacer(20.0))
        .block(
            Paragraph::text(name, TextStyle::new(15.0, HEADLINE).weight(FontWeight::Semibold))
                .into_block(),
        );
    for line in &lines {
        card = card.block(Paragraph::text(line, base.clone().color(BODY)).into_block());
    }
    card.into_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_invoice;

    #[test]
    fn test_party_cards_use_distinct_edges() {
        let tree = ModernTemplate.build(&sample_invoice());
        let debug = format!("{:?}", tree);
        assert!(debug.contains("Inter"));
        let accents = debug.matches("99, g: 102, b: 241").count();
        assert!(accents >= 2, "accent color should mark header and cards");
    }
}
