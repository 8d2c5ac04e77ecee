use crate::document::{
    cell, Align, Block, Boxed, Color, Columns, DocumentTree, FontWeight, ImageBlock, Paragraph,
    Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x5f, 0x63, 0x68);
const DARK: Color = Color::rgb(0x1e, 0x29, 0x3b);
const ROSE: Color = Color::rgb(0xf4, 0x3f, 0x5e);
const SKY: Color = Color::rgb(0x02, 0x84, 0xc7);
const FOG: Color = Color::rgb(0x94, 0xa3, 0xb8);
const MINT: Color = Color::rgb(0xf0, 0xfd, 0xf4);
const ICE: Color = Color::rgb(0xef, 0xf6, 0xff);
const BUTTER: Color = Color::rgb(0xff, 0xfb, 0xdf);
const GOLDENROD: Color = Color::rgb(0xca, 0x8a, 0x04);

/// Soft pastel cards and a buttery total chip.
pub struct PastelTemplate;

impl InvoiceTemplate for PastelTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(14.0, INK).font("Quicksand");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());
        tree.padding = 50.0;

        // Header.
        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 120.0, 120.0).radius(12.0).into_block());
            identity.push(Block::spacer(10.0));
        }
        identity.push(
            Paragraph::text(&invoice.business_info.name, TextStyle::new(32.0, ROSE).bold())
                .into_block(),
        );
        let meta = vec![
            Paragraph::text("Invoice", TextStyle::new(28.0, SKY).weight(FontWeight::Semibold).tracking(1.0))
                .align(Align::Right)
                .into_block(),
            Block::spacer(5.0),
            Paragraph::text(format!("#{}", invoice.invoice_number), TextStyle::new(14.0, FOG))
                .align(Align::Right)
                .into_block(),
        ];
        tree.push(
            Columns::new(30.0)
                .column(TrackSize::Fr(1.0), Align::Left, identity)
                .column(TrackSize::Fr(1.0), Align::Right, meta)
                .into_block(),
        );
        tree.push(Block::spacer(50.0));

        // Pastel party cards.
        tree.push(
            Columns::new(30.0)
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![party_card(
                        "BILLED BY",
                        Color::rgb(0x22, 0xc5, 0x5e),
                        MINT,
                        &invoice.business_info.name,
                        utils::business_compact_lines(&invoice.business_info),
                        &base,
                    )],
                )
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![party_card(
                        "BILLED TO",
                        Color::rgb(0x3b, 0x82, 0xf6),
                        ICE,
                        &invoice.client_info.name,
                        utils::client_contact_lines(&invoice.client_info),
                        &base,
                    )],
                )
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Dates strip.
        let strip_label = TextStyle::new(12.0, FOG).weight(FontWeight::Semibold);
        tree.push(
            Boxed::new()
                .fill(Color::rgb(0xf8, 0xfa, 0xfc))
                .radius(12.0)
                .inset(15.0)
                .block(
                    Columns::new(30.0)
                        .column(
                            TrackSize::Fr(1.0),
                            Align::Left,
                            vec![
                                Paragraph::text("DATE ISSUED", strip_label.clone()).into_block(),
                                Block::spacer(5.0),
                                Paragraph::text(
                                    utils::format_long_date(invoice.date),
                                    TextStyle::new(15.0, DARK).weight(FontWeight::Semibold),
                                )
                                .into_block(),
                            ],
                        )
                        .column(
                            TrackSize::Fr(1.0),
                            Align::Right,
                            vec![
                                Paragraph::text("DUE DATE", strip_label)
                                    .align(Align::Right)
                                    .into_block(),
                                Block::spacer(5.0),
                                Paragraph::text(
                                    utils::format_long_date(invoice.due_date),
                                    TextStyle::new(15.0, ROSE).weight(FontWeight::Semibold),
                                )
                                .align(Align::Right)
                                .into_block(),
                            ],
                        )
                        .into_block(),
                )
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Items.
        let header = TextStyle::new(13.0, FOG).bold();
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(90.0), Align::Center),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
        ])
        .inset(15.0)
        .header_rule(Stroke::solid(2.0, Color::rgb(0xe2, 0xe8, 0xf0)))
        .row_rule(Stroke::solid(1.0, Color::rgb(0xf1, 0xf5, 0xf9)))
        .header(vec![
            cell("ITEM", header.clone()),
            cell("QTY", header.clone()),
            cell("PRICE", header.clone()),
            cell("TOTAL", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, TextStyle::new(14.0, DARK).weight(FontWeight::Semibold)),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), TextStyle::new(14.0, DARK).bold()),
            ]);
        }
        tree.push(items.into_block());
        tree.push(Block::spacer(40.0));

        // Totals with the butter-yellow chip.
        let quiet = TextStyle::new(14.0, Color::rgb(0x64, 0x74, 0x8b));
        let mut totals = vec![layout::amount_row(
            "Subtotal",
            quiet.clone(),
            utils::format_currency(invoice.subtotal),
            quiet.clone().weight(FontWeight::Semibold),
        )];
        if invoice.tax_rate > 0.0 {
            totals.push(Block::spacer(10.0));
            totals.push(layout::amount_row(
                format!("Tax ({})", utils::format_percent(invoice.tax_rate)),
                quiet.clone(),
                utils::format_currency(invoice.tax_amount),
                quiet.weight(FontWeight::Semibold),
            ));
        }
        totals.push(Block::spacer(10.0));
        totals.push(
            Boxed::new()
                .fill(BUTTER)
                .radius(12.0)
                .inset(18.0)
                .block(layout::amount_row(
                    "Total Due",
                    TextStyle::new(18.0, GOLDENROD).bold(),
                    utils::format_currency(invoice.total),
                    TextStyle::new(22.0, GOLDENROD).weight(FontWeight::Black),
                ))
                .into_block(),
        );
        tree.push(layout::pin_right(300.0, totals));
        tree.push(Block::spacer(50.0));

        if let Some(notes) = &invoice.notes {
            tree.push(Block::divider(Stroke::dashed(2.0, Color::rgb(0xe2, 0xe8, 0xf0))));
            tree.push(Block::spacer(20.0));
            tree.push(
                Paragraph::text(notes, TextStyle::new(14.0, FOG))
                    .align(Align::Center)
                    .into_block(),
            );
            tree.push(Block::spacer(20.0));
        }

        tree.push(
            Paragraph::text(
                "Free Invoice by WPEG.app",
                TextStyle::new(11.0, ROSE).weight(FontWeight::Semibold),
            )
            .align(Align::Center)
            .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Pastel
    }

    fn name(&self) -> &str {
        "Pastel"
    }

    fn description(&self) -> &str {
        "Soft, friendly palette"
    }
}

fn party_card(
    heading: &str,
    heading_color: Color,
    fill: Color,
    name: &str,
    lines: Vec<String>,
    base: &TextStyle,
) -> Block {
    let mut card = Boxed::new()
        .fill(fill)
        .radius(20.0)
        .inset(25.0)
        .block(
            Paragraph::text(heading, TextStyle::new(12.0, heading_color).bold()).into_block(),
        )
        .block(Block::spacer(10.0))
        .block(
            Paragraph::text(name, TextStyle::new(16.0, DARK).weight(FontWeight::Semibold))
                .into_block(),
        )
        .block(Block::spacer(5.0));
    for line in &lines {
        card = card.block(Paragraph::text(line, base.clone()).into_block());
    }
    card.into_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_invoice;

    #[test]
    fn test_total_chip_uses_goldenrod() {
        let tree = PastelTemplate.build(&sample_invoice());
        let debug = format!("{:?}", tree);
        assert!(debug.contains("Total Due"));
        assert!(debug.contains("202, g: 138, b: 4"));
    }
}
