use crate::document::{
    cell, Align, Block, Borders, Boxed, Color, Columns, DocumentTree, FontWeight, ImageBlock,
    Paragraph, Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x1e, 0x1b, 0x4b);
const INDIGO: Color = Color::rgb(0x31, 0x2e, 0x81);
const PERIWINKLE: Color = Color::rgb(0xc7, 0xd2, 0xfe);
const CREAM: Color = Color::rgb(0xfe, 0xfc, 0xe8);
const PINK: Color = Color::rgb(0xf4, 0x72, 0xb6);
const BLUE: Color = Color::rgb(0x38, 0xbd, 0xf8);
const VIOLET: Color = Color::rgb(0x63, 0x66, 0xf1);

/// Rounded cards on cream, saturated accent colors throughout.
pub struct CreativeTemplate;

impl InvoiceTemplate for CreativeTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(14.0, INK).font("Poppins");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());
        tree.background = Some(CREAM);
        tree.frame = Borders::all(Stroke::solid(8.0, PERIWINKLE));
        tree.frame_radius = 20.0;

        // Big centered headline with a pill for the number.
        if let Some(logo) = &invoice.business_info.logo {
            tree.push(ImageBlock::new(logo, 120.0, 120.0).radius(60.0).align(Align::Center).into_block());
            tree.push(Block::spacer(20.0));
        }
        tree.push(
            Paragraph::text(
                invoice.business_info.name.to_uppercase(),
                TextStyle::new(42.0, INDIGO).weight(FontWeight::Black),
            )
            .align(Align::Center)
            .into_block(),
        );
        tree.push(Block::spacer(15.0));
        tree.push(
            Columns::new(0.0)
                .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
                .column(
                    TrackSize::Auto,
                    Align::Center,
                    vec![Boxed::new()
                        .width(TrackSize::Auto)
                        .fill(PERIWINKLE)
                        .radius(20.0)
                        .inset(10.0)
                        .block(
                            Paragraph::text(
                                format!("INVOICE {}", invoice.invoice_number),
                                TextStyle::new(16.0, INDIGO).bold().tracking(2.0),
                            )
                            .into_block(),
                        )
                        .into_block()],
                )
                .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
                .into_block(),
        );
        tree.push(Block::spacer(50.0));

        // Parties on one white card.
        let heading = TextStyle::new(16.0, INDIGO).weight(FontWeight::Black);
        let mut from = vec![
            Paragraph::text("FROM", heading.clone()).into_block(),
            Block::spacer(15.0),
            Paragraph::text(&invoice.business_info.name, base.clone().bold()).into_block(),
        ];
        from.extend(layout::line_stack(
            &utils::business_compact_lines(&invoice.business_info),
            &base,
        ));
        let mut to = vec![
            Paragraph::text("TO", heading).into_block(),
            Block::spacer(15.0),
            Paragraph::text(&invoice.client_info.name, base.clone().bold()).into_block(),
        ];
        to.extend(layout::line_stack(&utils::client_contact_lines(&invoice.client_info), &base));
        tree.push(
            Boxed::new()
                .fill(Color::WHITE)
                .radius(15.0)
                .inset(30.0)
                .block(
                    Columns::new(40.0)
                        .column(TrackSize::Fr(1.0), Align::Left, from)
                        .column(TrackSize::Fr(1.0), Align::Left, to)
                        .into_block(),
                )
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Two date cards with colored underlines.
        tree.push(
            Columns::new(20.0)
                .column(
                    TrackSize::Fr(1.0),
                    Align::Center,
                    vec![date_card("INVOICE DATE", utils::format_long_date(invoice.date), PINK)],
                )
                .column(
                    TrackSize::Fr(1.0),
                    Align::Center,
                    vec![date_card("DUE DATE", utils::format_long_date(invoice.due_date), BLUE)],
                )
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Items card.
        let header = TextStyle::new(13.0, INDIGO).bold();
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(90.0), Align::Center),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
        ])
        .inset(15.0)
        .header_fill(Color::rgb(0xe0, 0xe7, 0xff))
        .zebra(Color::rgb(0xf8, 0xfa, 0xfc))
        .header(vec![
            cell("DESCRIPTION", header.clone()),
            cell("QTY", header.clone()),
            cell("RATE", header.clone()),
            cell("AMOUNT", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, base.clone().weight(FontWeight::Medium)),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), base.clone().bold()),
            ]);
        }
        tree.push(
            Boxed::new()
                .fill(Color::WHITE)
                .radius(15.0)
                .block(items.into_block())
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Totals end in an indigo pill.
        let mut totals = vec![layout::amount_row(
            "Subtotal",
            base.clone().weight(FontWeight::Semibold),
            utils::format_currency(invoice.subtotal),
            base.clone(),
        )];
        if invoice.tax_rate > 0.0 {
            totals.push(Block::spacer(10.0));
            totals.push(layout::amount_row(
                format!("Tax ({})", utils::format_percent(invoice.tax_rate)),
                base.clone().weight(FontWeight::Semibold),
                utils::format_currency(invoice.tax_amount),
                base.clone(),
            ));
        }
        totals.push(Block::spacer(10.0));
        totals.push(
            Boxed::new()
                .fill(INDIGO)
                .radius(15.0)
                .inset(20.0)
                .block(layout::amount_row(
                    "TOTAL",
                    TextStyle::new(22.0, Color::WHITE).weight(FontWeight::Black),
                    utils::format_currency(invoice.total),
                    TextStyle::new(22.0, Color::rgb(0x6e, 0xe7, 0xb7)).weight(FontWeight::Black),
                ))
                .into_block(),
        );
        tree.push(layout::pin_right(320.0, totals));
        tree.push(Block::spacer(50.0));

        if let Some(notes) = &invoice.notes {
            tree.push(
                Boxed::new()
                    .fill(Color::rgb(0xe0, 0xe7, 0xff))
                    .radius(12.0)
                    .inset(20.0)
                    .borders(Borders::left(Stroke::solid(4.0, VIOLET)))
                    .block(Paragraph::text("Notes:", base.clone().bold().color(INDIGO)).into_block())
                    .block(Block::spacer(5.0))
                    .block(Paragraph::text(notes, base.clone().color(INDIGO)).into_block())
                    .into_block(),
            );
            tree.push(Block::spacer(20.0));
        }

        tree.push(
            Paragraph::text(
                "Free Invoice by WPEG.app",
                TextStyle::new(10.0, VIOLET).weight(FontWeight::Semibold),
            )
            .align(Align::Center)
            .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn name(&self) -> &str {
        "Creative"
    }

    fn description(&self) -> &str {
        "Playful, colorful layout"
    }
}

fn date_card(label: &str, value: String, underline: Color) -> Block {
    Boxed::new()
        .fill(Color::WHITE)
        .radius(12.0)
        .inset(15.0)
        .borders(Borders::bottom(Stroke::solid(4.0, underline)))
        .block(
            Paragraph::text(label, TextStyle::new(12.0, VIOLET).bold())
                .align(Align::Center)
                .into_block(),
        )
        .block(Block::spacer(5.0))
        .block(
            Paragraph::text(value, TextStyle::new(16.0, INK).weight(FontWeight::Semibold))
                .align(Align::Center)
                .into_block(),
        )
        .into_block()
}
