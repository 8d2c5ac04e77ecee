use crate::document::{
    cell, Align, Block, Borders, Boxed, Color, Columns, DocumentTree, FontWeight, ImageBlock,
    Paragraph, Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const HIGHLIGHT: Color = Color::rgb(0xfe, 0xf0, 0x8a);

/// Monospaced, four-point black borders, no subtlety anywhere.
pub struct BrutalistTemplate;

impl InvoiceTemplate for BrutalistTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let black = Color::BLACK;
        let base = TextStyle::new(14.0, black).font("Courier New");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());
        tree.padding = 30.0;
        tree.frame = Borders::all(Stroke::solid(4.0, black));

        // Masthead.
        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 150.0, 100.0).into_block());
            identity.push(Block::spacer(15.0));
        }
        identity.push(
            Paragraph::text(
                invoice.business_info.name.to_uppercase(),
                TextStyle::new(48.0, black).weight(FontWeight::Black).tracking(-2.0),
            )
            .into_block(),
        );

        let meta = vec![
            Boxed::new()
                .width(TrackSize::Auto)
                .fill(black)
                .inset(15.0)
                .block(
                    Paragraph::text(
                        format!("INVOICE_{}", invoice.invoice_number),
                        TextStyle::new(24.0, Color::WHITE).bold(),
                    )
                    .into_block(),
                )
                .into_block(),
            Block::spacer(15.0),
            Paragraph::text(
                format!("DATE: {}", utils::format_long_date(invoice.date)),
                TextStyle::new(16.0, black).bold(),
            )
            .align(Align::Right)
            .into_block(),
            Block::spacer(5.0),
            Paragraph::text(
                format!("DUE: {}", utils::format_long_date(invoice.due_date)),
                TextStyle::new(16.0, black).bold(),
            )
            .align(Align::Right)
            .into_block(),
        ];

        tree.push(
            Columns::new(20.0)
                .column(TrackSize::Fr(1.0), Align::Left, identity)
                .column(TrackSize::Auto, Align::Right, meta)
                .into_block(),
        );
        tree.push(Block::spacer(30.0));
        tree.push(Block::divider(Stroke::solid(4.0, black)));
        tree.push(Block::spacer(30.0));

        // Parties boxed in, split by a heavy rule.
        let from = party_cell(
            "/// FROM ///",
            &invoice.business_info.name,
            utils::business_compact_lines(&invoice.business_info),
            &base,
        );
        let to = party_cell(
            "/// TO ///",
            &invoice.client_info.name,
            utils::client_contact_lines(&invoice.client_info),
            &base,
        );
        tree.push(
            Boxed::new()
                .borders(Borders::all(Stroke::solid(4.0, black)))
                .block(
                    Columns::new(0.0)
                        .column(
                            TrackSize::Fr(1.0),
                            Align::Left,
                            vec![Boxed::new()
                                .borders(Borders {
                                    right: Some(Stroke::solid(4.0, black)),
                                    ..Borders::none()
                                })
                                .inset(20.0)
                                .block(from)
                                .into_block()],
                        )
                        .column(
                            TrackSize::Fr(1.0),
                            Align::Left,
                            vec![Boxed::new().inset(20.0).block(to).into_block()],
                        )
                        .into_block(),
                )
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Items.
        let header = TextStyle::new(16.0, Color::WHITE).bold();
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(80.0), Align::Center),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
        ])
        .inset(15.0)
        .header_fill(black)
        .grid(Stroke::solid(2.0, black))
        .header(vec![
            cell("DESCRIPTION", header.clone()),
            cell("QTY", header.clone()),
            cell("RATE", header.clone()),
            cell("AMT", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, base.clone().bold()),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), base.clone().bold()),
            ]);
        }
        tree.push(
            Boxed::new()
                .borders(Borders::all(Stroke::solid(4.0, black)))
                .block(items.into_block())
                .into_block(),
        );
        tree.push(Block::spacer(40.0));

        // Totals with a highlighter-yellow final band.
        let mut totals = Boxed::new().borders(Borders::all(Stroke::solid(4.0, black))).block(
            Boxed::new().inset(15.0).block(layout::amount_row(
                "SUBTOTAL:",
                base.clone().bold(),
                utils::format_currency(invoice.subtotal),
                base.clone(),
            ))
            .into_block(),
        );
        totals = totals.block(Block::divider(Stroke::solid(2.0, black)));
        if invoice.tax_rate > 0.0 {
            totals = totals
                .block(
                    Boxed::new().inset(15.0).block(layout::amount_row(
                        format!("TAX ({}):", utils::format_percent(invoice.tax_rate)),
                        base.clone().bold(),
                        utils::format_currency(invoice.tax_amount),
                        base.clone(),
                    ))
                    .into_block(),
                )
                .block(Block::divider(Stroke::solid(2.0, black)));
        }
        totals = totals.block(
            Boxed::new().fill(HIGHLIGHT).inset(18.0).block(layout::amount_row(
                "TOTAL:",
                TextStyle::new(24.0, black).weight(FontWeight::Black),
                utils::format_currency(invoice.total),
                TextStyle::new(24.0, black).weight(FontWeight::Black),
            ))
            .into_block(),
        );
        tree.push(layout::pin_right(350.0, vec![totals.into_block()]));
        tree.push(Block::spacer(40.0));

        if let Some(notes) = &invoice.notes {
            tree.push(
                Boxed::new()
                    .borders(Borders::all(Stroke::dashed(4.0, black)))
                    .inset(20.0)
                    .block(
                        Paragraph::text("NOTES:", TextStyle::new(18.0, black).bold().underline())
                            .into_block(),
                    )
                    .block(Block::spacer(10.0))
                    .block(Paragraph::text(notes, base.clone().bold()).into_block())
                    .into_block(),
            );
            tree.push(Block::spacer(20.0));
        }

        tree.push(
            Paragraph::text("Generated by WPEG.app", TextStyle::new(12.0, black).bold().tracking(1.0))
                .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Brutalist
    }

    fn name(&self) -> &str {
        "Brutalist"
    }

    fn description(&self) -> &str {
        "Raw monospaced look"
    }
}

fn party_cell(chip: &str, name: &str, lines: Vec<String>, base: &TextStyle) -> Block {
    let mut blocks = vec![
        Boxed::new()
            .width(TrackSize::Auto)
            .fill(Color::BLACK)
            .inset(8.0)
            .block(Paragraph::text(chip, TextStyle::new(14.0, Color::WHITE).bold()).into_block())
            .into_block(),
        Block::spacer(15.0),
        Paragraph::text(name, TextStyle::new(16.0, Color::BLACK).bold()).into_block(),
        Block::spacer(10.0),
    ];
    blocks.extend(layout::line_stack(&lines, base));
    Columns::new(0.0)
        .column(TrackSize::Fr(1.0), Align::Left, blocks)
        .into_block()
}
