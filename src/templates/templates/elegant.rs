use crate::document::{
    cell, Align, Block, Borders, Boxed, Color, Columns, DocumentTree, ImageBlock, Paragraph,
    Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x2c, 0x3e, 0x50);
const GOLD: Color = Color::rgb(0xbd, 0xa8, 0x7f);
const PARCHMENT: Color = Color::rgb(0xfa, 0xf9, 0xf6);
const TRIM: Color = Color::rgb(0xe8, 0xdf, 0xce);
const GRAY: Color = Color::rgb(0x7f, 0x8c, 0x8d);

/// Centered serif stationery on parchment with gold accents.
pub struct ElegantTemplate;

impl InvoiceTemplate for ElegantTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(15.0, INK).font("Garamond");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());
        tree.background = Some(PARCHMENT);
        tree.frame = Borders::all(Stroke::solid(1.0, TRIM));

        // Centered masthead.
        if let Some(logo) = &invoice.business_info.logo {
            tree.push(ImageBlock::new(logo, 120.0, 80.0).align(Align::Center).into_block());
            tree.push(Block::spacer(20.0));
        }
        tree.push(
            Paragraph::text(
                invoice.business_info.name.to_uppercase(),
                TextStyle::new(36.0, INK).tracking(4.0),
            )
            .align(Align::Center)
            .into_block(),
        );
        tree.push(Block::spacer(20.0));
        tree.push(gold_bar());
        tree.push(Block::spacer(20.0));
        let contact = TextStyle::new(14.0, GRAY).tracking(2.0);
        if let Some(address) = &invoice.business_info.address {
            if !address.trim().is_empty() {
                tree.push(
                    Paragraph::text(address.to_uppercase().replace('\n', " \u{2022} "), contact.clone())
                        .align(Align::Center)
                        .into_block(),
                );
            }
        }
        if let Some(phone) = &invoice.business_info.phone {
            if !phone.trim().is_empty() {
                tree.push(Paragraph::text(phone, contact).align(Align::Center).into_block());
            }
        }
        tree.push(Block::spacer(50.0));

        tree.push(
            Paragraph::text("INVOICE", TextStyle::new(28.0, GOLD).tracking(6.0))
                .align(Align::Center)
                .into_block(),
        );
        tree.push(Block::spacer(20.0));
        let mut details = Vec::new();
        for (i, (label, value)) in [
            ("INVOICE NO.", invoice.invoice_number.clone()),
            ("DATE", utils::format_long_date(invoice.date)),
            ("DUE DATE", utils::format_long_date(invoice.due_date)),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                details.push(Block::spacer(10.0));
            }
            details.push(
                Columns::new(20.0)
                    .column(
                        TrackSize::Fr(1.0),
                        Align::Right,
                        vec![Paragraph::text(label, TextStyle::new(14.0, GRAY).tracking(1.0))
                            .align(Align::Right)
                            .into_block()],
                    )
                    .column(
                        TrackSize::Fr(1.0),
                        Align::Left,
                        vec![Paragraph::text(value, TextStyle::new(14.0, INK).bold().tracking(1.0))
                            .into_block()],
                    )
                    .into_block(),
            );
        }
        tree.push(
            Columns::new(0.0)
                .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
                .column(TrackSize::Pt(400.0), Align::Center, details)
                .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
                .into_block(),
        );
        tree.push(Block::spacer(50.0));

        // Billed To, between trim rules.
        tree.push(Block::divider(Stroke::solid(1.0, TRIM)));
        tree.push(Block::spacer(30.0));
        tree.push(
            Paragraph::text("BILLED TO", TextStyle::new(14.0, GRAY).tracking(2.0))
                .align(Align::Center)
                .into_block(),
        );
        tree.push(Block::spacer(15.0));
        tree.push(
            Paragraph::text(&invoice.client_info.name, TextStyle::new(18.0, INK).italic())
                .align(Align::Center)
                .into_block(),
        );
        tree.push(Block::spacer(5.0));
        let soft = TextStyle::new(14.0, Color::rgb(0x34, 0x49, 0x5e));
        tree.push(
            Paragraph::text(&invoice.client_info.email, soft.clone())
                .align(Align::Center)
                .into_block(),
        );
        if let Some(address) = &invoice.client_info.address {
            if !address.trim().is_empty() {
                tree.push(
                    Paragraph::text(address.replace('\n', ", "), soft)
                        .align(Align::Center)
                        .into_block(),
                );
            }
        }
        tree.push(Block::spacer(30.0));
        tree.push(Block::divider(Stroke::solid(1.0, TRIM)));
        tree.push(Block::spacer(50.0));

        // Items.
        let header = TextStyle::new(12.0, GRAY).tracking(2.0);
        let body = TextStyle::new(15.0, INK);
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(80.0), Align::Center),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
            TableColumn::new(TrackSize::Pt(100.0), Align::Right),
        ])
        .inset(10.0)
        .header_rule(Stroke::solid(2.0, GOLD))
        .row_rule(Stroke::solid(1.0, TRIM))
        .header(vec![
            cell("ITEM DESCRIPTION", header.clone()),
            cell("QTY", header.clone()),
            cell("PRICE", header.clone()),
            cell("TOTAL", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, body.clone()),
                cell(utils::format_quantity(item.quantity), body.clone()),
                cell(utils::format_currency(item.rate), body.clone()),
                cell(utils::format_currency(item.amount), body.clone()),
            ]);
        }
        tree.push(items.into_block());
        tree.push(Block::spacer(50.0));

        // Totals.
        let quiet = TextStyle::new(15.0, GRAY).tracking(1.0);
        let mut totals = vec![
            layout::amount_row(
                "SUBTOTAL",
                quiet.clone(),
                utils::format_currency(invoice.subtotal),
                body.clone(),
            ),
            Block::spacer(10.0),
        ];
        if invoice.tax_rate > 0.0 {
            totals.push(layout::amount_row(
                format!("TAX ({})", utils::format_percent(invoice.tax_rate)),
                quiet,
                utils::format_currency(invoice.tax_amount),
                body,
            ));
            totals.push(Block::spacer(10.0));
        }
        totals.push(Block::divider(Stroke::solid(1.0, GOLD)));
        totals.push(Block::spacer(10.0));
        totals.push(layout::amount_row(
            "TOTAL",
            TextStyle::new(18.0, GOLD).tracking(2.0),
            utils::format_currency(invoice.total),
            TextStyle::new(18.0, INK).bold(),
        ));
        tree.push(layout::pin_right(300.0, totals));
        tree.push(Block::spacer(60.0));

        if let Some(notes) = &invoice.notes {
            tree.push(
                Boxed::new()
                    .borders(Borders::all(Stroke::dashed(1.0, TRIM)))
                    .inset(30.0)
                    .block(
                        Paragraph::text(notes, TextStyle::new(15.0, GRAY).italic())
                            .align(Align::Center)
                            .into_block(),
                    )
                    .into_block(),
            );
            tree.push(Block::spacer(40.0));
        }

        tree.push(Block::spacer(10.0));
        tree.push(
            Paragraph::text(
                "THANK YOU FOR YOUR BUSINESS",
                TextStyle::new(12.0, Color::rgb(0xbd, 0xc3, 0xc7)).tracking(2.0),
            )
            .align(Align::Center)
            .into_block(),
        );
        tree.push(Block::spacer(10.0));
        tree.push(
            Paragraph::text("Generated by WPEG.app", TextStyle::new(10.0, Color::rgb(0x9c, 0xa3, 0xaf)))
                .align(Align::Center)
                .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Elegant
    }

    fn name(&self) -> &str {
        "Elegant"
    }

    fn description(&self) -> &str {
        "Refined serif stationery"
    }
}

fn gold_bar() -> Block {
    Columns::new(0.0)
        .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
        .column(TrackSize::Pt(50.0), Align::Center, vec![Block::divider(Stroke::solid(2.0, GOLD))])
        .column(TrackSize::Fr(1.0), Align::Left, Vec::new())
        .into_block()
}
