use crate::document::{
    cell, Align, Block, Color, Columns, DocumentTree, FontWeight, ImageBlock, Paragraph, Stroke,
    Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const INK: Color = Color::rgb(0x11, 0x18, 0x27);
const QUIET: Color = Color::rgb(0x6b, 0x72, 0x80);
const HAIRLINE: Color = Color::rgb(0xe5, 0xe7, 0xeb);

/// Black on white, hairline rules, uppercase micro-labels.
pub struct MinimalistTemplate;

impl InvoiceTemplate for MinimalistTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(14.0, INK).font("Helvetica");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());

        let mut identity = Vec::new();
        if let Some(logo) = &invoice.business_info.logo {
            identity.push(ImageBlock::new(logo, 120.0, 80.0).into_block());
            identity.push(Block::spacer(15.0));
        }
        identity.push(
            Paragraph::text(
                &invoice.business_info.name,
                TextStyle::new(24.0, INK).weight(FontWeight::Semibold),
            )
            .into_block(),
        );

        let tag = TextStyle::new(14.0, INK).tracking(1.0);
        let meta = vec![
            Paragraph::text("INVOICE", TextStyle::new(32.0, INK).weight(FontWeight::Light).tracking(2.0))
                .align(Align::Right)
                .into_block(),
            Block::spacer(10.0),
            Paragraph::text(format!("NO. {}", invoice.invoice_number), tag.clone())
                .align(Align::Right)
                .into_block(),
            Block::spacer(4.0),
            Paragraph::text(
                format!("DATE {}", utils::format_long_date(invoice.date)).to_uppercase(),
                tag,
            )
            .align(Align::Right)
            .into_block(),
        ];

        tree.push(
            Columns::new(30.0)
                .column(TrackSize::Fr(1.0), Align::Left, identity)
                .column(TrackSize::Fr(1.0), Align::Right, meta)
                .into_block(),
        );
        tree.push(Block::spacer(20.0));
        tree.push(Block::divider(Stroke::solid(2.0, INK)));
        tree.push(Block::spacer(60.0));

        // From / To. This layout orders address before phone and email.
        let mut from = vec![
            Paragraph::text(
                &invoice.business_info.name,
                base.clone().weight(FontWeight::Medium),
            )
            .into_block(),
        ];
        for value in [
            invoice.business_info.address.as_deref(),
            invoice.business_info.phone.as_deref(),
            Some(invoice.business_info.email.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        {
            from.push(Paragraph::text(value, base.clone()).into_block());
        }

        let mut to = vec![
            Paragraph::text(&invoice.client_info.name, base.clone().weight(FontWeight::Medium))
                .into_block(),
        ];
        for value in [
            invoice.client_info.address.as_deref(),
            invoice.client_info.phone.as_deref(),
            Some(invoice.client_info.email.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        {
            to.push(Paragraph::text(value, base.clone()).into_block());
        }

        let label = TextStyle::new(13.0, QUIET).weight(FontWeight::Semibold).tracking(1.0);
        let mut from_blocks = vec![
            Paragraph::text("FROM", label.clone()).into_block(),
            Block::spacer(15.0),
        ];
        from_blocks.extend(from);
        let mut to_blocks = vec![
            Paragraph::text("TO", label).into_block(),
            Block::spacer(15.0),
        ];
        to_blocks.extend(to);
        tree.push(
            Columns::new(40.0)
                .column(TrackSize::Fr(1.0), Align::Left, from_blocks)
                .column(TrackSize::Fr(1.0), Align::Left, to_blocks)
                .into_block(),
        );
        tree.push(Block::spacer(60.0));

        // Items between two black rules.
        let header = TextStyle::new(13.0, INK).weight(FontWeight::Semibold).tracking(1.0);
        tree.push(Block::divider(Stroke::solid(1.0, INK)));
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(100.0), Align::Center),
            TableColumn::new(TrackSize::Pt(120.0), Align::Right),
            TableColumn::new(TrackSize::Pt(120.0), Align::Right),
        ])
        .inset(15.0)
        .header_rule(Stroke::solid(1.0, INK))
        .row_rule(Stroke::solid(1.0, HAIRLINE))
        .header(vec![
            cell("DESCRIPTION", header.clone()),
            cell("QTY", header.clone()),
            cell("PRICE", header.clone()),
            cell("AMOUNT", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, base.clone()),
                cell(utils::format_quantity(item.quantity), base.clone()),
                cell(utils::format_currency(item.rate), base.clone()),
                cell(utils::format_currency(item.amount), base.clone().weight(FontWeight::Medium)),
            ]);
        }
        tree.push(items.into_block());
        tree.push(Block::spacer(40.0));

        // Totals, with the due date restated underneath.
        let mut totals = vec![
            layout::amount_row(
                "Subtotal",
                base.clone(),
                utils::format_currency(invoice.subtotal),
                base.clone(),
            ),
            Block::spacer(12.0),
            Block::divider(Stroke::solid(1.0, HAIRLINE)),
            Block::spacer(12.0),
        ];
        if invoice.tax_rate > 0.0 {
            totals.push(layout::amount_row(
                format!("Tax ({})", utils::format_percent(invoice.tax_rate)),
                base.clone(),
                utils::format_currency(invoice.tax_amount),
                base.clone(),
            ));
            totals.push(Block::spacer(12.0));
            totals.push(Block::divider(Stroke::solid(1.0, HAIRLINE)));
            totals.push(Block::spacer(12.0));
        }
        let grand = TextStyle::new(18.0, INK).weight(FontWeight::Semibold);
        totals.push(layout::amount_row(
            "TOTAL",
            grand.clone().tracking(1.0),
            utils::format_currency(invoice.total),
            grand,
        ));
        totals.push(Block::spacer(20.0));
        totals.push(Block::divider(Stroke::solid(2.0, INK)));
        totals.push(Block::spacer(12.0));
        totals.push(layout::amount_row(
            "Due Date",
            TextStyle::new(14.0, QUIET),
            utils::format_long_date(invoice.due_date),
            TextStyle::new(14.0, QUIET),
        ));
        tree.push(layout::pin_right(300.0, totals));
        tree.push(Block::spacer(60.0));

        if let Some(notes) = &invoice.notes {
            tree.push(
                Paragraph::text(
                    "NOTES",
                    TextStyle::new(13.0, QUIET).weight(FontWeight::Semibold).tracking(1.0),
                )
                .into_block(),
            );
            tree.push(Block::spacer(10.0));
            tree.push(Paragraph::text(notes, base.clone()).into_block());
            tree.push(Block::spacer(40.0));
        }

        tree.push(Block::spacer(20.0));
        tree.push(
            Paragraph::text(
                "Free Invoice by WPEG.app",
                TextStyle::new(11.0, Color::rgb(0x9c, 0xa3, 0xaf)).tracking(1.0),
            )
            .align(Align::Center)
            .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Minimalist
    }

    fn name(&self) -> &str {
        "Minimalist"
    }

    fn description(&self) -> &str {
        "Spare, typographic layout"
    }
}
