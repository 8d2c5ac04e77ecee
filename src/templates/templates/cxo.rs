use crate::document::{
    cell, Align, Block, Boxed, Color, Columns, DocumentTree, FontWeight, ImageBlock, Paragraph,
    Stroke, Table, TableColumn, TextStyle, TrackSize,
};
use crate::models::{Invoice, TemplateId};
use crate::templates::template_trait::{layout, utils, InvoiceTemplate};

const NIGHT: Color = Color::rgb(0x0f, 0x17, 0x2a);
const PANEL: Color = Color::rgb(0x1e, 0x29, 0x3b);
const EDGE: Color = Color::rgb(0x33, 0x41, 0x55);
const SKY: Color = Color::rgb(0x38, 0xbd, 0xf8);
const DIM: Color = Color::rgb(0x94, 0xa3, 0xb8);
const SILVER: Color = Color::rgb(0xcb, 0xd5, 0xe1);

/// Dark boardroom look: slate panels, sky-blue highlights.
pub struct CxoTemplate;

impl InvoiceTemplate for CxoTemplate {
    fn build(&self, invoice: &Invoice) -> DocumentTree {
        let base = TextStyle::new(16.0, Color::WHITE).font("Inter");
        let mut tree =
            DocumentTree::new(format!("Invoice {}", invoice.invoice_number), base.clone());
        tree.background = Some(NIGHT);
        tree.frame_radius = 8.0;

        // Masthead.
        let headline = vec![
            Paragraph::text(
                &invoice.business_info.name,
                TextStyle::new(36.0, SKY).weight(FontWeight::Black).tracking(-1.0),
            )
            .into_block(),
            Block::spacer(5.0),
            Paragraph::text("CONFIDENTIAL INVOICE", TextStyle::new(16.0, DIM)).into_block(),
        ];
        let identity = match &invoice.business_info.logo {
            Some(logo) => vec![Columns::new(20.0)
                .column(
                    TrackSize::Pt(100.0),
                    Align::Left,
                    vec![ImageBlock::new(logo, 100.0, 100.0).radius(8.0).into_block()],
                )
                .column(TrackSize::Fr(1.0), Align::Left, headline)
                .into_block()],
            None => headline,
        };

        let meta = vec![
            Paragraph::text("NO. ", TextStyle::new(20.0, SILVER).weight(FontWeight::Semibold))
                .span(&invoice.invoice_number, TextStyle::new(20.0, Color::WHITE).weight(FontWeight::Semibold))
                .align(Align::Right)
                .into_block(),
            Block::spacer(10.0),
            Paragraph::text("ISSUED: ", TextStyle::new(13.0, SILVER))
                .span(
                    utils::format_long_date(invoice.date).to_uppercase(),
                    TextStyle::new(13.0, Color::WHITE),
                )
                .align(Align::Right)
                .into_block(),
            Block::spacer(5.0),
            Paragraph::text("DUE: ", TextStyle::new(13.0, SILVER))
                .span(
                    utils::format_long_date(invoice.due_date).to_uppercase(),
                    TextStyle::new(13.0, SKY),
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
        tree.push(Block::divider(Stroke::solid(2.0, EDGE)));
        tree.push(Block::spacer(50.0));

        // Parties share one slate panel.
        let tag = TextStyle::new(11.0, SKY).weight(FontWeight::Black).tracking(1.0);
        let quiet = TextStyle::new(13.0, DIM);
        let mut issuer = vec![
            Paragraph::text("ISSUER DETAILS", tag.clone()).into_block(),
            Block::spacer(10.0),
            Paragraph::text(
                &invoice.business_info.name,
                TextStyle::new(16.0, Color::WHITE).weight(FontWeight::Semibold),
            )
            .into_block(),
            Block::spacer(5.0),
        ];
        issuer.extend(layout::line_stack(
            &utils::business_compact_lines(&invoice.business_info),
            &quiet,
        ));
        let mut billed = vec![
            Paragraph::text("BILLED TO", tag).align(Align::Right).into_block(),
            Block::spacer(10.0),
            Paragraph::text(
                &invoice.client_info.name,
                TextStyle::new(16.0, Color::WHITE).weight(FontWeight::Semibold),
            )
            .align(Align::Right)
            .into_block(),
            Block::spacer(5.0),
        ];
        for line in utils::client_contact_lines(&invoice.client_info) {
            billed.push(Paragraph::text(line, quiet.clone()).align(Align::Right).into_block());
        }
        tree.push(
            Boxed::new()
                .fill(PANEL)
                .radius(8.0)
                .inset(25.0)
                .block(
                    Columns::new(40.0)
                        .column(TrackSize::Fr(1.0), Align::Left, issuer)
                        .column(TrackSize::Fr(1.0), Align::Right, billed)
                        .into_block(),
                )
                .into_block(),
        );
        tree.push(Block::spacer(50.0));

        // Items.
        let header = TextStyle::new(12.0, DIM).weight(FontWeight::Semibold);
        let mut items = Table::new(vec![
            TableColumn::new(TrackSize::Fr(1.0), Align::Left),
            TableColumn::new(TrackSize::Pt(90.0), Align::Right),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
            TableColumn::new(TrackSize::Pt(110.0), Align::Right),
        ])
        .inset(12.0)
        .header_rule(Stroke::solid(1.0, EDGE))
        .row_rule(Stroke::solid(1.0, PANEL))
        .header(vec![
            cell("DESCRIPTION", header.clone()),
            cell("QTY", header.clone()),
            cell("RATE", header.clone()),
            cell("AMOUNT", header),
        ]);
        for item in &invoice.items {
            items = items.row(vec![
                cell(&item.description, base.clone().weight(FontWeight::Medium)),
                cell(utils::format_quantity(item.quantity), TextStyle::new(16.0, SILVER)),
                cell(utils::format_currency(item.rate), TextStyle::new(16.0, SILVER)),
                cell(
                    utils::format_currency(item.amount),
                    base.clone().weight(FontWeight::Semibold),
                ),
            ]);
        }
        tree.push(items.into_block());
        tree.push(Block::spacer(40.0));

        // Totals panel.
        let line = TextStyle::new(16.0, SILVER);
        let mut panel = Boxed::new().fill(PANEL).radius(8.0).inset(25.0).block(
            layout::amount_row(
                "Subtotal",
                line.clone(),
                utils::format_currency(invoice.subtotal),
                line.clone(),
            ),
        );
        if invoice.tax_rate > 0.0 {
            panel = panel.block(Block::spacer(15.0)).block(layout::amount_row(
                format!("Tax ({})", utils::format_percent(invoice.tax_rate)),
                line.clone(),
                utils::format_currency(invoice.tax_amount),
                line,
            ));
        }
        panel = panel
            .block(Block::spacer(20.0))
            .block(Block::divider(Stroke::solid(1.0, EDGE)))
            .block(Block::spacer(20.0))
            .block(layout::amount_row(
                "TOTAL",
                TextStyle::new(24.0, Color::WHITE).bold(),
                utils::format_currency(invoice.total),
                TextStyle::new(24.0, SKY).bold(),
            ));
        tree.push(layout::pin_right(350.0, vec![panel.into_block()]));
        tree.push(Block::spacer(50.0));

        // Notes sit left of the attribution on the closing rule.
        tree.push(Block::divider(Stroke::solid(1.0, EDGE)));
        tree.push(Block::spacer(20.0));
        let notes_blocks = match &invoice.notes {
            Some(notes) => vec![Paragraph::text(notes, TextStyle::new(13.0, DIM)).into_block()],
            None => Vec::new(),
        };
        tree.push(
            Columns::new(30.0)
                .column(TrackSize::Fr(1.0), Align::Left, notes_blocks)
                .column(
                    TrackSize::Auto,
                    Align::Right,
                    vec![Paragraph::text(
                        "Free Invoice by WPEG.app",
                        TextStyle::new(10.0, Color::rgb(0x64, 0x74, 0x8b)),
                    )
                    .align(Align::Right)
                    .into_block()],
                )
                .into_block(),
        );

        tree
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Cxo
    }

    fn name(&self) -> &str {
        "CXO"
    }

    fn description(&self) -> &str {
        "Dark executive theme"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_invoice;

    #[test]
    fn test_dark_background() {
        let tree = CxoTemplate.build(&sample_invoice());
        assert_eq!(tree.background, Some(NIGHT));
        assert_eq!(tree.frame_radius, 8.0);
    }

    #[test]
    fn test_missing_client_phone_leaves_no_gap() {
        let invoice = sample_invoice();
        assert!(invoice.client_info.phone.is_none());
        let debug = format!("{:?}", CxoTemplate.build(&invoice));
        assert!(!debug.contains("text: \"\""));
    }
}
