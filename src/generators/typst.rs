use std::collections::HashMap;

use crate::document::{
    Align, Block, Borders, Boxed, Color, Columns, DocumentTree, FontWeight, ImageBlock, Paragraph,
    Span, Stroke, Table, TrackSize,
};

/// Maps embedded data URIs to file names the exporter has written next to
/// the generated source.
pub type AssetMap = HashMap<String, String>;

/// Serializes a document tree into Typst source. Pure string building:
/// no I/O, no clock, same tree in, same source out. All document text is
/// emitted inside string literals, so Typst markup characters in user
/// input need no escaping beyond the literal itself.
pub fn write_document(tree: &DocumentTree, assets: &AssetMap) -> String {
    let mut out = String::new();

    out.push_str(&format!("#set document(title: \"{}\")\n", escape(&tree.title)));

    // A frame or rounded corner wraps the content in a stroked block, so
    // the page itself loses its margin and the block carries the padding.
    let framed = !tree.frame.is_empty() || tree.frame_radius > 0.0;
    if framed {
        out.push_str(&format!(
            "#set page(width: {}, height: auto, margin: 0pt)\n",
            pt(tree.width)
        ));
    } else {
        let mut page = format!(
            "#set page(width: {}, height: auto, margin: {}",
            pt(tree.width),
            pt(tree.padding)
        );
        if let Some(background) = tree.background {
            page.push_str(&format!(", fill: {}", color(background)));
        }
        page.push_str(")\n");
        out.push_str(&page);
    }

    out.push_str(&format!("#set text({})\n", base_text_args(tree)));
    out.push('\n');

    let body = blocks(&tree.blocks, assets);
    if framed {
        let mut args = vec!["width: 100%".to_string()];
        if let Some(background) = tree.background {
            args.push(format!("fill: {}", color(background)));
        }
        if !tree.frame.is_empty() {
            args.push(format!("stroke: {}", borders_value(&tree.frame)));
        }
        if tree.frame_radius > 0.0 {
            args.push(format!("radius: {}", pt(tree.frame_radius)));
        }
        args.push(format!("inset: {}", pt(tree.padding)));
        out.push_str(&format!("#block({})[\n{}\n]\n", args.join(", "), body));
    } else {
        out.push_str(&body);
        out.push('\n');
    }

    out
}

fn base_text_args(tree: &DocumentTree) -> String {
    let base = &tree.base;
    let mut args = Vec::new();
    if let Some(font) = &base.font {
        args.push(format!("font: \"{}\"", escape(font)));
    }
    args.push(format!("size: {}", pt(base.size)));
    if base.weight != FontWeight::Regular {
        args.push(format!("weight: {}", weight_number(base.weight)));
    }
    args.push(format!("fill: {}", color(base.color)));
    args.join(", ")
}

/// Sibling blocks are separated by a blank line so consecutive inline
/// content never merges into one paragraph.
fn blocks(blocks: &[Block], assets: &AssetMap) -> String {
    blocks
        .iter()
        .map(|block| render_block(block, assets))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &Block, assets: &AssetMap) -> String {
    match block {
        Block::Spacer { height } => format!("#v({})", pt(*height)),
        Block::Divider { stroke } => {
            format!("#line(length: 100%, stroke: {})", stroke_value(*stroke))
        }
        Block::Paragraph(paragraph) => render_paragraph(paragraph),
        Block::Columns(columns) => render_columns(columns, assets),
        Block::Table(table) => render_table(table),
        Block::Boxed(boxed) => render_boxed(boxed, assets),
        Block::Image(image) => render_image(image, assets),
    }
}

/// Left-aligned paragraphs carry no align wrapper and inherit their
/// container's alignment; only center and right are explicit.
fn render_paragraph(paragraph: &Paragraph) -> String {
    if paragraph.spans.is_empty() {
        return String::new();
    }
    let expr = spans_expr(&paragraph.spans);
    match paragraph.align {
        Align::Left => {
            if paragraph.spans.len() == 1 {
                format!("#{expr}")
            } else {
                format!("#({expr})")
            }
        }
        align => format!("#align({}, {expr})", align_word(align)),
    }
}

fn spans_expr(spans: &[Span]) -> String {
    spans.iter().map(span_call).collect::<Vec<_>>().join(" + ")
}

fn span_call(span: &Span) -> String {
    let style = &span.style;
    let mut args = Vec::new();
    if let Some(font) = &style.font {
        args.push(format!("font: \"{}\"", escape(font)));
    }
    args.push(format!("size: {}", pt(style.size)));
    if style.weight != FontWeight::Regular {
        args.push(format!("weight: {}", weight_number(style.weight)));
    }
    args.push(format!("fill: {}", color(style.color)));
    if style.italic {
        args.push("style: \"italic\"".to_string());
    }
    if let Some(tracking) = style.tracking {
        args.push(format!("tracking: {}", pt(tracking)));
    }
    let call = format!("text({}, {})", args.join(", "), text_body(&span.text));
    if style.underline {
        format!("underline({call})")
    } else {
        call
    }
}

/// Newlines in document text become explicit linebreaks; Typst treats a
/// raw newline inside a string as a plain space.
fn text_body(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("\"{}\"", escape(line)))
        .collect::<Vec<_>>()
        .join(" + linebreak() + ")
}

fn render_columns(columns: &Columns, assets: &AssetMap) -> String {
    let tracks = columns
        .columns
        .iter()
        .map(|column| track(column.width))
        .collect::<Vec<_>>()
        .join(", ");
    let aligns = columns
        .columns
        .iter()
        .map(|column| align_word(column.align).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from("#grid(\n");
    out.push_str(&format!("  columns: ({tracks},),\n"));
    if columns.gutter > 0.0 {
        out.push_str(&format!("  column-gutter: {},\n", pt(columns.gutter)));
    }
    out.push_str(&format!("  align: ({aligns},),\n"));
    for column in &columns.columns {
        out.push_str(&format!("  [\n{}\n  ],\n", blocks(&column.blocks, assets)));
    }
    out.push(')');
    out
}

fn render_table(table: &Table) -> String {
    let tracks = table
        .columns
        .iter()
        .map(|column| track(column.width))
        .collect::<Vec<_>>()
        .join(", ");
    let aligns = table
        .columns
        .iter()
        .map(|column| align_word(column.align).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from("#table(\n");
    out.push_str(&format!("  columns: ({tracks},),\n"));
    out.push_str(&format!("  align: ({aligns},),\n"));
    out.push_str(&format!("  inset: {},\n", pt(table.inset)));
    match table.grid {
        Some(stroke) => out.push_str(&format!("  stroke: {},\n", stroke_value(stroke))),
        None => out.push_str("  stroke: none,\n"),
    }
    if let Some(fill) = table_fill_closure(table) {
        out.push_str(&format!("  fill: {fill},\n"));
    }

    let body_start = usize::from(!table.header.is_empty());
    if !table.header.is_empty() {
        if let Some(stroke) = table.header_rule {
            out.push_str(&format!("  table.hline(y: 1, stroke: {}),\n", stroke_value(stroke)));
        }
    }
    if let Some(stroke) = table.row_rule {
        for row in 0..table.rows.len() {
            out.push_str(&format!(
                "  table.hline(y: {}, stroke: {}),\n",
                body_start + row + 1,
                stroke_value(stroke)
            ));
        }
    }

    if !table.header.is_empty() {
        let cells = table.header.iter().map(|cell| cell_content(cell)).collect::<Vec<_>>();
        out.push_str(&format!("  {},\n", cells.join(", ")));
    }
    for row in &table.rows {
        let cells = row.iter().map(|cell| cell_content(cell)).collect::<Vec<_>>();
        out.push_str(&format!("  {},\n", cells.join(", ")));
    }
    out.push(')');
    out
}

/// Header fill and zebra striping are one `fill` closure over the grid
/// position. Body rows sit below the header, so even grid rows are the
/// even-numbered body rows.
fn table_fill_closure(table: &Table) -> Option<String> {
    if table.header_fill.is_none() && table.zebra.is_none() {
        return None;
    }
    let mut branches = Vec::new();
    if !table.header.is_empty() {
        let header = table
            .header_fill
            .map(color)
            .unwrap_or_else(|| "none".to_string());
        branches.push(format!("if y == 0 {{ {header} }}"));
    } else if let Some(fill) = table.header_fill {
        branches.push(format!("if y == 0 {{ {} }}", color(fill)));
    }
    if let Some(zebra) = table.zebra {
        let parity = if table.header.is_empty() { "calc.odd" } else { "calc.even" };
        branches.push(format!("if {parity}(y) {{ {} }}", color(zebra)));
    }
    Some(format!("(x, y) => {} else {{ none }}", branches.join(" else ")))
}

fn cell_content(cell: &[Span]) -> String {
    if cell.is_empty() {
        return "[]".to_string();
    }
    format!("[#({})]", spans_expr(cell))
}

fn render_boxed(boxed: &Boxed, assets: &AssetMap) -> String {
    let mut args = Vec::new();
    match boxed.width {
        TrackSize::Auto => {}
        TrackSize::Fr(fraction) => args.push(format!("width: {}%", fraction * 100.0)),
        TrackSize::Pt(points) => args.push(format!("width: {}", pt(points))),
    }
    if let Some(fill) = boxed.fill {
        args.push(format!("fill: {}", color(fill)));
    }
    if !boxed.borders.is_empty() {
        args.push(format!("stroke: {}", borders_value(&boxed.borders)));
    }
    if boxed.radius > 0.0 {
        args.push(format!("radius: {}", pt(boxed.radius)));
    }
    if boxed.inset > 0.0 {
        args.push(format!("inset: {}", pt(boxed.inset)));
    }
    format!("#block({})[\n{}\n]", args.join(", "), blocks(&boxed.blocks, assets))
}

/// Logos resolve through the asset map; a URI the exporter could not
/// materialize renders as a neutral placeholder of the same size.
fn render_image(image: &ImageBlock, assets: &AssetMap) -> String {
    let inner = match assets.get(&image.data_uri) {
        Some(file) => {
            let call = format!(
                "image(\"{}\", width: {}, height: {}, fit: \"contain\")",
                escape(file),
                pt(image.width),
                pt(image.height)
            );
            if image.radius > 0.0 {
                format!("box(clip: true, radius: {}, {call})", pt(image.radius))
            } else {
                call
            }
        }
        None => {
            let mut args = format!(
                "width: {}, height: {}, fill: rgb(\"#e5e7eb\")",
                pt(image.width),
                pt(image.height)
            );
            if image.radius > 0.0 {
                args.push_str(&format!(", radius: {}", pt(image.radius)));
            }
            format!("rect({args})")
        }
    };
    match image.align {
        Align::Left => format!("#{inner}"),
        align => format!("#align({}, {inner})", align_word(align)),
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn pt(value: f32) -> String {
    format!("{value}pt")
}

fn color(color: Color) -> String {
    format!("rgb(\"#{:02x}{:02x}{:02x}\")", color.r, color.g, color.b)
}

fn stroke_value(stroke: Stroke) -> String {
    if stroke.dashed {
        format!(
            "(paint: {}, thickness: {}, dash: \"dashed\")",
            color(stroke.color),
            pt(stroke.width)
        )
    } else {
        format!("{} + {}", pt(stroke.width), color(stroke.color))
    }
}

/// Four equal edges collapse to a single stroke value; anything partial
/// becomes a per-side dictionary, with unnamed sides defaulting to none.
fn borders_value(borders: &Borders) -> String {
    if let (Some(top), Some(right), Some(bottom), Some(left)) =
        (borders.top, borders.right, borders.bottom, borders.left)
    {
        if top == right && right == bottom && bottom == left {
            return stroke_value(top);
        }
    }
    let mut sides = Vec::new();
    if let Some(stroke) = borders.top {
        sides.push(format!("top: {}", stroke_value(stroke)));
    }
    if let Some(stroke) = borders.right {
        sides.push(format!("right: {}", stroke_value(stroke)));
    }
    if let Some(stroke) = borders.bottom {
        sides.push(format!("bottom: {}", stroke_value(stroke)));
    }
    if let Some(stroke) = borders.left {
        sides.push(format!("left: {}", stroke_value(stroke)));
    }
    format!("({})", sides.join(", "))
}

fn track(track: TrackSize) -> String {
    match track {
        TrackSize::Auto => "auto".to_string(),
        TrackSize::Fr(fraction) => format!("{fraction}fr"),
        TrackSize::Pt(points) => pt(points),
    }
}

fn align_word(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    }
}

fn weight_number(weight: FontWeight) -> u16 {
    match weight {
        FontWeight::Light => 300,
        FontWeight::Regular => 400,
        FontWeight::Medium => 500,
        FontWeight::Semibold => 600,
        FontWeight::Bold => 700,
        FontWeight::Black => 900,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{cell, TableColumn, TextStyle};

    fn base() -> TextStyle {
        TextStyle::new(14.0, Color::rgb(51, 51, 51))
    }

    fn empty_assets() -> AssetMap {
        AssetMap::new()
    }

    #[test]
    fn test_page_setup_uses_reference_width() {
        let tree = DocumentTree::new("Invoice INV-1", base().font("Arial"));
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("#set document(title: \"Invoice INV-1\")"));
        assert!(source.contains("#set page(width: 800pt, height: auto, margin: 40pt)"));
        assert!(source.contains("#set text(font: \"Arial\", size: 14pt, fill: rgb(\"#333333\"))"));
    }

    #[test]
    fn test_framed_tree_moves_padding_into_block() {
        let mut tree = DocumentTree::new("Framed", base());
        tree.background = Some(Color::rgb(250, 249, 246));
        tree.frame = Borders::all(Stroke::solid(1.0, Color::rgb(232, 223, 206)));
        tree.padding = 60.0;
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("margin: 0pt"));
        assert!(source.contains(
            "#block(width: 100%, fill: rgb(\"#faf9f6\"), stroke: 1pt + rgb(\"#e8dfce\"), inset: 60pt)["
        ));
    }

    #[test]
    fn test_partial_frame_is_a_side_dictionary() {
        let mut tree = DocumentTree::new("Banner", base());
        tree.frame = Borders::top(Stroke::solid(15.0, Color::rgb(101, 163, 13)));
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("stroke: (top: 15pt + rgb(\"#65a30d\"))"));
    }

    #[test]
    fn test_newlines_become_linebreaks() {
        let mut tree = DocumentTree::new("Address", base());
        tree.push(Paragraph::text("12 Portage Ave\nWinnipeg, MB", base()).into_block());
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("\"12 Portage Ave\" + linebreak() + \"Winnipeg, MB\""));
    }

    #[test]
    fn test_quotes_and_backslashes_are_escaped() {
        let mut tree = DocumentTree::new("Escapes", base());
        tree.push(Paragraph::text("say \"hi\" \\ bye", base()).into_block());
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("\"say \\\"hi\\\" \\\\ bye\""));
    }

    #[test]
    fn test_markup_characters_ride_inside_string_literals() {
        let mut tree = DocumentTree::new("Markup", base());
        tree.push(Paragraph::text("Wire to account #42 for $19 *now*", base()).into_block());
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("\"Wire to account #42 for $19 *now*\""));
    }

    #[test]
    fn test_alignment_wrappers() {
        let mut tree = DocumentTree::new("Align", base());
        tree.push(Paragraph::text("left", base()).into_block());
        tree.push(Paragraph::text("mid", base()).align(Align::Center).into_block());
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("#text(size: 14pt, fill: rgb(\"#333333\"), \"left\")"));
        assert!(source.contains("#align(center, text(size: 14pt, fill: rgb(\"#333333\"), \"mid\"))"));
    }

    #[test]
    fn test_style_attributes_are_serialized() {
        let style = base()
            .font("Inter")
            .size(32.0)
            .weight(FontWeight::Semibold)
            .color(Color::rgb(99, 102, 241))
            .italic()
            .tracking(2.0);
        let mut tree = DocumentTree::new("Style", base());
        tree.push(Paragraph::text("INVOICE", style).into_block());
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains(
            "text(font: \"Inter\", size: 32pt, weight: 600, fill: rgb(\"#6366f1\"), style: \"italic\", tracking: 2pt, \"INVOICE\")"
        ));
    }

    #[test]
    fn test_columns_render_as_grid() {
        let mut tree = DocumentTree::new("Grid", base());
        tree.push(
            crate::document::Columns::new(20.0)
                .column(TrackSize::Fr(1.0), Align::Left, vec![Paragraph::text("a", base()).into_block()])
                .column(TrackSize::Pt(120.0), Align::Right, vec![Paragraph::text("b", base()).into_block()])
                .into_block(),
        );
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("columns: (1fr, 120pt,)"));
        assert!(source.contains("column-gutter: 20pt"));
        assert!(source.contains("align: (left, right,)"));
    }

    #[test]
    fn test_table_rules_and_fills() {
        let mut tree = DocumentTree::new("Table", base());
        tree.push(
            Table::new(vec![
                TableColumn::new(TrackSize::Fr(1.0), Align::Left),
                TableColumn::new(TrackSize::Pt(100.0), Align::Right),
            ])
            .inset(12.0)
            .header_fill(Color::rgb(248, 250, 252))
            .zebra(Color::rgb(250, 250, 250))
            .header_rule(Stroke::solid(2.0, Color::BLACK))
            .row_rule(Stroke::solid(1.0, Color::rgb(226, 232, 240)))
            .header(vec![cell("Description", base()), cell("Amount", base())])
            .row(vec![cell("Design", base()), cell("$100.00", base())])
            .row(vec![cell("Hosting", base()), cell("$25.50", base())])
            .into_block(),
        );
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("stroke: none"));
        assert!(source.contains(
            "fill: (x, y) => if y == 0 { rgb(\"#f8fafc\") } else if calc.even(y) { rgb(\"#fafafa\") } else { none }"
        ));
        assert!(source.contains("table.hline(y: 1, stroke: 2pt + rgb(\"#000000\"))"));
        assert!(source.contains("table.hline(y: 2, stroke: 1pt + rgb(\"#e2e8f0\"))"));
        assert!(source.contains("table.hline(y: 3, stroke: 1pt + rgb(\"#e2e8f0\"))"));
    }

    #[test]
    fn test_full_grid_table() {
        let mut tree = DocumentTree::new("Gridded", base());
        tree.push(
            Table::new(vec![TableColumn::new(TrackSize::Fr(1.0), Align::Left)])
                .grid(Stroke::solid(2.0, Color::BLACK))
                .header(vec![cell("H", base())])
                .row(vec![cell("V", base())])
                .into_block(),
        );
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains("stroke: 2pt + rgb(\"#000000\")"));
        assert!(!source.contains("stroke: none"));
    }

    #[test]
    fn test_image_resolves_through_asset_map() {
        let uri = "data:image/png;base64,iVBORw0KGgo=";
        let mut assets = AssetMap::new();
        assets.insert(uri.to_string(), "asset_0.png".to_string());

        let mut tree = DocumentTree::new("Logo", base());
        tree.push(ImageBlock::new(uri, 120.0, 80.0).into_block());
        let source = write_document(&tree, &assets);
        assert!(source.contains("#image(\"asset_0.png\", width: 120pt, height: 80pt, fit: \"contain\")"));
        assert!(!source.contains("base64"));
    }

    #[test]
    fn test_missing_asset_renders_placeholder() {
        let mut tree = DocumentTree::new("Logo", base());
        tree.push(
            ImageBlock::new("data:image/png;base64,unresolved", 100.0, 100.0)
                .radius(50.0)
                .align(Align::Center)
                .into_block(),
        );
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains(
            "#align(center, rect(width: 100pt, height: 100pt, fill: rgb(\"#e5e7eb\"), radius: 50pt))"
        ));
    }

    #[test]
    fn test_dashed_strokes() {
        let mut tree = DocumentTree::new("Dashed", base());
        tree.push(Block::divider(Stroke::dashed(2.0, Color::rgb(226, 232, 240))));
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains(
            "#line(length: 100%, stroke: (paint: rgb(\"#e2e8f0\"), thickness: 2pt, dash: \"dashed\"))"
        ));
    }

    #[test]
    fn test_boxed_container() {
        let mut tree = DocumentTree::new("Card", base());
        tree.push(
            Boxed::new()
                .fill(Color::rgb(250, 250, 250))
                .radius(16.0)
                .inset(30.0)
                .borders(Borders::left(Stroke::solid(4.0, Color::rgb(99, 102, 241))))
                .block(Paragraph::text("From", base()).into_block())
                .into_block(),
        );
        let source = write_document(&tree, &empty_assets());
        assert!(source.contains(
            "#block(width: 100%, fill: rgb(\"#fafafa\"), stroke: (left: 4pt + rgb(\"#6366f1\")), radius: 16pt, inset: 30pt)["
        ));
    }
}
