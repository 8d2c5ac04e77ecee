pub mod style;

pub use style::*;

use serde::{Deserialize, Serialize};

/// Fixed top-level width of every rendered document, in points. The export
/// pipeline lays the page out at exactly this width.
pub const REFERENCE_WIDTH: f32 = 800.0;

/// A fully resolved, self-contained document: what a template produces and
/// what the export pipeline consumes. Statically sized at the reference
/// width and free of external references except embedded logo data URIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    pub title: String,
    pub width: f32,
    pub padding: f32,
    pub background: Option<Color>,
    pub frame: Borders,
    pub frame_radius: f32,
    pub base: TextStyle,
    pub blocks: Vec<Block>,
}

impl DocumentTree {
    pub fn new(title: impl Into<String>, base: TextStyle) -> Self {
        DocumentTree {
            title: title.into(),
            width: REFERENCE_WIDTH,
            padding: 40.0,
            background: None,
            frame: Borders::none(),
            frame_radius: 0.0,
            base,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Spacer { height: f32 },
    Divider { stroke: Stroke },
    Paragraph(Paragraph),
    Columns(Columns),
    Table(Table),
    Boxed(Boxed),
    Image(ImageBlock),
}

impl Block {
    pub fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }

    pub fn divider(stroke: Stroke) -> Self {
        Block::Divider { stroke }
    }
}

/// One styled inline run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Span {
            text: text.into(),
            style,
        }
    }
}

/// A line of spans flowing inline, aligned as a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub align: Align,
    pub spans: Vec<Span>,
}

impl Paragraph {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Paragraph {
            align: Align::Left,
            spans: vec![Span::new(text, style)],
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn span(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.spans.push(Span::new(text, style));
        self
    }

    pub fn into_block(self) -> Block {
        Block::Paragraph(self)
    }
}

/// Width of a grid track: a fraction of the free space or a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSize {
    Auto,
    Fr(f32),
    Pt(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub width: TrackSize,
    pub align: Align,
    pub blocks: Vec<Block>,
}

/// Side-by-side layout; the workhorse for headers, party blocks and
/// right-pinned totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    pub gutter: f32,
    pub columns: Vec<Column>,
}

impl Columns {
    pub fn new(gutter: f32) -> Self {
        Columns {
            gutter,
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, width: TrackSize, align: Align, blocks: Vec<Block>) -> Self {
        self.columns.push(Column {
            width,
            align,
            blocks,
        });
        self
    }

    pub fn into_block(self) -> Block {
        Block::Columns(self)
    }
}

/// A table cell: inline spans, aligned by the owning column.
pub type Cell = Vec<Span>;

pub fn cell(text: impl Into<String>, style: TextStyle) -> Cell {
    vec![Span::new(text, style)]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub width: TrackSize,
    pub align: Align,
}

impl TableColumn {
    pub fn new(width: TrackSize, align: Align) -> Self {
        TableColumn { width, align }
    }
}

/// Tabular block. Header fill, zebra striping and rules are table-level
/// style, not per-cell styling, so the writer can draw them uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub inset: f32,
    pub grid: Option<Stroke>,
    pub header_fill: Option<Color>,
    pub header_rule: Option<Stroke>,
    pub row_rule: Option<Stroke>,
    pub zebra: Option<Color>,
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Table {
            columns,
            inset: 10.0,
            grid: None,
            header_fill: None,
            header_rule: None,
            row_rule: None,
            zebra: None,
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn grid(mut self, stroke: Stroke) -> Self {
        self.grid = Some(stroke);
        self
    }

    pub fn header_fill(mut self, fill: Color) -> Self {
        self.header_fill = Some(fill);
        self
    }

    pub fn header_rule(mut self, stroke: Stroke) -> Self {
        self.header_rule = Some(stroke);
        self
    }

    pub fn row_rule(mut self, stroke: Stroke) -> Self {
        self.row_rule = Some(stroke);
        self
    }

    pub fn zebra(mut self, fill: Color) -> Self {
        self.zebra = Some(fill);
        self
    }

    pub fn header(mut self, header: Vec<Cell>) -> Self {
        self.header = header;
        self
    }

    pub fn row(mut self, row: Vec<Cell>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn into_block(self) -> Block {
        Block::Table(self)
    }
}

/// A container with fill, per-edge borders, corner rounding and padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boxed {
    pub width: TrackSize,
    pub fill: Option<Color>,
    pub borders: Borders,
    pub radius: f32,
    pub inset: f32,
    pub blocks: Vec<Block>,
}

impl Boxed {
    pub fn new() -> Self {
        Boxed {
            width: TrackSize::Fr(1.0),
            fill: None,
            borders: Borders::none(),
            radius: 0.0,
            inset: 0.0,
            blocks: Vec::new(),
        }
    }

    pub fn width(mut self, width: TrackSize) -> Self {
        self.width = width;
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn into_block(self) -> Block {
        Block::Boxed(self)
    }
}

impl Default for Boxed {
    fn default() -> Self {
        Boxed::new()
    }
}

/// The issuer logo, always an embedded data URI scaled to fit its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub data_uri: String,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub align: Align,
}

impl ImageBlock {
    pub fn new(data_uri: impl Into<String>, width: f32, height: f32) -> Self {
        ImageBlock {
            data_uri: data_uri.into(),
            width,
            height,
            radius: 0.0,
            align: Align::Left,
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn into_block(self) -> Block {
        Block::Image(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentTree {
        let base = TextStyle::new(12.0, Color::rgb(30, 41, 59)).font("Arial");
        let mut doc = DocumentTree::new("Invoice INV-1", base.clone());
        doc.push(Paragraph::text("INVOICE", base.clone().size(28.0).bold()).into_block());
        doc.push(Block::spacer(20.0));
        doc.push(
            Table::new(vec![
                TableColumn::new(TrackSize::Fr(1.0), Align::Left),
                TableColumn::new(TrackSize::Pt(100.0), Align::Right),
            ])
            .header(vec![cell("Description", base.clone().bold()), cell("Amount", base.clone().bold())])
            .row(vec![cell("Design", base.clone()), cell("$100.00", base)])
            .into_block(),
        );
        doc
    }

    #[test]
    fn test_tree_is_statically_sized() {
        let doc = sample_tree();
        assert_eq!(doc.width, REFERENCE_WIDTH);
    }

    #[test]
    fn test_tree_equality_and_serialization_are_stable() {
        let a = sample_tree();
        let b = sample_tree();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_builders_compose() {
        let boxed = Boxed::new()
            .fill(Color::WHITE)
            .borders(Borders::all(Stroke::solid(1.0, Color::BLACK)))
            .radius(8.0)
            .inset(16.0)
            .block(Block::spacer(4.0));
        assert_eq!(boxed.blocks.len(), 1);
        assert!(!boxed.borders.is_empty());
    }
}
