pub mod fonts;
pub mod pdf;
pub mod typst;

pub use fonts::register_font_dir;
pub use pdf::{save_download, PdfExporter};
