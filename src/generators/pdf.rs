use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::document::{Block, DocumentTree};
use crate::generators::fonts;
use crate::generators::typst::{self, AssetMap};
use crate::models::Invoice;
use crate::templates;

/// Turns rendered documents into PDFs by driving the external Typst
/// compiler. One shot per export: a failed compile surfaces the compiler
/// output as the error and is never retried.
pub struct PdfExporter {
    temp_dir: String,
}

impl PdfExporter {
    pub fn new() -> Self {
        let temp_dir = std::env::var("TEMP_DIR")
            .unwrap_or_else(|_| "/tmp".to_string());

        PdfExporter { temp_dir }
    }

    pub fn with_temp_dir(temp_dir: impl Into<String>) -> Self {
        PdfExporter {
            temp_dir: temp_dir.into(),
        }
    }

    /// Renders the invoice with its selected layout variant and compiles
    /// the result.
    pub async fn export_invoice(&self, invoice: &Invoice) -> Result<Vec<u8>> {
        let tree = templates::render(invoice, invoice.template);
        self.render_to_binary(&tree).await
    }

    /// Compiles one document tree to PDF bytes. Everything happens in a
    /// per-export scratch directory that is removed afterwards, pass or
    /// fail.
    pub async fn render_to_binary(&self, tree: &DocumentTree) -> Result<Vec<u8>> {
        let job_dir = PathBuf::from(&self.temp_dir).join(format!("invoiceflow_{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&job_dir).await?;

        let result = self.compile_in(&job_dir, tree).await;
        let _ = tokio::fs::remove_dir_all(&job_dir).await;
        result
    }

    async fn compile_in(&self, job_dir: &Path, tree: &DocumentTree) -> Result<Vec<u8>> {
        let assets = materialize_assets(tree, job_dir).await?;
        let source = typst::write_document(tree, &assets);

        let typ_path = job_dir.join("invoice.typ");
        let pdf_path = job_dir.join("invoice.pdf");
        tokio::fs::write(&typ_path, source).await?;

        let output = tokio::task::spawn_blocking({
            let typ_path = typ_path.clone();
            let pdf_path = pdf_path.clone();
            move || {
                let mut command = Command::new("typst");
                command.arg("compile");
                if let Some(font_dir) = fonts::usable_font_dir() {
                    command.arg("--font-path").arg(font_dir);
                }
                command.arg(&typ_path).arg(&pdf_path).output()
            }
        })
        .await??;

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "Typst compilation failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        let pdf_bytes = tokio::fs::read(&pdf_path).await?;
        debug!(bytes = pdf_bytes.len(), title = %tree.title, "document compiled");
        Ok(pdf_bytes)
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        PdfExporter::new()
    }
}

/// Writes exported bytes as `{invoice_number}.pdf` under `dir`, the
/// equivalent of handing the file to the browser's download prompt.
pub async fn save_download(bytes: &[u8], invoice_number: &str, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{invoice_number}.pdf"));
    tokio::fs::write(&path, bytes).await?;
    info!(path = %path.display(), bytes = bytes.len(), "invoice exported");
    Ok(path)
}

/// Decodes every embedded image in the tree into the scratch directory
/// and maps its data URI to the written file. An image that will not
/// decode is skipped; the writer renders a placeholder in its place.
async fn materialize_assets(tree: &DocumentTree, job_dir: &Path) -> Result<AssetMap> {
    let mut uris = Vec::new();
    collect_data_uris(&tree.blocks, &mut uris);

    let mut assets = AssetMap::new();
    for (index, uri) in uris.iter().enumerate() {
        match decode_image(uri) {
            Ok(png) => {
                let file = format!("asset_{index}.png");
                tokio::fs::write(job_dir.join(&file), png).await?;
                assets.insert(uri.clone(), file);
            }
            Err(err) => {
                warn!(error = %err, "embedded image skipped");
            }
        }
    }
    Ok(assets)
}

fn collect_data_uris(blocks: &[Block], out: &mut Vec<String>) {
    for block in blocks {
        match block {
            Block::Image(image) => {
                if !out.contains(&image.data_uri) {
                    out.push(image.data_uri.clone());
                }
            }
            Block::Columns(columns) => {
                for column in &columns.columns {
                    collect_data_uris(&column.blocks, out);
                }
            }
            Block::Boxed(boxed) => collect_data_uris(&boxed.blocks, out),
            _ => {}
        }
    }
}

/// Normalizes any embedded image to PNG so the compiler only ever sees
/// one format.
fn decode_image(data_uri: &str) -> Result<Vec<u8>> {
    let (_, payload) = data_uri
        .split_once(";base64,")
        .context("image is not a base64 data URI")?;
    let raw = BASE64.decode(payload.trim())?;
    let decoded = image::load_from_memory(&raw).context("image bytes are not decodable")?;

    let mut png = Vec::new();
    decoded.write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Boxed, Color, Columns as DocColumns, ImageBlock, TextStyle, TrackSize};
    use crate::document::{Align, Paragraph};

    fn png_data_uri() -> String {
        let pixel = image::DynamicImage::ImageRgb8(image::RgbImage::new(1, 1));
        let mut png = Vec::new();
        pixel
            .write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", BASE64.encode(&png))
    }

    #[test]
    fn test_decode_image_round_trips_png() {
        let uri = png_data_uri();
        let png = decode_image(&uri).unwrap();
        assert!(image::load_from_memory(&png).is_ok());
    }

    #[test]
    fn test_decode_image_rejects_plain_urls() {
        assert!(decode_image("https://cdn.example.com/logo.png").is_err());
        assert!(decode_image("data:image/png;base64,@@not-base64@@").is_err());
    }

    #[test]
    fn test_collect_data_uris_walks_nested_blocks() {
        let base = TextStyle::new(14.0, Color::BLACK);
        let uri = "data:image/png;base64,iVBORw0KGgo=";
        let blocks = vec![
            Paragraph::text("hello", base.clone()).into_block(),
            DocColumns::new(10.0)
                .column(
                    TrackSize::Fr(1.0),
                    Align::Left,
                    vec![Boxed::new()
                        .block(ImageBlock::new(uri, 100.0, 100.0).into_block())
                        .into_block()],
                )
                .into_block(),
            ImageBlock::new(uri, 50.0, 50.0).into_block(),
        ];
        let mut uris = Vec::new();
        collect_data_uris(&blocks, &mut uris);
        assert_eq!(uris, vec![uri.to_string()]);
    }

    #[tokio::test]
    async fn test_materialize_assets_skips_undecodable_images() {
        let dir = std::env::temp_dir().join(format!("invoiceflow-assets-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let base = TextStyle::new(14.0, Color::BLACK);
        let mut tree = DocumentTree::new("Logos", base);
        let good = png_data_uri();
        tree.push(ImageBlock::new(&good, 100.0, 100.0).into_block());
        tree.push(ImageBlock::new("data:image/png;base64,????", 100.0, 100.0).into_block());

        let assets = materialize_assets(&tree, &dir).await.unwrap();
        assert_eq!(assets.len(), 1);
        let file = assets.get(&good).unwrap();
        assert!(dir.join(file).is_file());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_save_download_names_file_after_invoice_number() {
        let dir = std::env::temp_dir().join(format!("invoiceflow-dl-{}", Uuid::new_v4()));
        let path = save_download(b"%PDF-1.7", "INV-20260115-042", &dir).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "INV-20260115-042.pdf");
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.7");
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
