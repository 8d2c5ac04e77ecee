use std::path::PathBuf;

use once_cell::sync::OnceCell;
use tracing::info;

static FONT_DIR: OnceCell<PathBuf> = OnceCell::new();

/// Points the export pipeline at a directory of font files. The layout
/// variants name families like Inter, Poppins and Quicksand that are not
/// part of the base install; without a registered directory the compiler
/// falls back to its bundled families. First registration wins.
pub fn register_font_dir(dir: impl Into<PathBuf>) {
    let dir = dir.into();
    if FONT_DIR.set(dir.clone()).is_ok() {
        info!(dir = %dir.display(), "font directory registered");
    }
}

/// The registered font directory, or `FONT_DIR` from the environment.
pub fn font_dir() -> Option<PathBuf> {
    if let Some(dir) = FONT_DIR.get() {
        return Some(dir.clone());
    }
    std::env::var("FONT_DIR").ok().map(PathBuf::from)
}

/// Whether the directory exists and is usable as a `--font-path`.
pub fn usable_font_dir() -> Option<PathBuf> {
    font_dir().filter(|dir| dir.is_dir())
}
