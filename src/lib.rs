pub mod cli;
pub mod config;
pub mod documents;
pub mod error;
pub mod model;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

pub use config::{PageSettings, Settings};
pub use documents::DocumentKind;
pub use error::RenderError;
pub use model::Document;
pub use render::{render_document, Layout, LayoutEngine};

/// Render a document and write it to `path`.
///
/// Returns the number of bytes written. The parent directory must exist.
pub fn write_document(document: &Document, path: &Path) -> Result<usize, RenderError> {
    let bytes = render_document(document)?;
    fs::write(path, &bytes)?;
    log::info!("Wrote '{}' to {}", document.title, path.display());
    Ok(bytes.len())
}

/// Build, render and write one of the proposal documents into `output_dir`.
///
/// Returns the written path and its size in bytes.
pub fn generate(kind: DocumentKind, output_dir: &Path) -> Result<(PathBuf, usize), RenderError> {
    let document = kind.build()?;
    let path = output_dir.join(kind.file_name());
    let size = write_document(&document, &path)?;
    Ok((path, size))
}
