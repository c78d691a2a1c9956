//! PDF post-processing
//!
//! printpdf writes uncompressed streams and stamps every file with fresh
//! timestamps and a random document ID. We parse its output with lopdf, strip
//! those entries, compress all streams and re-save, so the same layout always
//! yields the same bytes.

use std::io::Cursor;

use lopdf::{Document, Object};

use crate::error::RenderError;

/// Normalize and compress a freshly generated PDF.
pub fn finalize_pdf(raw: Vec<u8>) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::load_mem(&raw)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to parse PDF: {}", e)))?;

    normalize(&mut doc);
    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::PdfGeneration(format!("Failed to save PDF: {}", e)))?;

    Ok(output.into_inner())
}

/// Remove the entries that differ between runs
fn normalize(doc: &mut Document) {
    doc.trailer.remove(b"ID");

    // Info may be stored inline in the trailer or as an indirect object
    let info_ref = match doc.trailer.get_mut(b"Info") {
        Ok(Object::Reference(id)) => Some(*id),
        Ok(Object::Dictionary(info)) => {
            strip_dates(info);
            None
        }
        _ => None,
    };
    if let Some(id) = info_ref {
        if let Ok(Object::Dictionary(info)) = doc.get_object_mut(id) {
            strip_dates(info);
        }
    }

    if let Ok(root) = doc.trailer.get(b"Root").and_then(Object::as_reference) {
        if let Ok(Object::Dictionary(catalog)) = doc.get_object_mut(root) {
            catalog.remove(b"Metadata");
        }
    }

    doc.prune_objects();
}

fn strip_dates(info: &mut lopdf::Dictionary) {
    info.remove(b"CreationDate");
    info.remove(b"ModDate");
}
