use printpdf::{Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::defaults::MM_PER_PT;
use crate::error::RenderError;
use crate::model::Document;

use super::helpers::colors::pdf_color;
use super::helpers::compress::finalize_pdf;
use super::helpers::layer::LayerBuilder;
use super::helpers::text_metrics::BuiltinFontMeasurer;
use super::layout::{Layout, LayoutEngine, PageLayout, Placement};

/// Main document renderer
pub struct DocumentRenderer<'a> {
    document: &'a Document,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Lay out the document without producing any PDF output
    pub fn layout(&self) -> Result<Layout, RenderError> {
        LayoutEngine::new(&self.document.page).layout(&self.document.blocks)
    }

    /// Generate the finished PDF bytes
    pub fn render(&self) -> Result<Vec<u8>, RenderError> {
        let layout = self.layout()?;
        log::debug!(
            "Laid out '{}' on {} page(s)",
            self.document.title,
            layout.page_count()
        );

        let mut doc = PdfDocument::new(&self.document.title);
        let pages = layout
            .pages
            .iter()
            .map(|page| {
                let mut layer = LayerBuilder::new();
                draw_page(&mut layer, page, layout.page_height);
                PdfPage::new(
                    Mm(layout.page_width),
                    Mm(layout.page_height),
                    layer.into_ops(),
                )
            })
            .collect();
        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!(
                "printpdf reported {} warning(s) for '{}'",
                warnings.len(),
                self.document.title
            );
        }

        finalize_pdf(bytes)
    }
}

/// Convert top-left layout coordinates to PDF page operations
fn draw_page(layer: &mut LayerBuilder, page: &PageLayout, page_height: f32) {
    for placement in &page.placements {
        match placement {
            Placement::Text {
                text,
                x,
                top,
                line_height,
                font,
                size,
                color,
                ..
            } => {
                let baseline = BuiltinFontMeasurer::new(*font).baseline(*top, *line_height, *size);
                layer.set_fill_color(pdf_color(*color));
                layer.use_text(
                    text.as_str(),
                    *size,
                    Mm(*x),
                    Mm(page_height - baseline),
                    *font,
                );
            }
            Placement::Line {
                x1,
                x2,
                y,
                thickness,
                color,
            } => {
                let pdf_y = Mm(page_height - y);
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(thickness / MM_PER_PT);
                layer.add_line(Mm(*x1), pdf_y, Mm(*x2), pdf_y);
            }
            Placement::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                layer.set_fill_color(pdf_color(*fill));
                layer.add_rect(
                    Mm(*x),
                    Mm(page_height - y - height),
                    Mm(x + width),
                    Mm(page_height - y),
                    PaintMode::Fill,
                );
            }
        }
    }
}

/// Render a document to finished PDF bytes
pub fn render_document(document: &Document) -> Result<Vec<u8>, RenderError> {
    DocumentRenderer::new(document).render()
}
