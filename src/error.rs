use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported font: {family} ({style})")]
    UnsupportedFont { family: String, style: String },

    #[error("Layout overflow: content reaches {y:.1}mm on page {page}, past the bottom margin")]
    LayoutOverflow { page: usize, y: f32 },

    #[error("Invalid inline markup: {0}")]
    Markup(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
