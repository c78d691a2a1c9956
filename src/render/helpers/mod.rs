//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod fonts;
pub mod layer;
pub mod text_metrics;

pub use colors::pdf_color;
pub use compress::finalize_pdf;
pub use fonts::{resolve_font, FontFamily};
pub use layer::LayerBuilder;
pub use text_metrics::BuiltinFontMeasurer;
