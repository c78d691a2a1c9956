//! PDF rendering modules

pub mod document;
pub mod helpers;
pub mod layout;
pub mod page;
pub mod wrap;

// Re-export commonly used items for convenience
pub use document::{render_document, DocumentRenderer};
pub use helpers::{resolve_font, BuiltinFontMeasurer, LayerBuilder};
pub use layout::{Layout, LayoutEngine, PageLayout, Placement};
pub use wrap::{wrap_runs, StyledRun, WrappedLine};
