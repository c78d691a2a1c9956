pub mod defaults;
pub mod settings;

pub use settings::{Margins, Orientation, PageSettings, PageSize, Settings};
