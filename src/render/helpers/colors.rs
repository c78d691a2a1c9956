use printpdf::{Color, Rgb};

use crate::model::RgbColor;

/// Convert a 0-255 color into a printpdf fill/stroke color
pub fn pdf_color(color: RgbColor) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}
