use std::fmt;

use crate::config::defaults::{DEFAULT_BODY_FONT_SIZE, DEFAULT_FONT_FAMILY};

/// Weight/slant of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontStyle::Regular,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (true, true) => FontStyle::BoldItalic,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }

    /// Layer an inline style on top of a base style (bold and italic accumulate)
    pub fn combine(self, inline: FontStyle) -> Self {
        Self::from_flags(
            self.is_bold() || inline.is_bold(),
            self.is_italic() || inline.is_italic(),
        )
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontStyle::Regular => "regular",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "bold italic",
        };
        f.write_str(name)
    }
}

/// RGB color with 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0-1.0
    pub fn to_unit(self) -> (f32, f32, f32) {
        let scale = |v: u8| v as f32 / 255.0;
        (scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Text style: applies to the block it is attached to
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub family: String,
    pub font_style: FontStyle,
    /// Font size in points
    pub size: f32,
    pub color: RgbColor,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            font_style: FontStyle::Regular,
            size: DEFAULT_BODY_FONT_SIZE,
            color: RgbColor::default(),
        }
    }
}

impl Style {
    pub fn new(family: impl Into<String>, font_style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            font_style,
            size,
            color: RgbColor::default(),
        }
    }

    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_accumulates_flags() {
        assert_eq!(FontStyle::Italic.combine(FontStyle::Bold), FontStyle::BoldItalic);
        assert_eq!(FontStyle::Regular.combine(FontStyle::Regular), FontStyle::Regular);
        assert_eq!(FontStyle::Bold.combine(FontStyle::Regular), FontStyle::Bold);
    }

    #[test]
    fn test_unit_color() {
        let (r, g, b) = RgbColor::new(255, 0, 51).to_unit();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
