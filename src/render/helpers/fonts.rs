use printpdf::BuiltinFont;

use crate::error::RenderError;
use crate::model::FontStyle;

/// Builtin font families available without embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Helvetica,
    Times,
    Courier,
    Symbol,
    ZapfDingbats,
}

impl FontFamily {
    /// Determine font family from a font name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "helvetica" | "arial" => Some(FontFamily::Helvetica),
            "times" | "times-roman" | "times new roman" => Some(FontFamily::Times),
            "courier" | "courier new" => Some(FontFamily::Courier),
            "symbol" => Some(FontFamily::Symbol),
            "zapfdingbats" => Some(FontFamily::ZapfDingbats),
            _ => None,
        }
    }

    /// The builtin font for a style, if the family has it
    pub fn font(self, style: FontStyle) -> Option<BuiltinFont> {
        use FontStyle::*;
        let font = match (self, style) {
            (FontFamily::Helvetica, Regular) => BuiltinFont::Helvetica,
            (FontFamily::Helvetica, Bold) => BuiltinFont::HelveticaBold,
            (FontFamily::Helvetica, Italic) => BuiltinFont::HelveticaOblique,
            (FontFamily::Helvetica, BoldItalic) => BuiltinFont::HelveticaBoldOblique,
            (FontFamily::Times, Regular) => BuiltinFont::TimesRoman,
            (FontFamily::Times, Bold) => BuiltinFont::TimesBold,
            (FontFamily::Times, Italic) => BuiltinFont::TimesItalic,
            (FontFamily::Times, BoldItalic) => BuiltinFont::TimesBoldItalic,
            (FontFamily::Courier, Regular) => BuiltinFont::Courier,
            (FontFamily::Courier, Bold) => BuiltinFont::CourierBold,
            (FontFamily::Courier, Italic) => BuiltinFont::CourierOblique,
            (FontFamily::Courier, BoldItalic) => BuiltinFont::CourierBoldOblique,
            (FontFamily::Symbol, Regular) => BuiltinFont::Symbol,
            (FontFamily::ZapfDingbats, Regular) => BuiltinFont::ZapfDingbats,
            _ => return None,
        };
        Some(font)
    }
}

/// Resolve a family name and style to a builtin font
pub fn resolve_font(family: &str, style: FontStyle) -> Result<BuiltinFont, RenderError> {
    FontFamily::from_name(family)
        .and_then(|f| f.font(style))
        .ok_or_else(|| RenderError::UnsupportedFont {
            family: family.to_string(),
            style: style.to_string(),
        })
}
