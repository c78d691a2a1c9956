//! Text measurement for the PDF builtin fonts
//!
//! Widths come from Adobe's AFM files for the Standard 14 fonts, in 1000 units per em.
//! Layout uses these to wrap text before anything is drawn.

use printpdf::BuiltinFont;

use crate::config::defaults::MM_PER_PT;

/// Text measurer for one builtin font
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    /// Get character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        // Builtin fonts are WinAnsi encoded; outside ASCII fall back to an average width
        if !c.is_ascii() {
            return 500;
        }

        let code = c as usize;
        let table = match self.font {
            BuiltinFont::TimesRoman => &TIMES_ROMAN_WIDTHS,
            BuiltinFont::TimesBold => &TIMES_BOLD_WIDTHS,
            BuiltinFont::TimesItalic => &TIMES_ITALIC_WIDTHS,
            BuiltinFont::TimesBoldItalic => &TIMES_BOLD_ITALIC_WIDTHS,
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => return 600,
            BuiltinFont::Symbol | BuiltinFont::ZapfDingbats => return 500,
        };
        table[code]
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * MM_PER_PT
    }

    /// Get cap height in mm for the font at given size
    pub fn cap_height_mm(&self, font_size: f32) -> f32 {
        let cap_height = match self.font {
            BuiltinFont::TimesRoman
            | BuiltinFont::TimesBold
            | BuiltinFont::TimesItalic
            | BuiltinFont::TimesBoldItalic => 662,
            BuiltinFont::Helvetica
            | BuiltinFont::HelveticaBold
            | BuiltinFont::HelveticaOblique
            | BuiltinFont::HelveticaBoldOblique => 718,
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => 562,
            BuiltinFont::Symbol | BuiltinFont::ZapfDingbats => 700,
        };
        (cap_height as f32 / 1000.0) * font_size * MM_PER_PT
    }

    /// Baseline position inside a line box of `line_height` mm starting at `top`,
    /// centering the capitals vertically
    pub fn baseline(&self, top: f32, line_height: f32, font_size: f32) -> f32 {
        top + (line_height + self.cap_height_mm(font_size)) / 2.0
    }
}

// Adobe AFM character widths, indices 0-127 (only 32-126 are printable)

#[rustfmt::skip]
static TIMES_ROMAN_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 0,
];

#[rustfmt::skip]
static TIMES_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520, 0,
];

#[rustfmt::skip]
static TIMES_ITALIC_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541, 0,
];

#[rustfmt::skip]
static TIMES_BOLD_ITALIC_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570, 0,
];

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_text_measurement() {
        let measurer = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);

        let width = measurer.measure_width_mm("Hello", 10.0);
        assert!(width > 0.0);

        let longer_width = measurer.measure_width_mm("Hello World", 10.0);
        assert!(longer_width > width);

        // Width scales linearly with size
        let bigger_width = measurer.measure_width_mm("Hello", 20.0);
        assert!((bigger_width - width * 2.0).abs() < 0.01);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let bold = BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold);
        assert!(
            bold.measure_width_mm("MEMORANDUM", 12.0) > regular.measure_width_mm("MEMORANDUM", 12.0)
        );
    }

    #[test]
    fn test_courier_is_monospaced() {
        let courier = BuiltinFontMeasurer::new(BuiltinFont::Courier);
        assert_eq!(
            courier.measure_width_pt("iiii", 10.0),
            courier.measure_width_pt("MMMM", 10.0)
        );
        // 600 units at 10pt = 6pt per character
        assert!((courier.measure_width_pt("ab", 10.0) - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_baseline_inside_line_box() {
        let measurer = BuiltinFontMeasurer::new(BuiltinFont::Helvetica);
        let baseline = measurer.baseline(20.0, 5.0, 10.0);
        assert!(baseline > 20.0 && baseline < 25.0);
    }
}
