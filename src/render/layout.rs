//! Block layout
//!
//! Turns an ordered list of blocks into positioned text runs, lines and filled
//! rectangles. Nothing here touches printpdf; coordinates are mm from the
//! top-left corner of the page.

use printpdf::BuiltinFont;

use crate::config::PageSettings;
use crate::error::RenderError;
use crate::model::{Alignment, Banner, Block, Bullet, Field, FormattedText, Frame, Paragraph, Rule};
use crate::model::{RgbColor, Style};

use super::helpers::fonts::resolve_font;
use super::helpers::text_metrics::BuiltinFontMeasurer;
use super::page::PageCursor;
use super::wrap::{wrap_runs, StyledRun, WrappedLine};

/// A positioned drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// One run of text in a single font, on a line box starting at `top`
    Text {
        text: String,
        x: f32,
        top: f32,
        width: f32,
        line_height: f32,
        font: BuiltinFont,
        size: f32,
        color: RgbColor,
    },
    Line {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: RgbColor,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: RgbColor,
    },
}

impl Placement {
    /// Lowest y reached by this placement
    pub fn bottom(&self) -> f32 {
        match self {
            Placement::Text {
                top, line_height, ..
            } => top + line_height,
            Placement::Line { y, thickness, .. } => y + thickness / 2.0,
            Placement::Rect { y, height, .. } => y + height,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Placement::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub placements: Vec<Placement>,
}

impl PageLayout {
    /// Text runs on the page in placement order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().filter_map(Placement::text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Result of laying out a document
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pages: Vec<PageLayout>,
    pub page_width: f32,
    pub page_height: f32,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lays out blocks for one page configuration
#[derive(Debug, Clone)]
pub struct LayoutEngine<'a> {
    settings: &'a PageSettings,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(settings: &'a PageSettings) -> Self {
        Self { settings }
    }

    pub fn layout(&self, blocks: &[Block]) -> Result<Layout, RenderError> {
        let mut cursor = PageCursor::new(self.settings);

        for block in blocks {
            match block {
                Block::Paragraph(p) => self.layout_paragraph(&mut cursor, p)?,
                Block::Field(f) => self.layout_field(&mut cursor, f)?,
                Block::Bullet(b) => self.layout_bullet(&mut cursor, b)?,
                Block::Rule(r) => self.layout_rule(&mut cursor, r)?,
                Block::Banner(b) => self.layout_banner(&mut cursor, b)?,
                Block::Spacer(h) => cursor.skip(*h),
                Block::BreakIfBelow(y) => cursor.break_if_below(*y),
                Block::PageBreak => cursor.new_page(),
            }
        }

        let (page_width, page_height) = self.settings.page_dimensions();
        Ok(Layout {
            pages: cursor.into_pages(),
            page_width,
            page_height,
        })
    }

    fn layout_paragraph(&self, cursor: &mut PageCursor, p: &Paragraph) -> Result<(), RenderError> {
        let runs = resolve_runs(&p.text, &p.style)?;
        let lines = wrap_runs(&runs, p.style.size, p.frame.width);

        for line in &lines {
            cursor.ensure_room(p.frame.line_height)?;
            place_line(cursor, line, &p.frame, p.frame.x, p.frame.width, p.style.size);
            cursor.advance(p.frame.line_height);
        }
        cursor.skip(p.space_after);
        Ok(())
    }

    fn layout_field(&self, cursor: &mut PageCursor, f: &Field) -> Result<(), RenderError> {
        let label = Label {
            text: &f.label,
            style: &f.label_style,
            width: f.label_width,
        };
        self.layout_labeled(cursor, label, &f.value, &f.value_style, &f.frame)?;
        cursor.skip(f.space_after);
        Ok(())
    }

    fn layout_bullet(&self, cursor: &mut PageCursor, b: &Bullet) -> Result<(), RenderError> {
        let label = Label {
            text: &b.marker,
            style: &b.style,
            width: b.marker_width,
        };
        self.layout_labeled(cursor, label, &b.text, &b.style, &b.frame)?;
        cursor.skip(b.space_after);
        Ok(())
    }

    /// Fixed-width label cell on the first row, wrapped text to its right
    fn layout_labeled(
        &self,
        cursor: &mut PageCursor,
        label: Label<'_>,
        text: &FormattedText,
        style: &Style,
        frame: &Frame,
    ) -> Result<(), RenderError> {
        let label_font = resolve_font(&label.style.family, label.style.font_style)?;
        let runs = resolve_runs(text, style)?;
        let text_x = frame.x + label.width;
        let text_width = frame.width - label.width;
        let lines = wrap_runs(&runs, style.size, text_width);

        for (i, line) in lines.iter().enumerate() {
            cursor.ensure_room(frame.line_height)?;
            if i == 0 && !label.text.is_empty() {
                let width = BuiltinFontMeasurer::new(label_font)
                    .measure_width_mm(label.text, label.style.size);
                cursor.place(Placement::Text {
                    text: label.text.to_string(),
                    x: frame.x,
                    top: cursor.y(),
                    width,
                    line_height: frame.line_height,
                    font: label_font,
                    size: label.style.size,
                    color: label.style.color,
                });
            }
            place_line(cursor, line, frame, text_x, text_width, style.size);
            cursor.advance(frame.line_height);
        }
        Ok(())
    }

    fn layout_rule(&self, cursor: &mut PageCursor, r: &Rule) -> Result<(), RenderError> {
        // The stroke is centred on y, so half of it hangs below the line
        cursor.ensure_room((r.offset + r.thickness / 2.0).max(0.0))?;
        let y = cursor.y() + r.offset;
        cursor.place(Placement::Line {
            x1: r.x1,
            x2: r.x2,
            y,
            thickness: r.thickness,
            color: r.color,
        });
        cursor.set_y(y + r.advance);
        Ok(())
    }

    fn layout_banner(&self, cursor: &mut PageCursor, b: &Banner) -> Result<(), RenderError> {
        let (page_width, page_height) = self.settings.page_dimensions();
        if b.x < 0.0 || b.y < 0.0 || b.x + b.width > page_width || b.y + b.height > page_height {
            return Err(RenderError::LayoutOverflow {
                page: cursor.page_number(),
                y: b.y + b.height,
            });
        }

        let font = resolve_font(&b.style.family, b.style.font_style)?;
        let text_width = BuiltinFontMeasurer::new(font).measure_width_mm(&b.text, b.style.size);

        cursor.place(Placement::Rect {
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
            fill: b.fill,
        });
        if !b.text.is_empty() {
            cursor.place(Placement::Text {
                text: b.text.clone(),
                x: align_x(b.align, b.x, b.width, text_width),
                top: b.y + b.text_offset,
                width: text_width,
                line_height: b.text_height,
                font,
                size: b.style.size,
                color: b.style.color,
            });
        }
        Ok(())
    }
}

struct Label<'a> {
    text: &'a str,
    style: &'a Style,
    width: f32,
}

/// Resolve each span's font and color against the block style
fn resolve_runs<'t>(text: &'t FormattedText, style: &Style) -> Result<Vec<StyledRun<'t>>, RenderError> {
    text.spans
        .iter()
        .map(|span| {
            Ok(StyledRun {
                text: &span.text,
                font: resolve_font(&style.family, style.font_style.combine(span.font_style))?,
                color: span.color.unwrap_or(style.color),
            })
        })
        .collect()
}

fn align_x(align: Alignment, x: f32, available: f32, width: f32) -> f32 {
    match align {
        Alignment::Left => x,
        Alignment::Center => x + (available - width) / 2.0,
        Alignment::Right => x + available - width,
    }
}

/// Place the visible runs of one wrapped line at the cursor
fn place_line(
    cursor: &mut PageCursor,
    line: &WrappedLine,
    frame: &Frame,
    x: f32,
    width: f32,
    size: f32,
) {
    let line_x = align_x(frame.align, x, width, line.width);
    for run in line.visible_runs() {
        let run_width = BuiltinFontMeasurer::new(run.font).measure_width_mm(&run.text, size);
        cursor.place(Placement::Text {
            x: line_x + run.offset,
            top: cursor.y(),
            width: run_width,
            line_height: frame.line_height,
            font: run.font,
            size,
            color: run.color,
            text: run.text,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Margins;
    use crate::model::{FontStyle, TextSpan};

    fn body() -> Style {
        Style::new("Helvetica", FontStyle::Regular, 10.0)
    }

    fn long_text() -> String {
        "Local producers lose a large share of their harvest between farm gate and market. "
            .repeat(6)
    }

    #[test]
    fn test_centered_title() {
        let settings = PageSettings::a4(Margins::new(25.0, 20.0, 25.0));
        let style = Style::new("Helvetica", FontStyle::Bold, 20.0);
        let blocks = vec![Block::paragraph(
            "MEMORANDUM",
            style,
            Frame::new(25.0, 160.0, 10.0).centered(),
        )];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();

        match &layout.pages[0].placements[0] {
            Placement::Text { x, width, .. } => {
                assert!((x + width / 2.0 - 105.0).abs() < 0.01);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_right_aligned_line_ends_at_frame_edge() {
        let settings = PageSettings::a4(Margins::uniform(20.0));
        let blocks = vec![Block::paragraph(
            "February 2026",
            body(),
            Frame::new(20.0, 170.0, 5.0).aligned(Alignment::Right),
        )];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();

        match &layout.pages[0].placements[0] {
            Placement::Text { x, width, .. } => assert!((x + width - 190.0).abs() < 0.01),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_paragraph_wraps_within_frame() {
        let settings = PageSettings::a4(Margins::uniform(20.0));
        let blocks = vec![Block::paragraph(
            long_text().as_str(),
            body(),
            Frame::new(20.0, 170.0, 5.0),
        )];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();
        let texts: Vec<_> = layout.pages[0].placements.iter().collect();

        assert!(texts.len() >= 2);
        for p in texts {
            if let Placement::Text { x, width, .. } = p {
                assert!(x + width <= 190.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_auto_pagination_stays_above_bound() {
        let settings = PageSettings::a4(Margins::uniform(20.0)).with_auto_page_break(20.0);
        let blocks: Vec<Block> = (0..12)
            .map(|_| {
                Block::paragraph(long_text().as_str(), body(), Frame::new(20.0, 170.0, 5.0))
                    .space_after(3.0)
            })
            .collect();
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();

        assert!(layout.page_count() > 1);
        for page in &layout.pages {
            for p in &page.placements {
                assert!(p.bottom() <= 277.0 + 1e-3, "placement below bound: {:?}", p);
            }
        }
    }

    #[test]
    fn test_overflow_without_auto_pagination() {
        let settings = PageSettings::a4(Margins::uniform(20.0));
        let blocks: Vec<Block> = (0..12)
            .map(|_| Block::paragraph(long_text().as_str(), body(), Frame::new(20.0, 170.0, 5.0)))
            .collect();
        let err = LayoutEngine::new(&settings).layout(&blocks).unwrap_err();
        assert!(matches!(err, RenderError::LayoutOverflow { page: 1, .. }));
    }

    #[test]
    fn test_unsupported_font() {
        let settings = PageSettings::default();
        let blocks = vec![Block::paragraph(
            "hello",
            Style::new("Papyrus", FontStyle::Regular, 10.0),
            Frame::new(10.0, 100.0, 5.0),
        )];
        let err = LayoutEngine::new(&settings).layout(&blocks).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFont { .. }));
    }

    #[test]
    fn test_field_label_shares_first_row() {
        let settings = PageSettings::a4(Margins::new(25.0, 20.0, 25.0));
        let field = Field {
            label: "TO:".to_string(),
            label_style: body().with_font_style(FontStyle::Bold),
            label_width: 18.0,
            value: FormattedText::from("His Excellency, the Executive Governor"),
            value_style: body(),
            frame: Frame::new(25.0, 160.0, 5.0),
            space_after: 1.0,
        };
        let layout = LayoutEngine::new(&settings).layout(&[field.into()]).unwrap();
        let placements = &layout.pages[0].placements;

        match (&placements[0], &placements[1]) {
            (
                Placement::Text { text: label, x: lx, top: lt, .. },
                Placement::Text { x: vx, top: vt, .. },
            ) => {
                assert_eq!(label, "TO:");
                assert_eq!(*lx, 25.0);
                assert_eq!(*vx, 43.0);
                assert_eq!(lt, vt);
            }
            other => panic!("unexpected placements {:?}", other),
        }
    }

    #[test]
    fn test_inline_bold_uses_bold_font() {
        let settings = PageSettings::default();
        let text = FormattedText::new()
            .with(TextSpan::bold("Request: "))
            .with(TextSpan::plain("a meeting"));
        let blocks = vec![Block::paragraph(text, body(), Frame::new(10.0, 190.0, 5.0))];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();

        let fonts: Vec<_> = layout.pages[0]
            .placements
            .iter()
            .filter_map(|p| match p {
                Placement::Text { font, .. } => Some(*font),
                _ => None,
            })
            .collect();
        assert_eq!(fonts, vec![BuiltinFont::HelveticaBold, BuiltinFont::Helvetica]);
    }

    #[test]
    fn test_rule_advances_by_declared_amount() {
        let settings = PageSettings::a4(Margins::new(25.0, 20.0, 25.0));
        let blocks = vec![
            Rule::new(25.0, 185.0).offset(2.0).advance(5.0).into(),
            Block::paragraph("after", body(), Frame::new(25.0, 160.0, 5.0)),
        ];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();
        let placements = &layout.pages[0].placements;

        assert!((placements[0].bottom() - 22.1).abs() < 1e-4);
        match &placements[1] {
            Placement::Text { top, .. } => assert_eq!(*top, 27.0),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_banner_outside_page_is_rejected() {
        let settings = PageSettings::default();
        let banner = Banner {
            x: 0.0,
            y: 292.0,
            width: 210.0,
            height: 8.0,
            fill: RgbColor::new(0, 40, 104),
            text: "footer".to_string(),
            style: body(),
            text_offset: 1.5,
            text_height: 5.0,
            align: Alignment::Center,
        };
        let err = LayoutEngine::new(&settings).layout(&[banner.into()]).unwrap_err();
        assert!(matches!(err, RenderError::LayoutOverflow { .. }));
    }

    #[test]
    fn test_page_break_restarts_at_top_margin() {
        let settings = PageSettings::a4(Margins::new(25.0, 18.0, 25.0));
        let frame = Frame::new(25.0, 160.0, 5.0);
        let blocks = vec![
            Block::paragraph("first page", body(), frame),
            Block::PageBreak,
            Block::paragraph("second page", body(), frame),
        ];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();

        assert_eq!(layout.page_count(), 2);
        assert!(layout.pages[0].contains_text("first page"));
        match &layout.pages[1].placements[0] {
            Placement::Text { text, top, .. } => {
                assert_eq!(text, "second page");
                assert_eq!(*top, 18.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_italic_spans_pick_oblique_fonts() {
        let settings = PageSettings::default();
        let text = FormattedText::new()
            .with(TextSpan::italic("Cut to: "))
            .with(TextSpan::bold_italic("market stall"));
        let blocks = vec![Block::paragraph(text, body(), Frame::new(10.0, 190.0, 5.0))];
        let layout = LayoutEngine::new(&settings).layout(&blocks).unwrap();

        let fonts: Vec<_> = layout.pages[0]
            .placements
            .iter()
            .filter_map(|p| match p {
                Placement::Text { font, .. } => Some(*font),
                _ => None,
            })
            .collect();
        assert_eq!(
            fonts,
            vec![BuiltinFont::HelveticaOblique, BuiltinFont::HelveticaBoldOblique]
        );
    }

    #[test]
    fn test_rule_stroke_counts_against_bound() {
        let rule = Rule::new(20.0, 190.0).stroke(RgbColor::new(0, 40, 104), 0.5);

        // Line sits exactly on the bound, so half the stroke would hang below it
        let manual = PageSettings::a4(Margins::uniform(20.0));
        let blocks = vec![Block::Spacer(257.0), rule.clone().into()];
        let err = LayoutEngine::new(&manual).layout(&blocks).unwrap_err();
        assert!(matches!(err, RenderError::LayoutOverflow { page: 1, .. }));

        let auto = manual.with_auto_page_break(20.0);
        let layout = LayoutEngine::new(&auto).layout(&blocks).unwrap();
        assert_eq!(layout.page_count(), 2);
        let line = &layout.pages[1].placements[0];
        assert!((line.bottom() - 20.25).abs() < 1e-4);
        assert!(line.bottom() <= auto.bottom_bound());
    }
}
