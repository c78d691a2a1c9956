//! Layout instructions consumed by the composer
//!
//! Positions are in mm, x from the left edge and y from the top edge of the page.

use super::style::{RgbColor, Style};
use super::text::FormattedText;
use crate::config::defaults::DEFAULT_RULE_THICKNESS;

/// Horizontal alignment of a line within its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Horizontal extent and line metrics of a text block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub width: f32,
    pub line_height: f32,
    pub align: Alignment,
}

impl Frame {
    pub fn new(x: f32, width: f32, line_height: f32) -> Self {
        Self {
            x,
            width,
            line_height,
            align: Alignment::Left,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }

    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Wrapped text, possibly mixing inline styles
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: FormattedText,
    pub style: Style,
    pub frame: Frame,
    /// Gap added below the last line
    pub space_after: f32,
}

/// Label cell followed by a wrapped value on the same row
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub label_style: Style,
    pub label_width: f32,
    pub value: FormattedText,
    pub value_style: Style,
    pub frame: Frame,
    pub space_after: f32,
}

/// Marker cell (e.g. `-` or `1.`) followed by wrapped text
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub marker: String,
    pub marker_width: f32,
    pub text: FormattedText,
    pub style: Style,
    pub frame: Frame,
    pub space_after: f32,
}

/// Horizontal line drawn `offset` below the cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub offset: f32,
    /// Cursor advance measured from the line itself
    pub advance: f32,
    pub thickness: f32,
    pub color: RgbColor,
}

impl Rule {
    pub fn new(x1: f32, x2: f32) -> Self {
        Self {
            x1,
            x2,
            offset: 0.0,
            advance: 0.0,
            thickness: DEFAULT_RULE_THICKNESS,
            color: RgbColor::default(),
        }
    }

    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub fn stroke(mut self, color: RgbColor, thickness: f32) -> Self {
        self.color = color;
        self.thickness = thickness;
        self
    }
}

/// Filled bar at a fixed position with one line of text; does not move the cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: RgbColor,
    pub text: String,
    pub style: Style,
    /// Top of the text line, relative to the banner top
    pub text_offset: f32,
    pub text_height: f32,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Field(Field),
    Bullet(Bullet),
    Rule(Rule),
    Banner(Banner),
    /// Advance the cursor
    Spacer(f32),
    /// Start a new page if the cursor is below this y
    BreakIfBelow(f32),
    PageBreak,
}

impl Block {
    pub fn paragraph(text: impl Into<FormattedText>, style: Style, frame: Frame) -> Self {
        Block::Paragraph(Paragraph {
            text: text.into(),
            style,
            frame,
            space_after: 0.0,
        })
    }

    /// Set the trailing gap of a text block; other blocks are returned unchanged
    pub fn space_after(mut self, gap: f32) -> Self {
        match &mut self {
            Block::Paragraph(p) => p.space_after = gap,
            Block::Field(f) => f.space_after = gap,
            Block::Bullet(b) => b.space_after = gap,
            _ => {}
        }
        self
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Field> for Block {
    fn from(f: Field) -> Self {
        Block::Field(f)
    }
}

impl From<Bullet> for Block {
    fn from(b: Bullet) -> Self {
        Block::Bullet(b)
    }
}

impl From<Rule> for Block {
    fn from(r: Rule) -> Self {
        Block::Rule(r)
    }
}

impl From<Banner> for Block {
    fn from(b: Banner) -> Self {
        Block::Banner(b)
    }
}
