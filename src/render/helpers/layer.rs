//! Page operation builder
//!
//! Collects printpdf operations for one page behind a small drawing API
//! that takes page coordinates in mm (origin bottom-left).

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing,
    Pt, TextItem, WindingOrder,
};

/// A builder that collects PDF operations
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Set the fill color (also used for text)
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        let corners = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)];
        let points = corners
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point {
                    x: x.into(),
                    y: y.into(),
                },
                bezier: false,
            })
            .collect();

        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let points = vec![
            LinePoint {
                p: Point {
                    x: x1.into(),
                    y: y1.into(),
                },
                bezier: false,
            },
            LinePoint {
                p: Point {
                    x: x2.into(),
                    y: y2.into(),
                },
                bezier: false,
            },
        ];

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text("", 10.0, Mm(10.0), Mm(10.0), BuiltinFont::Helvetica);
        assert!(layer.is_empty());

        layer.use_text("MEMORANDUM", 20.0, Mm(10.0), Mm(10.0), BuiltinFont::HelveticaBold);
        assert_eq!(layer.len(), 5);
    }

    #[test]
    fn test_shapes_emit_one_op_each() {
        let mut layer = LayerBuilder::new();
        layer.add_line(Mm(20.0), Mm(250.0), Mm(190.0), Mm(250.0));
        layer.add_rect(Mm(0.0), Mm(7.0), Mm(210.0), Mm(15.0), PaintMode::Fill);
        assert_eq!(layer.into_ops().len(), 2);
    }
}
