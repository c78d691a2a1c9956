/// Millimetres per PostScript point
pub const MM_PER_PT: f32 = 0.3528;

/// A4 page width in mm
pub const A4_WIDTH: f32 = 210.0;

/// A4 page height in mm
pub const A4_HEIGHT: f32 = 297.0;

/// Default page margin in mm (applies to all four sides)
pub const DEFAULT_PAGE_MARGIN: f32 = 10.0;

/// Default distance from the bottom edge that triggers an automatic page break
pub const DEFAULT_BREAK_TRIGGER: f32 = 20.0;

/// Default body font size in points
pub const DEFAULT_BODY_FONT_SIZE: f32 = 10.0;

/// Default font family
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Default rule thickness in mm
pub const DEFAULT_RULE_THICKNESS: f32 = 0.2;
