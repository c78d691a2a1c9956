use crate::model::RgbColor;

/// #002868
pub const NAVY: RgbColor = RgbColor::new(0, 40, 104);
/// #C9A227
pub const GOLD: RgbColor = RgbColor::new(201, 162, 39);
pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
pub const DARK_GRAY: RgbColor = RgbColor::new(50, 50, 50);
pub const MEDIUM_GRAY: RgbColor = RgbColor::new(100, 100, 100);
pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
pub const RULE_GRAY: RgbColor = RgbColor::new(180, 180, 180);
