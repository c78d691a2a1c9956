use std::path::PathBuf;

use crate::cli::Args;

use super::defaults::*;

/// Physical page size
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    /// Custom size in mm (width, height), portrait
    Custom(f32, f32),
}

impl PageSize {
    /// Portrait dimensions in mm (width, height)
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (A4_WIDTH, A4_HEIGHT),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page margins in mm
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(margin: f32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    /// Margins given as (left, top, right), bottom left at the default
    pub fn new(left: f32, top: f32, right: f32) -> Self {
        Self {
            top,
            right,
            bottom: DEFAULT_PAGE_MARGIN,
            left,
        }
    }

    pub fn with_bottom(mut self, bottom: f32) -> Self {
        self.bottom = bottom;
        self
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_PAGE_MARGIN)
    }
}

/// Page configuration for one document
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    /// Distance from the bottom edge that triggers an automatic page break.
    /// `None` disables automatic pagination.
    pub auto_page_break: Option<f32>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            auto_page_break: Some(DEFAULT_BREAK_TRIGGER),
        }
    }
}

impl PageSettings {
    /// A4 portrait page with the given margins and automatic pagination disabled
    pub fn a4(margins: Margins) -> Self {
        Self {
            margins,
            auto_page_break: None,
            ..Default::default()
        }
    }

    pub fn with_auto_page_break(mut self, trigger: f32) -> Self {
        self.auto_page_break = Some(trigger);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Page dimensions in mm (width, height) accounting for orientation
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_dimensions().0
    }

    pub fn page_height(&self) -> f32 {
        self.page_dimensions().1
    }

    /// Get the usable content area width
    pub fn content_width(&self) -> f32 {
        self.page_width() - self.margins.left - self.margins.right
    }

    /// Lowest y (mm from the top edge) content may reach on a page
    pub fn bottom_bound(&self) -> f32 {
        match self.auto_page_break {
            Some(trigger) => self.page_height() - trigger,
            None => self.page_height() - self.margins.bottom,
        }
    }
}

/// Runtime settings for the generator binary
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            output_dir: args.output_dir.clone(),
        }
    }
}
