use crate::config::PageSettings;
use crate::error::RenderError;

use super::layout::{PageLayout, Placement};

/// Vertical cursor over a growing list of pages
///
/// Tracks where the next line goes and decides when a new page is needed.
/// All positions are mm from the top edge.
pub struct PageCursor {
    top: f32,
    bottom_bound: f32,
    auto_break: bool,
    pages: Vec<PageLayout>,
    y: f32,
}

impl PageCursor {
    pub fn new(settings: &PageSettings) -> Self {
        Self {
            top: settings.margins.top,
            bottom_bound: settings.bottom_bound(),
            auto_break: settings.auto_page_break.is_some(),
            pages: vec![PageLayout::default()],
            y: settings.margins.top,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// 1-based number of the current page
    pub fn page_number(&self) -> usize {
        self.pages.len()
    }

    fn at_top(&self) -> bool {
        self.y <= self.top
    }

    /// Start a new page with the cursor at the top margin
    pub fn new_page(&mut self) {
        log::debug!(
            "Page break at y={:.1}mm, starting page {}",
            self.y,
            self.pages.len() + 1
        );
        self.pages.push(PageLayout::default());
        self.y = self.top;
    }

    /// Make sure `height` mm of content fits below the cursor.
    ///
    /// With automatic pagination this moves to a new page when needed; without it,
    /// content past the bottom bound is an error.
    pub fn ensure_room(&mut self, height: f32) -> Result<(), RenderError> {
        if self.y + height <= self.bottom_bound {
            return Ok(());
        }
        if !self.auto_break {
            return Err(RenderError::LayoutOverflow {
                page: self.page_number(),
                y: self.y + height,
            });
        }
        // Content taller than a whole page is placed as-is rather than looping
        if !self.at_top() {
            self.new_page();
        }
        Ok(())
    }

    /// Move down by `height` mm
    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Blank vertical space; with automatic pagination, a gap crossing the bound
    /// ends the page instead
    pub fn skip(&mut self, height: f32) {
        if self.auto_break && self.y + height > self.bottom_bound {
            self.new_page();
        } else {
            self.y += height;
        }
    }

    /// Manual pagination: new page if the cursor is already below `y`
    pub fn break_if_below(&mut self, y: f32) {
        if self.y > y {
            self.new_page();
        }
    }

    pub fn place(&mut self, placement: Placement) {
        // pages is never empty: it starts with one page and only grows
        if let Some(page) = self.pages.last_mut() {
            page.placements.push(placement);
        }
    }

    pub fn into_pages(self) -> Vec<PageLayout> {
        self.pages
    }
}
