use super::block::Block;
use crate::config::PageSettings;

/// Page configuration plus the ordered blocks rendered onto it
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub page: PageSettings,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>, page: PageSettings) -> Self {
        Self {
            title: title.into(),
            page,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }
}
