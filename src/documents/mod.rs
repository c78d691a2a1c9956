//! The three proposal documents
//!
//! Each module builds a [`Document`] from literal content; nothing here draws.

pub mod memo;
pub mod one_pager;
pub mod palette;
pub mod script;

use std::fmt;

use crate::error::RenderError;
use crate::model::Document;

/// The documents the generator produces, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Memo,
    VideoScript,
    BenefitsOnePager,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Memo,
        DocumentKind::VideoScript,
        DocumentKind::BenefitsOnePager,
    ];

    /// Output file name
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Memo => "governor-memo.pdf",
            DocumentKind::VideoScript => "video-script.pdf",
            DocumentKind::BenefitsOnePager => "benefits-one-pager.pdf",
        }
    }

    pub fn build(self) -> Result<Document, RenderError> {
        match self {
            DocumentKind::Memo => memo::build(),
            DocumentKind::VideoScript => script::build(),
            DocumentKind::BenefitsOnePager => one_pager::build(),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Memo => "memorandum",
            DocumentKind::VideoScript => "video script",
            DocumentKind::BenefitsOnePager => "benefits one-pager",
        };
        f.write_str(name)
    }
}
