//! One-page memorandum to the Governor
//!
//! Fixed structure: title, header fields, then inline-headed sections in the
//! order Opportunity, What We Have Built, The Ask (with two numbered pilot
//! milestones), Why Now, Request.

use super::palette::{BLACK, DARK_GRAY, RULE_GRAY};
use crate::config::{Margins, PageSettings};
use crate::error::RenderError;
use crate::model::{Block, Bullet, Document, Field, FontStyle, FormattedText, Frame, Rule, Style};
use crate::model::TextSpan;

const LEFT: f32 = 25.0;
const RIGHT: f32 = 185.0;
const USABLE_WIDTH: f32 = RIGHT - LEFT;

const BODY_SIZE: f32 = 9.5;
const BODY_LINE_HEIGHT: f32 = 4.2;
const LABEL_WIDTH: f32 = 18.0;

/// Section headers in document order
pub const SECTIONS: [&str; 5] = [
    "The Opportunity.",
    "What We Have Built.",
    "The Ask.",
    "Why Now.",
    "Request.",
];

fn body_style() -> Style {
    Style::new("Helvetica", FontStyle::Regular, BODY_SIZE).with_color(DARK_GRAY)
}

fn body_frame() -> Frame {
    Frame::new(LEFT, USABLE_WIDTH, BODY_LINE_HEIGHT)
}

fn rule() -> Rule {
    Rule::new(LEFT, RIGHT).stroke(RULE_GRAY, 0.5)
}

struct MemoWriter {
    doc: Document,
}

impl MemoWriter {
    fn field(&mut self, label: &str, value: &str, space_after: f32) {
        self.doc.push(Field {
            label: label.to_string(),
            label_style: Style::new("Helvetica", FontStyle::Bold, 10.0),
            label_width: LABEL_WIDTH,
            value: value.into(),
            value_style: Style::new("Helvetica", FontStyle::Regular, 10.0),
            frame: Frame::new(LEFT, USABLE_WIDTH, 5.0),
            space_after,
        });
    }

    fn body(&mut self, text: &str, space_after: f32) {
        self.doc
            .push(Block::paragraph(text, body_style(), body_frame()).space_after(space_after));
    }

    /// Bold black header running straight into the section body
    fn section(&mut self, header: &str, text: &str) {
        let content = FormattedText::new()
            .with(TextSpan::bold(header).with_color(BLACK))
            .with(TextSpan::plain(text));
        self.doc
            .push(Block::paragraph(content, body_style(), body_frame()).space_after(1.5));
    }

    fn numbered(&mut self, number: usize, text: &str) {
        self.doc.push(Bullet {
            marker: format!("{}.", number),
            marker_width: 5.0,
            text: text.into(),
            style: body_style(),
            frame: Frame::new(LEFT + 5.0, USABLE_WIDTH - 5.0, BODY_LINE_HEIGHT),
            space_after: 0.0,
        });
    }
}

pub fn page_settings() -> PageSettings {
    PageSettings::a4(Margins::new(LEFT, 18.0, 210.0 - RIGHT))
}

pub fn build() -> Result<Document, RenderError> {
    let mut w = MemoWriter {
        doc: Document::new("Memorandum: Aba Digital Marketplace Pilot", page_settings()),
    };

    w.doc.push(Block::paragraph(
        "MEMORANDUM",
        Style::new("Helvetica", FontStyle::Bold, 20.0).with_color(BLACK),
        Frame::new(LEFT, USABLE_WIDTH, 10.0).centered(),
    ));
    w.doc.push(rule().offset(2.0).advance(4.0));

    w.field(
        "TO:",
        "His Excellency Dr. Alex Chioma Otti, OFR, Executive Governor of Abia State",
        1.0,
    );
    w.field("FROM:", "Stringz Technologies LLC", 1.0);
    w.field("DATE:", "February 2026", 1.0);
    w.field(
        "RE:",
        "Proposal for a 90-Day Pilot -- Aba Digital Marketplace (madeinaba.net)",
        0.0,
    );
    w.doc.push(rule().offset(3.0).advance(5.0));

    w.body("Your Excellency,", 2.0);
    w.body(
        "We write to present a ready-to-deploy digital marketplace platform purpose-built \
         for Aba's trading economy. A five-minute video walkthrough accompanies this memo. \
         We respectfully request your consideration of a structured pilot that would make \
         Abia the first Nigerian state to operate a government-backed digital marketplace at scale.",
        1.5,
    );

    w.section(
        SECTIONS[0],
        " Aba's markets generate an estimated 144 billion naira in annual trade volume, yet \
         virtually none of this commerce is visible online. Across Ariaria International Market \
         alone, over 70,000 shops and 160,000 artisans operate without a digital registry, without \
         e-commerce infrastructure, and almost entirely on cash. Buyers who would purchase Aba-made \
         goods -- across Nigeria and the diaspora -- simply cannot find them. This is a solvable problem.",
    );

    w.section(
        SECTIONS[1],
        " At our own cost, Stringz Technologies has designed and developed a working prototype of \
         the Aba Digital Marketplace, accessible at madeinaba.net. The platform enables trader \
         onboarding, product listing, buyer discovery, and a real-time government analytics dashboard. \
         Critically, it is built for Aba's traders as they are today: the system operates via WhatsApp, \
         USSD, and web, so traders do not need smartphones or technical literacy to participate. The \
         enclosed video walkthrough demonstrates the full platform in under five minutes.",
    );

    w.section(
        SECTIONS[2],
        " We propose a 90-day pilot scoped to a single market zone -- the A-Line section of Ariaria \
         -- with milestone-based funding of 100 million naira, disbursed against verified deliverables:",
    );
    w.numbered(
        1,
        "Day 30: 500 verified traders onboarded, 2,000+ products live on the platform",
    );
    w.numbered(
        2,
        "Day 90: 2,000 verified traders, 10,000+ products, and a live government dashboard \
         reporting trade activity, trader data, and market analytics",
    );
    w.doc.push(Block::Spacer(1.0));
    w.body(
        "Payments would be tied to the achievement of each milestone. If deliverables are not met, \
         remaining funds are not disbursed.",
        1.5,
    );

    w.section(
        SECTIONS[3],
        " Three conditions make this the right moment. First, the Phase II reconstruction of the \
         A-Line market creates a natural integration point -- digital infrastructure alongside \
         physical rebuilding. Second, the Government of Abia Digital Agency (GADA) already exists \
         as the institutional home for this initiative. Third, no other Nigerian state has moved on \
         this; Abia has the opportunity to lead. Conservative revenue projections place the platform's \
         potential at 107 to 178 million naira annually within the first two years through listing \
         fees, promotion tools, and transaction services.",
    );

    w.section(
        SECTIONS[4],
        " We respectfully request an audience with Your Excellency or your designated representative \
         to present the platform in detail and discuss pilot terms. We are prepared to begin within \
         30 days of approval.",
    );
    w.body(
        "We thank Your Excellency for your time and your continued commitment to the economic \
         transformation of Abia State.",
        1.5,
    );

    w.doc.push(Block::Spacer(3.0));
    w.body("Respectfully submitted,", 4.0);
    w.doc.push(Block::paragraph(
        "Stringz Technologies LLC",
        body_style().with_font_style(FontStyle::Bold).with_color(BLACK),
        body_frame(),
    ));

    Ok(w.doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LayoutEngine;

    #[test]
    fn test_memo_fits_on_one_page() {
        let doc = build().unwrap();
        let layout = LayoutEngine::new(&doc.page).layout(&doc.blocks).unwrap();
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn test_exactly_two_numbered_bullets() {
        let doc = build().unwrap();
        let markers: Vec<_> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Bullet(bullet) => Some(bullet.marker.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(markers, vec!["1.", "2."]);
    }
}
