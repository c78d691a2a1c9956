//! Strategic benefits overview on a single page with a footer bar

use super::palette::{DARK_GRAY, GOLD, NAVY, WHITE};
use crate::config::defaults::{A4_HEIGHT, A4_WIDTH};
use crate::config::{Margins, PageSettings};
use crate::error::RenderError;
use crate::model::{Alignment, Banner, Block, Bullet, Document, FontStyle, FormattedText, Frame};
use crate::model::{Rule, Style};

const MARGIN: f32 = 15.0;
const USABLE_WIDTH: f32 = A4_WIDTH - 2.0 * MARGIN;

const BODY_SIZE: f32 = 8.0;
const BULLET_LINE_HEIGHT: f32 = 3.6;
const SECTION_GAP: f32 = 3.5;

/// Top of the footer bar; content must end above it
pub const FOOTER_Y: f32 = 282.0;
const FOOTER_HEIGHT: f32 = 8.0;

struct Section {
    icon: &'static str,
    title: &'static str,
    /// `**bold**` marks emphasis
    bullets: &'static [&'static str],
}

const SECTIONS: [Section; 5] = [
    Section {
        icon: "$",
        title: "DIRECT REVENUE STREAMS",
        bullets: &[
            "Transaction levies (1-1.5% on every digital transaction -- automated, no leakage)",
            "Annual trader registration fees (N5-10K per trader x thousands of traders)",
            "Premium listing fees (N5-15K/month for featured placement)",
            "**Conservative Year 1-2 projection: N107-178M annually**",
            "**Full potential Year 3-5: N632M - N1B annually**",
        ],
    },
    Section {
        icon: "+",
        title: "NEW BUSINESSES THE STATE CAN SPIN UP",
        bullets: &[
            "State-backed logistics network (delivery fleet serving buyers & sellers -- per-delivery fees)",
            "Warehousing & fulfillment centers (storage hubs in Aba -- rental income)",
            "Quality certification body (\"Made in Aba\" verification -- certification fees)",
            "Trade finance / micro-lending (data-backed loans to verified traders -- interest revenue)",
            "Packaging & branding services (professional packaging for e-commerce -- service fees)",
        ],
    },
    Section {
        icon: "~",
        title: "DATA & INTELLIGENCE (THE HIDDEN GOLD)",
        bullets: &[
            "First-ever digital trader registry (NIN-verified -- who trades, what, where, how much)",
            "Real-time economic activity data (transaction volumes, growth trends, seasonal patterns)",
            "Tax & levy optimization (data-driven collection replaces manual guesswork)",
            "Policy planning intelligence (which sectors grow, which need support, where to invest)",
            "Investor pitch material (hard data to attract FDI and federal funding)",
            "Citizen database asset (traders' information, business profiles, economic contributions)",
        ],
    },
    Section {
        icon: "*",
        title: "LEGACY & POLITICAL CAPITAL",
        bullets: &[
            "\"First Nigerian state to build a digital marketplace\" -- national press headline",
            "Visible modernization aligned with A-Line market rebuild",
            "Demonstrable economic data for federal engagement",
            "Blueprint other states will want to license (additional revenue)",
            "International recognition (\"China of Africa goes digital\")",
            "Permanent infrastructure that outlasts any administration",
        ],
    },
    Section {
        icon: "#",
        title: "SOCIAL IMPACT",
        bullets: &[
            "Traders reach buyers nationwide without leaving Aba",
            "Women and youth traders gain equal digital visibility",
            "\"Made in Aba\" brand rehabilitation (no more labeling goods \"Made in China\")",
            "Financial inclusion through escrow and digital payments",
            "USSD and WhatsApp access means no trader is excluded",
        ],
    },
];

pub fn page_settings() -> PageSettings {
    PageSettings::a4(Margins::new(MARGIN, 10.0, MARGIN).with_bottom(A4_HEIGHT - FOOTER_Y))
}

fn push_section(doc: &mut Document, section: &Section) -> Result<(), RenderError> {
    doc.push(Block::paragraph(
        format!("{}  {}", section.icon, section.title),
        Style::new("Helvetica", FontStyle::Bold, 10.5).with_color(NAVY),
        Frame::new(MARGIN, USABLE_WIDTH, 5.5),
    ));
    doc.push(
        Rule::new(MARGIN, MARGIN + 90.0)
            .stroke(NAVY, 0.3)
            .offset(0.5)
            .advance(2.0),
    );

    for bullet in section.bullets {
        doc.push(Bullet {
            marker: "-".to_string(),
            marker_width: 4.0,
            text: FormattedText::from_markdown(bullet)?,
            style: Style::new("Helvetica", FontStyle::Regular, BODY_SIZE).with_color(DARK_GRAY),
            frame: Frame::new(MARGIN + 3.0, USABLE_WIDTH - 3.0, BULLET_LINE_HEIGHT),
            space_after: 0.0,
        });
    }
    Ok(())
}

pub fn build() -> Result<Document, RenderError> {
    let mut doc = Document::new("Aba Digital Marketplace: Strategic Benefits", page_settings());

    doc.push(Block::paragraph(
        "ABA DIGITAL MARKETPLACE",
        Style::new("Helvetica", FontStyle::Bold, 20.0).with_color(NAVY),
        Frame::new(MARGIN, USABLE_WIDTH, 10.0).centered(),
    ));
    doc.push(Block::paragraph(
        "Strategic Benefits for His Excellency & Abia State",
        Style::new("Helvetica", FontStyle::Regular, 11.0).with_color(GOLD),
        Frame::new(MARGIN, USABLE_WIDTH, 6.0).centered(),
    ));
    doc.push(
        Rule::new(MARGIN + 30.0, A4_WIDTH - MARGIN - 30.0)
            .stroke(GOLD, 0.6)
            .offset(2.0)
            .advance(4.0),
    );

    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            doc.push(Block::Spacer(SECTION_GAP));
        }
        push_section(&mut doc, section)?;
    }

    doc.push(Banner {
        x: 0.0,
        y: FOOTER_Y,
        width: A4_WIDTH,
        height: FOOTER_HEIGHT,
        fill: NAVY,
        text: "Prepared by Stringz Technologies LLC   |   madeinaba.net   |   Confidential"
            .to_string(),
        style: Style::new("Helvetica", FontStyle::Regular, 7.5).with_color(WHITE),
        text_offset: 1.5,
        text_height: 5.0,
        align: Alignment::Center,
    });

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LayoutEngine, Placement};

    #[test]
    fn test_one_page_with_footer_banner() {
        let doc = build().unwrap();
        let layout = LayoutEngine::new(&doc.page).layout(&doc.blocks).unwrap();
        assert_eq!(layout.page_count(), 1);

        let page = &layout.pages[0];
        assert!(page.placements.iter().any(|p| matches!(
            p,
            Placement::Rect { y, fill, .. } if *y == FOOTER_Y && *fill == NAVY
        )));
        // Flowing content stays above the bar
        for p in &page.placements {
            if let Placement::Text { top, text, .. } = p {
                if !text.starts_with("Prepared by") {
                    assert!(*top < FOOTER_Y);
                }
            }
        }
    }

    #[test]
    fn test_bold_projection_bullets() {
        let doc = build().unwrap();
        let bold_bullets = doc
            .blocks
            .iter()
            .filter(|b| match b {
                Block::Bullet(bullet) => bullet
                    .text
                    .spans
                    .iter()
                    .any(|s| s.font_style == FontStyle::Bold),
                _ => false,
            })
            .count();
        assert_eq!(bold_bullets, 2);
    }
}
