//! Presenter script for the video walkthrough
//!
//! Runs over several pages. Automatic pagination handles long sections, and a
//! section header never starts in the last few centimetres of a page.

use super::palette::{BLACK, DARK_GRAY, GOLD, MEDIUM_GRAY, NAVY};
use crate::config::{Margins, PageSettings};
use crate::error::RenderError;
use crate::model::{Block, Bullet, Document, FontStyle, FormattedText, Frame, Rule, Style};

const LEFT: f32 = 20.0;
const RIGHT: f32 = 190.0;
const USABLE_WIDTH: f32 = RIGHT - LEFT;

/// Break before a section header when the cursor is below this y
const SECTION_BREAK_Y: f32 = 250.0;
/// Break before the production notes when the cursor is below this y
const NOTES_BREAK_Y: f32 = 220.0;

pub const PRODUCTION_NOTES: &str = "PRODUCTION NOTES";

fn style(font_style: FontStyle, size: f32) -> Style {
    Style::new("Helvetica", font_style, size)
}

struct ScriptWriter {
    doc: Document,
}

impl ScriptWriter {
    fn line(&mut self, text: &str, style: Style, frame: Frame, space_after: f32) {
        self.doc
            .push(Block::paragraph(text, style, frame).space_after(space_after));
    }

    fn section(&mut self, number: u32, title: &str, timestamp: &str) {
        self.doc.push(Block::BreakIfBelow(SECTION_BREAK_Y));
        self.line(
            &format!("SECTION {}: {}  [{}]", number, title, timestamp),
            style(FontStyle::Bold, 13.0).with_color(NAVY),
            Frame::new(LEFT, USABLE_WIDTH, 8.0),
            1.0,
        );
        self.doc
            .push(Rule::new(LEFT, 100.0).stroke(GOLD, 0.4).advance(4.0));
    }

    /// Italic grey stage direction, indented
    fn direction(&mut self, text: &str) {
        self.line(
            text,
            style(FontStyle::Italic, 9.0).with_color(MEDIUM_GRAY),
            Frame::new(LEFT + 5.0, USABLE_WIDTH - 10.0, 4.5),
            2.0,
        );
    }

    /// Spoken text; `**phrase**` marks emphasis
    fn say(&mut self, text: &str) -> Result<(), RenderError> {
        self.doc.push(
            Block::paragraph(
                FormattedText::from_markdown(text)?,
                style(FontStyle::Regular, 10.0).with_color(DARK_GRAY),
                Frame::new(LEFT, USABLE_WIDTH, 5.0),
            )
            .space_after(2.0),
        );
        Ok(())
    }

    fn note_heading(&mut self, text: &str) {
        self.line(
            text,
            style(FontStyle::Bold, 10.0).with_color(BLACK),
            Frame::new(LEFT, USABLE_WIDTH, 6.0),
            1.0,
        );
    }

    fn note(&mut self, text: &str) {
        self.doc.push(Bullet {
            marker: "-".to_string(),
            marker_width: 5.0,
            text: text.into(),
            style: style(FontStyle::Regular, 9.0).with_color(DARK_GRAY),
            frame: Frame::new(LEFT + 5.0, USABLE_WIDTH - 5.0, 4.5),
            space_after: 0.0,
        });
    }
}

pub fn page_settings() -> PageSettings {
    PageSettings::a4(Margins::uniform(LEFT)).with_auto_page_break(20.0)
}

pub fn build() -> Result<Document, RenderError> {
    let mut w = ScriptWriter {
        doc: Document::new("Video Walkthrough Script", page_settings()),
    };
    let full = |line_height| Frame::new(LEFT, USABLE_WIDTH, line_height).centered();

    w.line(
        "VIDEO WALKTHROUGH SCRIPT",
        style(FontStyle::Bold, 22.0).with_color(NAVY),
        full(12.0),
        2.0,
    );
    w.line(
        "Aba Digital Marketplace -- Presentation to HE Governor Alex Otti",
        style(FontStyle::Regular, 12.0).with_color(MEDIUM_GRAY),
        full(7.0),
        1.0,
    );
    w.line(
        "Site: madeinaba.net  |  Access Code: StringzAbia2026  |  Target Runtime: 4-5 minutes",
        style(FontStyle::Italic, 9.0).with_color(MEDIUM_GRAY),
        full(5.0),
        4.0,
    );
    w.doc
        .push(Rule::new(LEFT, RIGHT).stroke(NAVY, 0.8).advance(6.0));

    opening(&mut w)?;
    problem(&mut w)?;
    solution(&mut w)?;
    achievable(&mut w)?;
    ask(&mut w)?;
    demo(&mut w)?;
    closing(&mut w)?;
    production_notes(&mut w);

    Ok(w.doc)
}

fn opening(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(1, "OPENING", "0:00 - 0:30");
    w.direction("FACE TO CAMERA -- Clean background. Professional but warm. Look directly at the lens.");
    w.say("Good day, Your Excellency.")?;
    w.say("My name is [PRESENTER NAME], and I lead the team at Stringz Technologies.")?;
    w.say(
        "I want to take **four minutes** of your time to show you something we built -- \
         specifically for Abia State.",
    )?;
    w.say(
        "We spent months studying Aba's markets, talking to traders, reading the data. \
         And we believe there is an opportunity here that \
         **no other state in Nigeria has captured yet**.",
    )?;
    w.say("What I am about to show you is live, right now, at madeinaba.net.")?;
    w.say("Let me walk you through it.")
}

fn problem(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(2, "THE PROBLEM AND THE RESEARCH", "0:30 - 1:30");
    w.direction(
        "Switch to screen share. Browser is open to madeinaba.net. Enter the access code: \
         StringzAbia2026. The Overview screen loads.",
    );
    w.direction(
        "The Research Foundation screen is now visible. Scroll slowly past the Governor's \
         photo and vision statement at the top.",
    );
    w.say(
        "Your Excellency, this entire proposal is built on evidence. Not assumptions -- \
         **research**.",
    )?;
    w.direction(
        "Pause on the KEY RESEARCH FINDINGS stat cards -- 37,000 shops, N144B trade volume, \
         110,000+ shoemakers, 50,000+ garment makers.",
    );
    w.say(
        "Look at these numbers. Ariaria alone has **37,000 shops**. Aba's annual trade is \
         estimated at **one hundred and forty-four billion naira**. There are over \
         **110,000 shoemakers** and 50,000 garment makers. This is a manufacturing city.",
    )?;
    w.say("But here is the problem.")?;
    w.direction("Scroll down to THE POWER CRISIS section with the red-bordered stats.");
    w.say(
        "32,000 of those shops had no power after the failed 2019 solar project. Traders spend \
         **one billion naira a year** just on generators. And despite all of this activity, \
         Abia ranked **35th out of 37 states** in economic growth.",
    )?;
    w.say("The talent is there. The products are there. The infrastructure is not.")?;
    w.direction("Scroll down to WHAT ABA TRADERS ARE SAYING -- the trader quotes section.");
    w.say(
        "And these are not our words. These are **real traders, real quotes**, gathered from \
         investigative journalism.",
    )?;
    w.direction("Pause briefly on Joseph Nmeri's quote about labeling shoes \"Made in China.\"");
    w.say(
        "This man, Joseph Nmeri -- Chairman of the Power Line Shoe Manufacturers -- said his \
         members were **forced to label their shoes \"Made in China\"** because customers would \
         not buy shoes labeled \"Made in Aba.\"",
    )?;
    w.say("That is the problem we are solving. **Visibility. Trust. Access.**")
}

fn solution(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(3, "THE SOLUTION", "1:30 - 2:30");
    w.direction("Click the \"Why Aba\" tab in the navigation.");
    w.direction(
        "Scroll past the hero section to \"THE PROBLEM: INVISIBLE ECONOMY\" -- the two-column \
         comparison.",
    );
    w.say(
        "Your Excellency, this is what we call the **invisible economy**. On the left -- \
         today's reality. No trader registry. Cash only. No audit trail. Revenue leakage \
         everywhere. Buyers have to **physically travel to Aba** to buy anything.",
    )?;
    w.say(
        "On the right -- what a digital layer creates. NIN-verified traders. Escrow payments. \
         A real-time dashboard. Online catalog. **For the first time, the government can \
         actually see what is happening in its own markets.**",
    )?;
    w.direction("Scroll to the thesis statement card -- the one highlighted in blue.");
    w.say("This is the core idea. Read it with me:")?;
    w.say(
        "**\"A digital layer turns informal trade into visible economic infrastructure -- \
         measurable, taxable, and investable.\"**",
    )?;
    w.say("That is what this platform does.")?;
    w.direction(
        "Scroll down to \"WHY NOT JUST USE JUMIA OR INSTAGRAM?\" -- the four-column comparison.",
    );
    w.say("Now, someone will ask -- why not just use Jumia? Why not Instagram?")?;
    w.say(
        "Here is the difference. Jumia takes **15 to 25 percent commission**. Instagram has \
         no escrow, no verification, no data. Neither of them gives government anything.",
    )?;
    w.say(
        "This platform is **state-owned**. Low fees. NIN verification. The government owns \
         the data, owns the trader registry, owns the infrastructure. It is not a website. \
         **It is an economic asset.**",
    )?;
    w.direction("Scroll to the \"WHY NOW\" section showing the three timing cards.");
    w.say(
        "And the timing is right. **Phase II of the A-Line rebuild just flagged off.** New \
         physical infrastructure is going up -- this is the digital layer that sits on top of \
         it. GADA already has the mandate. And no other state has done this. \
         **The window is open.**",
    )
}

fn achievable(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(4, "WHAT IS ACHIEVABLE", "2:30 - 3:15");
    w.direction("Click the \"Quick Wins\" tab in the navigation.");
    w.direction("Pause on the 30-DAY section.");
    w.say(
        "Here is what we can deliver in **30 days**. 500 NIN-verified sellers. Over 2,000 \
         product listings. All from the A-Line pilot zone -- aligned with the rebuild.",
    )?;
    w.say("And here is the headline that is ready for the press on Day 30:")?;
    w.direction("Point to or highlight the green ANNOUNCEMENT READY box.");
    w.say(
        "**\"Abia launches Nigeria's first verified trader marketplace -- 500 Aba artisans \
         now discoverable online.\"**",
    )?;
    w.say("That is an announcement **no other governor in Nigeria can make today**.")?;
    w.direction("Scroll down to the 90-DAY section.");
    w.say(
        "By Day 90 -- **2,000 verified sellers**. Over 10,000 product listings. Three \
         logistics partners onboarded. And a **live government dashboard** showing real-time \
         data on traders, products, orders, and revenue.",
    )?;
    w.direction("Scroll to \"WHAT GOVERNMENT RECEIVES AT 90 DAYS\" -- the deliverables list.");
    w.say(
        "At the end of 90 days, the government receives a permanent NIN-verified trader \
         registry, a live analytics dashboard, monthly economic reports, and a catalogued \
         product database. These are **state assets**. They do not disappear when the \
         project ends.",
    )
}

fn ask(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(5, "THE ASK", "3:15 - 3:45");
    w.direction("Click the \"Pilot Ask\" tab in the navigation.");
    w.direction("The bold N100M pilot parameters section is visible.");
    w.say("Your Excellency, the ask is straightforward.")?;
    w.say("**One hundred million naira. 90 days. One market zone -- Ariaria A-Line.**")?;
    w.direction("Scroll to the budget breakdown.");
    w.say(
        "Every naira is accounted for. Platform development and infrastructure -- 38 million. \
         Trader onboarding and field operations -- 22 million. Training, support and \
         operations -- 15 million. Marketing and activation -- 15 million. Contingency -- \
         10 million.",
    )?;
    w.direction("Scroll to the milestone-based payment note.");
    w.say(
        "And this is **milestone-based**. Government pays in three tranches. 40 percent at \
         kickoff. 30 percent at Day 30 -- only after verified deliverables. 30 percent at \
         Day 90. **No delivery, no payment.**",
    )?;
    w.direction(
        "Scroll quickly past the success criteria -- 500+ traders, 2000+ products, \
         500+ transactions, N5M+ volume, live dashboard.",
    );
    w.say(
        "These are the success criteria. Clear numbers. Either we hit them, or we did not. \
         There is no ambiguity.",
    )
}

fn demo(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(6, "THE LIVE DEMO", "3:45 - 4:15");
    w.direction("Click the \"Home\" tab in the navigation.");
    w.say("Now, let me show you what this actually looks like.")?;
    w.direction(
        "The Home screen loads with the hero section, AI search bar, categories, and \
         featured products.",
    );
    w.say(
        "This is the marketplace. Government-branded. NIN-verified sellers. Every product \
         shows a \"Made in Aba\" badge. Buyers can shop by category -- footwear, bags, \
         fashion, leather goods.",
    )?;
    w.direction("Click the \"Products\" tab to go to the Listings screen.");
    w.say(
        "Here are live product listings. Real Aba products with prices, ratings, verified \
         seller badges. A buyer in Lagos can find and order from an Aba trader \
         **without ever visiting Ariaria**.",
    )?;
    w.direction("Click back to \"Home\" and scroll to the AI Shopping Assistant search box.");
    w.say("And here is what makes this different from anything else in Nigeria.")?;
    w.direction(
        "Click the \"Igbo\" language button in the AI search. Type or show a sample query \
         like \"Achoro m akpukpo ukwu maka agbamakwukwo\" and press search.",
    );
    w.say(
        "This is an **AI shopping assistant that speaks Igbo**. And Yoruba. And Hausa. And \
         Pidgin. A buyer can type \"I wan buy wedding shoe size 43\" in Pidgin, and the AI \
         understands, finds matching products, and suggests options.",
    )?;
    w.direction("Click the \"AI Platform\" tab to briefly show the WhatsApp AI demo.");
    w.say(
        "It works through WhatsApp too. Traders can send a product photo and the AI creates \
         the listing automatically. Buyers can track orders. Government officials can \
         **ask the dashboard questions in plain English** and get answers.",
    )?;
    w.say("**This already works.**")
}

fn closing(w: &mut ScriptWriter) -> Result<(), RenderError> {
    w.section(7, "CLOSING", "4:15 - 4:45");
    w.direction("FACE TO CAMERA -- Same setup as the opening. Calm, direct, respectful.");
    w.say("Your Excellency, let me close with this.")?;
    w.say(
        "Abia State has the traders. It has the products. It has a governor who is already \
         **rebuilding the physical markets** through the A-Line project and the GADA mandate.",
    )?;
    w.say(
        "What is missing is the digital layer. The part that makes Aba's economy \
         **visible to the world**.",
    )?;
    w.say(
        "**No Nigerian state has built this.** Not Lagos. Not Kano. Not Ogun. Abia can be \
         the first. And it can be done in 90 days.",
    )?;
    w.say(
        "We are not asking you to take our word for it. We are asking for **a meeting** -- \
         30 minutes with your team -- to walk through this in detail and answer every question.",
    )?;
    w.say(
        "The platform is live at **madeinaba.net**. The research is real. The numbers are \
         sourced. And we built this on our own, at our own cost, because we believe in what \
         Abia can become.",
    )?;
    w.say("Thank you for your time, sir.")?;
    w.direction(
        "PAUSE -- Hold eye contact with the camera for two full seconds before ending the \
         recording.",
    );
    Ok(())
}

fn production_notes(w: &mut ScriptWriter) {
    w.doc.push(Block::BreakIfBelow(NOTES_BREAK_Y));
    w.doc.push(Block::Spacer(5.0));
    w.doc
        .push(Rule::new(LEFT, RIGHT).stroke(NAVY, 0.8).advance(5.0));
    w.line(
        PRODUCTION_NOTES,
        style(FontStyle::Bold, 14.0).with_color(NAVY),
        Frame::new(LEFT, USABLE_WIDTH, 8.0),
        3.0,
    );
    w.line(
        "Total runtime target: 4 minutes 15 seconds to 4 minutes 45 seconds",
        style(FontStyle::Bold, 10.0).with_color(BLACK),
        Frame::new(LEFT, USABLE_WIDTH, 6.0),
        3.0,
    );

    w.note_heading("Pacing guidance:");
    w.note(
        "Do not rush sections 2 and 3. The research and the problem statement are what \
         build credibility. Let the numbers breathe.",
    );
    w.note(
        "Sections 5 and 6 should be brisk. The governor already understands the value by \
         this point -- move with confidence.",
    );
    w.note("The closing must be slow. Every word deliberate.");
    w.doc.push(Block::Spacer(2.0));

    w.note_heading("Screen recording tips:");
    w.note("Use a clean browser with no bookmarks bar, no other tabs visible.");
    w.note("Set browser zoom to 110% so text is clearly readable in the recording.");
    w.note("Scroll smoothly -- do not jump. Let the viewer read along with you.");
    w.note("When pausing on a stat or quote, give it a full 2-3 seconds of silence.");
    w.doc.push(Block::Spacer(2.0));

    w.note_heading("Key phrases to emphasize (bold in script):");
    for phrase in [
        "No other state in Nigeria has captured yet",
        "37,000 shops",
        "One hundred and forty-four billion naira",
        "Forced to label their shoes Made in China",
        "Measurable, taxable, and investable",
        "It is an economic asset",
        "No delivery, no payment",
        "This already works",
        "No Nigerian state has built this",
    ] {
        w.note(&format!("\"{}\"", phrase));
    }
    w.doc.push(Block::Spacer(2.0));

    w.note_heading("What NOT to do:");
    w.note("Do not apologize for the prototype being a demo. Present it as a working platform.");
    w.note(
        "Do not use tech jargon (API, frontend, backend, React). The governor is a banker \
         -- speak in outcomes and assets.",
    );
    w.note("Do not read the screen word for word. Talk over it like you know it by heart.");
    w.note("Do not oversell the revenue projections. Let the numbers on screen do that work.");
    w.note("Do not exceed 5 minutes. Respect the governor's time and he will respect yours.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LayoutEngine;

    #[test]
    fn test_script_ends_with_production_notes() {
        let doc = build().unwrap();
        let layout = LayoutEngine::new(&doc.page).layout(&doc.blocks).unwrap();
        assert!(layout.page_count() > 1);

        let page_of = |needle: &str| layout.pages.iter().position(|p| p.contains_text(needle));
        let closing = page_of("SECTION 7: CLOSING").unwrap();
        let notes = page_of(PRODUCTION_NOTES).unwrap();
        assert!(notes >= closing);

        let last_text = layout.pages.last().and_then(|p| p.texts().last()).unwrap();
        assert!(last_text.contains("Respect the governor's time"));
    }

    #[test]
    fn test_sections_are_guarded_by_manual_breaks() {
        let doc = build().unwrap();
        let guards = doc
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::BreakIfBelow(y) if *y == SECTION_BREAK_Y))
            .count();
        assert_eq!(guards, 7);
    }
}
