//! Word wrapping for mixed-style text
//!
//! A paragraph is a sequence of styled runs. Runs are broken into word groups
//! (text with no whitespace between it, possibly crossing runs), spaces and hard
//! line breaks, then greedily packed into lines no wider than the frame.
//!
//! Whitespace at a soft break stays on the line it ends as a trailing fragment
//! that is not counted in the line width, so joining every fragment of every
//! line gives back the input unchanged.

use printpdf::BuiltinFont;

use super::helpers::text_metrics::BuiltinFontMeasurer;
use crate::model::RgbColor;

/// Input run: borrowed text in one resolved font and color
#[derive(Debug, Clone, Copy)]
pub struct StyledRun<'a> {
    pub text: &'a str,
    pub font: BuiltinFont,
    pub color: RgbColor,
}

/// A piece of a wrapped line in a single font and color
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub font: BuiltinFont,
    pub color: RgbColor,
    /// Measured width in mm
    pub width: f32,
}

/// Text drawn at `offset` mm from the start of its line
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRun {
    pub text: String,
    pub font: BuiltinFont,
    pub color: RgbColor,
    pub offset: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedLine {
    pub fragments: Vec<Fragment>,
    /// Width of the visible content in mm (trailing break whitespace excluded)
    pub width: f32,
}

impl WrappedLine {
    /// Full text of the line, including trailing break whitespace
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Adjacent fragments sharing font and color merged, trailing whitespace dropped
    pub fn visible_runs(&self) -> Vec<VisibleRun> {
        let mut runs: Vec<VisibleRun> = Vec::new();
        let mut offset = 0.0;

        for frag in &self.fragments {
            match runs.last_mut() {
                Some(last) if last.font == frag.font && last.color == frag.color => {
                    last.text.push_str(&frag.text);
                }
                _ => runs.push(VisibleRun {
                    text: frag.text.clone(),
                    font: frag.font,
                    color: frag.color,
                    offset,
                }),
            }
            offset += frag.width;
        }

        while let Some(last) = runs.last_mut() {
            let trimmed_len = last.text.trim_end().len();
            if trimmed_len == 0 {
                runs.pop();
            } else {
                last.text.truncate(trimmed_len);
                break;
            }
        }
        runs
    }

    fn push_measured(&mut self, frag: Fragment) {
        self.width += frag.width;
        self.fragments.push(frag);
    }

    fn push_trailing(&mut self, frag: Fragment) {
        self.fragments.push(frag);
    }
}

fn measure(font: BuiltinFont, text: &str, font_size: f32) -> f32 {
    BuiltinFontMeasurer::new(font).measure_width_mm(text, font_size)
}

/// A word group is a sequence of fragments kept together (no whitespace between them)
#[derive(Debug, Clone, Default)]
struct WordGroup {
    fragments: Vec<Fragment>,
    width: f32,
}

#[derive(Debug, Clone)]
enum Token {
    Word(WordGroup),
    Space(Vec<Fragment>),
    LineBreak(Fragment),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Newline,
}

fn classify(c: char) -> CharClass {
    if c == '\n' {
        CharClass::Newline
    } else if c.is_whitespace() {
        CharClass::Space
    } else {
        CharClass::Word
    }
}

/// Split runs into tokens; word groups continue across run boundaries
fn tokenize(runs: &[StyledRun<'_>], font_size: f32) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for run in runs {
        let mut rest = run.text;
        while let Some(first) = rest.chars().next() {
            let class = classify(first);
            let end = if class == CharClass::Newline {
                first.len_utf8()
            } else {
                rest.find(|c: char| classify(c) != class)
                    .unwrap_or(rest.len())
            };
            let (piece, tail) = rest.split_at(end);
            rest = tail;

            let frag = Fragment {
                text: piece.to_string(),
                font: run.font,
                color: run.color,
                width: measure(run.font, piece, font_size),
            };

            match (class, tokens.last_mut()) {
                (CharClass::Newline, _) => tokens.push(Token::LineBreak(frag)),
                (CharClass::Word, Some(Token::Word(group))) => {
                    group.width += frag.width;
                    group.fragments.push(frag);
                }
                (CharClass::Word, _) => tokens.push(Token::Word(WordGroup {
                    width: frag.width,
                    fragments: vec![frag],
                })),
                (CharClass::Space, Some(Token::Space(frags))) => frags.push(frag),
                (CharClass::Space, _) => tokens.push(Token::Space(vec![frag])),
            }
        }
    }

    tokens
}

struct LineFiller {
    lines: Vec<WrappedLine>,
    current: WrappedLine,
    has_word: bool,
    max_width: f32,
    font_size: f32,
}

impl LineFiller {
    fn finish_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.has_word = false;
    }

    fn fits(&self, width: f32) -> bool {
        self.current.width + width <= self.max_width
    }

    /// Place fragments character by character, breaking wherever the next character
    /// would overflow a line that already has content
    fn place_split(&mut self, frags: Vec<Fragment>) {
        for frag in frags {
            let mut piece = String::new();
            let mut piece_width = 0.0;

            for c in frag.text.chars() {
                let mut buf = [0u8; 4];
                let w = measure(frag.font, c.encode_utf8(&mut buf), self.font_size);
                let occupied = self.current.width + piece_width;
                if occupied > 0.0 && occupied + w > self.max_width {
                    if !piece.is_empty() {
                        self.current.push_measured(Fragment {
                            text: std::mem::take(&mut piece),
                            font: frag.font,
                            color: frag.color,
                            width: piece_width,
                        });
                        piece_width = 0.0;
                    }
                    self.finish_line();
                }
                piece.push(c);
                piece_width += w;
            }

            if !piece.is_empty() {
                self.current.push_measured(Fragment {
                    text: piece,
                    font: frag.font,
                    color: frag.color,
                    width: piece_width,
                });
            }
        }
    }

    fn place_word(&mut self, group: WordGroup, pending: Vec<Fragment>) {
        let space_width: f32 = pending.iter().map(|f| f.width).sum();

        if self.has_word {
            if self.fits(space_width + group.width) {
                for frag in pending {
                    self.current.push_measured(frag);
                }
                for frag in group.fragments {
                    self.current.push_measured(frag);
                }
                return;
            }
            for frag in pending {
                self.current.push_trailing(frag);
            }
            self.finish_line();
        } else {
            // Leading whitespace of a paragraph or after a hard break is kept and measured
            self.place_split(pending);
        }

        if self.fits(group.width) {
            for frag in group.fragments {
                self.current.push_measured(frag);
            }
        } else {
            self.place_split(group.fragments);
        }
        self.has_word = true;
    }
}

/// Wrap styled runs into lines no wider than `max_width` mm.
///
/// Always returns at least one line.
pub fn wrap_runs(runs: &[StyledRun<'_>], font_size: f32, max_width: f32) -> Vec<WrappedLine> {
    let mut filler = LineFiller {
        lines: Vec::new(),
        current: WrappedLine::default(),
        has_word: false,
        max_width,
        font_size,
    };
    let mut pending: Vec<Fragment> = Vec::new();

    for token in tokenize(runs, font_size) {
        match token {
            Token::Space(frags) => pending.extend(frags),
            Token::Word(group) => filler.place_word(group, std::mem::take(&mut pending)),
            Token::LineBreak(frag) => {
                for space in pending.drain(..) {
                    filler.current.push_trailing(space);
                }
                filler.current.push_trailing(frag);
                filler.finish_line();
            }
        }
    }

    for space in pending {
        filler.current.push_trailing(space);
    }
    if !filler.current.fragments.is_empty() || filler.lines.is_empty() {
        filler.finish_line();
    }

    filler.lines
}
