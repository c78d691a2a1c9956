use nom::{
    bytes::complete::{tag, take_until},
    IResult,
};

use super::style::{FontStyle, RgbColor};
use crate::error::RenderError;

/// A run of text sharing one inline style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub font_style: FontStyle,
    /// Overrides the block color when set
    pub color: Option<RgbColor>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, font_style: FontStyle) -> Self {
        Self {
            text: text.into(),
            font_style,
            color: None,
        }
    }

    pub fn plain(s: impl Into<String>) -> Self {
        Self::new(s, FontStyle::Regular)
    }

    pub fn bold(s: impl Into<String>) -> Self {
        Self::new(s, FontStyle::Bold)
    }

    pub fn italic(s: impl Into<String>) -> Self {
        Self::new(s, FontStyle::Italic)
    }

    pub fn bold_italic(s: impl Into<String>) -> Self {
        Self::new(s, FontStyle::BoldItalic)
    }

    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// An ordered list of spans wrapped as one logical paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedText {
    pub spans: Vec<TextSpan>,
}

impl FormattedText {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn push(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    pub fn with(mut self, span: TextSpan) -> Self {
        self.push(span);
        self
    }

    pub fn to_plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Parse text using `**bold**` markers into spans.
    ///
    /// An opening `**` without a matching close is an error.
    pub fn from_markdown(input: &str) -> Result<Self, RenderError> {
        let mut spans = Vec::new();
        let mut rest = input;

        while !rest.is_empty() {
            let (next, span) = bold_span(rest).or_else(|_| plain_span(rest)).map_err(|_| {
                RenderError::Markup(format!(
                    "unterminated `**` at byte {} in {:?}",
                    input.len() - rest.len(),
                    input
                ))
            })?;
            if !span.text.is_empty() {
                spans.push(span);
            }
            rest = next;
        }

        Ok(Self { spans })
    }
}

impl From<&str> for FormattedText {
    fn from(s: &str) -> Self {
        Self::new().with(TextSpan::plain(s))
    }
}

impl From<String> for FormattedText {
    fn from(s: String) -> Self {
        Self::new().with(TextSpan::plain(s))
    }
}

/// Parse `**text**`
fn bold_span(input: &str) -> IResult<&str, TextSpan> {
    let (input, _) = tag("**")(input)?;
    let (input, text) = take_until("**")(input)?;
    let (input, _) = tag("**")(input)?;
    Ok((input, TextSpan::bold(text)))
}

/// Parse plain text up to the next `**` marker or the end of input
fn plain_span(input: &str) -> IResult<&str, TextSpan> {
    let end = input.find("**").unwrap_or(input.len());
    if end == 0 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeUntil,
        )));
    }
    Ok((&input[end..], TextSpan::plain(&input[..end])))
}
