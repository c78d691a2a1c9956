pub mod block;
pub mod document;
pub mod style;
pub mod text;

pub use block::{Alignment, Banner, Block, Bullet, Field, Frame, Paragraph, Rule};
pub use document::Document;
pub use style::{FontStyle, RgbColor, Style};
pub use text::{FormattedText, TextSpan};
