use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Display kind of a [`Segment`].
///
/// The tokenizer only ever says *what* a piece of text is; how it looks is
/// decided by a [`StyleTable`](crate::style::StyleTable) lookup on this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    PlainText,
    Bold,
    Italic,
    BoldItalic,
    Underline,
    Strikethrough,
    InlineCode,
    FencedCode,
    Spoiler,
    LinkText,
    /// Reserved for hosts that style link targets; the tokenizer keeps
    /// `(url)` inside the trailing plain segment and never emits this.
    LinkUrl,
    ImageAlt,
    AutoLinkUrl,
    BlockquoteLine,
    ListLine,
}

impl SegmentKind {
    pub const COUNT: usize = 15;

    /// Every kind, in declaration order.
    pub const ALL: [SegmentKind; Self::COUNT] = [
        SegmentKind::PlainText,
        SegmentKind::Bold,
        SegmentKind::Italic,
        SegmentKind::BoldItalic,
        SegmentKind::Underline,
        SegmentKind::Strikethrough,
        SegmentKind::InlineCode,
        SegmentKind::FencedCode,
        SegmentKind::Spoiler,
        SegmentKind::LinkText,
        SegmentKind::LinkUrl,
        SegmentKind::ImageAlt,
        SegmentKind::AutoLinkUrl,
        SegmentKind::BlockquoteLine,
        SegmentKind::ListLine,
    ];

    /// Position of this kind in [`SegmentKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::PlainText => "plain_text",
            SegmentKind::Bold => "bold",
            SegmentKind::Italic => "italic",
            SegmentKind::BoldItalic => "bold_italic",
            SegmentKind::Underline => "underline",
            SegmentKind::Strikethrough => "strikethrough",
            SegmentKind::InlineCode => "inline_code",
            SegmentKind::FencedCode => "fenced_code",
            SegmentKind::Spoiler => "spoiler",
            SegmentKind::LinkText => "link_text",
            SegmentKind::LinkUrl => "link_url",
            SegmentKind::ImageAlt => "image_alt",
            SegmentKind::AutoLinkUrl => "auto_link_url",
            SegmentKind::BlockquoteLine => "blockquote_line",
            SegmentKind::ListLine => "list_line",
        }
    }

    /// Whether segments of this kind display exactly the source they span.
    ///
    /// Image alt text and blockquote lines drop part of their source
    /// (`![..](url)` wrapper, `> ` prefix); everything else is verbatim.
    pub fn is_verbatim(self) -> bool {
        !matches!(self, SegmentKind::ImageAlt | SegmentKind::BlockquoteLine)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown segment kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown segment kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for SegmentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SegmentKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A typed, contiguous piece of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Text to display for this segment.
    pub text: String,
    /// Range of the raw line this segment stands for.
    pub span: Span,
    /// 0-based index of the line within the buffer.
    pub line: usize,
    /// Position within the line's segment sequence.
    pub order: usize,
}
