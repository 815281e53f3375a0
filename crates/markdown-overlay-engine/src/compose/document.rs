use serde::Serialize;

use crate::{style::Style, tokenize::Segment};

/// A segment paired with the style its kind maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSegment {
    pub segment: Segment,
    pub style: Style,
}

/// One `\n`-delimited line of the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayLine {
    /// 0-based line index.
    pub index: usize,
    /// Raw line text, without the line break.
    pub raw: String,
    pub segments: Vec<StyledSegment>,
}

impl OverlayLine {
    /// The text this line displays (segment texts concatenated).
    pub fn display_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.segment.text.as_str())
            .collect()
    }
}

/// The styled overlay for a whole buffer, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlayDocument {
    pub lines: Vec<OverlayLine>,
}

/// What a host renderer draws, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayItem<'a> {
    Line(&'a OverlayLine),
    /// An explicit newline between two lines.
    LineBreak,
}

impl OverlayDocument {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines interleaved with [`OverlayItem::LineBreak`] markers: N lines
    /// produce N - 1 breaks, none leading or trailing.
    pub fn items(&self) -> impl Iterator<Item = OverlayItem<'_>> {
        self.lines.iter().enumerate().flat_map(|(i, line)| {
            let brk = (i > 0).then_some(OverlayItem::LineBreak);
            brk.into_iter().chain(std::iter::once(OverlayItem::Line(line)))
        })
    }

    /// The full displayed text, lines joined with `\n`.
    pub fn display_text(&self) -> String {
        let mut out = String::new();
        for item in self.items() {
            match item {
                OverlayItem::Line(line) => {
                    for s in &line.segments {
                        out.push_str(&s.segment.text);
                    }
                }
                OverlayItem::LineBreak => out.push('\n'),
            }
        }
        out
    }
}
