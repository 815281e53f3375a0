use std::fmt;

use serde::Serialize;

use crate::compose::OverlayDocument;

#[derive(Debug, Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

#[derive(Debug, Serialize)]
pub struct LineSnap {
    pub index: usize,
    pub raw: String,
    pub segments: Vec<SegmentSnap>,
}

#[derive(Debug, Serialize)]
pub struct SegmentSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
}

/// Strips styles and bookkeeping down to what tokenization decided.
pub fn normalize(doc: &OverlayDocument) -> Snap {
    let lines = doc
        .lines
        .iter()
        .map(|line| LineSnap {
            index: line.index,
            raw: line.raw.clone(),
            segments: line
                .segments
                .iter()
                .map(|s| SegmentSnap {
                    kind: s.segment.kind.name().to_string(),
                    span: (s.segment.span.start, s.segment.span.end),
                    text: s.segment.text.clone(),
                })
                .collect(),
        })
        .collect();

    Snap { lines }
}

/// One line per overlay line, then one indented line per segment:
///
/// ```text
/// 0 "**b**"
///   plain_text 0..2 "**"
///   bold 2..3 "b"
///   plain_text 3..5 "**"
/// ```
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{} {:?}", line.index, line.raw)?;
            for s in &line.segments {
                writeln!(f, "  {} {}..{} {:?}", s.kind, s.span.0, s.span.1, s.text)?;
            }
        }
        Ok(())
    }
}
