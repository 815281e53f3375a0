use crate::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Blockquote, ListItem},
    lookahead::Lookahead,
    rules::{INLINE_RULES, InlineMatch, MatchShape},
    types::{Segment, SegmentKind},
};

/// Tokenizes one raw line into display segments.
///
/// Equivalent to [`tokenize_line`] with line index 0.
pub fn tokenize(line: &str) -> Vec<Segment> {
    tokenize_line(0, line)
}

/// Tokenizes the line at `index` of a buffer into display segments.
///
/// # Line pre-checks
/// A blockquote line (`>`, `>>` or `>>>` plus whitespace) becomes a single
/// `BlockquoteLine` segment showing the text after the prefix. A list line
/// (`- ` or `N. `) becomes a single `ListLine` segment showing the whole
/// line. Neither is scanned for inline markup.
///
/// # Returns
/// Segments whose spans cover the whole line in order. An empty line
/// yields no segments.
pub fn tokenize_line(index: usize, line: &str) -> Vec<Segment> {
    let mut out = Sink::new(index, line);
    if line.is_empty() {
        return out.finish();
    }

    let whole = Span::new(0, line.len());
    if let Some(content_start) = Blockquote::content_start(line) {
        out.push_shown(
            SegmentKind::BlockquoteLine,
            whole,
            Span::new(content_start, line.len()),
        );
        return out.finish();
    }
    if ListItem::matches(line) {
        out.push(SegmentKind::ListLine, whole);
        return out.finish();
    }

    scan_inline(&mut out, line);
    out.finish()
}

/// Left-to-right scan trying every inline rule at each position.
///
/// Unmatched characters accumulate and are flushed as one `PlainText`
/// segment when the next match starts (or at end of line).
fn scan_inline(out: &mut Sink<'_>, line: &str) {
    let mut cur = Cursor::new(line);
    let mut look = Lookahead::new(line);
    let mut text_start = cur.pos();

    while !cur.eof() {
        let found = INLINE_RULES
            .iter()
            .find_map(|rule| rule.try_match(&cur, &mut look));
        match found {
            Some(m) => {
                out.flush_text(text_start, m.full.start);
                out.push_match(&m);
                cur.bump_n(m.full.len());
                text_start = cur.pos();
            }
            None => {
                cur.bump_char();
            }
        }
    }

    out.flush_text(text_start, cur.pos());
}

/// Collects segments for one line, numbering them as they arrive.
struct Sink<'a> {
    line: usize,
    raw: &'a str,
    segments: Vec<Segment>,
}

impl<'a> Sink<'a> {
    fn new(line: usize, raw: &'a str) -> Self {
        Self {
            line,
            raw,
            segments: Vec::new(),
        }
    }

    fn push(&mut self, kind: SegmentKind, span: Span) {
        self.push_shown(kind, span, span);
    }

    fn push_shown(&mut self, kind: SegmentKind, span: Span, shown: Span) {
        self.segments.push(Segment {
            kind,
            text: shown.slice(self.raw).to_string(),
            span,
            line: self.line,
            order: self.segments.len(),
        });
    }

    fn flush_text(&mut self, start: usize, end: usize) {
        if end > start {
            self.push(SegmentKind::PlainText, Span::new(start, end));
        }
    }

    fn push_match(&mut self, m: &InlineMatch) {
        match m.shape {
            MatchShape::Delimited => {
                self.push(
                    SegmentKind::PlainText,
                    Span::new(m.full.start, m.content.start),
                );
                self.push(m.kind, m.content);
                self.push(SegmentKind::PlainText, Span::new(m.content.end, m.full.end));
            }
            MatchShape::Whole => self.push(m.kind, m.full),
            MatchShape::Replaced => self.push_shown(m.kind, m.full, m.content),
        }
    }

    fn finish(self) -> Vec<Segment> {
        self.segments
    }
}
