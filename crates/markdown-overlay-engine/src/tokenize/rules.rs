use crate::span::Span;

use super::{
    cursor::Cursor,
    kinds::{
        AutoLink, Bold, BoldItalic, DiscordSpoiler, Fence, Image, Italic, Link, RedditSpoiler,
        Strike, Terminator, Tick, Underline,
    },
    lookahead::Lookahead,
    types::SegmentKind,
};

/// One inline markup rule. Rules are tried in [`INLINE_RULES`] order at
/// each cursor position and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    FencedCode,
    InlineCode,
    Underline,
    BoldItalic,
    Bold,
    ItalicStar,
    ItalicUnderscore,
    Strikethrough,
    RedditSpoiler,
    DiscordSpoiler,
    Link,
    Image,
    AutoLink,
}

/// Precedence order of the inline rules.
pub const INLINE_RULES: [InlineRule; 13] = [
    InlineRule::FencedCode,
    InlineRule::InlineCode,
    InlineRule::Underline,
    InlineRule::BoldItalic,
    InlineRule::Bold,
    InlineRule::ItalicStar,
    InlineRule::ItalicUnderscore,
    InlineRule::Strikethrough,
    InlineRule::RedditSpoiler,
    InlineRule::DiscordSpoiler,
    InlineRule::Link,
    InlineRule::Image,
    InlineRule::AutoLink,
];

/// How a match turns into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchShape {
    /// `full.start..content.start` and `content.end..full.end` become plain
    /// delimiter segments around a `content` segment of the rule's kind.
    Delimited,
    /// The whole match is one segment of the rule's kind.
    Whole,
    /// One segment spanning `full` that displays only `content`.
    Replaced,
}

/// A successful rule match at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMatch {
    pub rule: InlineRule,
    pub kind: SegmentKind,
    /// Everything the match consumes, delimiters included.
    pub full: Span,
    /// The styled part.
    pub content: Span,
    pub shape: MatchShape,
}

impl InlineRule {
    /// Kind of the content segment this rule produces.
    pub fn kind(self) -> SegmentKind {
        match self {
            InlineRule::FencedCode => SegmentKind::FencedCode,
            InlineRule::InlineCode => SegmentKind::InlineCode,
            InlineRule::Underline => SegmentKind::Underline,
            InlineRule::BoldItalic => SegmentKind::BoldItalic,
            InlineRule::Bold => SegmentKind::Bold,
            InlineRule::ItalicStar | InlineRule::ItalicUnderscore => SegmentKind::Italic,
            InlineRule::Strikethrough => SegmentKind::Strikethrough,
            InlineRule::RedditSpoiler | InlineRule::DiscordSpoiler => SegmentKind::Spoiler,
            InlineRule::Link => SegmentKind::LinkText,
            InlineRule::Image => SegmentKind::ImageAlt,
            InlineRule::AutoLink => SegmentKind::AutoLinkUrl,
        }
    }

    /// Attempts this rule at the cursor. Never moves the cursor.
    pub fn try_match(self, cur: &Cursor<'_>, look: &mut Lookahead<'_>) -> Option<InlineMatch> {
        let (full, content, shape) = match self {
            InlineRule::FencedCode => span_until(cur, look, Fence::DELIM, Fence::DELIM, 1, Inner::Any)?,
            InlineRule::InlineCode => run_until(cur, look, Tick::DELIM, Tick::DELIM)?,
            InlineRule::Underline => {
                span_until(cur, look, Underline::DELIM, Underline::DELIM, 1, Inner::SingleLine)?
            }
            InlineRule::BoldItalic => run_until(cur, look, BoldItalic::DELIM, Italic::STAR)?,
            InlineRule::Bold => run_until(cur, look, Bold::DELIM, Italic::STAR)?,
            InlineRule::ItalicStar => run_until(cur, look, Italic::STAR, Italic::STAR)?,
            InlineRule::ItalicUnderscore => {
                run_until(cur, look, Italic::UNDERSCORE, Italic::UNDERSCORE)?
            }
            InlineRule::Strikethrough => {
                span_until(cur, look, Strike::DELIM, Strike::DELIM, 0, Inner::SingleLine)?
            }
            InlineRule::RedditSpoiler => {
                span_until(
                cur,
                look,
                RedditSpoiler::OPEN,
                RedditSpoiler::CLOSE,
                0,
                Inner::SingleLine,
            )?
            }
            InlineRule::DiscordSpoiler => {
                span_until(cur, look, DiscordSpoiler::DELIM, DiscordSpoiler::DELIM, 1, Inner::Any)?
            }
            InlineRule::Link => bracketed(cur, look, Link::OPEN, 1, MatchShape::Delimited)?,
            InlineRule::Image => bracketed(cur, look, Image::OPEN, 0, MatchShape::Replaced)?,
            InlineRule::AutoLink => autolink(cur)?,
        };
        Some(InlineMatch {
            rule: self,
            kind: self.kind(),
            full,
            content,
            shape,
        })
    }
}

type Parts = (Span, Span, MatchShape);

/// What the content of a [`span_until`] match may contain.
#[derive(Clone, Copy)]
enum Inner {
    Any,
    /// Anything but a [`Terminator`].
    SingleLine,
}

/// `open` + at least `min_inner` bytes of content + the first `close`
/// after that (non-greedy).
fn span_until(
    cur: &Cursor<'_>,
    look: &mut Lookahead<'_>,
    open: &'static [u8],
    close: &'static [u8],
    min_inner: usize,
    inner: Inner,
) -> Option<Parts> {
    if !cur.starts_with(open) {
        return None;
    }
    let start = cur.pos();
    let inner_start = start + open.len();
    let close_at = look.find(close, inner_start + min_inner)?;
    if let Inner::SingleLine = inner {
        let crosses = Terminator::ALL
            .into_iter()
            .any(|t| look.find(t, inner_start).is_some_and(|at| at < close_at));
        if crosses {
            return None;
        }
    }
    Some((
        Span::new(start, close_at + close.len()),
        Span::new(inner_start, close_at),
        MatchShape::Delimited,
    ))
}

/// `delim` + a non-empty run free of `stop` + `delim`, where the closing
/// delimiter has to begin at the first `stop` byte.
fn run_until(
    cur: &Cursor<'_>,
    look: &mut Lookahead<'_>,
    delim: &'static [u8],
    stop: &'static [u8; 1],
) -> Option<Parts> {
    if !cur.starts_with(delim) {
        return None;
    }
    let start = cur.pos();
    let inner_start = start + delim.len();
    let close_at = look.find(stop, inner_start)?;
    if close_at == inner_start || !cur.s.as_bytes()[close_at..].starts_with(delim) {
        return None;
    }
    Some((
        Span::new(start, close_at + delim.len()),
        Span::new(inner_start, close_at),
        MatchShape::Delimited,
    ))
}

/// `open` + label free of `]` (at least `min_label` bytes) + `](` + a
/// non-empty url free of `)` + `)`.
fn bracketed(
    cur: &Cursor<'_>,
    look: &mut Lookahead<'_>,
    open: &'static [u8],
    min_label: usize,
    shape: MatchShape,
) -> Option<Parts> {
    if !cur.starts_with(open) {
        return None;
    }
    let start = cur.pos();
    let label_start = start + open.len();
    let label_end = look.find(Link::LABEL_CLOSE, label_start)?;
    if label_end - label_start < min_label {
        return None;
    }
    if cur.s.as_bytes().get(label_end + 1) != Some(&Link::URL_OPEN) {
        return None;
    }
    let url_start = label_end + 2;
    let url_end = look.find(Link::URL_CLOSE, url_start)?;
    if url_end == url_start {
        return None;
    }
    Some((
        Span::new(start, url_end + 1),
        Span::new(label_start, label_end),
        shape,
    ))
}

/// `http://` or `https://` followed by at least one non-whitespace char.
fn autolink(cur: &Cursor<'_>) -> Option<Parts> {
    let scheme = AutoLink::SCHEMES
        .into_iter()
        .find(|scheme| cur.starts_with(scheme))?;
    let start = cur.pos();
    let body = &cur.rest()[scheme.len()..];
    let body_len = body
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map_or(body.len(), |(i, _)| i);
    if body_len == 0 {
        return None;
    }
    let full = Span::new(start, start + scheme.len() + body_len);
    Some((full, full, MatchShape::Whole))
}
