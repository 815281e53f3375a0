//! # Line Tokenizer
//!
//! Turns one raw line into an ordered list of [`Segment`]s for the overlay.
//!
//! ## Architecture
//!
//! Tokenization is a pure function of the line string. There is no state
//! across lines or across calls, so every keystroke can re-tokenize the
//! buffer from scratch (or reuse a per-line cache keyed by line text).
//!
//! 1. Whole-line pre-checks: blockquote and list lines each become one
//!    segment and skip inline scanning.
//! 2. Inline scan: a byte cursor walks the line and tries each
//!    [`InlineRule`] in precedence order. The first rule that matches is
//!    emitted and the cursor jumps past it; otherwise one character is
//!    consumed as plain text.
//!
//! ## Modules
//!
//! - **`types`**: `SegmentKind`, `Segment`
//! - **`kinds`**: marker types owning the delimiter constants
//! - **`cursor`**: `Cursor` over the raw line
//! - **`lookahead`**: memoized closing-delimiter search
//! - **`rules`**: ordered `InlineRule` table and `InlineMatch`
//! - **`scan`**: `tokenize()` / `tokenize_line()` entry points
//!
//! ## Delimiters Stay Visible
//!
//! The overlay has to line up character for character with the raw input
//! underneath it, so `**bold**` yields `PlainText("**")`, `Bold("bold")`,
//! `PlainText("**")` rather than dropping the stars. Images and blockquote
//! lines are the two exceptions: they display less than they span.
//!
//! ## No Nesting
//!
//! Matched content is never re-scanned: `**a _b_**` is one `Bold` segment
//! whose text contains the underscores.

pub mod cursor;
pub mod kinds;
pub mod lookahead;
pub mod rules;
pub mod scan;
pub mod types;

pub use rules::{INLINE_RULES, InlineMatch, InlineRule, MatchShape};
pub use scan::{tokenize, tokenize_line};
pub use types::{Segment, SegmentKind, UnknownKind};
