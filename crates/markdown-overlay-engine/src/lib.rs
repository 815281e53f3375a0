pub mod compose;
pub mod render;
pub mod snapshot;
pub mod span;
pub mod style;
pub mod suggest;
pub mod tokenize;

// Re-export key types for easier usage
pub use compose::{
    CacheStats, Composer, OverlayDocument, OverlayItem, OverlayLine, StyledSegment, compose,
};
pub use span::Span;
pub use style::{
    Color, ColorError, FontSlant, FontWeight, Style, StyleOverride, StyleTable, TextDecoration,
};
pub use suggest::{
    EmojiDictionary, EmojiSuggester, KeyOutcome, SuggestKey, SuggestState, Suggestion,
};
pub use tokenize::{Segment, SegmentKind, UnknownKind, tokenize, tokenize_line};
