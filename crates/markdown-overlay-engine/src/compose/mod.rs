//! # Overlay Composer
//!
//! Splits a buffer into lines, tokenizes each one and attaches the style
//! for every segment's kind. The result is an [`OverlayDocument`] that a
//! host draws over its (transparent) text input.
//!
//! - **`document`**: `OverlayDocument`, `OverlayLine`, `StyledSegment`
//! - **`composer`**: `compose()` and the reusable `Composer`
//! - **`cache`**: per-line tokenization memo

pub mod cache;
pub mod composer;
pub mod document;

pub use cache::{CacheStats, LineCache};
pub use composer::{Composer, compose};
pub use document::{OverlayDocument, OverlayItem, OverlayLine, StyledSegment};
