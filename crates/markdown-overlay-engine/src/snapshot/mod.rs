//! # Snapshot Testing Support
//!
//! Utilities for testing the tokenizer and composer via snapshot assertions
//! and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts an `OverlayDocument` to a stable, serializable
//!   `Snap` with a compact text form for `insta` inline snapshots
//! - **`invariants`**: Runtime checks for overlay correctness (one line per
//!   raw line, spans cover each line exactly, verbatim segments show their
//!   source)
//!
//! Behavior is pinned by snapshot tests rather than a formal grammar: a
//! snapshot shows each segment's kind, span and displayed text.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
