//! Rendering adapters that turn an [`OverlayDocument`](crate::compose::OverlayDocument)
//! into something a host can draw directly.

pub mod html;

pub use html::to_html;
