//! # Markup Kinds
//!
//! Marker types that own their syntax delimiters. The rule table and the
//! line pre-checks read these constants; scanner code never hardcodes
//! `**` or `>!` itself.
//!
//! - **`code`**: `Fence` (```` ``` ````), `Tick` (`` ` ``)
//! - **`emphasis`**: `Underline`, `BoldItalic`, `Bold`, `Italic`, `Strike`
//! - **`spoiler`**: `RedditSpoiler` (`>!..!<`), `DiscordSpoiler` (`||..||`)
//! - **`link`**: `Link`, `Image`, `AutoLink`
//! - **`line`**: `Blockquote`, `ListItem` (whole-line pre-checks), `Terminator`

pub mod code;
pub mod emphasis;
pub mod line;
pub mod link;
pub mod spoiler;

pub use code::{Fence, Tick};
pub use emphasis::{Bold, BoldItalic, Italic, Strike, Underline};
pub use line::{Blockquote, ListItem, Terminator};
pub use link::{AutoLink, Image, Link};
pub use spoiler::{DiscordSpoiler, RedditSpoiler};
