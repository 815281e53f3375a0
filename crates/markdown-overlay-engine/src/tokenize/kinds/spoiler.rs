/// Reddit-style spoiler `>!hidden!<`. Content may be empty.
pub struct RedditSpoiler;

impl RedditSpoiler {
    pub const OPEN: &'static [u8; 2] = b">!";
    pub const CLOSE: &'static [u8; 2] = b"!<";
}

/// Discord-style spoiler `||hidden||`. Content needs at least one byte.
pub struct DiscordSpoiler;

impl DiscordSpoiler {
    pub const DELIM: &'static [u8; 2] = b"||";
}
