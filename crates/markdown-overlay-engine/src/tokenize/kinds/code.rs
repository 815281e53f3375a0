/// Triple-backtick code span, kept to a single line.
pub struct Fence;

impl Fence {
    pub const DELIM: &'static [u8; 3] = b"```";
}

/// Single-backtick inline code. Content may not contain a backtick.
pub struct Tick;

impl Tick {
    pub const DELIM: &'static [u8; 1] = b"`";
}
