/// `__underline__`. Content is any run of at least one byte.
pub struct Underline;

impl Underline {
    pub const DELIM: &'static [u8; 2] = b"__";
}

/// `***bold italic***`. Content may not contain `*`.
pub struct BoldItalic;

impl BoldItalic {
    pub const DELIM: &'static [u8; 3] = b"***";
}

/// `**bold**`. Content may not contain `*`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// `*italic*` or `_italic_`. Content may not contain the delimiter.
pub struct Italic;

impl Italic {
    pub const STAR: &'static [u8; 1] = b"*";
    pub const UNDERSCORE: &'static [u8; 1] = b"_";
}

/// `~~strikethrough~~`. Content may be empty.
pub struct Strike;

impl Strike {
    pub const DELIM: &'static [u8; 2] = b"~~";
}
