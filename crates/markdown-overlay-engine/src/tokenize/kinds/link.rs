/// Markdown link `[label](url)`.
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8; 1] = b"[";
    pub const LABEL_CLOSE: &'static [u8; 1] = b"]";
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: &'static [u8; 1] = b")";
}

/// Markdown image `![alt](url)`. Shares the link's bracket syntax.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
}

/// Bare `http://` or `https://` URL, running to the next whitespace.
pub struct AutoLink;

impl AutoLink {
    pub const SCHEMES: [&'static [u8]; 2] = [b"https://", b"http://"];
}
