use std::sync::OnceLock;

use regex::Regex;

/// Blockquote line: one to three `>` followed by whitespace.
///
/// The whole prefix, including every whitespace character after the `>`
/// run, is dropped from the displayed text.
pub struct Blockquote;

impl Blockquote {
    /// Byte offset where the quoted content starts, or `None` if `line` is
    /// not a blockquote line.
    pub fn content_start(line: &str) -> Option<usize> {
        static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = PREFIX_REGEX
            .get_or_init(|| Regex::new(r"^>{1,3}\s+").expect("Invalid blockquote regex"));
        re.find(line).map(|m| m.end())
    }
}

/// Characters that underline, strikethrough and reddit spoiler content
/// may not contain (the line terminators other than `\n`).
pub struct Terminator;

impl Terminator {
    pub const ALL: [&'static [u8]; 3] = [b"\r", "\u{2028}".as_bytes(), "\u{2029}".as_bytes()];
}

/// List line: `- ` or `<digits>. ` at the start of the line.
///
/// Unlike blockquotes the marker stays in the displayed text.
pub struct ListItem;

impl ListItem {
    pub fn matches(line: &str) -> bool {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = MARKER_REGEX
            .get_or_init(|| Regex::new(r"^(-\s|[0-9]+\.\s)").expect("Invalid list marker regex"));
        re.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("> quoted", Some(2))]
    #[case(">> nested", Some(3))]
    #[case(">>> deep", Some(4))]
    #[case(">   spaced", Some(4))]
    #[case(">\tTab", Some(2))]
    #[case(">>>> too deep", None)]
    #[case(">no space", None)]
    #[case(">!spoiler!<", None)]
    #[case(" > indented", None)]
    #[case(">", None)]
    fn blockquote_prefix(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(Blockquote::content_start(line), expected);
    }

    #[rstest]
    #[case("- item", true)]
    #[case("1. first", true)]
    #[case("42.\tanswer", true)]
    #[case("-item", false)]
    #[case("1.first", false)]
    #[case(" - indented", false)]
    #[case("* star", false)]
    #[case("", false)]
    fn list_marker(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ListItem::matches(line), expected);
    }
}
