use std::collections::BTreeMap;
use std::ops::Bound;

/// Shortcode → emoji lookup, ordered by shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiDictionary {
    entries: BTreeMap<String, String>,
}

/// One `(shortcode, emoji)` pair offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Suggestion {
    pub name: String,
    pub emoji: String,
}

const BUILTIN: &[(&str, &str)] = &[
    ("100", "💯"),
    ("angry", "😠"),
    ("blush", "😊"),
    ("boom", "💥"),
    ("broken_heart", "💔"),
    ("bug", "🐛"),
    ("cat", "🐱"),
    ("check", "✔️"),
    ("clap", "👏"),
    ("coffee", "☕"),
    ("cold_sweat", "😰"),
    ("confused", "😕"),
    ("cry", "😢"),
    ("dog", "🐶"),
    ("eyes", "👀"),
    ("fire", "🔥"),
    ("frowning", "😦"),
    ("ghost", "👻"),
    ("grin", "😁"),
    ("grinning", "😀"),
    ("heart", "❤️"),
    ("heart_eyes", "😍"),
    ("hourglass", "⌛"),
    ("hugs", "🤗"),
    ("joy", "😂"),
    ("kiss", "😘"),
    ("laughing", "😆"),
    ("lock", "🔒"),
    ("moon", "🌙"),
    ("muscle", "💪"),
    ("ok_hand", "👌"),
    ("party", "🥳"),
    ("pensive", "😔"),
    ("pizza", "🍕"),
    ("point_up", "☝️"),
    ("pray", "🙏"),
    ("rainbow", "🌈"),
    ("rocket", "🚀"),
    ("rofl", "🤣"),
    ("scream", "😱"),
    ("see_no_evil", "🙈"),
    ("shrug", "🤷"),
    ("skull", "💀"),
    ("sleeping", "😴"),
    ("smile", "😄"),
    ("smiley", "😃"),
    ("smirk", "😏"),
    ("sob", "😭"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("sunglasses", "😎"),
    ("sunny", "☀️"),
    ("sweat_smile", "😅"),
    ("tada", "🎉"),
    ("thinking", "🤔"),
    ("thumbsdown", "👎"),
    ("thumbsup", "👍"),
    ("upside_down", "🙃"),
    ("warning", "⚠️"),
    ("wave", "👋"),
    ("wink", "😉"),
    ("x", "❌"),
    ("yum", "😋"),
    ("zap", "⚡"),
    ("zzz", "💤"),
];

impl Default for EmojiDictionary {
    fn default() -> Self {
        let mut dict = Self::empty();
        dict.extend(BUILTIN.iter().map(|(n, e)| (n.to_string(), e.to_string())));
        dict
    }
}

impl EmojiDictionary {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds or replaces a shortcode.
    pub fn insert(&mut self, name: impl Into<String>, emoji: impl Into<String>) {
        self.entries.insert(name.into(), emoji.into());
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Every entry whose shortcode starts with `prefix`, in shortcode order.
    pub fn prefixed(&self, prefix: &str) -> Vec<Suggestion> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(name, emoji)| Suggestion {
                name: name.clone(),
                emoji: emoji.clone(),
            })
            .collect()
    }
}

impl Extend<(String, String)> for EmojiDictionary {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_set_is_loaded() {
        let dict = EmojiDictionary::default();
        assert_eq!(dict.len(), BUILTIN.len());
        assert_eq!(dict.lookup("tada"), Some("🎉"));
        assert_eq!(dict.lookup("nope"), None);
    }

    #[test]
    fn prefixed_is_sorted_and_bounded() {
        let dict = EmojiDictionary::default();
        let names: Vec<_> = dict.prefixed("sm").into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["smile", "smiley", "smirk"]);
        assert!(dict.prefixed("qqq").is_empty());
    }

    #[test]
    fn prefixed_reaches_the_end_of_the_map() {
        let dict = EmojiDictionary::default();
        let names: Vec<_> = dict.prefixed("z").into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["zap", "zzz"]);
        assert_eq!(dict.prefixed("").len(), dict.len());
    }

    #[test]
    fn every_builtin_shortcode_is_typeable() {
        // Only `[A-Za-z0-9_]` can follow the colon
        for (name, _) in BUILTIN {
            assert!(
                name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
                "{name}"
            );
        }
    }

    #[test]
    fn insert_overrides_builtin() {
        let mut dict = EmojiDictionary::default();
        dict.insert("tada", "🎊");
        dict.insert("ferris", "🦀");
        assert_eq!(dict.lookup("tada"), Some("🎊"));
        assert_eq!(dict.prefixed("fe")[0].emoji, "🦀");
    }
}
