//! # Emoji Suggestions
//!
//! Tracks a `:shortcode` being typed at the end of the buffer and offers
//! matching emoji. The host forwards text changes and key presses;
//! [`EmojiSuggester`] says whether a key was consumed and what the buffer
//! should become when a suggestion is accepted.

pub mod dictionary;

use std::sync::OnceLock;

use regex::Regex;

pub use dictionary::{EmojiDictionary, Suggestion};

static QUERY_REGEX: OnceLock<Regex> = OnceLock::new();

fn query_regex() -> &'static Regex {
    QUERY_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid query regex"))
}

/// Keys the suggester reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestKey {
    Escape,
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

impl SuggestKey {
    /// Maps a DOM-style key name (`"ArrowDown"`, `"Enter"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => SuggestKey::Escape,
            "ArrowDown" => SuggestKey::ArrowDown,
            "ArrowUp" => SuggestKey::ArrowUp,
            "Enter" => SuggestKey::Enter,
            _ => SuggestKey::Other,
        }
    }
}

/// What the host should do with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not consumed; let the input handle it.
    Ignored,
    /// Consumed; suppress the default action.
    Handled,
    /// Consumed; replace the buffer with this text.
    Replace(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestState {
    #[default]
    Idle,
    Suggesting {
        query: String,
        /// Byte offset of the `:` that opened the query.
        colon: usize,
        candidates: Vec<Suggestion>,
        /// Highlighted entry in `candidates`.
        active: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct EmojiSuggester {
    dictionary: EmojiDictionary,
    state: SuggestState,
}

impl EmojiSuggester {
    pub fn new(dictionary: EmojiDictionary) -> Self {
        Self {
            dictionary,
            state: SuggestState::Idle,
        }
    }

    pub fn state(&self) -> &SuggestState {
        &self.state
    }

    pub fn dictionary(&self) -> &EmojiDictionary {
        &self.dictionary
    }

    pub fn candidates(&self) -> &[Suggestion] {
        match &self.state {
            SuggestState::Idle => &[],
            SuggestState::Suggesting { candidates, .. } => candidates,
        }
    }

    /// Re-derives the state from the current buffer.
    ///
    /// Only a query running from the last `:` to the end of `text` counts,
    /// so typing a space or any punctuation after the shortcode closes the
    /// list.
    pub fn on_text_change(&mut self, text: &str) {
        self.state = match text.rfind(':') {
            Some(colon) => {
                let query = &text[colon + 1..];
                if query_regex().is_match(query) {
                    let candidates = self.dictionary.prefixed(&query.to_lowercase());
                    if candidates.is_empty() {
                        SuggestState::Idle
                    } else {
                        log::trace!("{} emoji candidates for :{query}", candidates.len());
                        SuggestState::Suggesting {
                            query: query.to_string(),
                            colon,
                            candidates,
                            active: 0,
                        }
                    }
                } else {
                    SuggestState::Idle
                }
            }
            None => SuggestState::Idle,
        };
    }

    pub fn on_key(&mut self, key: SuggestKey, text: &str) -> KeyOutcome {
        if key == SuggestKey::Escape {
            self.state = SuggestState::Idle;
            return KeyOutcome::Handled;
        }

        let SuggestState::Suggesting {
            candidates, active, ..
        } = &mut self.state
        else {
            return KeyOutcome::Ignored;
        };

        let n = candidates.len();
        match key {
            SuggestKey::ArrowDown => {
                *active = (*active + 1) % n;
                KeyOutcome::Handled
            }
            SuggestKey::ArrowUp => {
                *active = (*active + n - 1) % n;
                KeyOutcome::Handled
            }
            SuggestKey::Enter => {
                let index = *active;
                self.select(text, index).map_or(KeyOutcome::Handled, KeyOutcome::Replace)
            }
            SuggestKey::Escape | SuggestKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Accepts candidate `index`, returning the rewritten buffer.
    ///
    /// `:query` is replaced by the emoji; text after the query is kept.
    /// Returns `None` when idle or `index` is out of range.
    pub fn select(&mut self, text: &str, index: usize) -> Option<String> {
        let SuggestState::Suggesting {
            query,
            colon,
            candidates,
            ..
        } = &self.state
        else {
            return None;
        };
        let chosen = candidates.get(index)?;
        let end = (*colon + 1 + query.len()).min(text.len());
        let head = text.get(..*colon)?;
        let tail = text.get(end..)?;

        let replaced = format!("{head}{}{tail}", chosen.emoji);
        log::debug!("replaced :{query} with {}", chosen.name);
        self.state = SuggestState::Idle;
        Some(replaced)
    }
}
