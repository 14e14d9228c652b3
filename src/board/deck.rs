//! Word pools.
//!
//! A `WordDeck` is the validated pool a board samples its words from.
//! Decks are loaded once (usually from a JSON array of strings) and shared
//! between sessions.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::core::{DeckError, CARD_COUNT, REVEALED_CARD_TOKEN};

/// A validated pool of unique, upper-cased words.
///
/// Guarantees:
/// - no two entries are equal ignoring case,
/// - no entry is empty, contains whitespace, or equals the revealed token,
/// - at least `CARD_COUNT` entries.
///
/// ## Example
///
/// ```
/// use codenames_engine::board::WordDeck;
///
/// let words: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
/// let deck = WordDeck::new(words).unwrap();
/// assert_eq!(deck.len(), 30);
/// assert!(deck.contains("WORD7"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordDeck {
    words: Vec<String>,
}

impl WordDeck {
    /// Validate a word pool.
    ///
    /// Entries that can never appear on a board (blank, multi-word, or the
    /// revealed token) are dropped with a warning. Duplicates are an error.
    pub fn new<I, S>(words: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut kept = Vec::new();

        for raw in words {
            let raw = raw.as_ref();
            let word = raw.trim().to_uppercase();

            if word.is_empty() || word.chars().any(char::is_whitespace) || word == REVEALED_CARD_TOKEN {
                warn!(word = raw, "illegal word removed from deck");
                continue;
            }
            if !seen.insert(word.clone()) {
                return Err(DeckError::DuplicateWord(word));
            }
            kept.push(word);
        }

        if kept.len() < CARD_COUNT {
            return Err(DeckError::TooSmall {
                available: kept.len(),
                required: CARD_COUNT,
            });
        }

        Ok(Self { words: kept })
    }

    /// Parse a JSON array of strings.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        let words: Vec<String> = serde_json::from_str(json).map_err(|source| DeckError::Parse {
            origin: "<inline>".to_string(),
            source,
        })?;
        Self::new(words)
    }

    /// Load a JSON word list from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words: Vec<String> = serde_json::from_str(&contents).map_err(|source| DeckError::Parse {
            origin: path.display().to_string(),
            source,
        })?;
        Self::new(words)
    }

    /// Number of words in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the deck has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        self.words.iter().any(|w| *w == word)
    }

    /// The deck's words in load order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn test_words_are_uppercased() {
        let deck = WordDeck::new(numbered(25)).unwrap();
        assert!(deck.words().iter().all(|w| w.starts_with("WORD")));
    }

    #[test]
    fn test_duplicates_rejected_ignoring_case() {
        let mut words = numbered(30);
        words.push("Word3".to_string());

        let err = WordDeck::new(words).unwrap_err();
        assert!(matches!(err, DeckError::DuplicateWord(ref w) if w == "WORD3"));
    }

    #[test]
    fn test_too_small() {
        let err = WordDeck::new(numbered(24)).unwrap_err();
        assert!(matches!(err, DeckError::TooSmall { available: 24, required: 25 }));
    }

    #[test]
    fn test_illegal_words_dropped() {
        let mut words = numbered(25);
        words.push("ice cream".to_string());
        words.push("   ".to_string());
        words.push(REVEALED_CARD_TOKEN.to_string());

        let deck = WordDeck::new(words).unwrap();
        assert_eq!(deck.len(), 25);
        assert!(!deck.contains("ice cream"));
    }

    #[test]
    fn test_dropping_can_make_deck_too_small() {
        let mut words = numbered(24);
        words.push("two words".to_string());
        assert!(matches!(WordDeck::new(words), Err(DeckError::TooSmall { .. })));
    }

    #[test]
    fn test_from_json_str() {
        let json = serde_json::to_string(&numbered(26)).unwrap();
        let deck = WordDeck::from_json_str(&json).unwrap();
        assert_eq!(deck.len(), 26);

        assert!(matches!(
            WordDeck::from_json_str("{not json"),
            Err(DeckError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordDeck::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
    }
}
