//! Spymaster clues.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Largest numeric count a clue may carry.
pub const MAX_CLUE_COUNT: u8 = 9;

/// How many cards a clue refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueCount {
    Exact(u8),
    Unlimited,
}

impl ClueCount {
    /// Parse `0..=9`, `zero`, `unlimited`, or anything starting with `*`.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if let Ok(n) = token.parse::<u8>() {
            return if n <= MAX_CLUE_COUNT {
                Ok(ClueCount::Exact(n))
            } else {
                Err(count_error())
            };
        }
        if token.eq_ignore_ascii_case("unlimited") || token.starts_with('*') {
            Ok(ClueCount::Unlimited)
        } else if token.eq_ignore_ascii_case("zero") {
            Ok(ClueCount::Exact(0))
        } else {
            Err(count_error())
        }
    }
}

fn count_error() -> GameError {
    GameError::InvalidClue(format!(
        "the count must either be a number in the 0-{MAX_CLUE_COUNT} range or \"unlimited\"/\"*\""
    ))
}

impl std::fmt::Display for ClueCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClueCount::Exact(0) => f.write_str("ZERO"),
            ClueCount::Exact(n) => write!(f, "{n}"),
            ClueCount::Unlimited => f.write_str("UNLIMITED"),
        }
    }
}

/// A clue given by the moving team's spymaster.
///
/// ```
/// use codenames_engine::session::{Clue, ClueCount};
///
/// let clue = Clue::new("artichoke", "2").unwrap();
/// assert_eq!(clue.count(), ClueCount::Exact(2));
/// assert_eq!(clue.to_string(), "ARTICHOKE 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    words: String,
    count: ClueCount,
}

impl Clue {
    /// Build a clue from its words and a count token.
    pub fn new(words: &str, count: &str) -> Result<Self> {
        let words = words.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        if words.is_empty() {
            return Err(GameError::InvalidClue("a clue needs at least one word".to_string()));
        }
        Ok(Self {
            words,
            count: ClueCount::parse(count)?,
        })
    }

    /// Build a clue from whitespace-split arguments; the last one is the count.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [words @ .., count] if !words.is_empty() => {
                let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
                Self::new(&words.join(" "), count.as_ref())
            }
            _ => Err(GameError::InvalidClue(
                "a clue requires at least two arguments".to_string(),
            )),
        }
    }

    #[must_use]
    pub fn words(&self) -> &str {
        &self.words
    }

    #[must_use]
    pub fn count(&self) -> ClueCount {
        self.count
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.words, self.count)
    }
}
