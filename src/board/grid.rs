//! The 5×5 board: words, secret key, and reveal bookkeeping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::counts::CardCounts;
use super::deck::WordDeck;
use crate::core::{
    CardCategory, GameError, GameRng, Result, Team, ASSASSIN_CARD_COUNT, BOARD_SIZE,
    BYSTANDER_CARD_COUNT, CARD_COUNT, REVEALED_CARD_TOKEN, TEAM_CARD_COUNT,
};

/// Board coordinates as `(row, col)`.
pub type Position = (usize, usize);

/// A single board cell.
///
/// The word is kept after a reveal; only rendering swaps it for the
/// revealed token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    word: String,
    category: CardCategory,
    revealed: bool,
}

impl Card {
    /// The card's word, upper-cased.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The card's secret category.
    #[must_use]
    pub fn category(&self) -> CardCategory {
        self.category
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Word grid plus secret key.
///
/// Cards are stored row-major. The remaining count per category is kept
/// alongside so win checks are O(1).
///
/// ## Example
///
/// ```
/// use codenames_engine::board::{Board, WordDeck};
/// use codenames_engine::core::{CardCategory, GameRng, Team};
///
/// let words: Vec<String> = (0..40).map(|i| format!("w{i}")).collect();
/// let deck = WordDeck::new(words).unwrap();
/// let board = Board::generate(&deck, Team::Red, &mut GameRng::new(1));
///
/// assert_eq!(board.remaining(CardCategory::Red), 9);
/// assert_eq!(board.remaining(CardCategory::Blue), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    starting_team: Team,
    remaining: [usize; 4],
}

impl Board {
    /// Generate a board from a validated deck.
    ///
    /// Samples `CARD_COUNT` distinct words and pairs them, in order, with a
    /// freshly shuffled key.
    #[must_use]
    pub fn generate(deck: &WordDeck, starting_team: Team, rng: &mut GameRng) -> Self {
        let words = rng.sample(deck.words(), CARD_COUNT);
        let key = Self::generate_key(starting_team, rng);

        let cards: Vec<Card> = words
            .into_iter()
            .zip(key)
            .map(|(word, category)| Card {
                word: word.clone(),
                category,
                revealed: false,
            })
            .collect();

        let mut remaining = [0; 4];
        for card in &cards {
            remaining[card.category.index()] += 1;
        }

        debug!(%starting_team, "generated board");
        Self {
            cards,
            starting_team,
            remaining,
        }
    }

    /// Validate a raw word pool, then generate a board from it.
    pub fn generate_from_pool<I, S>(word_pool: I, starting_team: Team, rng: &mut GameRng) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let deck = WordDeck::new(word_pool)?;
        Ok(Self::generate(&deck, starting_team, rng))
    }

    /// Build a shuffled secret key: 9 cards for the starting team, 8 for the
    /// other, then bystanders and the assassin.
    #[must_use]
    pub fn generate_key(starting_team: Team, rng: &mut GameRng) -> Vec<CardCategory> {
        let mut key = Vec::with_capacity(CARD_COUNT);
        key.extend(std::iter::repeat(starting_team.card_category()).take(TEAM_CARD_COUNT + 1));
        key.extend(std::iter::repeat(starting_team.other().card_category()).take(TEAM_CARD_COUNT));
        key.extend(std::iter::repeat(CardCategory::Bystander).take(BYSTANDER_CARD_COUNT));
        key.extend(std::iter::repeat(CardCategory::Assassin).take(ASSASSIN_CARD_COUNT));
        rng.shuffle(&mut key);
        key
    }

    fn index(row: usize, col: usize) -> Result<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(row * BOARD_SIZE + col)
    }

    /// Team holding the extra card.
    #[must_use]
    pub fn starting_team(&self) -> Team {
        self.starting_team
    }

    /// Get the card at a position.
    pub fn card_at(&self, row: usize, col: usize) -> Result<&Card> {
        Ok(&self.cards[Self::index(row, col)?])
    }

    /// Secret category at a position. Still answers after a reveal.
    pub fn category_at(&self, row: usize, col: usize) -> Result<CardCategory> {
        self.card_at(row, col).map(Card::category)
    }

    /// Original word at a position, whether revealed or not.
    pub fn word_at(&self, row: usize, col: usize) -> Result<&str> {
        self.card_at(row, col).map(Card::word)
    }

    pub fn is_revealed(&self, row: usize, col: usize) -> Result<bool> {
        self.card_at(row, col).map(Card::is_revealed)
    }

    /// Reveal the card at a position and return its category.
    ///
    /// Fails with `AlreadyRevealed` without touching state if the card was
    /// already face up.
    pub fn reveal_at(&mut self, row: usize, col: usize) -> Result<CardCategory> {
        let idx = Self::index(row, col)?;
        let card = &mut self.cards[idx];
        if card.revealed {
            return Err(GameError::AlreadyRevealed { row, col });
        }
        card.revealed = true;
        let category = card.category;
        self.remaining[category.index()] -= 1;

        debug!(row, col, %category, "revealed card");
        Ok(category)
    }

    /// Find a word, then reveal it.
    pub fn reveal_word(&mut self, word: &str) -> Result<CardCategory> {
        let (row, col) = self
            .find_word(word)?
            .ok_or_else(|| GameError::WordNotOnBoard(word.trim().to_uppercase()))?;
        self.reveal_at(row, col)
    }

    /// Case-insensitive lookup of an unrevealed word.
    ///
    /// Revealed cards no longer answer to their word. Querying the revealed
    /// token itself fails with `InvalidSearch`.
    pub fn find_word(&self, word: &str) -> Result<Option<Position>> {
        let word = word.trim().to_uppercase();
        if word == REVEALED_CARD_TOKEN {
            return Err(GameError::InvalidSearch);
        }
        Ok(self
            .cards
            .iter()
            .position(|card| !card.revealed && card.word == word)
            .map(|idx| (idx / BOARD_SIZE, idx % BOARD_SIZE)))
    }

    /// Unrevealed cards of a category.
    #[must_use]
    pub fn remaining(&self, category: CardCategory) -> usize {
        self.remaining[category.index()]
    }

    /// Unrevealed cards across all categories.
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }

    /// A team wins once all of its cards are revealed.
    #[must_use]
    pub fn team_won(&self, team: Team) -> bool {
        self.remaining(team.card_category()) == 0
    }

    #[must_use]
    pub fn assassin_revealed(&self) -> bool {
        self.remaining(CardCategory::Assassin) == 0
    }

    /// Revealed/hidden tallies for a scoreboard.
    #[must_use]
    pub fn counts(&self) -> CardCounts {
        let mut counts = CardCounts::default();
        for card in &self.cards {
            counts.record(card.category, card.revealed);
        }
        counts
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.cards.chunks(BOARD_SIZE)
    }

    /// Iterate `(position, card)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(idx, card)| ((idx / BOARD_SIZE, idx % BOARD_SIZE), card))
    }

    /// Positions of every card in a category, revealed or not.
    pub fn positions_of(&self, category: CardCategory) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |(_, card)| card.category == category)
            .map(|(pos, _)| pos)
    }
}
