//! Board projections.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{CardCategory, REVEALED_CARD_TOKEN};

/// Which audience a view is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// What every player sees: words, with revealed cards masked.
    #[default]
    Public,
    /// The public view with every card tagged by its category.
    Spymaster,
    /// Every original word with its category, revealed or not.
    Original,
}

impl ViewMode {
    /// Whether hidden categories are shown.
    #[must_use]
    pub fn spoils(self) -> bool {
        !matches!(self, ViewMode::Public)
    }
}

/// One projected cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Word or the revealed token.
    pub text: String,
    pub revealed: bool,
    /// Known category: always in spoiler modes, otherwise only once revealed.
    pub category: Option<CardCategory>,
}

impl CellView {
    /// Cell label for plain-text output.
    #[must_use]
    pub fn label(&self, mode: ViewMode) -> String {
        match (mode.spoils(), self.category) {
            (true, Some(category)) => format!("{}[{}]", self.text, category.code()),
            _ => self.text.clone(),
        }
    }
}

/// An immutable row-major projection of a board.
///
/// Building a view never touches the board, so it can be rebuilt at any
/// time, including after the game has ended.
///
/// ## Example
///
/// ```
/// use codenames_engine::board::{Board, WordDeck};
/// use codenames_engine::core::{GameRng, Team, REVEALED_CARD_TOKEN};
/// use codenames_engine::render::{BoardView, ViewMode};
///
/// let words: Vec<String> = (0..25).map(|i| format!("w{i}")).collect();
/// let mut board = Board::generate(&WordDeck::new(words).unwrap(), Team::Red, &mut GameRng::new(2));
/// board.reveal_at(0, 0).unwrap();
///
/// let view = BoardView::new(&board, ViewMode::Public);
/// assert_eq!(view.rows()[0][0].text, REVEALED_CARD_TOKEN);
///
/// let spoiler = BoardView::new(&board, ViewMode::Original);
/// assert_eq!(spoiler.rows()[0][0].text, board.word_at(0, 0).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    mode: ViewMode,
    rows: Vec<Vec<CellView>>,
}

impl BoardView {
    #[must_use]
    pub fn new(board: &Board, mode: ViewMode) -> Self {
        let rows = board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|card| {
                        let masked = card.is_revealed() && mode != ViewMode::Original;
                        let text = if masked { REVEALED_CARD_TOKEN } else { card.word() };
                        let category = (mode.spoils() || card.is_revealed()).then(|| card.category());
                        CellView {
                            text: text.to_string(),
                            revealed: card.is_revealed(),
                            category,
                        }
                    })
                    .collect()
            })
            .collect();

        Self { mode, rows }
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellView>] {
        &self.rows
    }

    /// Render each row as one line of cells centred in `column_width` chars.
    #[must_use]
    pub fn render_rows(&self, column_width: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| pad_center(&cell.label(self.mode), column_width))
                    .collect::<String>()
            })
            .collect()
    }
}

/// Centre `text` in `width` columns; extra space goes on the right.
fn pad_center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let total = width - len;
    let front = total / 2;
    format!("{}{}{}", " ".repeat(front), text, " ".repeat(total - front))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::WordDeck;
    use crate::core::{GameRng, Team, BOARD_SIZE};

    fn board() -> Board {
        let words: Vec<String> = (0..40).map(|i| format!("word{i}")).collect();
        Board::generate(&WordDeck::new(words).unwrap(), Team::Blue, &mut GameRng::new(11))
    }

    #[test]
    fn test_pad_center() {
        assert_eq!(pad_center("AB", 6), "  AB  ");
        assert_eq!(pad_center("ABC", 6), " ABC  ");
        assert_eq!(pad_center("TOOLONG", 4), "TOOLONG");
    }

    #[test]
    fn test_public_hides_categories() {
        let view = BoardView::new(&board(), ViewMode::Public);
        assert_eq!(view.rows().len(), BOARD_SIZE);
        assert!(view.rows().iter().flatten().all(|c| c.category.is_none()));
    }

    #[test]
    fn test_spymaster_tags_everything() {
        let b = board();
        let view = BoardView::new(&b, ViewMode::Spymaster);
        for ((row, col), card) in b.cells() {
            let cell = &view.rows()[row][col];
            assert_eq!(cell.category, Some(card.category()));
            assert_eq!(cell.label(ViewMode::Spymaster), format!("{}[{}]", card.word(), card.category().code()));
        }
    }

    #[test]
    fn test_reveal_masks_except_original() {
        let mut b = board();
        b.reveal_at(4, 4).unwrap();

        let public = BoardView::new(&b, ViewMode::Public);
        let cell = &public.rows()[4][4];
        assert_eq!(cell.text, REVEALED_CARD_TOKEN);
        assert!(cell.revealed);
        assert_eq!(cell.category, Some(b.category_at(4, 4).unwrap()));

        let spymaster = BoardView::new(&b, ViewMode::Spymaster);
        assert_eq!(spymaster.rows()[4][4].text, REVEALED_CARD_TOKEN);

        let original = BoardView::new(&b, ViewMode::Original);
        assert_eq!(original.rows()[4][4].text, b.word_at(4, 4).unwrap());
    }

    #[test]
    fn test_render_rows_width() {
        let b = board();
        let rows = BoardView::new(&b, ViewMode::Public).render_rows(10);
        assert_eq!(rows.len(), BOARD_SIZE);
        for (row, line) in b.rows().zip(&rows) {
            assert_eq!(line.chars().count(), 10 * BOARD_SIZE);
            for card in row {
                assert!(line.contains(card.word()));
            }
        }
    }

    #[test]
    fn test_view_is_repeatable() {
        let b = board();
        let first = BoardView::new(&b, ViewMode::Spymaster);
        let second = BoardView::new(&b, ViewMode::Spymaster);
        assert_eq!(first, second);
        assert_eq!(b, board());
    }
}
