//! The game session state machine.

use std::path::Path;
use std::sync::Arc;

use im::OrdSet;
use tracing::{debug, info};

use super::clue::Clue;
use super::event::{EndReason, Phase, TurnEvent};
use super::roster::Rosters;
use crate::board::{Board, CardCounts, WordDeck};
use crate::core::{CardCategory, GameError, GameRng, Result, SessionConfig, SetupError, Team};
use crate::render::{BoardView, ViewMode};

/// One game of Codenames: rosters, turn order, and the active board.
///
/// ## Lifecycle
///
/// `Setup -> InProgress -> Finished`. `reset` returns to `Setup` from any
/// phase, keeping the rosters.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use codenames_engine::board::WordDeck;
/// use codenames_engine::core::{SessionConfig, Team};
/// use codenames_engine::session::{GameSession, Phase};
///
/// let words: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
/// let deck = Arc::new(WordDeck::new(words).unwrap());
/// let mut game = GameSession::new(deck, SessionConfig::default().with_seed(1));
///
/// for (player, team) in [("ann", Team::Red), ("ben", Team::Red), ("cat", Team::Blue), ("dan", Team::Blue)] {
///     game.add_player(player, team);
/// }
/// game.set_spymaster(Team::Red, "ann").unwrap();
/// game.set_spymaster(Team::Blue, "cat").unwrap();
///
/// game.start().unwrap();
/// assert_eq!(game.phase(), Phase::InProgress);
/// assert_eq!(game.moving_team(), Some(game.starting_team()));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    deck: Arc<WordDeck>,
    rng: GameRng,
    rosters: Rosters,
    phase: Phase,
    board: Option<Board>,
    starting_team: Team,
    moving_team: Team,
    winning_team: Option<Team>,
    clue: Option<Clue>,
}

impl GameSession {
    /// Create a session in `Setup`, seeded from `config.seed`.
    #[must_use]
    pub fn new(deck: Arc<WordDeck>, config: SessionConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        Self::with_rng(deck, config, rng)
    }

    /// Create a session driven by an explicit RNG.
    #[must_use]
    pub fn with_rng(deck: Arc<WordDeck>, config: SessionConfig, mut rng: GameRng) -> Self {
        let starting_team = rng.gen_team();
        Self {
            config,
            deck,
            rng,
            rosters: Rosters::new(),
            phase: Phase::Setup,
            board: None,
            starting_team,
            moving_team: starting_team,
            winning_team: None,
            clue: None,
        }
    }

    /// Load the word pool from a JSON file and create a session.
    ///
    /// A deck that cannot be loaded is the one fatal error: no session is
    /// created.
    pub fn from_deck_file(path: impl AsRef<Path>, config: SessionConfig) -> Result<Self> {
        let deck = WordDeck::load(path)?;
        Ok(Self::new(Arc::new(deck), config))
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Arc<WordDeck> {
        &self.deck
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The board, once a game has been started.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn rosters(&self) -> &Rosters {
        &self.rosters
    }

    /// Team that moves first in the current (or next) game.
    #[must_use]
    pub fn starting_team(&self) -> Team {
        self.starting_team
    }

    /// Whose turn it is. `None` during setup.
    #[must_use]
    pub fn moving_team(&self) -> Option<Team> {
        match self.phase {
            Phase::Setup => None,
            Phase::InProgress | Phase::Finished => Some(self.moving_team),
        }
    }

    /// The winner. `None` unless the game is finished.
    #[must_use]
    pub fn winning_team(&self) -> Option<Team> {
        self.winning_team
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&Clue> {
        self.clue.as_ref()
    }

    /// Scoreboard for the active board.
    #[must_use]
    pub fn counts(&self) -> Option<CardCounts> {
        self.board.as_ref().map(Board::counts)
    }

    /// Project the active board for display.
    #[must_use]
    pub fn view(&self, mode: ViewMode) -> Option<BoardView> {
        self.board.as_ref().map(|board| BoardView::new(board, mode))
    }

    /// Plain rows at the configured column width.
    #[must_use]
    pub fn render_rows(&self, mode: ViewMode) -> Option<Vec<String>> {
        self.view(mode).map(|view| view.render_rows(self.config.column_width))
    }

    // === Rosters ===

    /// Add a player to a team, moving them off the other team if needed.
    pub fn add_player(&mut self, player: impl Into<String>, team: Team) {
        self.rosters.add(player, team);
    }

    /// Remove a player, returning the team they left.
    pub fn remove_player(&mut self, player: &str) -> Option<Team> {
        self.rosters.remove(player)
    }

    pub fn set_spymaster(&mut self, team: Team, player: &str) -> Result<()> {
        self.rosters.set_spymaster(team, player)
    }

    #[must_use]
    pub fn player_team(&self, player: &str) -> Option<Team> {
        self.rosters.team_of(player)
    }

    #[must_use]
    pub fn spymaster(&self, team: Team) -> Option<&str> {
        self.rosters.spymaster(team)
    }

    #[must_use]
    pub fn is_spymaster(&self, player: &str) -> bool {
        self.rosters.spymaster_of(player).is_some()
    }

    #[must_use]
    pub fn team_members(&self, team: Team) -> &OrdSet<String> {
        self.rosters.members(team)
    }

    /// Every player, red team first.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.rosters.players()
    }

    /// Join during setup. Without a team the player goes to blue if red is
    /// strictly larger, otherwise to red.
    pub fn join(&mut self, player: impl Into<String>, team: Option<Team>) -> Result<Team> {
        self.check_setup()?;
        let team = team.unwrap_or_else(|| {
            if self.rosters.team_size(Team::Red) > self.rosters.team_size(Team::Blue) {
                Team::Blue
            } else {
                Team::Red
            }
        });
        self.rosters.add(player, team);
        Ok(team)
    }

    /// Hand a player's seat to someone new, in any phase.
    ///
    /// The newcomer joins the same team; a spymaster role is not carried over.
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<Team> {
        let team = self
            .rosters
            .team_of(old)
            .ok_or_else(|| GameError::NotAPlayer(old.to_string()))?;
        if self.rosters.team_of(new).is_some() {
            return Err(GameError::AlreadyPlaying(new.to_string()));
        }
        self.rosters.remove(old);
        self.rosters.add(new, team);
        debug!(old, new, %team, "player renamed");
        Ok(team)
    }

    // === Phase transitions ===

    /// Start the game.
    ///
    /// Outside debug mode each team needs `min_players_per_team` members and
    /// a spymaster. On failure the session stays in `Setup`.
    pub fn start(&mut self) -> Result<()> {
        self.check_setup()?;
        if !self.config.debug {
            for team in Team::ALL {
                if self.rosters.team_size(team) < self.config.min_players_per_team {
                    return Err(SetupError::TeamTooSmall {
                        team,
                        minimum: self.config.min_players_per_team,
                    }
                    .into());
                }
                if self.rosters.spymaster(team).is_none() {
                    return Err(SetupError::MissingSpymaster(team).into());
                }
            }
        }

        self.board = Some(Board::generate(&self.deck, self.starting_team, &mut self.rng));
        self.moving_team = self.starting_team;
        self.winning_team = None;
        self.clue = None;
        self.phase = Phase::InProgress;

        info!(starting_team = %self.starting_team, "game started");
        Ok(())
    }

    /// Return to `Setup` with the same rosters and a re-rolled starting team.
    pub fn reset(&mut self) {
        self.starting_team = self.rng.gen_team();
        self.moving_team = self.starting_team;
        self.board = None;
        self.winning_team = None;
        self.clue = None;
        self.phase = Phase::Setup;
        info!("game reset");
    }

    /// Reset, then start again with the same teams.
    pub fn restart(&mut self) -> Result<()> {
        self.reset();
        self.start()
    }

    /// Reset, deal every player onto new teams with new spymasters, and start.
    ///
    /// If the new teams are too small to start, they stay assigned and the
    /// session remains in `Setup`.
    pub fn remix(&mut self) -> Result<()> {
        self.reset();

        let mut players: Vec<String> = self.rosters.players().map(str::to_string).collect();
        self.rng.shuffle(&mut players);
        let blue = players.split_off(players.len() / 2);
        let red = players;
        let spymasters = [red.first().cloned(), blue.first().cloned()];
        self.rosters.assign(red, blue, spymasters);

        info!(players = self.rosters.player_count(), "teams remixed");
        self.start()
    }

    /// Abandon the game. Returns the board so the caller can show the
    /// original layout, then resets.
    pub fn finish(&mut self) -> Option<Board> {
        let board = self.board.take();
        self.reset();
        board
    }

    // === Play ===

    fn check_setup(&self) -> Result<()> {
        match self.phase {
            Phase::Setup => Ok(()),
            Phase::InProgress | Phase::Finished => Err(GameError::NotSetup),
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        match (self.phase, self.winning_team) {
            (Phase::InProgress, _) => Ok(()),
            (Phase::Setup, _) => Err(GameError::NotStarted),
            (Phase::Finished, Some(winner)) => Err(GameError::AlreadyFinished { winner }),
            (Phase::Finished, None) => Err(GameError::NotStarted),
        }
    }

    fn active_board(&mut self) -> Result<&mut Board> {
        self.check_in_progress()?;
        self.board.as_mut().ok_or(GameError::NotStarted)
    }

    /// Check that `player` may touch a card right now.
    pub fn check_can_reveal(&self, player: &str) -> Result<Team> {
        self.check_in_progress()?;
        let team = self
            .rosters
            .team_of(player)
            .ok_or_else(|| GameError::NotAPlayer(player.to_string()))?;
        if team != self.moving_team {
            return Err(GameError::NotYourTurn {
                player: player.to_string(),
            });
        }
        if !self.config.debug && self.rosters.spymaster(team) == Some(player) {
            return Err(GameError::SpymasterCannotReveal {
                player: player.to_string(),
            });
        }
        Ok(team)
    }

    /// Reveal the card at `(row, col)` and resolve the outcome.
    ///
    /// Resolution order: assassin, bystander, then agent cards (a team whose
    /// last agent is revealed wins, even if it is not the mover).
    pub fn reveal_card_at(&mut self, row: usize, col: usize) -> Result<TurnEvent> {
        let category = self.active_board()?.reveal_at(row, col)?;

        let event = match (category, category.team()) {
            (CardCategory::Assassin, _) => {
                self.end_game(self.moving_team.other(), EndReason::Assassin)
            }
            (_, None) => TurnEvent::EndTurnBystander,
            (_, Some(owner)) => {
                let exhausted = self.board.as_ref().is_some_and(|b| b.team_won(owner));
                if exhausted {
                    self.end_game(owner, EndReason::AllAgentsFound)
                } else if owner != self.moving_team {
                    TurnEvent::EndTurnEnemy
                } else {
                    TurnEvent::ContinueTurn
                }
            }
        };

        debug!(row, col, %category, ?event, "card resolved");
        Ok(event)
    }

    /// Reveal a card by its word.
    pub fn reveal_word(&mut self, word: &str) -> Result<TurnEvent> {
        let (row, col) = self
            .active_board()?
            .find_word(word)?
            .ok_or_else(|| GameError::WordNotOnBoard(word.trim().to_uppercase()))?;
        self.reveal_card_at(row, col)
    }

    fn end_game(&mut self, winner: Team, reason: EndReason) -> TurnEvent {
        self.winning_team = Some(winner);
        self.phase = Phase::Finished;
        self.clue = None;
        info!(%winner, ?reason, "game finished");
        TurnEvent::EndGame { winner, reason }
    }

    /// Record a clue from the moving team's spymaster.
    pub fn give_clue(&mut self, player: &str, clue: Clue) -> Result<()> {
        self.check_in_progress()?;
        match self.rosters.spymaster_of(player) {
            Some(team) if team == self.moving_team => {
                debug!(player, %clue, "clue given");
                self.clue = Some(clue);
                Ok(())
            }
            Some(_) => Err(GameError::NotYourTurn {
                player: player.to_string(),
            }),
            None => Err(GameError::NotSpymaster {
                player: player.to_string(),
            }),
        }
    }

    /// Hand the turn to the other team and return it.
    pub fn next_turn(&mut self) -> Result<Team> {
        self.check_in_progress()?;
        self.moving_team = self.moving_team.other();
        self.clue = None;
        debug!(moving_team = %self.moving_team, "turn passed");
        Ok(self.moving_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Arc<WordDeck> {
        let words: Vec<String> = (0..50).map(|i| format!("word{i}")).collect();
        Arc::new(WordDeck::new(words).unwrap())
    }

    fn ready_session(seed: u64) -> GameSession {
        let mut game = GameSession::new(deck(), SessionConfig::default().with_seed(seed));
        game.add_player("rs", Team::Red);
        game.add_player("ra", Team::Red);
        game.add_player("bs", Team::Blue);
        game.add_player("ba", Team::Blue);
        game.set_spymaster(Team::Red, "rs").unwrap();
        game.set_spymaster(Team::Blue, "bs").unwrap();
        game
    }

    fn first_of(game: &GameSession, category: CardCategory) -> (usize, usize) {
        game.board().unwrap().positions_of(category).next().unwrap()
    }

    #[test]
    fn test_setup_invariants() {
        let game = GameSession::new(deck(), SessionConfig::default());
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.moving_team(), None);
        assert_eq!(game.winning_team(), None);
        assert!(game.board().is_none());
    }

    #[test]
    fn test_start_requires_roster() {
        let mut game = GameSession::new(deck(), SessionConfig::default().with_seed(1));
        game.add_player("a", Team::Red);
        assert!(matches!(
            game.start(),
            Err(GameError::Setup(SetupError::TeamTooSmall { team: Team::Red, minimum: 2 }))
        ));

        game.add_player("b", Team::Red);
        game.add_player("c", Team::Blue);
        game.add_player("d", Team::Blue);
        assert!(matches!(
            game.start(),
            Err(GameError::Setup(SetupError::MissingSpymaster(Team::Red)))
        ));
        assert_eq!(game.phase(), Phase::Setup);
    }

    #[test]
    fn test_debug_skips_checks() {
        let mut game = GameSession::new(deck(), SessionConfig::default().with_debug(true));
        game.start().unwrap();
        assert_eq!(game.phase(), Phase::InProgress);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut game = ready_session(3);
        game.start().unwrap();
        assert!(matches!(game.start(), Err(GameError::NotSetup)));
    }

    #[test]
    fn test_reveal_before_start() {
        let mut game = ready_session(3);
        assert!(matches!(game.reveal_card_at(0, 0), Err(GameError::NotStarted)));
    }

    #[test]
    fn test_assassin_ends_game_for_other_team() {
        let mut game = ready_session(4);
        game.start().unwrap();
        let mover = game.moving_team().unwrap();
        let (row, col) = first_of(&game, CardCategory::Assassin);

        let event = game.reveal_card_at(row, col).unwrap();
        assert_eq!(
            event,
            TurnEvent::EndGame { winner: mover.other(), reason: EndReason::Assassin }
        );
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.winning_team(), Some(mover.other()));

        assert!(matches!(
            game.reveal_card_at(0, 0),
            Err(GameError::AlreadyFinished { winner }) if winner == mover.other()
        ));
    }

    #[test]
    fn test_failed_reveal_keeps_state() {
        let mut game = ready_session(5);
        game.start().unwrap();
        let (row, col) = first_of(&game, CardCategory::Bystander);
        game.reveal_card_at(row, col).unwrap();
        let before = game.counts();

        assert!(matches!(game.reveal_card_at(row, col), Err(GameError::AlreadyRevealed { .. })));
        assert_eq!(game.counts(), before);
        assert_eq!(game.phase(), Phase::InProgress);
    }

    #[test]
    fn test_reset_clears_game() {
        let mut game = ready_session(6);
        game.start().unwrap();
        game.reset();
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.board().is_none());
        assert_eq!(game.winning_team(), None);
        assert_eq!(game.rosters().player_count(), 4);
    }

    #[test]
    fn test_join_balances() {
        let mut game = GameSession::new(deck(), SessionConfig::default());
        assert_eq!(game.join("a", None).unwrap(), Team::Red);
        assert_eq!(game.join("b", None).unwrap(), Team::Blue);
        assert_eq!(game.join("c", None).unwrap(), Team::Red);
        assert_eq!(game.join("d", Some(Team::Red)).unwrap(), Team::Red);
        assert_eq!(game.join("e", None).unwrap(), Team::Blue);
    }

    #[test]
    fn test_rename() {
        let mut game = ready_session(7);
        assert_eq!(game.rename_player("rs", "newbie").unwrap(), Team::Red);
        assert_eq!(game.player_team("newbie"), Some(Team::Red));
        assert_eq!(game.player_team("rs"), None);
        assert_eq!(game.spymaster(Team::Red), None);

        assert!(matches!(game.rename_player("ghost", "x"), Err(GameError::NotAPlayer(_))));
        assert!(matches!(game.rename_player("ra", "ba"), Err(GameError::AlreadyPlaying(_))));
    }

    #[test]
    fn test_rename_during_play() {
        let mut game = ready_session(11);
        game.start().unwrap();
        let before: Vec<String> = game.players().map(str::to_string).collect();

        assert_eq!(game.rename_player("ba", "bb").unwrap(), Team::Blue);
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.player_team("bb"), Some(Team::Blue));
        assert_eq!(game.player_team("ba"), None);
        assert_eq!(game.team_members(Team::Red).len(), 2);
        assert_eq!(game.team_members(Team::Blue).len(), 2);

        let after: Vec<String> = game.players().map(str::to_string).collect();
        let expected: Vec<String> = before
            .iter()
            .map(|p| if p == "ba" { "bb".to_string() } else { p.clone() })
            .collect();
        assert_eq!(after, expected);
        assert!(game.rosters().is_consistent());
    }

    #[test]
    fn test_next_turn_outside_play() {
        let mut game = ready_session(12);
        assert!(matches!(game.next_turn(), Err(GameError::NotStarted)));

        game.start().unwrap();
        let (row, col) = first_of(&game, CardCategory::Assassin);
        let event = game.reveal_card_at(row, col).unwrap();
        assert!(event.is_game_over());

        let mover = game.moving_team();
        assert!(matches!(game.next_turn(), Err(GameError::AlreadyFinished { .. })));
        assert_eq!(game.moving_team(), mover);
        assert_eq!(game.phase(), Phase::Finished);
    }

    #[test]
    fn test_check_can_reveal() {
        let mut game = ready_session(8);
        game.start().unwrap();
        let mover = game.moving_team().unwrap();
        let (agent, spymaster, other) = match mover {
            Team::Red => ("ra", "rs", "ba"),
            Team::Blue => ("ba", "bs", "ra"),
        };

        assert_eq!(game.check_can_reveal(agent).unwrap(), mover);
        assert!(matches!(game.check_can_reveal(spymaster), Err(GameError::SpymasterCannotReveal { .. })));
        assert!(matches!(game.check_can_reveal(other), Err(GameError::NotYourTurn { .. })));
        assert!(matches!(game.check_can_reveal("nobody"), Err(GameError::NotAPlayer(_))));
    }

    #[test]
    fn test_clues() {
        let mut game = ready_session(9);
        game.start().unwrap();
        let mover = game.moving_team().unwrap();
        let spymaster = game.spymaster(mover).unwrap().to_string();
        let rival = game.spymaster(mover.other()).unwrap().to_string();
        let clue = Clue::new("ocean", "2").unwrap();

        assert!(matches!(game.give_clue(&rival, clue.clone()), Err(GameError::NotYourTurn { .. })));
        assert!(matches!(game.give_clue("ra", clue.clone()), Err(GameError::NotSpymaster { .. })));

        game.give_clue(&spymaster, clue.clone()).unwrap();
        assert_eq!(game.current_clue(), Some(&clue));

        game.next_turn().unwrap();
        assert_eq!(game.current_clue(), None);
    }

    #[test]
    fn test_remix_keeps_everyone() {
        let mut game = ready_session(10);
        game.add_player("extra", Team::Red);
        game.remix().unwrap();

        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.rosters().player_count(), 5);
        assert_eq!(game.rosters().team_size(Team::Red), 2);
        assert_eq!(game.rosters().team_size(Team::Blue), 3);
        for team in Team::ALL {
            let spymaster = game.spymaster(team).unwrap();
            assert_eq!(game.player_team(spymaster), Some(team));
        }
    }

    #[test]
    fn test_remix_too_few_players() {
        let mut game = GameSession::new(deck(), SessionConfig::default());
        game.add_player("solo", Team::Blue);
        assert!(game.remix().is_err());
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.player_team("solo"), Some(Team::Blue));
        assert_eq!(game.spymaster(Team::Blue), Some("solo"));
        assert!(game.rosters().is_consistent());
    }

    #[test]
    fn test_finish_returns_board() {
        let mut game = ready_session(11);
        game.start().unwrap();
        let expected = game.board().cloned();

        assert_eq!(game.finish(), expected);
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.finish(), None);
    }
}
