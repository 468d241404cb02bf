//! Game state and the move rules that mutate it.
//!
//! ## GameState
//!
//! Complete state of one game:
//! - Board contents
//! - Player to move
//! - Turn counter (always equal to the number of occupied cells)
//! - Cells of any completed line
//!
//! A state is created fresh for each game and only ever changes through
//! [`GameState::play`]. Starting a new game means replacing it.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

use super::board::{Board, EmptyIndices};
use super::error::MoveError;
use super::player::{Cell, Player};
use crate::rules::{lines_through, GameResult, WinningLine, CELL_COUNT};

/// State of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turns: usize,
    winning_line: WinningLine,
}

impl GameState {
    /// Create a new game with an empty board.
    #[must_use]
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            turns: 0,
            winning_line: WinningLine::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.board.get(index)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    /// Player to move, or the winner once the game has been won.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Moves played so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    #[must_use]
    pub fn winning_line(&self) -> WinningLine {
        self.winning_line
    }

    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        self.board.is_empty(index)
    }

    /// Whether `index` is part of a completed line.
    #[must_use]
    pub fn is_matching(&self, index: usize) -> bool {
        self.winning_line.contains(index)
    }

    #[must_use]
    pub fn has_winner(&self) -> bool {
        !self.winning_line.is_empty()
    }

    #[must_use]
    pub fn has_not_ended(&self) -> bool {
        !self.has_winner() && self.turns != CELL_COUNT
    }

    #[must_use]
    pub fn is_first_turn(&self) -> bool {
        self.turns == 0
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        !self.has_not_ended() && !self.has_winner()
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.has_winner().then_some(self.current_player)
    }

    /// Outcome once the game has ended, `None` while it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.has_not_ended() {
            None
        } else if self.has_winner() {
            Some(GameResult::Winner(self.current_player))
        } else {
            Some(GameResult::Draw)
        }
    }

    #[must_use]
    pub fn empty_indices(&self) -> EmptyIndices {
        self.board.empty_indices()
    }

    /// Whether a move at `index` is legal.
    #[must_use]
    pub fn can_play(&self, index: usize) -> bool {
        index < CELL_COUNT && self.is_empty(index) && self.has_not_ended()
    }

    // === Commands ===

    /// Place the current player's mark at `index`.
    ///
    /// The caller must check legality first: panics if `index` is out of
    /// range, occupied, or the game has ended. Use [`GameState::try_play`]
    /// for unvalidated input.
    pub fn play(&mut self, index: usize) {
        assert!(self.can_play(index), "Illegal move at cell {index}");

        let mover = self.current_player;
        self.apply_move(index);
        trace!(index, player = %mover, turns = self.turns, "move played");

        match self.result() {
            Some(GameResult::Winner(winner)) => {
                debug!(%winner, line = ?self.winning_line.iter().collect::<Vec<_>>(), "game won");
            }
            Some(GameResult::Draw) => debug!("game drawn"),
            None => {}
        }
    }

    /// Validate and play a move.
    pub fn try_play(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.has_not_ended() {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(index) {
            return Err(MoveError::Occupied(index));
        }
        self.play(index);
        Ok(())
    }

    /// Apply a legal move without logging. Used by search.
    pub(crate) fn apply_move(&mut self, index: usize) {
        debug_assert!(self.can_play(index));

        let mover = self.current_player;
        self.board.set(index, Cell::Occupied(mover));
        for line in lines_through(index) {
            if self.board.is_complete(line, mover) {
                self.winning_line.insert_line(line);
            }
        }

        self.turns += 1;
        if self.has_not_ended() {
            self.current_player = mover.opponent();
        }
    }

    /// Exactly revert the last [`GameState::apply_move`] at `index`.
    ///
    /// Moves are only legal on a running game, so the state before any move
    /// had no winning line.
    pub(crate) fn undo_move(&mut self, index: usize) {
        assert!(!self.is_empty(index), "Undo on empty cell {index}");

        if self.has_not_ended() {
            self.current_player = self.current_player.opponent();
        } else {
            self.winning_line.clear();
        }
        self.turns -= 1;
        self.board.set(index, Cell::Empty);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn play_all(start: Player, moves: &[usize]) -> GameState {
        let mut state = GameState::new(start);
        for &index in moves {
            state.play(index);
        }
        state
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(Player::O);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.turns(), 0);
        assert!(state.is_first_turn());
        assert!(state.has_not_ended());
        assert!(!state.has_winner());
        assert!(state.winning_line().is_empty());
        assert_eq!(state.result(), None);
        assert!((0..9).all(|i| state.is_empty(i)));
    }

    #[test]
    fn test_play_alternates() {
        let mut state = GameState::new(Player::X);
        state.play(4);
        assert_eq!(state.cell(4), Cell::Occupied(Player::X));
        assert_eq!(state.current_player(), Player::O);
        assert!(!state.is_first_turn());

        state.play(0);
        assert_eq!(state.cell(0), Cell::Occupied(Player::O));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.turns(), 2);
    }

    #[test]
    fn test_no_winner_yet() {
        let state = play_all(Player::X, &[0, 4, 8]);
        assert!(state.winning_line().is_empty());
        assert!(state.has_not_ended());
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_top_row_win() {
        let state = play_all(Player::X, &[0, 4, 1, 5, 2]);

        assert!(state.has_winner());
        assert!(!state.has_not_ended());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.result(), Some(GameResult::Winner(Player::X)));
        for index in 0..9 {
            assert_eq!(state.is_matching(index), [0, 1, 2].contains(&index));
        }
    }

    #[test]
    #[should_panic(expected = "Illegal move")]
    fn test_play_occupied_panics() {
        let mut state = play_all(Player::X, &[4]);
        state.play(4);
    }

    #[test]
    #[should_panic(expected = "Illegal move")]
    fn test_play_out_of_range_panics() {
        let mut state = GameState::default();
        state.play(9);
    }

    #[test]
    #[should_panic(expected = "Illegal move")]
    fn test_play_after_win_panics() {
        let mut state = play_all(Player::X, &[0, 4, 1, 5, 2]);
        state.play(8);
    }

    #[test]
    fn test_try_play_errors() {
        let mut state = play_all(Player::X, &[4]);
        assert_eq!(state.try_play(4), Err(MoveError::Occupied(4)));
        assert_eq!(state.try_play(12), Err(MoveError::OutOfRange(12)));
        assert_eq!(state.turns(), 1);

        assert_eq!(state.try_play(0), Ok(()));
        assert_eq!(state.turns(), 2);

        let mut won = play_all(Player::X, &[0, 4, 1, 5, 2]);
        assert_eq!(won.try_play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_restores_winning_move() {
        let before = play_all(Player::X, &[0, 4, 1, 5]);
        let mut state = before.clone();

        state.apply_move(2);
        assert!(state.has_winner());

        state.undo_move(2);
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_restores_drawing_move() {
        let before = play_all(Player::X, &[0, 1, 2, 4, 3, 5, 7, 6]);
        let mut state = before.clone();

        state.apply_move(8);
        assert!(state.is_draw());

        state.undo_move(8);
        assert_eq!(state, before);
    }

    #[test]
    fn test_serializes_as_read_only_snapshot() {
        // States are only built through play; serialization goes one way.
        let state = play_all(Player::X, &[0, 4, 1, 5, 2]);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["current_player"], "X");
        assert_eq!(json["turns"], 5);
        assert_eq!(json["winning_line"], 0b111);
        assert_eq!(json["board"]["cells"][4], serde_json::json!({ "Occupied": "O" }));
        assert_eq!(json["board"]["cells"][8], "Empty");
    }

    /// Play `choices` as picks among the remaining empty cells.
    fn replay(start: Player, choices: &[usize]) -> Vec<GameState> {
        let mut state = GameState::new(start);
        let mut history = vec![state.clone()];
        for &choice in choices {
            if !state.has_not_ended() {
                break;
            }
            let empty = state.empty_indices();
            state.play(empty[choice % empty.len()]);
            history.push(state.clone());
        }
        history
    }

    fn any_player() -> impl Strategy<Value = Player> {
        prop_oneof![Just(Player::X), Just(Player::O)]
    }

    proptest! {
        #[test]
        fn prop_turns_match_occupied_cells(
            start in any_player(),
            choices in prop::collection::vec(0usize..9, 0..9),
        ) {
            for state in replay(start, &choices) {
                prop_assert_eq!(state.turns(), state.board().occupied_count());
            }
        }

        #[test]
        fn prop_player_alternates_until_end(
            start in any_player(),
            choices in prop::collection::vec(0usize..9, 0..9),
        ) {
            let history = replay(start, &choices);
            for pair in history.windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                if after.has_not_ended() {
                    prop_assert_eq!(after.current_player(), before.current_player().opponent());
                } else {
                    prop_assert_eq!(after.current_player(), before.current_player());
                }
            }
        }

        #[test]
        fn prop_winning_line_matches_completed_lines(
            start in any_player(),
            choices in prop::collection::vec(0usize..9, 0..9),
        ) {
            for state in replay(start, &choices) {
                let completed: WinningLine = crate::rules::LINES
                    .iter()
                    .filter(|line| {
                        Player::ALL.iter().any(|&p| state.board().is_complete(**line, p))
                    })
                    .flat_map(|line| line.iter().copied())
                    .collect();
                prop_assert_eq!(state.winning_line(), completed);
                if state.is_draw() {
                    prop_assert!(!state.has_winner());
                }
            }
        }

        #[test]
        fn prop_undo_is_exact(
            start in any_player(),
            choices in prop::collection::vec(0usize..9, 0..9),
        ) {
            for before in replay(start, &choices) {
                for index in before.empty_indices() {
                    if !before.has_not_ended() {
                        break;
                    }
                    let mut state = before.clone();
                    state.apply_move(index);
                    state.undo_move(index);
                    prop_assert_eq!(&state, &before);
                }
            }
        }
    }
}
