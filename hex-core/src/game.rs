//! Game state and the turn state machine

use crate::board::{Board, Position, Token};
use crate::error::{HexError, Result};

// ============================================================================
// PLAYERS
// ============================================================================

/// Seat of a player inside one session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    First = 0,
    Second = 1,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Who decides a player's moves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Moves come from the input stream
    Human,
    /// Heuristic ladder with mirror moves
    Bogo,
    /// Heuristic ladder with shortest-path search
    Hero,
}

impl Controller {
    pub fn is_ai(self) -> bool {
        self != Controller::Human
    }
}

/// A contestant; every session owns its own copies
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: Token,
    controller: Controller,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token, controller: Controller) -> Self {
        Self {
            name: name.into(),
            token,
            controller,
        }
    }

    pub fn human(name: impl Into<String>, token: Token) -> Self {
        Self::new(name, token, Controller::Human)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    fn switch_token(&mut self) {
        self.token = self.token.other();
    }
}

/// A recorded placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub seat: Seat,
    pub position: Position,
}

/// Session status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
}

// ============================================================================
// HEX GAME
// ============================================================================

/// One session of Hex
#[derive(Clone, Debug)]
pub struct HexGame {
    name: String,
    board: Board,
    players: [Player; 2],
    current: Seat,
    history: Vec<Move>,
    swapped: bool,
    winner: Option<Seat>,
}

impl HexGame {
    /// Create a game; `players[0]` moves first
    pub fn new(name: impl Into<String>, size: usize, players: [Player; 2]) -> Self {
        debug_assert_ne!(players[0].token(), players[1].token());
        Self {
            name: name.into(),
            board: Board::new(size),
            players,
            current: Seat::First,
            history: Vec::new(),
            swapped: false,
            winner: None,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Player not on turn
    pub fn opponent(&self) -> &Player {
        self.player(self.current.other())
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn has_swapped(&self) -> bool {
        self.swapped
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn winning_player(&self) -> Option<&Player> {
        self.winner.map(|seat| self.player(seat))
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(seat) => GameStatus::Won(seat),
            None => GameStatus::InProgress,
        }
    }

    pub fn is_active(&self) -> bool {
        self.winner.is_none()
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Place the current player's token
    ///
    /// On a win the turn stays with the winner.
    pub fn place_token(&mut self, pos: Position) -> Result<()> {
        if let Some(winner) = self.winning_player() {
            return Err(HexError::GameAlreadyWon {
                winner: winner.name().to_string(),
            });
        }

        let seat = self.current;
        let token = self.player(seat).token();
        self.board.place(pos, token)?;
        self.history.push(Move { seat, position: pos });

        if self.board.has_won(token) {
            tracing::debug!(game = %self.name, player = self.player(seat).name(), "game won");
            self.winner = Some(seat);
        } else {
            self.current = seat.other();
        }
        Ok(())
    }

    /// Check if the pie rule may be invoked now
    pub fn can_swap(&self) -> bool {
        self.history.len() == 1 && !self.swapped && self.winner.is_none()
    }

    /// Pie-rule swap
    ///
    /// Tokens change hands, the opening move is credited to the other seat
    /// and the turn passes.
    pub fn swap_tokens(&mut self) -> Result<()> {
        if !self.can_swap() {
            return Err(HexError::SwapNotAllowed);
        }

        self.swapped = true;
        self.players.iter_mut().for_each(Player::switch_token);
        let opening = &mut self.history[0];
        opening.seat = opening.seat.other();
        self.current = self.current.other();
        Ok(())
    }

    /// Last `count` moves, newest first
    pub fn retrieve_recent_moves(&self, count: usize) -> Result<Vec<&Move>> {
        if count > self.history.len() {
            return Err(HexError::HistoryExceeded);
        }
        Ok(self.history.iter().rev().take(count).collect())
    }

    /// Position of `seat`'s move `skip` steps back (0 = most recent)
    pub fn last_move_for(&self, seat: Seat, skip: usize) -> Option<Position> {
        self.history
            .iter()
            .rev()
            .filter(|m| m.seat == seat)
            .nth(skip)
            .map(|m| m.position)
    }

    /// Number of moves credited to `seat`
    pub fn move_count_for(&self, seat: Seat) -> usize {
        self.history.iter().filter(|m| m.seat == seat).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> HexGame {
        HexGame::new(
            "test",
            5,
            [Player::human("Alice", Token::A), Player::human("Bob", Token::B)],
        )
    }

    fn play(game: &mut HexGame, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            game.place_token(Position::new(x, y)).unwrap();
        }
    }

    #[test]
    fn test_game_creation() {
        let game = new_game();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player().name(), "Alice");
        assert_eq!(game.opponent().name(), "Bob");
        assert!(game.history().is_empty());
        assert!(!game.has_swapped());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = new_game();
        play(&mut game, &[(2, 2)]);
        assert_eq!(game.current_seat(), Seat::Second);
        play(&mut game, &[(3, 3)]);
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_failed_place_keeps_state() {
        let mut game = new_game();
        play(&mut game, &[(2, 2)]);

        assert_eq!(game.place_token(Position::new(2, 2)), Err(HexError::Occupied));
        assert_eq!(game.place_token(Position::new(9, 0)), Err(HexError::OutOfBounds));
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_column_scenario_first_player_wins() {
        let mut game = new_game();
        play(
            &mut game,
            &[(0, 0), (4, 4), (0, 1), (4, 3), (0, 2), (4, 2), (0, 3), (4, 1), (0, 4)],
        );

        assert_eq!(game.status(), GameStatus::Won(Seat::First));
        assert_eq!(game.winning_player().unwrap().name(), "Alice");
        assert!(!game.is_active());
        // Turn does not advance past the winning move
        assert_eq!(game.current_seat(), Seat::First);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = new_game();
        play(
            &mut game,
            &[(0, 0), (4, 4), (0, 1), (4, 3), (0, 2), (4, 2), (0, 3), (4, 1), (0, 4)],
        );

        let err = game.place_token(Position::new(2, 2)).unwrap_err();
        assert_eq!(err, HexError::GameAlreadyWon { winner: "Alice".to_string() });
        assert_eq!(game.move_count(), 9);
        assert_eq!(game.winner(), Some(Seat::First));
        assert_eq!(game.board().is_empty(Position::new(2, 2)), Some(true));
    }

    #[test]
    fn test_swap() {
        let mut game = new_game();
        assert!(!game.can_swap());
        assert_eq!(game.swap_tokens(), Err(HexError::SwapNotAllowed));

        play(&mut game, &[(1, 3)]);
        assert!(game.can_swap());
        game.swap_tokens().unwrap();

        assert!(game.has_swapped());
        assert_eq!(game.player(Seat::First).token(), Token::B);
        assert_eq!(game.player(Seat::Second).token(), Token::A);
        assert_eq!(game.history()[0].seat, Seat::Second);
        assert_eq!(game.history()[0].position, Position::new(1, 3));
        // Seat one moves next, now holding the other token
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.move_count(), 1);

        assert_eq!(game.swap_tokens(), Err(HexError::SwapNotAllowed));
    }

    #[test]
    fn test_swap_only_after_exactly_one_move() {
        let mut game = new_game();
        play(&mut game, &[(1, 3), (2, 2)]);
        assert_eq!(game.swap_tokens(), Err(HexError::SwapNotAllowed));
        assert!(!game.has_swapped());
    }

    #[test]
    fn test_place_after_swap_uses_new_token() {
        let mut game = new_game();
        play(&mut game, &[(1, 3)]);
        game.swap_tokens().unwrap();
        play(&mut game, &[(2, 2)]);

        assert_eq!(
            game.board().cell(Position::new(2, 2)),
            Some(crate::board::Cell::Occupied(Token::B))
        );
        assert_eq!(game.history()[1].seat, Seat::First);
    }

    #[test]
    fn test_retrieve_recent_moves() {
        let mut game = new_game();
        play(&mut game, &[(0, 0), (1, 1), (2, 2)]);

        let recent = game.retrieve_recent_moves(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].position, Position::new(2, 2));
        assert_eq!(recent[1].position, Position::new(1, 1));
        assert_eq!(recent[1].seat, Seat::Second);

        assert_eq!(game.retrieve_recent_moves(3).unwrap().len(), 3);
        assert_eq!(game.retrieve_recent_moves(4), Err(HexError::HistoryExceeded));
    }

    #[test]
    fn test_last_move_for() {
        let mut game = new_game();
        play(&mut game, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        assert_eq!(game.last_move_for(Seat::First, 0), Some(Position::new(4, 4)));
        assert_eq!(game.last_move_for(Seat::First, 2), Some(Position::new(0, 0)));
        assert_eq!(game.last_move_for(Seat::First, 3), None);
        assert_eq!(game.last_move_for(Seat::Second, 1), Some(Position::new(1, 1)));
        assert_eq!(game.move_count_for(Seat::Second), 2);
    }
}
