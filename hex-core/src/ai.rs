//! Scripted opponents
//!
//! Both players walk a fixed priority ladder and return the first rule that
//! yields a move. They only read the game; every search runs on a board
//! snapshot.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::{Board, Cell, Position, Token};
use crate::command::Command;
use crate::game::{Controller, HexGame, Seat};

// ============================================================================
// DISPATCH
// ============================================================================

/// Compute the next command for an AI-controlled player on turn
///
/// Returns `None` for human players and when no cell is left.
pub fn next_command(controller: Controller, game: &HexGame) -> Option<Command> {
    match controller {
        Controller::Human => None,
        Controller::Bogo => BogoAi::next_move(game),
        Controller::Hero => HeroAi::next_move(game),
    }
}

// ============================================================================
// SHARED RULES
// ============================================================================

/// Placement that wins immediately for `token`
fn winning_move(board: &Board, token: Token) -> Option<Command> {
    board.winning_location(token).map(Command::place)
}

/// Placement that takes away the opponent's immediate win
fn blocking_move(board: &Board, opponent: Token) -> Option<Command> {
    board.winning_location(opponent).map(Command::place)
}

/// First empty cell in row-major order
fn first_empty_move(board: &Board) -> Option<Command> {
    board.empty_cells().next().map(Command::place)
}

// ============================================================================
// BOGO AI
// ============================================================================

/// Heuristic player: win, block, swap on even openings, mirror, fill
pub struct BogoAi;

impl BogoAi {
    pub fn next_move(game: &HexGame) -> Option<Command> {
        let board = game.board().clone();
        let token = game.current_player().token();

        if let Some(cmd) = winning_move(&board, token) {
            tracing::debug!(%cmd, "bogo: winning move");
            return Some(cmd);
        }
        if let Some(cmd) = blocking_move(&board, token.other()) {
            tracing::debug!(%cmd, "bogo: blocking move");
            return Some(cmd);
        }
        if Self::wants_swap(game) {
            tracing::debug!("bogo: swap");
            return Some(Command::Swap);
        }
        if let Some(cmd) = Self::mirror_move(game, &board) {
            tracing::debug!(%cmd, "bogo: mirror move");
            return Some(cmd);
        }
        first_empty_move(&board)
    }

    /// Swap when the single opening move sits on an even coordinate sum
    fn wants_swap(game: &HexGame) -> bool {
        match game.history() {
            [opening] => game.can_swap() && (opening.position.x + opening.position.y) % 2 == 0,
            _ => false,
        }
    }

    /// Point reflection of the latest move through the board centre
    fn mirror_move(game: &HexGame, board: &Board) -> Option<Command> {
        let last = game.history().last()?.position;
        let edge = board.size() as i32 - 1;
        let mirror = Position::new(edge - last.x, edge - last.y);
        (board.is_empty(mirror) == Some(true)).then(|| Command::place(mirror))
    }
}

// ============================================================================
// HERO AI
// ============================================================================

/// Pathfinding player: win, block, fixed opening, shortest path, fill
pub struct HeroAi;

impl HeroAi {
    pub fn next_move(game: &HexGame) -> Option<Command> {
        let board = game.board().clone();
        let seat = game.current_seat();
        let token = game.player(seat).token();

        if let Some(cmd) = winning_move(&board, token) {
            tracing::debug!(%cmd, "hero: winning move");
            return Some(cmd);
        }
        if let Some(cmd) = blocking_move(&board, token.other()) {
            tracing::debug!(%cmd, "hero: blocking move");
            return Some(cmd);
        }
        if game.move_count() == 1 {
            if let Some(cmd) = Self::opening_move(&board) {
                tracing::debug!(%cmd, "hero: opening move");
                return Some(cmd);
            }
        }
        if let Some(cmd) = Self::path_move(game, &board, seat, token) {
            return Some(cmd);
        }

        tracing::debug!("hero: no path from any anchor, filling first empty cell");
        first_empty_move(&board)
    }

    /// Topmost empty cell of the leftmost column
    fn opening_move(board: &Board) -> Option<Command> {
        (0..board.size() as i32)
            .map(|y| Position::new(0, y))
            .find(|&pos| board.is_empty(pos) == Some(true))
            .map(Command::place)
    }

    /// Extend from own stones, newest first, until one has a usable path
    ///
    /// Bounded by the number of stones this seat has placed.
    fn path_move(game: &HexGame, board: &Board, seat: Seat, token: Token) -> Option<Command> {
        for anchors_back in 0..game.move_count_for(seat) {
            let anchor = game.last_move_for(seat, anchors_back)?;
            if let Some(step) = shortest_path_step(board, anchor, token) {
                tracing::debug!(?anchor, anchors_back, ?step, "hero: path move");
                return Some(Command::place(step));
            }
            tracing::trace!(?anchor, anchors_back, "hero: dead end, trying older anchor");
        }
        None
    }
}

/// Neighbour order of the path search, as (dx, dy)
///
/// Columns before rows, so ties between equally short routes go to the
/// leftmost first step.
const PATH_SEARCH_ORDER: [(i32, i32); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

/// First step of a shortest route from `anchor` to `token`'s goal edge
///
/// Empty cells and cells holding `token` are walkable. Only an empty first
/// step can be played, so every frontier state carries the first step it
/// grew from and each first step keeps its own visited cells. A cell reached
/// through an occupied neighbour of `anchor` therefore never hides a route
/// starting on an empty one.
fn shortest_path_step(board: &Board, anchor: Position, token: Token) -> Option<Position> {
    let size = board.size();
    if token.on_goal_edge(anchor, size) {
        return None;
    }

    let walkable = |pos: Position| match board.cell(pos) {
        Some(Cell::Empty) => true,
        Some(Cell::Occupied(t)) => t == token,
        None => false,
    };

    let mut visited: FxHashSet<(Position, Position)> = FxHashSet::default();
    let mut queue: VecDeque<(Position, Position)> = PATH_SEARCH_ORDER
        .iter()
        .map(|&d| anchor.offset(d))
        .filter(|&first| board.is_empty(first) == Some(true))
        .map(|first| (first, first))
        .collect();
    visited.extend(queue.iter().copied());

    while let Some((current, first)) = queue.pop_front() {
        if token.on_goal_edge(current, size) {
            tracing::trace!(?anchor, ?first, goal = ?current, "route found");
            return Some(first);
        }

        for &d in &PATH_SEARCH_ORDER {
            let next = current.offset(d);
            if next != anchor && walkable(next) && visited.insert((next, first)) {
                queue.push_back((next, first));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn game_against(controller: Controller) -> HexGame {
        HexGame::new(
            "ai",
            5,
            [
                Player::human("Alice", Token::A),
                Player::new("Bot", Token::B, controller),
            ],
        )
    }

    fn play(game: &mut HexGame, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            game.place_token(Position::new(x, y)).unwrap();
        }
    }

    #[test]
    fn test_human_has_no_strategy() {
        let game = game_against(Controller::Human);
        assert_eq!(next_command(Controller::Human, &game), None);
    }

    #[test]
    fn test_bogo_swaps_even_opening() {
        let mut game = game_against(Controller::Bogo);
        play(&mut game, &[(1, 1)]);
        assert_eq!(BogoAi::next_move(&game), Some(Command::Swap));
    }

    #[test]
    fn test_bogo_mirrors_odd_opening() {
        let mut game = game_against(Controller::Bogo);
        play(&mut game, &[(1, 0)]);
        assert_eq!(BogoAi::next_move(&game), Some(Command::Place { x: 3, y: 4 }));
    }

    #[test]
    fn test_bogo_center_falls_back_to_first_empty() {
        let mut game = game_against(Controller::Bogo);
        play(&mut game, &[(0, 1), (4, 3), (2, 2)]);
        // Mirror of the centre is the centre itself
        assert_eq!(BogoAi::next_move(&game), Some(Command::Place { x: 0, y: 0 }));
    }

    #[test]
    fn test_bogo_takes_winning_move() {
        let mut game = game_against(Controller::Bogo);
        play(
            &mut game,
            &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2), (3, 0), (3, 2), (1, 4)],
        );
        // (4,1) touches (3,2) and is scanned before (4,2)
        assert_eq!(BogoAi::next_move(&game), Some(Command::Place { x: 4, y: 1 }));
    }

    #[test]
    fn test_bogo_blocks() {
        let mut game = game_against(Controller::Bogo);
        play(&mut game, &[(2, 0), (4, 4), (2, 1), (4, 3), (2, 2), (4, 1), (2, 3)]);
        // Alice needs (2,4) or (1,4)
        let cmd = BogoAi::next_move(&game).unwrap();
        assert_eq!(cmd, Command::Place { x: 1, y: 4 });
    }

    #[test]
    fn test_hero_opening_takes_left_column() {
        let mut game = game_against(Controller::Hero);
        play(&mut game, &[(0, 0)]);
        assert_eq!(HeroAi::next_move(&game), Some(Command::Place { x: 0, y: 1 }));
    }

    #[test]
    fn test_hero_extends_towards_right_edge() {
        let mut game = game_against(Controller::Hero);
        play(&mut game, &[(3, 3), (0, 2), (4, 0)]);
        // (1,1) starts the first four-step route, (1,1) (2,1) (3,1) (4,1)
        assert_eq!(HeroAi::next_move(&game), Some(Command::Place { x: 1, y: 1 }));
    }

    #[test]
    fn test_hero_retries_older_anchor() {
        let mut game = game_against(Controller::Hero);
        // Bot's newest stone (4,2) already sits on its goal edge
        play(&mut game, &[(2, 0), (0, 3), (3, 4), (4, 2), (1, 0)]);
        // From (0,3) the route through (1,2) ends on the own stone (4,2)
        assert_eq!(HeroAi::next_move(&game), Some(Command::Place { x: 1, y: 2 }));
    }

    #[test]
    fn test_hero_path_move_skips_occupied_first_steps() {
        let mut game = HexGame::new(
            "ai",
            7,
            [
                Player::human("Alice", Token::A),
                Player::new("Bot", Token::B, Controller::Hero),
            ],
        );
        let alice = [(5, 0), (4, 1), (6, 1), (2, 4), (5, 4), (6, 5), (0, 0), (1, 0)];
        let bot = [(1, 1), (3, 4), (6, 4), (3, 5), (4, 5), (0, 6), (2, 5)];
        for (i, &(x, y)) in alice.iter().enumerate() {
            game.place_token(Position::new(x, y)).unwrap();
            if let Some(&(bx, by)) = bot.get(i) {
                game.place_token(Position::new(bx, by)).unwrap();
            }
        }
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(HeroAi::next_move(&game), Some(Command::Place { x: 2, y: 6 }));
    }

    #[test]
    fn test_hero_blocks() {
        let mut game = game_against(Controller::Hero);
        play(&mut game, &[(2, 0), (4, 4), (2, 1), (4, 3), (2, 2), (4, 1), (2, 3)]);
        assert_eq!(HeroAi::next_move(&game), Some(Command::Place { x: 1, y: 4 }));
    }

    #[test]
    fn test_hero_enclosed_falls_back_to_first_empty() {
        // Bot's only stone at (0,0) is walled in by (1,0) and (0,1)
        let mut game = game_against(Controller::Hero);
        play(&mut game, &[(1, 0), (0, 0), (0, 1)]);
        assert_eq!(HeroAi::next_move(&game), Some(Command::Place { x: 2, y: 0 }));
    }

    #[test]
    fn test_shortest_path_step_is_empty_neighbor() {
        let mut board = Board::new(5);
        board.place(Position::new(0, 2), Token::B).unwrap();
        board.place(Position::new(1, 2), Token::B).unwrap();
        let step = shortest_path_step(&board, Position::new(0, 2), Token::B).unwrap();
        assert_eq!(step, Position::new(1, 1));
    }

    #[test]
    fn test_shortest_path_never_proposes_own_stone() {
        // Every route leaves (0,2) through the own stone at (1,2)
        let mut board = Board::new(5);
        board.place(Position::new(0, 2), Token::B).unwrap();
        board.place(Position::new(1, 2), Token::B).unwrap();
        for (x, y) in [(0, 1), (1, 1), (0, 3)] {
            board.place(Position::new(x, y), Token::A).unwrap();
        }
        assert_eq!(shortest_path_step(&board, Position::new(0, 2), Token::B), None);
    }

    #[test]
    fn test_shortest_path_anchor_on_goal_edge() {
        let mut board = Board::new(5);
        board.place(Position::new(4, 2), Token::B).unwrap();
        assert_eq!(shortest_path_step(&board, Position::new(4, 2), Token::B), None);
    }

    #[test]
    fn test_shortest_path_own_stone_does_not_hide_empty_route() {
        // Routes through the own stones (3,4) and (3,5) reach the right edge
        // first, but only the empty (2,6) can be played
        let mut board = Board::new(7);
        for (x, y) in [(5, 0), (4, 1), (6, 1), (2, 4), (5, 4), (6, 5)] {
            board.place(Position::new(x, y), Token::A).unwrap();
        }
        for (x, y) in [(1, 1), (3, 4), (6, 4), (2, 5), (3, 5), (4, 5), (0, 6)] {
            board.place(Position::new(x, y), Token::B).unwrap();
        }
        assert_eq!(
            shortest_path_step(&board, Position::new(2, 5), Token::B),
            Some(Position::new(2, 6))
        );
    }

    #[test]
    fn test_shortest_path_step_exact() {
        // (3,2) is taken, so (3,1) is the only first step of a two-step route
        let mut board = Board::new(5);
        board.place(Position::new(2, 2), Token::B).unwrap();
        board.place(Position::new(3, 2), Token::A).unwrap();
        assert_eq!(
            shortest_path_step(&board, Position::new(2, 2), Token::B),
            Some(Position::new(3, 1))
        );
    }
}
