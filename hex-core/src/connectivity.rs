//! Breadth-first reachability over same-token cells

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::{Board, Cell, Position, Token};

/// Checks whether a chain of one token reaches that token's goal edge
pub struct ConnectivityChecker<'a> {
    board: &'a Board,
}

impl<'a> ConnectivityChecker<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check if a chain of `token` runs from `start` to the goal edge
    ///
    /// Only cells holding `token` are explored; any path counts.
    pub fn is_connected(&self, start: Position, token: Token) -> bool {
        let size = self.board.size();
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if token.on_goal_edge(current, size) {
                tracing::trace!(?start, ?current, ?token, "goal edge reached");
                return true;
            }
            queue.extend(
                self.same_token_neighbors(current, token)
                    .filter(|n| !visited.contains(n)),
            );
        }

        false
    }

    /// Every cell reachable from `start` through cells holding `token`
    pub fn component(&self, start: Position, token: Token) -> Vec<Position> {
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !self.board.contains(current) || !visited.insert(current) {
                continue;
            }
            order.push(current);
            queue.extend(self.same_token_neighbors(current, token));
        }

        order
    }

    fn same_token_neighbors(
        &self,
        pos: Position,
        token: Token,
    ) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors()
            .filter(move |&n| self.board.cell(n) == Some(Cell::Occupied(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(i32, i32)], token: Token) {
        for &(x, y) in cells {
            board.place(Position::new(x, y), token).unwrap();
        }
    }

    #[test]
    fn test_connected_column() {
        let mut board = Board::new(5);
        place_all(&mut board, &[(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)], Token::A);

        let checker = ConnectivityChecker::new(&board);
        assert!(checker.is_connected(Position::new(1, 0), Token::A));
        // Wrong token: nothing to walk on
        assert!(!checker.is_connected(Position::new(1, 0), Token::B));
    }

    #[test]
    fn test_gap_breaks_connection() {
        let mut board = Board::new(5);
        place_all(&mut board, &[(1, 0), (1, 1), (1, 3), (1, 4)], Token::A);
        board.place(Position::new(1, 2), Token::B).unwrap();

        let checker = ConnectivityChecker::new(&board);
        assert!(!checker.is_connected(Position::new(1, 0), Token::A));
    }

    #[test]
    fn test_connection_is_monotone() {
        let mut board = Board::new(5);
        place_all(&mut board, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)], Token::B);
        assert!(ConnectivityChecker::new(&board).is_connected(Position::new(0, 2), Token::B));

        for pos in board.clone().empty_cells() {
            board.place(pos, Token::B).unwrap();
            assert!(ConnectivityChecker::new(&board).is_connected(Position::new(0, 2), Token::B));
        }
    }

    #[test]
    fn test_winding_path() {
        // Token B snakes down and back up before reaching the right edge
        let mut board = Board::new(5);
        place_all(
            &mut board,
            &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 1), (3, 0), (4, 0)],
            Token::B,
        );
        assert!(ConnectivityChecker::new(&board).is_connected(Position::new(0, 0), Token::B));
    }

    #[test]
    fn test_component() {
        let mut board = Board::new(5);
        place_all(&mut board, &[(0, 0), (0, 1), (3, 3)], Token::A);

        let component = ConnectivityChecker::new(&board).component(Position::new(0, 0), Token::A);
        assert_eq!(component.len(), 2);
        assert!(component.contains(&Position::new(0, 1)));
        assert!(!component.contains(&Position::new(3, 3)));
    }
}
