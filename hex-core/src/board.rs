//! Hex board geometry on a square array
//!
//! Cells are addressed by `Position { x, y }`. Row `y` is drawn on line `y`
//! and shifted right by `y` half-cells, which turns the square array into a
//! rhombus where the six `DIRECTIONS` are the visual neighbours.

use std::fmt;

use crate::connectivity::ConnectivityChecker;
use crate::error::{HexError, Result};

/// Smallest accepted board size
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest accepted board size
pub const MAX_BOARD_SIZE: usize = 12345;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Board coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a direction vector
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// All six neighbours, including ones off the board
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        DIRECTIONS.iter().map(move |&d| self.offset(d))
    }

    /// Check if both coordinates lie in `[min, max]`
    pub fn lies_within(&self, min: i32, max: i32) -> bool {
        self.x >= min && self.x <= max && self.y >= min && self.y <= max
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Direction vectors (dx, dy)
/// Index: 0=UL, 1=UR, 2=L, 3=R, 4=DL, 5=DR
pub const DIRECTIONS: [(i32, i32); 6] = [
    (0, -1),  // up-left
    (1, -1),  // up-right
    (-1, 0),  // left
    (1, 0),   // right
    (-1, 1),  // down-left
    (0, 1),   // down-right
];

// ============================================================================
// TOKENS AND CELLS
// ============================================================================

/// Player marker
///
/// Edges belong to tokens, not to seats: `A` joins the top and bottom rows,
/// `B` joins the left and right columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    A,
    B,
}

impl Token {
    pub fn other(self) -> Self {
        match self {
            Token::A => Token::B,
            Token::B => Token::A,
        }
    }

    /// Character used when printing the board
    pub fn symbol(self) -> char {
        match self {
            Token::A => 'X',
            Token::B => 'O',
        }
    }

    /// Cells of the edge a winning chain starts from
    pub fn start_edge(self, size: usize) -> impl Iterator<Item = Position> {
        let n = size as i32;
        (0..n).map(move |i| match self {
            Token::A => Position::new(i, 0),
            Token::B => Position::new(0, i),
        })
    }

    /// Is `pos` on the edge a winning chain must reach
    pub fn on_goal_edge(self, pos: Position, size: usize) -> bool {
        let last = size as i32 - 1;
        match self {
            Token::A => pos.y == last,
            Token::B => pos.x == last,
        }
    }
}

/// Contents of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Token),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(token) => token.symbol(),
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Square grid of cells
///
/// `Clone` is a full snapshot; searches run on clones so the live board is
/// only touched by confirmed moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major: index = y * size + x
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.lies_within(0, self.size as i32 - 1)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.size + pos.x as usize)
    }

    /// Cell at `pos`, `None` off the board
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether `pos` is empty, `None` off the board
    pub fn is_empty(&self, pos: Position) -> Option<bool> {
        self.cell(pos).map(Cell::is_empty)
    }

    /// Place a token on an empty cell
    pub fn place(&mut self, pos: Position, token: Token) -> Result<()> {
        let index = self.index(pos).ok_or(HexError::OutOfBounds)?;
        if !self.cells[index].is_empty() {
            return Err(HexError::Occupied);
        }
        self.cells[index] = Cell::Occupied(token);
        Ok(())
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.size as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Position::new(x, y)))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |&pos| self.is_empty(pos) == Some(true))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    // ========================================================================
    // WIN DETECTION
    // ========================================================================

    /// Check if `token` connects its two edges
    pub fn has_won(&self, token: Token) -> bool {
        self.winning_start(token).is_some()
    }

    /// First start-edge cell whose chain reaches the goal edge
    pub fn winning_start(&self, token: Token) -> Option<Position> {
        let checker = ConnectivityChecker::new(self);
        token
            .start_edge(self.size)
            .filter(|&pos| self.cell(pos) == Some(Cell::Occupied(token)))
            .find(|&pos| checker.is_connected(pos, token))
    }

    /// Find a single placement that wins for `token`
    ///
    /// Brute force: every empty cell is tried on a snapshot. Scans `x` outer,
    /// `y` inner and returns the first hit.
    pub fn winning_location(&self, token: Token) -> Option<Position> {
        let n = self.size as i32;
        (0..n)
            .flat_map(|x| (0..n).map(move |y| Position::new(x, y)))
            .filter(|&pos| self.is_empty(pos) == Some(true))
            .find(|&pos| {
                let mut snapshot = self.clone();
                snapshot.place(pos, token).is_ok() && snapshot.has_won(token)
            })
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Printable grid, one line per row
    pub fn render(&self) -> String {
        let grid: Vec<char> = self.cells.iter().map(|c| c.symbol()).collect();
        self.render_chars(&grid)
    }

    /// Printable grid with the winning chain of `token` drawn as `*`
    ///
    /// Returns `None` if `token` has not won.
    pub fn win_path_representation(&self, token: Token) -> Option<String> {
        let start = self.winning_start(token)?;
        let mut grid: Vec<char> = self.cells.iter().map(|c| c.symbol()).collect();
        for pos in ConnectivityChecker::new(self).component(start, token) {
            if let Some(i) = self.index(pos) {
                grid[i] = '*';
            }
        }
        Some(self.render_chars(&grid))
    }

    fn render_chars(&self, grid: &[char]) -> String {
        let mut out = String::with_capacity(self.size * self.size * 3);
        for (y, row) in grid.chunks(self.size.max(1)).enumerate() {
            out.push_str(&" ".repeat(y));
            for (x, c) in row.iter().enumerate() {
                if x > 0 {
                    out.push(' ');
                }
                out.push(*c);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
