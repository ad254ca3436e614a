use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Position, Score, Side};

/// Reversi board state represented by two bitboards.
///
/// Bit `i` is the cell at row-major index `i`. The two masks never overlap,
/// so every cell has at most one owner and the three counts always sum to 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw masks. Cells set in both masks are kept black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "bitboards overlap");
        Self {
            black,
            white: white & !black,
        }
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        ((self.black | self.white) & bit(pos.index())) == 0
    }

    /// Places `side` at `pos` and flips every cell in `captures`.
    ///
    /// This is the only way a board changes. No re-validation is done: the
    /// caller passes a capture set produced by `rules::capture_set` for this
    /// exact board.
    pub fn apply(&mut self, pos: Position, side: Side, captures: &[Position]) {
        let flips = captures.iter().fold(0u64, |acc, p| acc | bit(p.index()));
        let placed = bit(pos.index()) | flips;

        match side {
            Side::Black => {
                self.black |= placed;
                self.white &= !placed;
            }
            Side::White => {
                self.white |= placed;
                self.black &= !placed;
            }
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    pub fn count_for(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black.count_ones() as u8,
            Side::White => self.white.count_ones() as u8,
        }
    }

    pub fn score(&self) -> Score {
        let (black, white) = self.count();
        Score { black, white }
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (idx, cell) in board.iter_mut().enumerate() {
            let square = bit(idx);
            *cell = if (self.black & square) != 0 {
                1
            } else if (self.white & square) != 0 {
                2
            } else {
                0
            };
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.to_array().iter().enumerate() {
            let c = match value {
                1 => 'B',
                2 => 'W',
                _ => '.',
            };
            write!(f, "{c}")?;
            if idx % BOARD_SIZE == BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parses eight rows of `B`, `W` and `.` (spaces inside a row are ignored).
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut black = 0u64;
        let mut white = 0u64;
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(GameError::InvalidBoard(format!(
                    "row {row} has {} cells",
                    cells.len()
                )));
            }
            for (col, c) in cells.into_iter().enumerate() {
                let square = bit(row * BOARD_SIZE + col);
                match c {
                    'B' | 'b' => black |= square,
                    'W' | 'w' => white |= square,
                    '.' => {}
                    other => {
                        return Err(GameError::InvalidBoard(format!(
                            "unexpected {other:?} at ({row}, {col})"
                        )));
                    }
                }
            }
        }

        Ok(Self { black, white })
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    #[test]
    fn t01_initial_board_has_two_diagonal_pairs() {
        let board = Board::new();

        assert_eq!(board.cell(at(3, 3)), Cell::White);
        assert_eq!(board.cell(at(4, 4)), Cell::White);
        assert_eq!(board.cell(at(3, 4)), Cell::Black);
        assert_eq!(board.cell(at(4, 3)), Cell::Black);
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn apply_places_and_flips_and_updates_counts() {
        let mut board = Board::new();

        board.apply(at(2, 3), Side::Black, &[at(3, 3)]);

        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.empty_count(), 59);

        let cells = board.to_array();
        assert_eq!(cells[at(2, 3).index()], 1);
        assert_eq!(cells[at(3, 3).index()], 1);
        assert_eq!(cells[at(3, 4).index()], 1);
        assert_eq!(cells[at(4, 3).index()], 1);
        assert_eq!(cells[at(4, 4).index()], 2);
    }

    #[test]
    fn copies_are_independent() {
        let board = Board::new();
        let mut scratch = board;

        scratch.apply(at(2, 3), Side::Black, &[at(3, 3)]);

        assert_ne!(scratch, board);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parses_and_renders_text_layout() {
        let text = "\
            ........
            ........
            ........
            ...WB...
            ...BW...
            ........
            ........
            ........";
        let board: Board = text.parse().unwrap();

        assert_eq!(board, Board::new());
        assert_eq!(board.to_string().lines().nth(3), Some("...WB..."));
    }

    #[test]
    fn rejects_malformed_layout() {
        assert!(matches!(
            "B.......".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));

        let bad_char = "X.......\n".to_string() + &"........\n".repeat(7);
        assert!(bad_char.parse::<Board>().is_err());
    }

    #[test]
    fn score_matches_count() {
        let text = format!("{}WWWW....", "BBBBBBBB\n".repeat(7));
        let board: Board = text.parse().unwrap();

        assert_eq!(board.score(), Score { black: 56, white: 4 });
        assert_eq!(board.count_for(Side::White), 4);
    }
}
