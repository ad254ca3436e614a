use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A board coordinate.
///
/// Field order makes the derived `Ord` row-major, which is the scan order
/// used everywhere moves are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when `row` or `col` is outside `0..8`.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < NUM_SQUARES {
            Some(Self {
                row: (idx / BOARD_SIZE) as u8,
                col: (idx % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Steps one cell in direction `(dr, dc)`, or `None` off the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    pub fn is_edge(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        self.row == 0 || self.row == last || self.col == 0 || self.col == last
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// One of the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Wire value used by the page: 1 = black, 2 = white.
    pub fn player_id(self) -> u8 {
        match self {
            Side::Black => 1,
            Side::White => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// Outcome of resolving whose turn it is.
///
/// `Passed` is never stored on the board: it tells the caller that the side
/// to move has nothing to play and the turn goes to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    InProgress,
    Passed,
    Finished,
}

/// Computer difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    #[default]
    Hard,
}

impl FromStr for Level {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "hard" => Ok(Level::Hard),
            _ => Err(GameError::UnknownLevel(s.to_string())),
        }
    }
}

/// A placement together with the ordered capture set it flips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub position: Position,
    pub captures: Vec<Position>,
}

/// A playable cell and how many discs it would flip, for board hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveHint {
    pub row: u8,
    pub col: u8,
    pub flips: u8,
}

/// Disc counts per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// 64 cells in row-major order: 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    /// `InProgress` or `Finished`. A pass is already resolved by the time
    /// the state is read and shows up only in `is_pass`.
    pub phase: GamePhase,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last resolution skipped a side.
    /// - `passed_player` then names that side (1 or 2); otherwise 0.
    pub is_pass: bool,
    pub passed_player: u8,
    pub last_move: Option<Position>,
    /// Contract:
    /// - Discs flipped by `last_move`, in capture order.
    /// - Still set when that move made the next side pass.
    /// - Fresh game: empty.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// 0 = draw, 1 = black, 2 = white.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_range() {
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
        assert_eq!(Position::new(7, 7).map(Position::index), Some(63));
        assert!(Position::from_index(64).is_none());
    }

    #[test]
    fn corners_are_also_edges() {
        for (row, col) in [(0, 0), (0, 7), (7, 0), (7, 7)] {
            let pos = Position { row, col };
            assert!(pos.is_corner());
            assert!(pos.is_edge());
        }
        assert!(!Position { row: 0, col: 3 }.is_corner());
        assert!(Position { row: 0, col: 3 }.is_edge());
        assert!(!Position { row: 3, col: 3 }.is_edge());
    }

    #[test]
    fn offset_stops_at_board_boundary() {
        let corner = Position { row: 0, col: 0 };
        assert!(corner.offset(-1, 0).is_none());
        assert_eq!(corner.offset(1, 1), Some(Position { row: 1, col: 1 }));
    }

    #[test]
    fn position_order_is_row_major() {
        let a = Position { row: 2, col: 7 };
        let b = Position { row: 3, col: 0 };
        assert!(a < b);
    }

    #[test]
    fn level_parses_selector_values() {
        assert_eq!("easy".parse::<Level>().unwrap(), Level::Easy);
        assert_eq!(" Hard ".parse::<Level>().unwrap(), Level::Hard);
        assert!(matches!(
            "expert".parse::<Level>(),
            Err(GameError::UnknownLevel(_))
        ));
    }
}
