use std::collections::BTreeMap;

use crate::board::Board;
use crate::types::{Cell, GamePhase, Move, MoveHint, NUM_SQUARES, Position, Side};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Legal placements for one side, each keyed to its capture set.
///
/// Iteration is row-major. The table is derived from a board and never
/// stored alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: BTreeMap<Position, Vec<Position>>,
}

impl LegalMoves {
    pub fn get(&self, pos: Position) -> Option<&[Position]> {
        self.moves.get(&pos).map(Vec::as_slice)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Position])> {
        self.moves.iter().map(|(pos, captures)| (*pos, captures.as_slice()))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.keys().copied()
    }

    /// Capture counts per playable cell.
    pub fn hints(&self) -> Vec<MoveHint> {
        self.iter()
            .map(|(pos, captures)| MoveHint {
                row: pos.row,
                col: pos.col,
                flips: captures.len() as u8,
            })
            .collect()
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
            .into_iter()
            .map(|(position, captures)| Move { position, captures })
            .collect()
    }
}

/// Opponent discs flipped if `side` plays at `pos`, walking each direction
/// in turn. Empty when the cell is occupied or nothing is bracketed.
pub fn capture_set(board: &Board, pos: Position, side: Side) -> Vec<Position> {
    if !board.is_empty_at(pos) {
        return Vec::new();
    }

    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());
    let mut captures = Vec::new();

    for (dr, dc) in DIRECTIONS {
        let mut line = Vec::new();
        let mut next = pos.offset(dr, dc);

        while let Some(square) = next {
            if board.cell(square) != opp {
                break;
            }
            line.push(square);
            next = square.offset(dr, dc);
        }

        // The walk must stop on our own disc, not on an empty cell or the edge.
        if !line.is_empty() && next.is_some_and(|anchor| board.cell(anchor) == own) {
            captures.extend(line);
        }
    }

    captures
}

/// Every cell where `side` may play, with what each would capture.
pub fn legal_moves(board: &Board, side: Side) -> LegalMoves {
    let moves = (0..NUM_SQUARES)
        .filter_map(Position::from_index)
        .filter_map(|pos| {
            let captures = capture_set(board, pos, side);
            (!captures.is_empty()).then_some((pos, captures))
        })
        .collect();

    LegalMoves { moves }
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    (0..NUM_SQUARES)
        .filter_map(Position::from_index)
        .any(|pos| !capture_set(board, pos, side).is_empty())
}

/// Decides whether `side_to_move` plays, must pass, or the game is over.
pub fn resolve_turn(board: &Board, side_to_move: Side) -> GamePhase {
    if has_legal_move(board, side_to_move) {
        GamePhase::InProgress
    } else if has_legal_move(board, side_to_move.opponent()) {
        GamePhase::Passed
    } else {
        GamePhase::Finished
    }
}
