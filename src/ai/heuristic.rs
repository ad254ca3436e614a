use log::debug;

use crate::board::Board;
use crate::rules::legal_moves;
use crate::types::{Move, Position, Side};

const CAPTURE_WEIGHT: i32 = 10;
const CORNER_BONUS: i32 = 1000;
const EDGE_BONUS: i32 = 50;
const MOBILITY_PENALTY: i32 = 5;

/// One-ply score for `side` playing `pos` with the given capture set.
///
/// The opponent's reply count is measured on a scratch copy; `board` is
/// left untouched.
pub fn score_move(board: &Board, side: Side, pos: Position, captures: &[Position]) -> i32 {
    let mut score = captures.len() as i32 * CAPTURE_WEIGHT;

    if pos.is_corner() {
        score += CORNER_BONUS;
    }
    if pos.is_edge() {
        score += EDGE_BONUS;
    }

    let mut next = *board;
    next.apply(pos, side, captures);
    score -= legal_moves(&next, side.opponent()).len() as i32 * MOBILITY_PENALTY;

    score
}

/// Picks the highest-scoring legal move.
/// Equal scores keep the earliest move in row-major order.
pub fn choose(board: &Board, side: Side) -> Option<Move> {
    let moves = legal_moves(board, side);
    let mut best: Option<(i32, Position, &[Position])> = None;

    for (pos, captures) in moves.iter() {
        let score = score_move(board, side, pos, captures);
        if best.is_none_or(|(best_score, _, _)| score > best_score) {
            best = Some((score, pos, captures));
        }
    }

    best.map(|(score, position, captures)| {
        debug!("heuristic picked {position} for {side} with score {score}");
        Move {
            position,
            captures: captures.to_vec(),
        }
    })
}
