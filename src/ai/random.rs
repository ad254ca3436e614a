use rand::Rng;

use crate::board::Board;
use crate::rules::legal_moves;
use crate::types::{Move, Side};

/// Uniformly picks one legal move for `side`.
pub fn choose<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let mut moves = legal_moves(board, side).into_moves();
    if moves.is_empty() {
        return None;
    }

    let idx = rng.random_range(0..moves.len());
    Some(moves.swap_remove(idx))
}
