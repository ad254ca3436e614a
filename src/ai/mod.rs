pub mod heuristic;
pub mod random;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::types::{Level, Move, Side};

/// Chooses the computer's move. Returns `None` only when `side` has no legal
/// move, so callers check `rules::resolve_turn` first.
pub trait MoveSelector: Send + Sync {
    fn select_move(&mut self, board: &Board, side: Side, level: Level) -> Option<Move>;
}

/// Dispatches on the difficulty tier: random for `Easy`, one-ply heuristic
/// for `Hard`. Owns the random source so games are reproducible per seed.
#[derive(Debug, Clone)]
pub struct LevelSelector<R = StdRng> {
    rng: R,
}

impl LevelSelector<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LevelSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send + Sync> MoveSelector for LevelSelector<R> {
    fn select_move(&mut self, board: &Board, side: Side, level: Level) -> Option<Move> {
        choose_move(board, side, level, &mut self.rng)
    }
}

pub fn choose_move<R: Rng>(board: &Board, side: Side, level: Level, rng: &mut R) -> Option<Move> {
    match level {
        Level::Easy => random::choose(board, side, rng),
        Level::Hard => heuristic::choose(board, side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn hard_level_ignores_the_random_source() {
        let board = Board::new();
        let mut a = LevelSelector::seeded(1);
        let mut b = LevelSelector::seeded(99);

        let first = a.select_move(&board, Side::Black, Level::Hard);
        let second = b.select_move(&board, Side::Black, Level::Hard);

        assert_eq!(first, second);
        assert_eq!(
            first.map(|mv| mv.position),
            Some(Position { row: 2, col: 3 })
        );
    }

    #[test]
    fn easy_level_is_reproducible_per_seed() {
        let board = Board::new();
        let mut a = LevelSelector::seeded(42);
        let mut b = LevelSelector::seeded(42);

        for _ in 0..8 {
            assert_eq!(
                a.select_move(&board, Side::White, Level::Easy),
                b.select_move(&board, Side::White, Level::Easy)
            );
        }
    }
}
