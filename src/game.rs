use log::{debug, info};
use web_time::Instant;

use crate::ai::{LevelSelector, MoveSelector};
use crate::board::Board;
use crate::error::GameError;
use crate::rules::{LegalMoves, capture_set, legal_moves, resolve_turn};
use crate::types::{GamePhase, GameResult, GameState, Level, Move, MoveHint, Position, Score, Side};

/// The person at the page always plays black.
pub const HUMAN_SIDE: Side = Side::Black;
/// The computer always plays white.
pub const AI_SIDE: Side = Side::White;

/// Standard start position, black to move.
pub fn init_game() -> (Board, Side) {
    (Board::new(), Side::Black)
}

/// Validates and plays one move on a copy of `board`.
///
/// Returns the new board and the phase for the opponent, who moves next.
pub fn submit_move(
    board: &Board,
    row: u8,
    col: u8,
    side: Side,
) -> Result<(Board, GamePhase), GameError> {
    let position = Position::new(row, col).ok_or(GameError::OutOfRange { row, col })?;
    let captures = capture_set(board, position, side);
    if captures.is_empty() {
        return Err(GameError::IllegalMove { position });
    }

    let mut next = *board;
    next.apply(position, side, &captures);
    let phase = resolve_turn(&next, side.opponent());
    Ok((next, phase))
}

pub fn score(board: &Board) -> Score {
    board.score()
}

pub fn game_result(board: &Board) -> GameResult {
    let (black_count, white_count) = board.count();
    GameResult {
        winner: if black_count > white_count {
            Side::Black.player_id()
        } else if white_count > black_count {
            Side::White.player_id()
        } else {
            0
        },
        black_count,
        white_count,
    }
}

/// One running game between the page's player and the computer.
///
/// Owns the only live board. After every applied move the next side's turn
/// is resolved immediately, so a pass hands the turn over without a move
/// being consumed.
pub struct GameInstance {
    board: Board,
    pub current_player: Side,
    pub level: Level,
    phase: GamePhase,
    passed: Option<Side>,
    last_move: Option<Position>,
    flipped: Vec<Position>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(level: Level, selector: Box<dyn MoveSelector>) -> Self {
        let (board, current_player) = init_game();
        Self {
            board,
            current_player,
            level,
            phase: GamePhase::InProgress,
            passed: None,
            last_move: None,
            flipped: Vec::new(),
            selector,
        }
    }

    pub fn new_seeded(level: Level, seed: u64) -> Self {
        Self::new(level, Box::new(LevelSelector::seeded(seed)))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && self.current_player == AI_SIDE
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Discards the current game and starts over from the standard position.
    pub fn restart(&mut self) {
        let (board, current_player) = init_game();
        self.board = board;
        self.current_player = current_player;
        self.phase = GamePhase::InProgress;
        self.passed = None;
        self.last_move = None;
        self.flipped.clear();
        info!("game restarted at level {:?}", self.level);
    }

    /// Plays the human's move.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != HUMAN_SIDE {
            return Err(GameError::NotPlayersTurn);
        }

        let pos = Position::new(row, col).ok_or(GameError::OutOfRange { row, col })?;
        self.apply_move(pos, HUMAN_SIDE)
    }

    /// Lets the computer pick and play its move. Returns the move played so
    /// the page can replay the flips.
    pub fn do_ai_move(&mut self) -> Result<Move, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != AI_SIDE {
            return Err(GameError::NotAiTurn);
        }

        let started = Instant::now();
        let selected = self
            .selector
            .select_move(&self.board, AI_SIDE, self.level)
            .ok_or(GameError::NoLegalMoves { side: AI_SIDE })?;
        debug!(
            "AI ({:?}) chose {} in {:?}",
            self.level,
            selected.position,
            started.elapsed()
        );

        if !legal_moves(&self.board, AI_SIDE).contains(selected.position) {
            return Err(GameError::AiIllegalMove {
                position: selected.position,
            });
        }

        self.apply_move(selected.position, AI_SIDE)?;
        Ok(Move {
            position: selected.position,
            captures: self.flipped.clone(),
        })
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> LegalMoves {
        if self.is_game_over() {
            return LegalMoves::default();
        }
        legal_moves(&self.board, self.current_player)
    }

    pub fn legal_move_hints(&self) -> Vec<MoveHint> {
        self.legal_moves().hints()
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.player_id(),
            black_count,
            white_count,
            phase: self.phase,
            is_game_over: self.is_game_over(),
            is_pass: self.passed.is_some(),
            passed_player: self.passed.map_or(0, Side::player_id),
            last_move: self.last_move,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        game_result(&self.board)
    }

    fn apply_move(&mut self, pos: Position, side: Side) -> Result<(), GameError> {
        let captures = capture_set(&self.board, pos, side);
        if captures.is_empty() {
            return Err(GameError::IllegalMove { position: pos });
        }

        self.board.apply(pos, side, &captures);
        self.last_move = Some(pos);
        self.flipped = captures;
        self.current_player = side.opponent();
        self.advance();

        Ok(())
    }

    /// Resolves the side to move after a move, handing the turn over on a pass.
    fn advance(&mut self) {
        self.passed = None;
        self.phase = resolve_turn(&self.board, self.current_player);

        match self.phase {
            GamePhase::InProgress => {}
            GamePhase::Passed => {
                info!("{} has no legal moves, turn passes", self.current_player);
                self.passed = Some(self.current_player);
                self.current_player = self.current_player.opponent();
                self.phase = GamePhase::InProgress;
            }
            GamePhase::Finished => {
                let result = self.to_game_result();
                info!(
                    "game over: black {} - white {}",
                    result.black_count, result.white_count
                );
            }
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.phase = GamePhase::InProgress;
        self.passed = None;
        self.last_move = None;
        self.flipped.clear();
    }
}
