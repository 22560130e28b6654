//! Game state module - manages the complete game state
//!
//! This module ties together the board, the active piece, the piece source and
//! scoring. It is a pure state machine: the caller decides when gravity
//! happens by calling [`GameState::tick`], and every operation completes
//! synchronously.
//!
//! Rejected moves and rotations are ordinary outcomes (`false`), not errors.
//! The only terminal condition is a block-out on spawn, after which every
//! mutator is ignored.

use tracing::{debug, info};

use crate::board::Board;
use crate::rng::PieceSource;
use crate::scoring::line_clear_score;
use crate::shape::{Minos, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GamePhase, PieceKind, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Owned copy of the catalog shape, replaced wholesale on rotation.
    pub shape: Shape,
    /// Anchor: top-left corner of the bounding box in board coordinates.
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position: horizontally centered
    /// (ties lean left), top of the bounding box on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Occupied cells as (dx, dy) offsets from the anchor
    pub fn minos(&self) -> Minos {
        self.shape.minos()
    }

    /// Check if all minos are at free positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }
}

/// Anchor column that centers `shape` on the board
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece was blocked, merged into the board, and the next piece spawned.
    Locked { lines_cleared: u32 },
    /// The game is over; nothing changed.
    Halted,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    source: Box<dyn PieceSource>,
    phase: GamePhase,
    score: u32,
    lines: u32,
    pieces_locked: u32,
}

impl GameState {
    /// Create a new game on an empty board and spawn the first piece
    pub fn new(source: impl PieceSource + 'static) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Create a game on a prepared board and spawn the first piece.
    ///
    /// If the first piece does not fit the game starts (and stays) over.
    pub fn with_board(board: Board, source: impl PieceSource + 'static) -> Self {
        let mut source: Box<dyn PieceSource> = Box::new(source);
        let active = ActivePiece::spawn(source.next_kind());

        let mut state = Self {
            board,
            active,
            source,
            phase: GamePhase::Running,
            score: 0,
            lines: 0,
            pieces_locked: 0,
        };
        state.check_block_out();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// The current piece. After a block-out this is the piece that did not fit.
    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece with the next kind from the source.
    ///
    /// A piece that collides right where it spawns ends the game; it stays in
    /// place but is never moved or merged. Returns false in that case, or when
    /// the game was already over.
    pub fn spawn_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.active = ActivePiece::spawn(self.source.next_kind());
        self.check_block_out()
    }

    fn check_block_out(&mut self) -> bool {
        if self.active.is_valid(&self.board) {
            debug!(
                kind = self.active.kind.as_str(),
                x = self.active.x,
                "spawned piece"
            );
            return true;
        }

        self.phase = GamePhase::GameOver;
        info!(
            kind = self.active.kind.as_str(),
            score = self.score,
            lines = self.lines,
            "block-out, game over"
        );
        false
    }

    /// Check if the active piece could move by (dx, dy) without colliding
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.board
            .fits(&self.active.shape, self.active.x + dx, self.active.y + dy)
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_move(dx, dy) {
            return false;
        }

        self.active.x += dx;
        self.active.y += dy;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate the active piece a quarter turn clockwise about its anchor.
    ///
    /// There are no wall kicks: if the rotated shape does not fit at the same
    /// anchor the piece keeps its current shape.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let rotated = self.active.shape.rotated();
        if !self.board.fits(&rotated, self.active.x, self.active.y) {
            return false;
        }

        self.active.shape = rotated;
        true
    }

    /// One gravity step: fall one row, or lock the piece if it cannot.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Halted;
        }

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        let lines_cleared = self.lock_piece();
        TickOutcome::Locked { lines_cleared }
    }

    /// Merge the active piece where it stands, clear full rows, score them and
    /// spawn the next piece. Returns the number of rows cleared.
    ///
    /// [`GameState::tick`] calls this when the piece cannot fall. It is public
    /// so a driver can build other lock triggers on top of it.
    pub fn lock_piece(&mut self) -> u32 {
        if self.is_game_over() {
            return 0;
        }

        let active = self.active;
        self.board
            .merge(&active.shape, active.x, active.y, active.kind);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.board.clear_full_lines();
        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared);
            self.score = self.score.saturating_add(line_clear_score(lines_cleared));
            debug!(lines_cleared, score = self.score, "cleared lines");
        }

        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            "locked piece"
        );

        self.spawn_piece();
        lines_cleared
    }

    /// Apply a driver command. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.tick() != TickOutcome::Halted,
            GameAction::Rotate => self.rotate(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = match self.phase {
            GamePhase::Running => Some(ActiveSnapshot::from(self.active)),
            GamePhase::GameOver => None,
        };
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
