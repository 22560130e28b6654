//! Read-only view of a game for renderers.
//!
//! A snapshot is a plain `Copy` value. Building one never touches the engine's
//! state, and renderers only ever see snapshots.

use crate::game_state::ActivePiece;
use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Grid of compact cell codes (0 = empty, 1..=7 = piece kind), row-major
pub type SnapshotGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Board cells covered by the piece that lie inside the grid
    pub fn visible_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.minos().into_iter().filter_map(move |(dx, dy)| {
            let x = self.x + dx;
            let y = self.y + dy;
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                Some((x as usize, y as usize))
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells only; the active piece is not stamped in.
    pub board: SnapshotGrid,
    /// Present while the game is running.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
    }

    /// Locked cells with the active piece drawn over them
    pub fn composited(&self) -> SnapshotGrid {
        let mut grid = self.board;
        if let Some(active) = self.active {
            let code = active.kind.to_u8();
            for (x, y) in active.visible_cells() {
                grid[y][x] = code;
            }
        }
        grid
    }

    /// Kind shown at (x, y) once the active piece is overlaid
    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        if x >= BOARD_WIDTH as usize || y >= BOARD_HEIGHT as usize {
            return None;
        }
        if let Some(active) = self.active {
            if active.visible_cells().any(|c| c == (x, y)) {
                return Some(active.kind);
            }
        }
        PieceKind::from_u8(self.board[y][x])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
