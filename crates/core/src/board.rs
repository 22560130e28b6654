//! Board module - manages the game grid
//!
//! The board stores only the playable interior: 10 columns x 17 rows, each cell
//! empty or filled with a piece kind. Uses a flat array for cache locality and
//! zero allocation.
//!
//! Walls and floor are implicit. Any x outside `0..BOARD_WIDTH` and any
//! y at or below `BOARD_HEIGHT` reads as occupied. Rows above the top (y < 0)
//! are open space so a piece can enter from above.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..16 (top to bottom)

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// The game board - 10 columns x 17 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision query.
    ///
    /// True for walls (x outside the interior), the floor (y >= height) and
    /// filled interior cells. Cells above the top edge are never occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True when every occupied cell of `shape`, anchored at (x, y), is free
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .minos()
            .iter()
            .all(|&(dx, dy)| !self.is_occupied(x + dx, y + dy))
    }

    /// Stamp `shape` into the grid at anchor (x, y).
    ///
    /// Minos above the top edge are dropped. Callers validate the position
    /// with [`Board::fits`] first; nothing is checked here.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.minos() {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top).
    ///
    /// Rows are compacted in a single bottom-up pass, so a row that slides into
    /// a cleared slot is examined as well. Surviving rows keep their order and
    /// move down by the number of full rows below them; vacated top rows are empty.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows
    }

    /// Clear all full rows and return how many there were
    pub fn clear_full_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid as compact u8 codes (0 = empty, 1..=7 = piece kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[start + x].map_or(0, |k| k.to_u8());
            }
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// Each row is read left to right; `.` or space is empty, a piece letter
    /// fills the cell with that kind and any other character fills it with `I`.
    /// Rows are aligned to the bottom of the board, so fewer than
    /// [`BOARD_HEIGHT`] rows describe the lowest part of the stack.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let skip = rows.len().saturating_sub(HEIGHT);
        let offset = HEIGHT.saturating_sub(rows.len());

        for (i, line) in rows.iter().skip(skip).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string()).unwrap_or(PieceKind::I),
                    ),
                };
                board.set(x as i8, y, cell);
            }
        }

        board
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
