//! Shape module - tetromino matrices and rotation
//!
//! A shape is a small boolean matrix with explicit row/column extents. The
//! seven canonical shapes live in a static catalog indexed by [`PieceKind`];
//! the active piece holds its own copy, and rotation returns a fresh matrix
//! instead of mutating in place.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest bounding box a shape may occupy (4x4 covers every tetromino rotation)
pub const MAX_EXTENT: usize = 4;

/// Offset of a single mino relative to the shape's top-left corner
pub type MinoOffset = (i8, i8);

/// Occupied offsets of a shape, in row-major order
pub type Minos = ArrayVec<MinoOffset, { MAX_EXTENT * MAX_EXTENT }>;

/// Catalog rows, one string per matrix row ('#' = occupied).
const CATALOG: [&[&str]; 7] = [
    // I
    &["####"],
    // O
    &["##", "##"],
    // T
    &[".#.", "###"],
    // S
    &[".##", "##."],
    // Z
    &["##.", ".##"],
    // J
    &["#..", "###"],
    // L
    &["..#", "###"],
];

/// Rectangular boolean matrix describing which cells of a bounding box are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Row-major storage; cells outside `rows x cols` are always false.
    cells: [[bool; MAX_EXTENT]; MAX_EXTENT],
}

impl Shape {
    /// Copy the catalog entry for `kind`
    pub fn of(kind: PieceKind) -> Self {
        Self::from_rows(CATALOG[kind.index()])
    }

    /// Build a shape from text rows where `#` marks an occupied cell.
    ///
    /// Rows longer than [`MAX_EXTENT`] and extra rows are cut off; short rows
    /// are padded with empty cells up to the widest row.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut cells = [[false; MAX_EXTENT]; MAX_EXTENT];
        let height = rows.len().min(MAX_EXTENT);
        let mut width = 0usize;

        for (r, line) in rows.iter().take(height).enumerate() {
            let len = line.chars().count().min(MAX_EXTENT);
            width = width.max(len);
            for (c, ch) in line.chars().take(len).enumerate() {
                cells[r][c] = ch == '#';
            }
        }

        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (`col`, `row`) of the bounding box is occupied.
    /// Out-of-range lookups are simply empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as (dx, dy) offsets from the top-left corner
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                if self.cells[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Quarter turn clockwise: `new[c][rows - 1 - r] = old[r][c]`.
    ///
    /// The result has `cols x rows` extents.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_EXTENT]; MAX_EXTENT];

        for r in 0..rows {
            for c in 0..cols {
                cells[c][rows - 1 - r] = self.cells[r][c];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_extents() {
        let expected = [
            (PieceKind::I, 1, 4),
            (PieceKind::O, 2, 2),
            (PieceKind::T, 2, 3),
            (PieceKind::S, 2, 3),
            (PieceKind::Z, 2, 3),
            (PieceKind::J, 2, 3),
            (PieceKind::L, 2, 3),
        ];
        for (kind, rows, cols) in expected {
            let shape = Shape::of(kind);
            assert_eq!((shape.rows(), shape.cols()), (rows, cols), "{:?}", kind);
        }
    }

    #[test]
    fn test_every_catalog_shape_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).minos().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotated_t_points_left_side_up() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = Shape::of(PieceKind::T).rotated();
        assert_eq!(rotated, Shape::from_rows(&["#.", "##", "#."]));
    }

    #[test]
    fn test_unused_storage_stays_clear_after_rotation() {
        let shape = Shape::of(PieceKind::I).rotated().rotated();
        assert_eq!(shape, Shape::of(PieceKind::I));
        assert!(!shape.is_filled(0, 1));
    }
}
