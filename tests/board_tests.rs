//! Board tests - collision, merging and line clearing

use tui_blockfall::core::{Board, Shape};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: i8 = BOARD_WIDTH as i8;
const H: i8 = BOARD_HEIGHT as i8;

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..W {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..H {
        for x in 0..W {
            assert!(!board.is_occupied(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_walls_and_floor_are_occupied() {
    let board = Board::new();

    for y in -3..H {
        assert!(board.is_occupied(-1, y), "left wall at y={}", y);
        assert!(board.is_occupied(W, y), "right wall at y={}", y);
    }
    for x in -1..=W {
        assert!(board.is_occupied(x, H), "floor at x={}", x);
        assert!(board.is_occupied(x, H + 5));
    }
    assert!(board.is_occupied(i8::MIN, 0));
    assert!(board.is_occupied(0, i8::MAX));
}

#[test]
fn test_rows_above_top_are_free() {
    let board = Board::new();
    for x in 0..W {
        assert!(!board.is_occupied(x, -1));
        assert!(!board.is_occupied(x, -4));
    }
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(W, 0, Some(PieceKind::T)));
    assert!(!board.set(0, H, Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_is_occupied() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(PieceKind::T));
    assert!(board.is_occupied(5, 10));
}

#[test]
fn test_fits_respects_walls_and_cells() {
    let mut board = Board::new();
    let o = Shape::of(PieceKind::O);

    assert!(board.fits(&o, 0, 0));
    assert!(board.fits(&o, W - 2, H - 2));
    assert!(!board.fits(&o, -1, 0));
    assert!(!board.fits(&o, W - 1, 0));
    assert!(!board.fits(&o, 0, H - 1));
    // Partly above the top is fine.
    assert!(board.fits(&o, 3, -1));

    board.set(4, 8, Some(PieceKind::Z));
    assert!(!board.fits(&o, 3, 7));
    assert!(!board.fits(&o, 4, 8));
    assert!(board.fits(&o, 5, 8));
}

#[test]
fn test_fits_ignores_empty_bounding_box_cells() {
    let mut board = Board::new();
    // T = .#. / ###; its top corners are empty and may overlap locked cells.
    board.set(0, 0, Some(PieceKind::I));
    board.set(2, 0, Some(PieceKind::I));
    assert!(board.fits(&Shape::of(PieceKind::T), 0, 0));
}

#[test]
fn test_merge_writes_occupied_cells_only() {
    let mut board = Board::new();
    board.merge(&Shape::of(PieceKind::S), 2, 10, PieceKind::S);

    // S = .## / ##.
    assert_eq!(board.get(2, 10), Some(None));
    assert_eq!(board.get(3, 10), Some(Some(PieceKind::S)));
    assert_eq!(board.get(4, 10), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 11), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 11), Some(Some(PieceKind::S)));
    assert_eq!(board.get(4, 11), Some(None));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_merge_drops_cells_above_top() {
    let mut board = Board::new();
    // Vertical I with its top two cells above the board.
    let vertical_i = Shape::of(PieceKind::I).rotated();
    board.merge(&vertical_i, 0, -2, PieceKind::I);

    assert_eq!(board.filled_count(), 2);
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(0, 1));
    assert!(!board.is_occupied(0, 2));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..W - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));

    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_full_lines_none() {
    let mut board = Board::from_rows(&["#########."]);
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board.filled_count(), 9);
}

#[test]
fn test_board_clear_full_rows() {
    let mut board = Board::new();

    fill_row(&mut board, 15, PieceKind::I);
    fill_row(&mut board, 16, PieceKind::O);
    board.set(0, 14, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 15]);

    // The T drops two rows to the bottom.
    assert_eq!(board.get(0, 16), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 14), Some(None));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_rechecks_row_that_slides_in() {
    // Two adjacent full rows: after the lower one is removed the upper one
    // lands in the same slot and must be cleared too.
    let mut board = Board::from_rows(&[
        "J.........",
        "##########",
        "##########",
        ".L........",
    ]);

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 16), Some(Some(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let mut board = Board::from_rows(&[
        "T.........",
        "##########",
        ".S........",
        "##########",
        "..Z.......",
    ]);

    assert_eq!(board.clear_full_lines(), 2);

    // Rows shift down by the number of full rows below them.
    assert_eq!(board.get(2, 16), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(1, 15), Some(Some(PieceKind::S)));
    assert_eq!(board.get(0, 14), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 3);
    for y in 0..14 {
        for x in 0..W {
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..H {
        fill_row(&mut board, y, PieceKind::L);
    }
    assert_eq!(board.clear_full_lines(), BOARD_HEIGHT as u32);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_top_row() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::J);
    board.set(3, 1, Some(PieceKind::O));

    assert_eq!(board.clear_full_lines(), 1);
    assert_eq!(board.get(3, 1), Some(Some(PieceKind::O)));
    assert!(!board.is_row_full(0));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 3, PieceKind::T);
    board.clear();
    assert_eq!(board, Board::new());
}
