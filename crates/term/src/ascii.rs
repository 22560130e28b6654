//! Plain-text frame in the classic console layout.
//!
//! Every board cell is followed by a space, walls are `|`, the floor is `-`,
//! blocks are `#`, and a `Score: N` line closes the frame:
//!
//! ```text
//! |                     |
//! |         # #         |
//! ...
//! - - - - - - - - - - - -
//! Score: 100
//! ```

use std::fmt::Write;

use crate::core::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

pub const BLOCK: char = '#';
pub const EMPTY: char = ' ';
pub const WALL: char = '|';
pub const FLOOR: char = '-';

/// Render `snap` (active piece included) as newline-separated text.
pub fn render_ascii(snap: &GameSnapshot) -> String {
    let mut out = String::with_capacity(((BOARD_WIDTH as usize + 2) * 2 + 1) * 20);
    write_ascii(snap, &mut out);
    out
}

/// Append the frame to `out`.
pub fn write_ascii(snap: &GameSnapshot, out: &mut String) {
    let grid = snap.composited();

    for row in grid.iter() {
        push_cell(out, WALL);
        for &code in row.iter() {
            push_cell(out, if code == 0 { EMPTY } else { BLOCK });
        }
        push_cell(out, WALL);
        out.push('\n');
    }

    for _ in 0..BOARD_WIDTH + 2 {
        push_cell(out, FLOOR);
    }
    out.push('\n');

    let _ = writeln!(out, "Score: {}", snap.score);
    if snap.game_over {
        out.push_str("Game Over!\n");
    }
}

fn push_cell(out: &mut String, ch: char) {
    out.push(ch);
    out.push(' ');
}
