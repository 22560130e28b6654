//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! snapshots into a simple framebuffer that is flushed to a terminal backend,
//! or into plain text for the classic console look.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Never read from or write to the engine, only snapshots
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod ascii;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use ascii::{render_ascii, write_ascii};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, encode_text_into, TerminalRenderer};
