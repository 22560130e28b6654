//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the state machine that drives them.
//! It has **no dependencies** on terminals, input devices or clocks, making it:
//!
//! - **Deterministic**: the same piece source produces the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any driver (terminal, GUI, headless) can run it
//!
//! # Module Structure
//!
//! - [`board`]: 10x17 interior grid with implicit walls, collision, merging and line clearing
//! - [`shape`]: the seven tetromino matrices and quarter-turn rotation
//! - [`rng`]: pluggable piece sources (uniform, 7-bag, fixed sequence)
//! - [`game_state`]: active piece, score and the fall-or-lock state machine
//! - [`scoring`]: flat 100 points per cleared row
//! - [`snapshot`]: read-only projection for renderers
//!
//! # Game Rules
//!
//! - A new piece spawns horizontally centered at the top of the board
//! - Moves and rotations that would collide are silently refused
//! - Rotation has no wall kicks
//! - [`GameState::tick`] moves the piece down one row; when it cannot, the
//!   piece locks, full rows clear, and the next piece spawns
//! - A piece that collides where it spawns ends the game (block-out)
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SequenceSource, TickOutcome};
//! use blockfall_types::PieceKind;
//!
//! let mut game = GameState::new(SequenceSource::repeat(PieceKind::O));
//! assert_eq!(game.active().x, 4);
//!
//! game.move_left();
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.game_over);
//! ```
//!
//! # Timing
//!
//! The engine has no notion of time. The driver calls
//! [`GameState::tick`](game_state::GameState::tick) at its own gravity cadence
//! and forwards input commands in between.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState, TickOutcome};
pub use rng::{BagSource, PieceSource, Randomizer, SequenceSource, SimpleRng, UniformSource};
pub use scoring::line_clear_score;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot, SnapshotGrid};
