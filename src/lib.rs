//! Terminal falling-block puzzle (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `tui_blockfall::{core, input, term, types}` and adds the driver
//! pieces the binary needs (configuration and the gravity clock).

pub mod clock;
pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
