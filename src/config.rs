//! Command-line and environment configuration for the terminal driver.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::Randomizer;
use crate::types::{GRAVITY_MS, INPUT_POLL_MS};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "tui-blockfall",
    version,
    about = "Falling-block puzzle in the terminal (a/d move, w rotate, s drop, q quit)"
)]
pub struct Config {
    /// Seed for the piece randomizer; random when omitted
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Piece randomizer: `uniform` or `bag` (7-bag)
    #[arg(
        long,
        env = "BLOCKFALL_RANDOMIZER",
        default_value = "uniform",
        value_parser = parse_randomizer
    )]
    pub randomizer: Randomizer,

    /// Milliseconds between gravity steps
    #[arg(long, env = "BLOCKFALL_GRAVITY_MS", default_value_t = GRAVITY_MS)]
    pub gravity_ms: u64,

    /// Longest wait for input before the loop checks gravity again
    #[arg(long, env = "BLOCKFALL_POLL_MS", default_value_t = INPUT_POLL_MS)]
    pub poll_ms: u64,

    /// Redraw the classic ASCII frame instead of the colour view
    #[arg(long, env = "BLOCKFALL_PLAIN")]
    pub plain: bool,

    /// Write logs to this file (stdout belongs to the game screen)
    #[arg(long, env = "BLOCKFALL_LOG", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Reject settings the driver loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.gravity_ms == 0 {
            bail!("config: --gravity-ms must be greater than 0");
        }
        if self.poll_ms == 0 {
            bail!("config: --poll-ms must be greater than 0");
        }
        Ok(())
    }
}

fn parse_randomizer(s: &str) -> Result<Randomizer, String> {
    Randomizer::from_str(s).ok_or_else(|| format!("unknown randomizer `{}` (expected uniform or bag)", s))
}
