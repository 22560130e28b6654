//! Scoring module - flat per-line points
//!
//! Every cleared row is worth [`LINE_CLEAR_POINTS`]. Clearing several rows in
//! one lock scales linearly: four rows give 400, with no multi-line bonus.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows in a single lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_POINTS)
}
