//! Error types
//!
//! `ShotInfeasible` is the only planning error. It never escapes the
//! planner: an infeasible (object ball, pocket) pairing is just skipped.

use thiserror::Error;

/// A shot segment (and so the whole shot) cannot be made
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShotInfeasible {
    #[error("corridor fully blocked by ball at ({x:.1}, {y:.1})")]
    Blocked { x: f32, y: f32 },

    #[error("force obliquity {obliquity:.3} rad is not below a right angle")]
    Obliquity { obliquity: f32 },

    #[error("degenerate corridor: {0}")]
    Degenerate(&'static str),
}

/// Malformed ball position frame
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("frame has odd length {len}, expected (x, y) pairs")]
    OddLength { len: usize },

    #[error("frame holds {count} balls, at most {max} allowed")]
    TooManyBalls { count: usize, max: usize },

    #[error("ball {number} has non-finite position")]
    NonFinite { number: u8 },
}

/// Settings file could not be loaded
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ShotInfeasible {
    /// Short reason tag for log lines
    pub fn reason(&self) -> &'static str {
        match self {
            ShotInfeasible::Blocked { .. } => "blocked",
            ShotInfeasible::Obliquity { .. } => "obliquity",
            ShotInfeasible::Degenerate(_) => "degenerate",
        }
    }
}
