//! Pool Planner - shot-planning geometry for an automated pool assistant
//!
//! Core modules:
//! - `geom`: Self-normalizing angles and 2D vectors
//! - `table`: Balls, pockets and aiming corridors
//! - `plan`: Obstruction-aware shot segments, two-leg shots, best-shot selection
//! - `feed`: Ball position frames from the tracking device
//! - `rack`: Seeded random ball layouts

pub mod error;
pub mod feed;
pub mod geom;
pub mod plan;
pub mod rack;
pub mod settings;
pub mod table;

pub use error::{FeedError, SettingsError, ShotInfeasible};
pub use geom::{Angle, Hemisphere, Quadrant, Vector2D};
pub use plan::{RatingPolicy, Shot, ShotCommand, ShotSegment, best_shot, candidates};
pub use settings::Settings;
pub use table::{Ball, BallSnapshot, Pocket, ShotTarget};

/// Table and ball configuration constants
///
/// Table units are 0.1 inch, origin at the bottom-left corner.
pub mod consts {
    /// Ball radius (2.25 inch diameter)
    pub const BALL_RADIUS: f32 = 11.25;
    /// Center-to-center distance at contact
    pub const BALL_DIAMETER: f32 = BALL_RADIUS * 2.0;
    /// Cue ball number
    pub const CUE_BALL: u8 = 0;
    /// Number of ball slots in a frame (cue + 15 numbered)
    pub const MAX_BALLS: usize = 16;

    /// Table dimensions (108 x 54 inches)
    pub const TABLE_WIDTH: f32 = 1080.0;
    pub const TABLE_HEIGHT: f32 = 540.0;

    /// Corner pocket opening, measured across the diagonal
    pub const CORNER_POCKET_OPENING: f32 = 45.0;
    /// Side pocket opening, measured along the rail
    pub const SIDE_POCKET_OPENING: f32 = 50.0;

    /// Force a ball must still carry when it crosses a pocket mouth
    pub const POCKET_FORCE: f32 = 1.0;

    /// Numeric floor for force magnitudes and transfer cosines
    pub const EPSILON: f32 = 1e-4;
    /// Overlap shallower than this (table units) counts as touching
    pub const CLEARANCE: f32 = 1e-2;
}
