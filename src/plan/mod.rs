//! Shot planning
//!
//! Pure and deterministic: a ball snapshot and the fixed pockets go in, a
//! set of feasible shots (or the best one) comes out. Nothing is cached
//! between ticks.

pub mod planner;
pub mod segment;
pub mod shot;

pub use planner::{RatingPolicy, best_shot, candidates, select};
pub use segment::ShotSegment;
pub use shot::{Shot, ShotCommand};
