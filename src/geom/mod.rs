//! Geometry primitives
//!
//! Every direction in the planner is an `Angle` held in `[0, 2π)`, and every
//! position, offset and force is a `Vector2D`.

pub mod angle;
pub mod vector;

pub use angle::{Angle, Hemisphere, Quadrant};
pub use vector::Vector2D;
