//! Table state: balls, pockets and aiming corridors
//!
//! Balls are snapshotted once per tick. Pockets are fixed at startup.

pub mod ball;
pub mod pocket;
pub mod target;

pub use ball::{Ball, BallSnapshot};
pub use pocket::Pocket;
pub use target::ShotTarget;
