//! Two-leg shot: object ball into a pocket, cue ball into the object ball

use serde::{Deserialize, Serialize};

use super::ShotSegment;
use crate::error::ShotInfeasible;
use crate::geom::{Angle, Vector2D};
use crate::table::{Ball, ShotTarget};

/// A feasible shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// `[object ball -> pocket, cue ball -> object ball]`
    pub segments: [ShotSegment; 2],
    /// Cue direction
    pub angle: Angle,
    pub force: f32,
    /// Always 0: shots stay flat on the cloth
    pub elevation: f32,
    /// Width of the cue ball's contact corridor (aiming margin)
    pub rating: f32,
    /// Number of the ball being sunk
    pub object: u8,
    /// Name of the pocket it goes into
    pub pocket: Option<String>,
}

/// What gets sent to the cue robot: `(angle_radians, force, elevation)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32)", into = "(f32, f32, f32)")]
pub struct ShotCommand {
    pub angle: f32,
    pub force: f32,
    pub elevation: f32,
}

impl From<(f32, f32, f32)> for ShotCommand {
    fn from((angle, force, elevation): (f32, f32, f32)) -> Self {
        Self {
            angle,
            force,
            elevation,
        }
    }
}

impl From<ShotCommand> for (f32, f32, f32) {
    fn from(c: ShotCommand) -> Self {
        (c.angle, c.force, c.elevation)
    }
}

impl Shot {
    /// Chain the object-ball leg and the cue-ball leg
    ///
    /// `others` holds every ball except the cue ball and the object ball.
    /// The cue ball is an obstacle for the object ball's leg but not for
    /// its own.
    pub fn new(
        cue: &Ball,
        object: &Ball,
        pocket: &ShotTarget,
        others: &[Vector2D],
    ) -> Result<Self, ShotInfeasible> {
        let mut object_obstacles = Vec::with_capacity(others.len() + 1);
        object_obstacles.extend_from_slice(others);
        object_obstacles.push(cue.position);

        let sink = ShotSegment::new(object.position, pocket, &object_obstacles)?;
        let strike = ShotSegment::new(cue.position, &sink.target, others)?;

        let angle = strike.travel_direction();
        let force = strike.target.force.magnitude();
        let rating = strike.target.width();

        Ok(Self {
            segments: [sink, strike],
            angle,
            force,
            elevation: 0.0,
            rating,
            object: object.number,
            pocket: pocket.name.clone(),
        })
    }

    pub fn command(&self) -> ShotCommand {
        ShotCommand {
            angle: self.angle.radians(),
            force: self.force,
            elevation: self.elevation,
        }
    }
}
