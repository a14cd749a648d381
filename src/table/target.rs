//! Aiming corridor with the force that must be delivered through it

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Vector2D;

/// Two boundary points bounding an aiming corridor, plus the force vector
/// that has to arrive there for the downstream effect to happen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotTarget {
    pub point1: Vector2D,
    pub point2: Vector2D,
    /// Required arrival force (direction + magnitude)
    pub force: Vector2D,
    pub name: Option<String>,
}

impl ShotTarget {
    pub fn new(point1: Vector2D, point2: Vector2D, force: Vector2D) -> Self {
        Self {
            point1,
            point2,
            force,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Distance between the two boundary points
    pub fn width(&self) -> f32 {
        self.point1.distance(self.point2)
    }

    pub fn midpoint(&self) -> Vector2D {
        (self.point1 + self.point2) / 2.0
    }
}

impl fmt::Display for ShotTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "ShotTarget({}, {}, {})",
                self.point1, self.point2, self.force
            ),
        }
    }
}
