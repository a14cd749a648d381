//! Pocket geometry
//!
//! A pocket is a mouth position plus two corner offsets. The corners bound
//! the opening a ball must pass through; the mouth sits behind it.

use std::f32::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use super::ShotTarget;
use crate::consts::{CORNER_POCKET_OPENING, POCKET_FORCE, SIDE_POCKET_OPENING, TABLE_HEIGHT, TABLE_WIDTH};
use crate::geom::Vector2D;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    pub position: Vector2D,
    pub offset1: Vector2D,
    pub offset2: Vector2D,
    pub name: Option<String>,
}

impl Pocket {
    pub fn new(position: Vector2D, offset1: Vector2D, offset2: Vector2D) -> Self {
        Self {
            position,
            offset1,
            offset2,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Corridor across the pocket opening
    ///
    /// The force points from the opening's midpoint toward the mouth and
    /// carries only the nominal `POCKET_FORCE`; the upstream segment adds
    /// whatever travel the ball needs to get here.
    pub fn target(&self) -> ShotTarget {
        let mut target = ShotTarget::new(
            self.position + self.offset1,
            self.position + self.offset2,
            Vector2D::ZERO,
        );
        let into_mouth = self.position - target.midpoint();
        target.force = Vector2D::from_polar(POCKET_FORCE, into_mouth.direction());
        target.name = self.name.clone();
        target
    }

    /// The six pockets of a standard 1080x540 table
    ///
    /// Corner mouths sit on the table corners with the opening across the
    /// diagonal. Side mouths sit half an opening behind the long rails.
    pub fn standard_table() -> Vec<Pocket> {
        let c = CORNER_POCKET_OPENING / SQRT_2;
        let s = SIDE_POCKET_OPENING / 2.0;
        let (w, h) = (TABLE_WIDTH, TABLE_HEIGHT);
        let mid = w / 2.0;

        vec![
            Pocket::new(Vector2D::new(0.0, 0.0), Vector2D::new(c, 0.0), Vector2D::new(0.0, c))
                .named("bottom left"),
            Pocket::new(Vector2D::new(mid, -s), Vector2D::new(-s, s), Vector2D::new(s, s))
                .named("bottom side"),
            Pocket::new(Vector2D::new(w, 0.0), Vector2D::new(-c, 0.0), Vector2D::new(0.0, c))
                .named("bottom right"),
            Pocket::new(Vector2D::new(0.0, h), Vector2D::new(c, 0.0), Vector2D::new(0.0, -c))
                .named("top left"),
            Pocket::new(Vector2D::new(mid, h + s), Vector2D::new(-s, -s), Vector2D::new(s, -s))
                .named("top side"),
            Pocket::new(Vector2D::new(w, h), Vector2D::new(-c, 0.0), Vector2D::new(0.0, -c))
                .named("top right"),
        ]
    }
}
