//! Balls and per-tick ball snapshots

use serde::{Deserialize, Serialize};

use crate::consts::CUE_BALL;
use crate::geom::Vector2D;

/// A ball on the table. All balls share `consts::BALL_RADIUS`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// 0 is the cue ball, 1..=15 are object balls
    pub number: u8,
    pub position: Vector2D,
}

impl Ball {
    pub fn new(number: u8, position: Vector2D) -> Self {
        Self { number, position }
    }

    #[inline]
    pub fn is_cue(&self) -> bool {
        self.number == CUE_BALL
    }
}

/// Immutable set of present balls for one planning tick
///
/// Balls are kept in ascending number order so candidate enumeration is
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    balls: Vec<Ball>,
}

impl BallSnapshot {
    pub fn new(mut balls: Vec<Ball>) -> Self {
        balls.sort_by_key(|b| b.number);
        balls.dedup_by_key(|b| b.number);
        Self { balls }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn get(&self, number: u8) -> Option<&Ball> {
        self.balls.iter().find(|b| b.number == number)
    }

    pub fn cue(&self) -> Option<&Ball> {
        self.get(CUE_BALL)
    }

    /// Every present ball except the cue ball
    pub fn object_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| !b.is_cue())
    }

    /// Positions of every ball whose number is not in `exclude`
    pub fn positions_except(&self, exclude: &[u8]) -> Vec<Vector2D> {
        self.balls
            .iter()
            .filter(|b| !exclude.contains(&b.number))
            .map(|b| b.position)
            .collect()
    }
}
