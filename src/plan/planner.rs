//! Candidate enumeration and best-shot selection
//!
//! Every (object ball, pocket) pairing is an independent, read-only
//! computation over the tick's snapshot. Infeasible pairings are dropped;
//! the survivors are reduced to a single best shot by a `RatingPolicy`.

use serde::{Deserialize, Serialize};

use super::Shot;
use crate::consts::CUE_BALL;
use crate::table::{BallSnapshot, Pocket};

/// Which end of the rating scale counts as "best"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingPolicy {
    /// Largest aiming margin wins
    #[default]
    WidestMargin,
    /// Smallest rating wins
    TightestMargin,
}

impl RatingPolicy {
    /// Whether `candidate` strictly beats `incumbent`
    ///
    /// Strict so that ties keep the earlier candidate.
    pub fn prefers(&self, candidate: f32, incumbent: f32) -> bool {
        match self {
            RatingPolicy::WidestMargin => candidate > incumbent,
            RatingPolicy::TightestMargin => candidate < incumbent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingPolicy::WidestMargin => "widest_margin",
            RatingPolicy::TightestMargin => "tightest_margin",
        }
    }
}

/// Every feasible shot, in ball-number then pocket order
pub fn candidates(snapshot: &BallSnapshot, pockets: &[Pocket]) -> Vec<Shot> {
    let Some(cue) = snapshot.cue() else {
        log::debug!("no cue ball on the table");
        return Vec::new();
    };

    let targets: Vec<_> = pockets.iter().map(Pocket::target).collect();
    let mut shots = Vec::new();

    for object in snapshot.object_balls() {
        let others = snapshot.positions_except(&[CUE_BALL, object.number]);
        for target in &targets {
            match Shot::new(cue, object, target, &others) {
                Ok(shot) => shots.push(shot),
                Err(e) => log::debug!("ball {} -> {}: {} ({})", object.number, target, e, e.reason()),
            }
        }
    }

    shots
}

/// Best feasible shot under `policy`, or `None` when nothing is makeable
pub fn best_shot(snapshot: &BallSnapshot, pockets: &[Pocket], policy: RatingPolicy) -> Option<Shot> {
    let best = select(candidates(snapshot, pockets), policy);

    match &best {
        Some(shot) => log::info!(
            "best shot: ball {} into {} (angle {:.4}, force {:.1}, rating {:.4})",
            shot.object,
            shot.pocket.as_deref().unwrap_or("pocket"),
            shot.angle.radians(),
            shot.force,
            shot.rating
        ),
        None => log::info!("no shot available"),
    }

    best
}

/// Reduce candidates to the policy's extremum, first one winning ties
pub fn select(shots: Vec<Shot>, policy: RatingPolicy) -> Option<Shot> {
    shots.into_iter().fold(None, |best, shot| match best {
        Some(b) if !policy.prefers(shot.rating, b.rating) => Some(b),
        _ => Some(shot),
    })
}
