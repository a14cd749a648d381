//! Random ball layouts
//!
//! Produces frames in the same flat `(x, y)` format the tracking device
//! sends, so the planner can be exercised without hardware. Layouts are
//! reproducible from a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{BALL_DIAMETER, BALL_RADIUS};
use crate::geom::Vector2D;

/// Balls that are never left out of a layout (cue and 8-ball)
pub const ALWAYS_PRESENT: [u8; 2] = [0, 8];

/// Give up placing a ball after this many overlapping draws
const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Seeded layout generator
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Generate a flat frame of `count` balls on a `width` x `height` table
///
/// Present balls sit at integer coordinates fully on the cloth and never
/// overlap. Each ball not listed in `keep` is absent (encoded as `(0, 0)`)
/// with probability `absent_chance`.
pub fn random_layout<R: Rng>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
    absent_chance: f64,
    keep: &[u8],
) -> Vec<f32> {
    let absent_chance = absent_chance.clamp(0.0, 1.0);
    let lo = BALL_RADIUS.ceil() as i32;
    let hi_x = (width - BALL_RADIUS) as i32;
    let hi_y = (height - BALL_RADIUS) as i32;

    let mut placed: Vec<Vector2D> = Vec::with_capacity(count);
    let mut frame = Vec::with_capacity(count * 2);

    for number in 0..count {
        let keep_ball = u8::try_from(number).is_ok_and(|n| keep.contains(&n));
        if !keep_ball && rng.random_bool(absent_chance) {
            frame.extend([0.0, 0.0]);
            continue;
        }

        let mut position = None;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vector2D::new(
                rng.random_range(lo..=hi_x) as f32,
                rng.random_range(lo..=hi_y) as f32,
            );
            if placed.iter().all(|p| p.distance(candidate) >= BALL_DIAMETER) {
                position = Some(candidate);
                break;
            }
        }

        match position {
            Some(p) => {
                placed.push(p);
                frame.extend([p.x, p.y]);
            }
            None => {
                log::warn!("no room for ball {}, leaving it out", number);
                frame.extend([0.0, 0.0]);
            }
        }
    }

    frame
}
