//! Ball position feed
//!
//! The tracking device delivers a flat list of numbers: one `(x, y)` pair
//! per ball slot 0..15, with `(0, 0)` meaning the ball is not on the table.
//! A feed is polled once per tick and only hands over frames that changed.

use rand_pcg::Pcg32;

use crate::consts::{MAX_BALLS, TABLE_HEIGHT, TABLE_WIDTH};
use crate::error::FeedError;
use crate::geom::Vector2D;
use crate::rack::{self, ALWAYS_PRESENT};
use crate::table::{Ball, BallSnapshot};

/// Convert one raw frame into the tick's ball snapshot
pub fn decode_frame(frame: &[f32]) -> Result<BallSnapshot, FeedError> {
    if frame.len() % 2 != 0 {
        return Err(FeedError::OddLength { len: frame.len() });
    }
    let count = frame.len() / 2;
    if count > MAX_BALLS {
        return Err(FeedError::TooManyBalls {
            count,
            max: MAX_BALLS,
        });
    }

    let mut balls = Vec::with_capacity(count);
    for (number, pair) in (0u8..).zip(frame.chunks_exact(2)) {
        let position = Vector2D::new(pair[0], pair[1]);
        if !position.is_finite() {
            return Err(FeedError::NonFinite { number });
        }
        if !position.is_zero() {
            balls.push(Ball::new(number, position));
        }
    }

    Ok(BallSnapshot::new(balls))
}

/// Source of raw frames, polled once per tick
pub trait BallFeed {
    /// Next frame, or `None` when nothing changed since the last one
    fn poll(&mut self) -> Option<Vec<f32>>;
}

/// Drops frames identical to the previously delivered one
#[derive(Debug, Default)]
struct ChangeFilter {
    last: Option<Vec<f32>>,
}

impl ChangeFilter {
    fn pass(&mut self, frame: Vec<f32>) -> Option<Vec<f32>> {
        if self.last.as_ref() == Some(&frame) {
            return None;
        }
        self.last = Some(frame.clone());
        Some(frame)
    }
}

/// Fixed 16-ball frame standing in for the radio link
pub const SAMPLE_FRAME: [f32; 32] = [
    200.0, 100.0, //
    400.0, 300.0, //
    600.0, 200.0, //
    800.0, 400.0, //
    230.0, 450.0, //
    120.0, 300.0, //
    110.0, 130.0, //
    345.0, 139.0, //
    824.0, 460.0, //
    200.0, 200.0, //
    400.0, 250.0, //
    600.0, 100.0, //
    800.0, 204.0, //
    230.0, 250.0, //
    120.0, 200.0, //
    110.0, 230.0, //
];

/// Replays `SAMPLE_FRAME` as if read from a device
#[derive(Debug)]
pub struct SampleFeed {
    device: String,
    port: u16,
    filter: ChangeFilter,
}

impl SampleFeed {
    pub fn new(device: impl Into<String>, port: u16) -> Self {
        Self {
            device: device.into(),
            port,
            filter: ChangeFilter::default(),
        }
    }
}

impl BallFeed for SampleFeed {
    fn poll(&mut self) -> Option<Vec<f32>> {
        let frame = self.filter.pass(SAMPLE_FRAME.to_vec())?;
        log::info!("loaded frame from device {} on port {}", self.device, self.port);
        Some(frame)
    }
}

/// Fresh random layout on every poll
#[derive(Debug)]
pub struct RandomFeed {
    rng: Pcg32,
    absent_chance: f64,
    filter: ChangeFilter,
}

impl RandomFeed {
    pub fn new(seed: u64, absent_chance: f64) -> Self {
        Self {
            rng: rack::seeded_rng(seed),
            absent_chance,
            filter: ChangeFilter::default(),
        }
    }
}

impl BallFeed for RandomFeed {
    fn poll(&mut self) -> Option<Vec<f32>> {
        let frame = rack::random_layout(
            &mut self.rng,
            MAX_BALLS,
            TABLE_WIDTH,
            TABLE_HEIGHT,
            self.absent_chance,
            &ALWAYS_PRESENT,
        );
        self.filter.pass(frame)
    }
}
