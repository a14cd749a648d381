//! Self-normalizing angle type
//!
//! An `Angle` always holds a value in `[0, 2π)`. Construction and every
//! arithmetic operator re-normalize, so no caller ever observes an
//! out-of-range direction.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// One of the four quarter-turns of the circle
///
/// Quadrants are numbered by `ceil(θ / (π/2)) mod 4`, so each covers a
/// half-open range closed at its upper edge: `First` is `(0, π/2]`,
/// `Fourth` is `(3π/2, 2π)` plus the zero direction itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Map the `ceil(θ / (π/2)) mod 4` index to a quadrant
    fn from_index(index: u32) -> Self {
        match index % 4 {
            1 => Quadrant::First,
            2 => Quadrant::Second,
            3 => Quadrant::Third,
            _ => Quadrant::Fourth,
        }
    }
}

/// Half of the circle, spanning two adjacent quadrants
///
/// Hemispheres overlap: every quadrant belongs to exactly two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    East,
    North,
    West,
    South,
}

impl Hemisphere {
    pub const ALL: [Hemisphere; 4] = [
        Hemisphere::East,
        Hemisphere::North,
        Hemisphere::West,
        Hemisphere::South,
    ];

    /// The two quadrants making up this hemisphere
    pub fn quadrants(&self) -> [Quadrant; 2] {
        match self {
            Hemisphere::East => [Quadrant::First, Quadrant::Fourth],
            Hemisphere::North => [Quadrant::First, Quadrant::Second],
            Hemisphere::West => [Quadrant::Second, Quadrant::Third],
            Hemisphere::South => [Quadrant::Third, Quadrant::Fourth],
        }
    }

    pub fn contains(&self, quadrant: Quadrant) -> bool {
        self.quadrants().contains(&quadrant)
    }
}

/// A direction in radians, normalized to `[0, 2π)`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const RIGHT: Angle = Angle(FRAC_PI_2);
    pub const STRAIGHT: Angle = Angle(PI);

    /// Normalize any real input into `[0, 2π)`
    #[inline]
    pub fn new(radians: f32) -> Self {
        let mut r = radians % TAU;
        if r < 0.0 {
            r += TAU;
        }
        // -ε + 2π can round up to exactly 2π
        if r >= TAU {
            r = 0.0;
        }
        Angle(r)
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.0
    }

    pub fn quadrant(self) -> Quadrant {
        Quadrant::from_index((self.0 / FRAC_PI_2).ceil() as u32)
    }

    /// Every hemisphere containing this angle's quadrant
    pub fn hemispheres(self) -> impl Iterator<Item = Hemisphere> {
        let q = self.quadrant();
        Hemisphere::ALL.into_iter().filter(move |h| h.contains(q))
    }

    pub fn in_hemisphere(self, hemisphere: Hemisphere) -> bool {
        hemisphere.contains(self.quadrant())
    }

    /// Unsigned distance from the zero direction, in `[0, π]`
    #[inline]
    pub fn abs(self) -> f32 {
        self.0.min(TAU - self.0)
    }

    /// Smallest unsigned angle between two directions, in `[0, π]`
    #[inline]
    pub fn separation(self, other: Angle) -> f32 {
        (self - other).abs()
    }

    /// Signed turn from `self` to `other`, in `(-π, π]` (counter-clockwise positive)
    #[inline]
    pub fn signed_to(self, other: Angle) -> f32 {
        let d = (other - self).0;
        if d > PI { d - TAU } else { d }
    }

    #[inline]
    pub fn pow(self, exponent: f32) -> Angle {
        Angle::new(self.0.powf(exponent))
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.0.cos()
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
}

impl From<f32> for Angle {
    fn from(radians: f32) -> Self {
        Angle::new(radians)
    }
}

impl From<Angle> for f32 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::new(self.0 + rhs.0)
    }
}

impl Add<f32> for Angle {
    type Output = Angle;
    fn add(self, rhs: f32) -> Angle {
        Angle::new(self.0 + rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::new(self.0 - rhs.0)
    }
}

impl Sub<f32> for Angle {
    type Output = Angle;
    fn sub(self, rhs: f32) -> Angle {
        Angle::new(self.0 - rhs)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f32) -> Angle {
        Angle::new(self.0 * rhs)
    }
}

impl Div<f32> for Angle {
    type Output = Angle;
    fn div(self, rhs: f32) -> Angle {
        Angle::new(self.0 / rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::new(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pi", self.0 / PI)
    }
}
