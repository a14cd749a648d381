//! 2D vector value type
//!
//! Thin wrapper over `glam::Vec2` that exposes direction as an `Angle` and
//! supports polar reads and writes.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Angle;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build from magnitude and direction (radians, any range)
    #[inline]
    pub fn from_polar(magnitude: f32, direction: impl Into<Angle>) -> Self {
        let direction = direction.into();
        Self::new(direction.cos() * magnitude, direction.sin() * magnitude)
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean norm
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.as_vec2().length()
    }

    /// Rescale along the current direction
    pub fn set_magnitude(&mut self, magnitude: f32) {
        *self = Self::from_polar(magnitude, self.direction());
    }

    /// `atan2(y, x)` normalized to `[0, 2π)`
    #[inline]
    pub fn direction(self) -> Angle {
        Angle::new(self.y.atan2(self.x))
    }

    /// Rotate to a new direction, keeping the magnitude
    pub fn set_direction(&mut self, direction: impl Into<Angle>) {
        *self = Self::from_polar(self.magnitude(), direction);
    }

    /// Unit vector along the current direction
    pub fn normalized(self) -> Self {
        Self::from_polar(1.0, self.direction())
    }

    #[inline]
    pub fn dot(self, other: Vector2D) -> f32 {
        self.as_vec2().dot(other.as_vec2())
    }

    /// z-component of the 3D cross product; positive when `other` lies
    /// counter-clockwise of `self`
    #[inline]
    pub fn cross(self, other: Vector2D) -> f32 {
        self.as_vec2().perp_dot(other.as_vec2())
    }

    #[inline]
    pub fn distance(self, other: Vector2D) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Both components exactly zero (the feed's "absent" marker)
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.as_vec2().is_finite()
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        v.as_vec2()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D {
        (self.as_vec2() + rhs.as_vec2()).into()
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D {
        (self.as_vec2() - rhs.as_vec2()).into()
    }
}

impl Mul<f32> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f32) -> Vector2D {
        (self.as_vec2() * rhs).into()
    }
}

impl Mul<Vector2D> for f32 {
    type Output = Vector2D;
    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs * self
    }
}

impl Div<f32> for Vector2D {
    type Output = Vector2D;
    fn div(self, rhs: f32) -> Vector2D {
        (self.as_vec2() / rhs).into()
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
