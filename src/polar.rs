// src/polar.rs
//! Polar-coordinate planar vector with canonical radius and angle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use crate::traits::{Norm, VectorOps};
use crate::vec2::Vec2;
use crate::EPSILON;

/// A planar vector stored as radius and angle (radians).
///
/// The stored pair is always canonical: `radius >= 0` and `angle` in
/// `[0, 2π)`. Every write goes through the canonicalizing setters, so the
/// invariant holds after construction and after every operation. A negative
/// radius is corrected by negating it and turning the angle by π, which
/// preserves the represented point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PolarParts")
)]
pub struct PolarVec2 {
    radius: f64,
    angle: f64,
}

// Deserialized input is canonicalized like any other write.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PolarParts {
    radius: f64,
    angle: f64,
}

#[cfg(feature = "serde")]
impl From<PolarParts> for PolarVec2 {
    fn from(p: PolarParts) -> PolarVec2 {
        PolarVec2::new(p.radius, p.angle)
    }
}

impl PolarVec2 {
    /// Create a canonicalized polar vector.
    ///
    /// The angle is applied first, then the radius, so a negative `radius`
    /// corrects the freshly assigned angle.
    pub fn new(radius: f64, angle: f64) -> Self {
        let mut p = Self::default();
        p.set_angle(angle);
        p.set_radius(radius);
        p
    }

    /// Polar form of a Cartesian vector.
    pub fn from_cartesian(v: &Vec2) -> Self {
        v.to_polar()
    }

    /// Cartesian form of this vector.
    pub fn to_cartesian(&self) -> Vec2 {
        Vec2::from_polar(self)
    }

    /// Radius; always non-negative.
    #[inline(always)]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle in radians; always in `[0, 2π)`.
    #[inline(always)]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Assign the radius, re-canonicalizing when negative.
    pub fn set_radius(&mut self, radius: f64) {
        if radius < 0.0 {
            self.set_angle(self.angle + PI);
            self.radius = -radius;
        } else {
            self.radius = radius;
        }
    }

    /// Assign the angle, reduced into `[0, 2π)`.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle.rem_euclid(TAU);
    }
}

impl VectorOps for PolarVec2 {
    fn to_array(&self) -> Vec<f64> {
        vec![self.radius, self.angle]
    }

    /// Point reflection: same radius, angle turned by π.
    fn opposite(&self) -> Self {
        Self::new(self.radius, self.angle + PI)
    }

    /// Scales the radius only. A negative `n` makes the radius setter turn
    /// the angle by π, so the result is the scaled point reflection.
    fn scalar(&self, n: f64) -> Self {
        Self::new(self.radius * n, self.angle)
    }

    /// Polar coordinates are not closed under componentwise addition, so
    /// the sum is computed in Cartesian space and converted back.
    fn add(&self, other: &Self) -> Self {
        (self.to_cartesian() + other.to_cartesian()).to_polar()
    }

    /// Closed-form planar dot product: `r1·r2·cos(θ1 − θ2)`.
    fn dot(&self, other: &Self) -> f64 {
        self.radius * other.radius * (self.angle - other.angle).cos()
    }

    /// The Euclidean norm is the radius by definition; any other order
    /// falls back to the Cartesian form.
    fn norm_l(&self, l: Norm) -> f64 {
        match l {
            Norm::L2 => self.radius,
            _ => self.to_cartesian().norm_l(l),
        }
    }

    /// Sets the radius to one, angle unchanged. Unlike the Cartesian types
    /// this holds for the zero vector too, which keeps its angle of 0.
    fn normalize(&self) -> Self {
        Self::new(1.0, self.angle)
    }

    /// Representation equality over the canonical form: radius and angle
    /// must each match within [`EPSILON`]. Angles compare directly because
    /// both operands are already reduced into `[0, 2π)`.
    fn equals(&self, other: &Self) -> bool {
        (self.radius - other.radius).abs() <= EPSILON
            && (self.angle - other.angle).abs() <= EPSILON
    }

    /// Perpendicularity depends only on direction: true iff the angle
    /// difference is π/2 within [`EPSILON`], whatever the radii.
    fn is_normal(&self, other: &Self) -> bool {
        ((self.angle - other.angle).abs() - FRAC_PI_2).abs() < EPSILON
    }
}

impl From<Vec2> for PolarVec2 {
    fn from(v: Vec2) -> PolarVec2 {
        v.to_polar()
    }
}

impl fmt::Display for PolarVec2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PolarVec2([{}, {}])", self.radius, self.angle)
    }
}
