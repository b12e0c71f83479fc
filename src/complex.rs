// src/complex.rs
//! Complex numbers as planar vectors.
//!
//! A [`Complex`] is a [`Vec2`] read as (real, imaginary): the additive
//! algebra, norm and equality come straight from the plane, while multiply,
//! divide and root extraction use the complex-specific formulas.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::VectorError;
use crate::traits::{Norm, VectorOps};
use crate::vec2::Vec2;

/// A complex number: `x` is the real part, `y` the imaginary part.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex(pub Vec2);

impl Complex {
    /// Create a complex number from real and imaginary parts.
    #[inline(always)]
    pub fn new(re: f64, im: f64) -> Self {
        Self(Vec2::new(re, im))
    }

    /// Build from a flattened slice of exactly two components.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        Vec2::from_slice(components).map(Self)
    }

    /// Real part.
    #[inline(always)]
    pub fn re(&self) -> f64 {
        self.0.x
    }

    /// Imaginary part.
    #[inline(always)]
    pub fn im(&self) -> f64 {
        self.0.y
    }

    /// Complex product: `(x·zx − y·zy, x·zy + y·zx)`.
    #[inline(always)]
    pub fn multiply(&self, z: &Complex) -> Complex {
        let re = self.re() * z.re() - self.im() * z.im();
        let im = self.re() * z.im() + self.im() * z.re();
        Complex::new(re, im)
    }

    /// Complex quotient.
    ///
    /// Computes the conjugate-product numerator `(x·zx + y·zy, x·zy − y·zx)`
    /// and divides it by the magnitude `|z|`, not the squared magnitude.
    /// Dividing by zero yields non-finite parts rather than an error.
    pub fn divide(&self, z: &Complex) -> Complex {
        let re = self.re() * z.re() + self.im() * z.im();
        let im = self.re() * z.im() - self.im() * z.re();
        let n = z.norm();
        Complex::new(re / n, im / n)
    }

    /// Complex conjugate: `(x, −y)`.
    #[inline(always)]
    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re(), -self.im())
    }

    /// The `n` n-th roots of this number, evenly spaced by `2π/n` around
    /// the origin.
    ///
    /// The principal angle is taken as `acos(x / |z|)`, which lies in
    /// `[0, π]` and therefore drops the sign of the imaginary part for
    /// inputs below the real axis; the root magnitude is `|z| / n`.
    /// `roots(0)` returns an empty vector.
    pub fn roots(&self, n: u32) -> Vec<Complex> {
        let radius = self.norm();
        let angle = (self.re() / radius).acos();
        let new_radius = radius / n as f64;
        (0..n)
            .map(|i| {
                let theta = angle / n as f64 + i as f64 * TAU / n as f64;
                Complex::new(new_radius * theta.cos(), new_radius * theta.sin())
            })
            .collect()
    }
}

impl VectorOps for Complex {
    fn to_array(&self) -> Vec<f64> {
        self.0.to_array()
    }

    fn opposite(&self) -> Self {
        Self(self.0.opposite())
    }

    fn scalar(&self, n: f64) -> Self {
        Self(self.0.scalar(n))
    }

    fn add(&self, other: &Self) -> Self {
        Self(VectorOps::add(&self.0, &other.0))
    }

    fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    fn norm_l(&self, l: Norm) -> f64 {
        self.0.norm_l(l)
    }

    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl Add for Complex {
    type Output = Complex;
    #[inline(always)]
    fn add(self, rhs: Complex) -> Complex {
        Complex(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline(always)]
    fn sub(self, rhs: Complex) -> Complex {
        Complex(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline(always)]
    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(&rhs)
    }
}

impl Div for Complex {
    type Output = Complex;
    #[inline(always)]
    fn div(self, rhs: Complex) -> Complex {
        self.divide(&rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline(always)]
    fn neg(self) -> Complex {
        Complex(-self.0)
    }
}

impl From<Vec2> for Complex {
    fn from(v: Vec2) -> Complex {
        Complex(v)
    }
}

impl From<Complex> for Vec2 {
    fn from(z: Complex) -> Vec2 {
        z.0
    }
}

impl From<[f64; 2]> for Complex {
    fn from(arr: [f64; 2]) -> Complex {
        Complex::new(arr[0], arr[1])
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.im() < 0.0 {
            write!(f, "{} - {}i", self.re(), -self.im())
        } else {
            write!(f, "{} + {}i", self.re(), self.im())
        }
    }
}
