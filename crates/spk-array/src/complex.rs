#![forbid(unsafe_code)]

//! Complex scalar used both as signal sample and as spectral coefficient.

use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Complex value with `real` and `imag` parts of precision `T`.
///
/// All operations are total: NaN and infinities flow through the
/// arithmetic exactly as IEEE 754 dictates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    pub real: T,
    pub imag: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    #[must_use]
    pub fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// `radius * exp(i * theta)`.
    #[must_use]
    pub fn from_polar(radius: T, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.real, -self.imag)
    }

    #[must_use]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.real * factor, self.imag * factor)
    }

    /// Squared magnitude `real² + imag²` (power, not modulus).
    #[must_use]
    pub fn norm(self) -> T {
        self.real * self.real + self.imag * self.imag
    }

    /// Modulus `sqrt(norm())`.
    #[must_use]
    pub fn abs(self) -> T {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imag)
    }
}

impl<T: Float> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Float> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Float> Sum for Complex<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(real: T) -> Self {
        Self::new(real, T::zero())
    }
}

impl<T: Float + Display> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.imag.is_sign_negative() {
            write!(f, "{}-{}i", self.real, self.imag.abs())
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Complex, Complex32, Complex64};

    #[test]
    fn multiplication_follows_complex_rules() {
        let lhs = Complex64::new(1.0, 2.0);
        let rhs = Complex64::new(3.0, -1.0);
        assert_eq!(lhs * rhs, Complex64::new(5.0, 5.0));
        assert_eq!(lhs + rhs, Complex64::new(4.0, 1.0));
        assert_eq!(lhs - rhs, Complex64::new(-2.0, 3.0));
    }

    #[test]
    fn norm_is_squared_magnitude() {
        let value = Complex64::new(3.0, 4.0);
        assert_eq!(value.norm(), 25.0);
        assert_eq!(value.abs(), 5.0);
        assert_eq!(Complex32::new(0.5, -0.5).norm(), 0.5);
    }

    #[test]
    fn operands_are_not_mutated() {
        let lhs = Complex64::new(1.5, -0.25);
        let rhs = Complex64::new(-2.0, 4.0);
        let _ = lhs * rhs;
        assert_eq!(lhs, Complex64::new(1.5, -0.25));
        assert_eq!(rhs, Complex64::new(-2.0, 4.0));
    }

    #[test]
    fn conjugate_product_equals_norm() {
        let value = Complex64::new(-1.25, 0.75);
        let product = value * value.conj();
        assert_eq!(product.real, value.norm());
        assert_eq!(product.imag, 0.0);
    }

    #[test]
    fn from_polar_lands_on_unit_circle() {
        let quarter = Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_2);
        assert!(quarter.real.abs() < 1e-15);
        assert!((quarter.imag - 1.0).abs() < 1e-15);
    }

    #[test]
    fn nan_propagates_through_arithmetic() {
        let poisoned = Complex64::new(f64::NAN, 0.0) * Complex64::one();
        assert!(poisoned.real.is_nan());
        assert!(!poisoned.is_finite());
        assert!(Complex64::new(f64::INFINITY, 0.0).norm().is_infinite());
    }

    #[test]
    fn sum_and_compound_assignment_agree() {
        let values = [
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, -3.0),
            Complex64::new(-0.5, 0.5),
        ];
        let summed: Complex64 = values.iter().copied().sum();
        let mut acc = Complex64::zero();
        for value in values {
            acc += value;
        }
        assert_eq!(summed, acc);
        assert_eq!(summed, Complex::new(2.5, -1.5));
    }

    #[test]
    fn display_shows_sign_of_imaginary_part() {
        assert_eq!(Complex64::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex64::new(0.5, 0.0).to_string(), "0.5+0i");
    }

    #[test]
    fn serde_uses_named_fields() {
        let json = serde_json::to_string(&Complex64::new(1.0, -0.5)).expect("serialize");
        assert_eq!(json, r#"{"real":1.0,"imag":-0.5}"#);
    }
}
