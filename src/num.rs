//! Numeric primitives shared by every backend: the [`Float`] sample trait,
//! a minimal [`Complex`] type and the [`Precisions`] capability bitset.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Floating-point precision a backend can compute in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    /// The other precision, used when one has to be emulated through the other.
    pub fn other(self) -> Self {
        match self {
            Precision::Single => Precision::Double,
            Precision::Double => Precision::Single,
        }
    }
}

/// Set of [`Precision`]s.
///
/// Bit values match the historical `SinglePrecision = 0x1`,
/// `DoublePrecision = 0x2` constants so the raw value can cross an FFI
/// boundary unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Precisions(u8);

impl Precisions {
    pub const NONE: Self = Self(0);
    pub const SINGLE: Self = Self(0x1);
    pub const DOUBLE: Self = Self(0x2);
    pub const BOTH: Self = Self(0x3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, precision: Precision) -> bool {
        self.0 & Self::from(precision).0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Precision> for Precisions {
    fn from(p: Precision) -> Self {
        match p {
            Precision::Single => Self::SINGLE,
            Precision::Double => Self::DOUBLE,
        }
    }
}

impl BitOr for Precisions {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Precisions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Precisions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Precision::Single), self.contains(Precision::Double)) {
            (true, true) => f.write_str("Precisions(single | double)"),
            (true, false) => f.write_str("Precisions(single)"),
            (false, true) => f.write_str("Precisions(double)"),
            (false, false) => f.write_str("Precisions(none)"),
        }
    }
}

/// Sample type accepted by the transform API.
///
/// Implemented for `f32` and `f64` only. Transcendental functions go through
/// `libm` so results do not depend on the platform's C math library.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + 'static
{
    /// Precision this type computes in.
    const PRECISION: Precision;

    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn hypot(self, other: Self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn ln(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
}

impl Float for f32 {
    const PRECISION: Precision = Precision::Single;

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn one() -> Self {
        1.0
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn ln(self) -> Self {
        libm::logf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
}

impl Float for f64 {
    const PRECISION: Precision = Precision::Double;

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn one() -> Self {
        1.0
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn ln(self) -> Self {
        libm::log(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    /// `exp(i * theta)`, evaluated in double precision and rounded once.
    pub fn expi(theta: f64) -> Self {
        let (sin, cos) = libm::sincos(theta);
        Self {
            re: T::from_f64(cos),
            im: T::from_f64(sin),
        }
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
