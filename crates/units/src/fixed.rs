use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign};

/// A signed fixed-point number with `FRAC` fractional bits stored in an `i64`.
///
/// Every value that influences the identity, classification or placement of a
/// body is computed with this type so that generation is bit-identical on
/// every platform. All rounding is specified:
///
/// * multiplication computes `(a * b) >> FRAC` in 128 bits (arithmetic shift, so
///   results round toward negative infinity)
/// * division computes `(a << FRAC) / b` in 128 bits (truncation toward zero)
/// * results outside the `i64` range saturate instead of wrapping
/// * division by zero saturates toward the sign of the dividend, `0 / 0 = 0`
///
/// # Examples
///
/// ```rust
/// use units::Fixed;
///
/// let half = Fixed::from_ratio(1, 2);
/// let three = Fixed::from_int(3);
/// assert_eq!(half * three, Fixed::from_ratio(3, 2));
/// assert_eq!(Fixed::from_int(9).sqrt(), three);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedF<const FRAC: u32>(i64);

/// The general-purpose fixed-point type: 32 integer bits, 32 fractional bits.
pub type Fixed = FixedF<32>;

/// A wider-precision type for quantities that get very small (Hill radii, mass
/// ratios): 16 integer bits, 48 fractional bits.
pub type Fixed48 = FixedF<48>;

fn saturate(v: i128) -> i64 {
    if v > i64::MAX as i128 {
        i64::MAX
    } else if v < i64::MIN as i128 {
        i64::MIN
    } else {
        v as i64
    }
}

/// Integer square root: the largest `r` with `r * r <= n`.
///
/// Computed by bit refinement, one result bit per iteration.
pub fn isqrt(n: u128) -> u128 {
    let mut op = n;
    let mut res: u128 = 0;
    // highest power of four <= n
    let mut one: u128 = if n == 0 {
        0
    } else {
        1u128 << ((127 - n.leading_zeros()) & !1)
    };

    while one != 0 {
        if op >= res + one {
            op -= res + one;
            res = (res >> 1) + one;
        } else {
            res >>= 1;
        }
        one >>= 2;
    }
    res
}

/// Integer cube root: the largest `y` with `y * y * y <= n`.
///
/// Computed by bit refinement over 3-bit groups, most significant first.
pub fn icbrt(n: u128) -> u128 {
    let mut x = n;
    let mut y: u128 = 0;
    let mut s: i32 = 126;
    while s >= 0 {
        y <<= 1;
        let b = 3 * y * (y + 1) + 1;
        if (x >> s) >= b {
            x -= b << s;
            y += 1;
        }
        s -= 3;
    }
    y
}

impl<const FRAC: u32> FixedF<FRAC> {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << FRAC);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    const MASK: i64 = (1 << FRAC) - 1;

    /// Wraps a raw scaled integer.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw scaled integer (`value * 2^FRAC`).
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Exact conversion from an integer, saturating outside the range.
    pub fn from_int(value: i64) -> Self {
        Self(saturate((value as i128) << FRAC))
    }

    /// `numerator / denominator`, truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Fixed;
    ///
    /// assert_eq!(Fixed::from_ratio(6, 3), Fixed::from_int(2));
    /// assert!(Fixed::from_ratio(1, 3) < Fixed::from_ratio(1, 2));
    /// ```
    pub fn from_ratio(numerator: i64, denominator: i64) -> Self {
        Self::from_int(numerator) / Self::from_int(denominator)
    }

    /// Converts a float. Only for values that are purely cosmetic or that
    /// come from the orbit interface; never for identity-bearing inputs.
    pub fn from_f64(value: f64) -> Self {
        let scaled = value * (1u64 << FRAC) as f64;
        if scaled.is_nan() {
            Self::ZERO
        } else if scaled >= i64::MAX as f64 {
            Self::MAX
        } else if scaled <= i64::MIN as f64 {
            Self::MIN
        } else {
            Self(scaled as i64)
        }
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_int(self) -> i64 {
        self.0 >> FRAC
    }

    /// Integer part as `i32`, saturating.
    pub fn to_i32(self) -> i32 {
        self.to_int().clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Fractional part, always in `[0, 1)`.
    pub const fn fract(self) -> Self {
        Self(self.0 & Self::MASK)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC) as f64
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Changes precision. Widening shifts left (saturating), narrowing shifts
    /// right (rounding toward negative infinity).
    pub fn convert<const G: u32>(self) -> FixedF<G> {
        if G >= FRAC {
            FixedF::<G>(saturate((self.0 as i128) << (G - FRAC)))
        } else {
            FixedF::<G>(self.0 >> (FRAC - G))
        }
    }

    /// `self / rhs` evaluated directly at precision `G`, keeping fractional
    /// bits a same-precision quotient would lose.
    pub fn div_to<const G: u32>(self, rhs: Self) -> FixedF<G> {
        if rhs.0 == 0 {
            return FixedF::<G>::from_raw(self.0) / FixedF::<G>::ZERO;
        }
        FixedF::<G>(saturate(((self.0 as i128) << G) / rhs.0 as i128))
    }

    /// Square root. Negative inputs yield zero.
    pub fn sqrt(self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        Self(isqrt((self.0 as u128) << FRAC) as i64)
    }

    /// Cube root, defined for negative values by symmetry.
    ///
    /// The radicand is pre-shifted by as many bits as fit in 127 while keeping
    /// the shift congruent to `2 * FRAC` modulo 3, so the result is exact
    /// (floored) whenever the full `2 * FRAC` shift fits.
    pub fn cbrt(self) -> Self {
        if self.0 == 0 {
            return Self::ZERO;
        }
        if self.0 < 0 {
            return -Self(self.0.saturating_abs()).cbrt();
        }
        let v = self.0 as u128;
        let bits = 128 - v.leading_zeros();
        let target = 2 * FRAC;
        let available = 127 - bits;
        if target <= available {
            return Self(icbrt(v << target) as i64);
        }
        let mut shift = available;
        while (target - shift) % 3 != 0 {
            shift -= 1;
        }
        let root = icbrt(v << shift) << ((target - shift) / 3);
        Self(saturate(root as i128))
    }

    /// Base-2 logarithm. Non-positive inputs yield [`FixedF::MIN`].
    ///
    /// The integer part comes from the most significant bit, the fraction is
    /// refined one bit at a time by repeated squaring.
    pub fn log2(self) -> Self {
        if self.0 <= 0 {
            return Self::MIN;
        }
        let v = self.0 as u128;
        let msb = 127 - v.leading_zeros() as i64;
        let int_part = msb - FRAC as i64;
        let one: u128 = 1 << FRAC;
        let two: u128 = one << 1;

        let mut y = if msb >= FRAC as i64 {
            v >> (msb - FRAC as i64)
        } else {
            v << (FRAC as i64 - msb)
        };
        let mut result: i128 = (int_part as i128) << FRAC;
        for i in 1..=FRAC {
            y = (y * y) >> FRAC;
            if y >= two {
                y >>= 1;
                result += 1i128 << (FRAC - i);
            }
        }
        Self(saturate(result))
    }

    /// Two raised to this power.
    ///
    /// The fractional part is a product of `2^(2^-i)` factors, each obtained
    /// from the previous one by a fixed-point square root.
    pub fn exp2(self) -> Self {
        let int_part = self.to_int();
        let frac = self.fract().0 as u128;

        let mut result: u128 = 1 << FRAC;
        let mut root: u128 = 2 << FRAC;
        for i in 1..=FRAC {
            root = isqrt(root << FRAC);
            if frac & (1u128 << (FRAC - i)) != 0 {
                result = (result * root) >> FRAC;
            }
        }

        if int_part >= 0 {
            if int_part >= 63 {
                return Self::MAX;
            }
            Self(saturate((result as i128) << int_part))
        } else if int_part <= -(128 - FRAC as i64) {
            Self::ZERO
        } else {
            Self((result >> (-int_part)) as i64)
        }
    }

    /// `self ^ exponent` for positive `self`; zero otherwise.
    pub fn powf(self, exponent: Self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        (exponent * self.log2()).exp2()
    }
}

impl<const FRAC: u32> From<i32> for FixedF<FRAC> {
    fn from(value: i32) -> Self {
        Self::from_int(value as i64)
    }
}

impl<const FRAC: u32> Add for FixedF<FRAC> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl<const FRAC: u32> Sub for FixedF<FRAC> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl<const FRAC: u32> Mul for FixedF<FRAC> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(saturate((self.0 as i128 * rhs.0 as i128) >> FRAC))
    }
}

impl<const FRAC: u32> Div for FixedF<FRAC> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            return match self.0.signum() {
                0 => Self::ZERO,
                1 => Self::MAX,
                _ => Self::MIN,
            };
        }
        Self(saturate(((self.0 as i128) << FRAC) / rhs.0 as i128))
    }
}

impl<const FRAC: u32> Mul<i64> for FixedF<FRAC> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(saturate(self.0 as i128 * rhs as i128))
    }
}

impl<const FRAC: u32> Div<i64> for FixedF<FRAC> {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        if rhs == 0 {
            return self / Self::ZERO;
        }
        Self(self.0 / rhs)
    }
}

/// Allow `i64 * Fixed` (commutative multiplication)
impl<const FRAC: u32> Mul<FixedF<FRAC>> for i64 {
    type Output = FixedF<FRAC>;

    fn mul(self, rhs: FixedF<FRAC>) -> FixedF<FRAC> {
        rhs * self
    }
}

impl<const FRAC: u32> Neg for FixedF<FRAC> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl<const FRAC: u32> Shr<u32> for FixedF<FRAC> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        Self(self.0 >> rhs.min(63))
    }
}

impl<const FRAC: u32> Shl<u32> for FixedF<FRAC> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        Self(saturate((self.0 as i128) << rhs.min(64)))
    }
}

impl<const FRAC: u32> AddAssign for FixedF<FRAC> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> SubAssign for FixedF<FRAC> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> MulAssign for FixedF<FRAC> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const FRAC: u32> DivAssign for FixedF<FRAC> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const FRAC: u32> fmt::Debug for FixedF<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} ({:#x})", self.to_f64(), self.0)
    }
}

impl<const FRAC: u32> fmt::Display for FixedF<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.to_f64()),
            None => write!(f, "{:.6}", self.to_f64()),
        }
    }
}
