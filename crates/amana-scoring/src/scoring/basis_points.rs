//! Fixed-point basis-point arithmetic shared by every scorer.
//!
//! Scores live in `[0, 10000]` basis points. Intermediate values are carried as
//! [`Fixed`], a basis-point quantity with six extra decimal digits, so weighted
//! sums never touch floating point and rounding only happens where a scorer
//! asks for it.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Upper bound of every score and the required sum of every weight set.
pub const MAX_BPS: u16 = 10_000;

const BPS: i128 = MAX_BPS as i128;
const SCALE: i128 = 1_000_000;
const ONE_BPS_UNIT: u128 = (BPS * SCALE) as u128;
// Ratios above one trillion times unity saturate here.
const RATIO_CEILING: i128 = BPS * SCALE * 1_000_000_000_000;

/// Basis-point quantity with sub-basis-point precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i128);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const MAX: Fixed = Fixed(BPS * SCALE);

    pub const fn from_bps(bps: i64) -> Self {
        Fixed(bps as i128 * SCALE)
    }

    /// `numerator / denominator` expressed in basis points (1/1 == 10000).
    ///
    /// Returns zero for a zero denominator. Inputs too large for the scaled
    /// product are shifted down together, which keeps the quotient intact to
    /// well below one basis point.
    pub fn ratio(numerator: u128, denominator: u128) -> Self {
        if denominator == 0 || numerator == 0 {
            return Fixed::ZERO;
        }

        let (mut num, mut den) = (numerator, denominator);
        while num > u128::MAX / ONE_BPS_UNIT {
            num >>= 1;
            den >>= 1;
        }
        if den == 0 {
            return Fixed(RATIO_CEILING);
        }

        let raw = num * ONE_BPS_UNIT / den;
        Fixed(i128::try_from(raw).map_or(RATIO_CEILING, |raw| raw.min(RATIO_CEILING)))
    }

    /// Apply a basis-point weight: `self * weight / 10000`.
    pub fn weighted(self, weight: u32) -> Self {
        Fixed(self.0.saturating_mul(weight as i128) / BPS)
    }

    pub fn times(self, factor: u64) -> Self {
        Fixed(self.0.saturating_mul(factor as i128))
    }

    /// Divide by a count; zero for a zero count.
    pub fn div_count(self, count: u64) -> Self {
        if count == 0 {
            Fixed::ZERO
        } else {
            Fixed(self.0 / count as i128)
        }
    }

    /// Arithmetic mean, or `None` for an empty sequence.
    pub fn mean<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Fixed>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((Fixed::ZERO, 0u64), |(sum, count), value| (sum + value, count + 1));
        (count > 0).then(|| sum.div_count(count))
    }

    pub fn abs(self) -> Self {
        Fixed(self.0.abs())
    }

    /// Clamp into `[0, 10000]` basis points.
    pub fn clamp_bps(self) -> Self {
        self.clamp(Fixed::ZERO, Fixed::MAX)
    }

    /// Round half away from zero to whole basis points.
    pub fn round(self) -> i128 {
        let half = SCALE / 2;
        if self.0 >= 0 {
            (self.0 + half) / SCALE
        } else {
            (self.0 - half) / SCALE
        }
    }

    pub fn floor(self) -> i128 {
        self.0.div_euclid(SCALE)
    }

    /// Rounded and clamped into `[0, 10000]`.
    pub fn to_bps(self) -> u16 {
        self.round().clamp(0, BPS) as u16
    }

    /// Rounded without an upper clamp; negative values become zero.
    pub fn round_u32(self) -> u32 {
        self.round().clamp(0, u32::MAX as i128) as u32
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = SCALE as u128;
        write!(f, "{sign}{}.{:06}", magnitude / scale, magnitude % scale)
    }
}

/// Integer division rounding half up; `den` must be non-zero.
pub fn round_div(num: u64, den: u64) -> u64 {
    debug_assert!(den > 0);
    num / den + u64::from(num % den >= den - den / 2)
}

/// Identifies which weight set failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSet {
    Hai,
    Trust,
}

impl fmt::Display for WeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightSet::Hai => f.write_str("HAI"),
            WeightSet::Trust => f.write_str("trust score"),
        }
    }
}

/// The single configuration failure any scorer can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeightsError {
    #[error("{set} weights must sum to 10000 basis points, found {total}")]
    InvalidSum { set: WeightSet, total: u32 },
}

/// Accept a weight set only when it sums to exactly [`MAX_BPS`].
pub fn validate_weight_sum(set: WeightSet, weights: [u16; 4]) -> Result<(), WeightsError> {
    let total: u32 = weights.iter().map(|weight| u32::from(*weight)).sum();
    if total == u32::from(MAX_BPS) {
        Ok(())
    } else {
        Err(WeightsError::InvalidSum { set, total })
    }
}
