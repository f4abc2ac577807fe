//! # Rational numbers
//!
//! Exact fractions over arbitrary precision integers. Values are never reduced implicitly; every
//! arithmetic result is.
use std::fmt;

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::utils::math::greatest_common_divisor;

pub use operand::Operand;
pub(crate) use text::parse_integer;

mod operand;
mod ops;
mod text;

/// A numerator over a denominator.
///
/// The denominator is never negative: a negative sign given to the constructor is moved onto the
/// numerator. A zero denominator is representable, dividing by it is reported when it happens.
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Self {
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator.is_negative() {
            Rational {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Rational {
                numerator,
                denominator,
            }
        }
    }

    pub fn from_integer<N: Into<BigInt>>(value: N) -> Self {
        Rational {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Divides through by the greatest common divisor.
    ///
    /// Already coprime values, and values with a zero on either side, come back untouched.
    #[must_use]
    pub fn reduced(self) -> Self {
        let gcd = greatest_common_divisor(&self.numerator, &self.denominator);
        if gcd.is_zero() || gcd.is_one() {
            return self;
        }

        Rational {
            numerator: self.numerator / &gcd,
            denominator: self.denominator / gcd,
        }
    }

    pub fn reciprocal(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(Error::DivisionByZero(format!("{} has no reciprocal", self)));
        }
        Ok(Rational::new(self.denominator.clone(), self.numerator.clone()))
    }

    /// Whole part, truncated towards zero.
    pub fn trunc(&self) -> Result<BigInt> {
        if self.denominator.is_zero() {
            return Err(Error::DivisionByZero(format!("cannot truncate {}", self)));
        }
        Ok(&self.numerator / &self.denominator)
    }

    /// What remains after taking away the whole part, carrying the sign of the value.
    ///
    /// Together with [`Rational::trunc`] this gives the mixed number form: 3/2 is 1 and 1/2.
    pub fn fractional(&self) -> Result<Self> {
        let whole = self.trunc()?;
        Ok(Rational::new(
            &self.numerator - whole * &self.denominator,
            self.denominator.clone(),
        )
        .reduced())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().ok()?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.trunc().ok()?.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.trunc().ok()?.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.trunc().ok()?.to_u128()
    }

    /// Nearest `f64`, however far apart the bit lengths of the two sides are.
    fn to_f64(&self) -> Option<f64> {
        if self.denominator.is_zero() {
            return Some(match self.numerator.sign() {
                Sign::NoSign => f64::NAN,
                Sign::Minus => f64::NEG_INFINITY,
                Sign::Plus => f64::INFINITY,
            });
        }
        BigRational::new_raw(self.numerator.clone(), self.denominator.clone()).to_f64()
    }
}
