use std::fmt;
use std::str::FromStr;

use log::trace;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::rational::Rational;

/// Everything an operator will accept on either side of a [`Rational`].
///
/// Resolved once, at the entry of each operation, through [`Rational::from_any`].
#[derive(Clone, Debug)]
pub enum Operand {
    Integer(BigInt),
    Float(f64),
    Rational(Rational),
    /// A value of any other kind, kept as its printed form and type name for error reporting.
    Unsupported { value: String, type_name: String },
}

impl Operand {
    pub fn unsupported<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Operand::Unsupported {
            value: format!("{:?}", value),
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}

macro_rules! integer_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Integer(BigInt::from(value))
                }
            }
        )*
    }
}

integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Operand::Integer(value)
    }
}

impl From<&BigInt> for Operand {
    fn from(value: &BigInt) -> Self {
        Operand::Integer(value.clone())
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<Rational> for Operand {
    fn from(value: Rational) -> Self {
        Operand::Rational(value)
    }
}

impl From<&Rational> for Operand {
    fn from(value: &Rational) -> Self {
        Operand::Rational(value.clone())
    }
}

impl Rational {
    pub fn from_any<T: Into<Operand>>(value: T) -> Result<Self> {
        match value.into() {
            Operand::Integer(value) => Ok(Rational::from_integer(value)),
            Operand::Float(value) => Rational::from_float(value),
            Operand::Rational(value) => Ok(value),
            Operand::Unsupported { value, type_name } => {
                Err(Error::TypeMismatch { value, type_name })
            }
        }
    }

    /// Exact value of the shortest decimal text that round-trips to `value`.
    ///
    /// The whole part is taken as is, then each fractional digit is added at the next power of
    /// ten, so 1.2 becomes 6/5 rather than the binary neighbour of 1.2.
    pub fn from_float(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFinite(value));
        }

        let text = format!("{}", value.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let whole = BigInt::from_str(whole).map_err(|_| Error::Parse(text.clone()))?;
        let mut accumulator = Rational::from_integer(whole);
        let mut place = BigInt::one();

        for digit in fraction.chars() {
            let digit = digit.to_digit(10).ok_or_else(|| Error::Parse(text.clone()))?;
            place *= 10u32;
            if digit != 0 {
                accumulator = accumulator.checked_add(Rational::new(digit, place.clone()))?;
            }
        }

        trace!("float {} is {}", value, accumulator);
        if value.is_sign_negative() && !accumulator.is_zero() {
            Ok(-accumulator)
        } else {
            Ok(accumulator)
        }
    }

    /// Rewrites `a` and `b` over one shared denominator so their numerators can be compared.
    ///
    /// The shared denominator is the product of the two, not their least common multiple, and
    /// nothing is reduced afterwards. Matching denominators are left alone.
    pub fn comparable(a: &Rational, b: &Rational) -> (Rational, Rational) {
        if a.denominator == b.denominator {
            return (a.clone(), b.clone());
        }

        let denominator = &a.denominator * &b.denominator;
        (
            Rational {
                numerator: &a.numerator * &b.denominator,
                denominator: denominator.clone(),
            },
            Rational {
                numerator: &b.numerator * &a.denominator,
                denominator,
            },
        )
    }

    pub fn comparable_with_self<T: Into<Operand>>(&self, other: T) -> Result<(Rational, Rational)> {
        let other = match other.into() {
            Operand::Unsupported { value, type_name } => {
                return Err(Error::Incompatible {
                    left: self.to_string(),
                    left_type: "Rational".to_string(),
                    right: value,
                    right_type: type_name,
                })
            }
            other => Rational::from_any(other)?,
        };

        Ok(Rational::comparable(self, &other))
    }
}
