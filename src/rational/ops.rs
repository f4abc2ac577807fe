//! Arithmetic and comparison.
//!
//! The `checked_*` methods are the fallible core. The operator traits wrap them for statically
//! typed operands and panic where the checked method would have returned an error.
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::rational::{Operand, Rational};

impl Rational {
    pub fn checked_add<T: Into<Operand>>(&self, other: T) -> Result<Rational> {
        let (x, y) = self.comparable_with_self(other)?;
        Ok(Rational::new(x.numerator + y.numerator, x.denominator).reduced())
    }

    pub fn checked_sub<T: Into<Operand>>(&self, other: T) -> Result<Rational> {
        let (x, y) = self.comparable_with_self(other)?;
        Ok(Rational::new(x.numerator - y.numerator, x.denominator).reduced())
    }

    pub fn checked_mul<T: Into<Operand>>(&self, other: T) -> Result<Rational> {
        let other = Rational::from_any(other)?;
        Ok(Rational::new(
            &self.numerator * other.numerator,
            &self.denominator * other.denominator,
        )
        .reduced())
    }

    pub fn checked_div<T: Into<Operand>>(&self, other: T) -> Result<Rational> {
        let other = Rational::from_any(other)?;
        if other.is_zero() {
            return Err(Error::DivisionByZero(format!("{} / {}", self, other)));
        }
        self.checked_mul(other.reciprocal()?)
    }

    /// Largest whole number not above `self / other`.
    pub fn checked_floor_div<T: Into<Operand>>(&self, other: T) -> Result<Rational> {
        let quotient = self.checked_div(other)?;
        if quotient.denominator.is_zero() {
            return Err(Error::DivisionByZero(format!("floor of {}", quotient)));
        }
        Ok(Rational::from_integer(
            quotient.numerator.div_floor(&quotient.denominator),
        ))
    }

    pub fn checked_cmp<T: Into<Operand>>(&self, other: T) -> Result<Ordering> {
        let (x, y) = self.comparable_with_self(other)?;
        Ok(x.numerator.cmp(&y.numerator))
    }

    /// Value equality. Never fails: anything that can't be turned into a rational is unequal.
    pub fn eq_any<T: Into<Operand>>(&self, other: T) -> bool {
        match self.comparable_with_self(other) {
            Ok((x, y)) => x.numerator == y.numerator,
            Err(_) => false,
        }
    }
}

fn arithmetic(result: Result<Rational>) -> Rational {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}

macro_rules! binary_operator {
    ($imp:ident, $method:ident, $checked:ident) => {
        /// # Panics
        ///
        /// When the checked variant of this operation would return an error.
        impl<T: Into<Operand>> $imp<T> for Rational {
            type Output = Rational;

            fn $method(self, rhs: T) -> Rational {
                arithmetic(self.$checked(rhs))
            }
        }

        impl<T: Into<Operand>> $imp<T> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: T) -> Rational {
                arithmetic(self.$checked(rhs))
            }
        }
    };
}

binary_operator!(Add, add, checked_add);
binary_operator!(Sub, sub, checked_sub);
binary_operator!(Mul, mul, checked_mul);
binary_operator!(Div, div, checked_div);

/// Operators with the rational on the right: the left side is coerced first, so the order of
/// subtraction and division is kept.
macro_rules! reversed_operators {
    (@impl $t:ty, $rhs:ty) => {
        impl Add<$rhs> for $t {
            type Output = Rational;

            fn add(self, rhs: $rhs) -> Rational {
                arithmetic(Rational::from_any(self).and_then(|lhs| lhs.checked_add(rhs)))
            }
        }

        impl Sub<$rhs> for $t {
            type Output = Rational;

            fn sub(self, rhs: $rhs) -> Rational {
                arithmetic(Rational::from_any(self).and_then(|lhs| lhs.checked_sub(rhs)))
            }
        }

        impl Mul<$rhs> for $t {
            type Output = Rational;

            fn mul(self, rhs: $rhs) -> Rational {
                arithmetic(Rational::from_any(self).and_then(|lhs| lhs.checked_mul(rhs)))
            }
        }

        impl Div<$rhs> for $t {
            type Output = Rational;

            fn div(self, rhs: $rhs) -> Rational {
                arithmetic(Rational::from_any(self).and_then(|lhs| lhs.checked_div(rhs)))
            }
        }
    };
    ($($t:ty),*) => {
        $(
            reversed_operators!(@impl $t, Rational);
            reversed_operators!(@impl $t, &Rational);

            impl PartialEq<Rational> for $t {
                fn eq(&self, other: &Rational) -> bool {
                    other.eq_any(self.clone())
                }
            }

            impl PartialOrd<Rational> for $t {
                fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

reversed_operators!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl<T: Into<Operand> + Clone> PartialEq<T> for Rational {
    fn eq(&self, other: &T) -> bool {
        self.eq_any(other.clone())
    }
}

impl<T: Into<Operand> + Clone> PartialOrd<T> for Rational {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.checked_cmp(other.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{One, ToPrimitive};

    use super::*;

    fn parts(value: &Rational) -> (i64, i64) {
        (
            value.numerator().to_i64().unwrap(),
            value.denominator().to_i64().unwrap(),
        )
    }

    #[test]
    fn test_add() {
        assert_eq!(Rational::new(2, 3) + 1, Rational::new(5, 3));
        assert_eq!(Rational::new(2, 3) + 1.5, Rational::new(13, 6));
        assert_eq!(Rational::new(2, 3) + Rational::new(4, 6), Rational::new(4, 3));
        assert_eq!(Rational::new(1, 4) + Rational::new(-1, 2), Rational::new(-1, 4));
    }

    #[test]
    fn test_results_are_reduced() {
        assert_eq!(parts(&(Rational::new(2, 3) + Rational::new(4, 6))), (4, 3));
        assert_eq!(parts(&(Rational::new(1, 2) * Rational::new(2, 3))), (1, 3));
        assert_eq!(parts(&(Rational::new(4, 3) - 1)), (1, 3));
        assert_eq!(parts(&(Rational::new(2, 3) / Rational::new(4, 6))), (1, 1));
    }

    #[test]
    fn test_radd() {
        assert_eq!(1 + Rational::new(2, 3), Rational::new(5, 3));
        assert_eq!(1.5 + Rational::new(2, 3), Rational::new(13, 6));
    }

    #[test]
    fn test_sub() {
        assert_eq!(Rational::new(4, 3) - 1, Rational::new(1, 3));
        assert_eq!(Rational::new(1, 7) - Rational::new(4, 7), Rational::new(-3, 7));
    }

    #[test]
    fn test_rsub() {
        assert_eq!(1 - Rational::new(2, 3), Rational::new(1, 3));
        assert_eq!(1 - &Rational::new(2, 3), Rational::new(1, 3));
    }

    #[test]
    fn test_mul() {
        let half = Rational::new(1, 2);
        assert_eq!(&half * 0, Rational::zero());
        assert_eq!(&half * 1, Rational::new(1, 2));
        assert_eq!(&half * 2, Rational::one());
        assert_eq!(&half * 0.25, Rational::new(1, 8));
        assert_eq!(&half * Rational::new(1, 4), Rational::new(1, 8));
    }

    #[test]
    fn test_rmul() {
        let half = Rational::new(1, 2);
        assert_eq!(0 * &half, Rational::zero());
        assert_eq!(2 * &half, Rational::one());
        assert_eq!(0.25 * &half, Rational::new(1, 8));
    }

    #[test]
    fn test_div() {
        assert_eq!(Rational::new(2, 3) / Rational::new(4, 6), Rational::one());
        assert_eq!(4 / Rational::new(1, 2), Rational::from_integer(8));
    }

    #[test]
    fn test_checked_div_by_zero() {
        let error = Rational::new(2, 3).checked_div(0).unwrap_err();
        assert!(matches!(error, Error::DivisionByZero(_)));
        assert!(Rational::new(2, 3).checked_div(Rational::new(0, 5)).is_err());
        assert!(Rational::new(2, 3).checked_floor_div(0.0).is_err());
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_div_by_zero_panics() {
        let _ = Rational::new(2, 3) / 0;
    }

    #[test]
    fn test_floor_div() {
        let a = Rational::new(20, 4);
        let b: Rational = "2.125".parse().unwrap();
        assert_eq!(a.checked_floor_div(b).unwrap(), Rational::from_integer(2));

        let a: Rational = "20/4".parse().unwrap();
        assert_eq!(
            a.checked_floor_div(Rational::new(17, 8)).unwrap(),
            Rational::from_integer(2)
        );
    }

    #[test]
    fn test_floor_div_rounds_down() {
        let value = Rational::new(-7, 2).checked_floor_div(1).unwrap();
        assert_eq!(parts(&value), (-4, 1));
    }

    #[test]
    fn test_arithmetic_type_mismatch() {
        let value = Rational::new(1, 2);
        assert!(matches!(
            value.checked_add(Operand::unsupported("x")),
            Err(Error::Incompatible { .. })
        ));
        assert!(matches!(
            value.checked_mul(Operand::unsupported(&true)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_neg() {
        assert_eq!(parts(&-Rational::new(1, 2)), (-1, 2));
        assert_eq!(parts(&-&Rational::new(-1, 2)), (1, 2));
    }

    #[test]
    fn test_eq() {
        assert!(Rational::new(7, 4) != 2);
        assert!(Rational::new(8, 4) == 2);
        assert!(Rational::new(5, 4) != 1.5);
        assert!(Rational::new(6, 4) == 1.5);
        assert!(Rational::new(7, 4) != Rational::new(8, 4));
        assert!(Rational::new(8, 4) == Rational::new(8, 4));
        assert!(Rational::new(1, 2) == Rational::new(15, 30));
    }

    #[test]
    fn test_eq_zero_denominator() {
        assert!(Rational::new(0, 0) == Rational::new(0, 0));
    }

    #[test]
    fn test_eq_never_fails() {
        assert!(!Rational::zero().eq_any(Operand::unsupported("zero")));
        assert!(!Rational::zero().eq_any(f64::NAN));
    }

    #[test]
    fn test_ordering() {
        let cases = [
            (Rational::new(7, 4), Rational::from_integer(2), Ordering::Less),
            (Rational::new(8, 4), Rational::from_integer(2), Ordering::Equal),
            (Rational::new(9, 4), Rational::from_integer(2), Ordering::Greater),
            (Rational::new(5, 4), Rational::new(3, 2), Ordering::Less),
            (Rational::new(6, 4), Rational::new(3, 2), Ordering::Equal),
            (Rational::new(7, 4), Rational::new(3, 2), Ordering::Greater),
            (Rational::new(-1, 4), Rational::new(-1, 2), Ordering::Greater),
        ];
        for (a, b, expect) in cases {
            assert_eq!(a.partial_cmp(&b), Some(expect), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_comparison_operators() {
        assert!(Rational::new(9, 4) > 2);
        assert!(Rational::new(8, 4) >= 2);
        assert!(!(Rational::new(8, 4) > 2));
        assert!(Rational::new(7, 4) < 2);
        assert!(Rational::new(6, 4) <= 1.5);
        assert!(!(Rational::new(7, 4) <= 1.5));
        assert!(2 < Rational::new(9, 4));
        assert!(1.5 >= Rational::new(6, 4));
    }

    #[test]
    fn test_ordering_incompatible() {
        assert_eq!(Rational::one().partial_cmp(&f64::NAN), None);
        assert!(Rational::one().checked_cmp(Operand::unsupported("one")).is_err());
    }
}
