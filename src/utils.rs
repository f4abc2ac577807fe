pub mod math {
    use std::fmt;

    use num_bigint::BigInt;
    use num_traits::{Signed, Zero};

    /// Greatest common divisor of `a` and `b`, always non-negative.
    ///
    /// Works on absolute values, so the sign of either input never leaks into the result.
    /// `gcd(0, 0)` and `gcd(0, x)` are both zero: a zero operand short-circuits, which keeps
    /// reduction from ever touching a zero numerator or denominator.
    pub fn greatest_common_divisor(a: &BigInt, b: &BigInt) -> BigInt {
        let mut biggest = a.abs();
        let mut smallest = b.abs();

        if biggest < smallest {
            std::mem::swap(&mut biggest, &mut smallest);
        }

        if smallest.is_zero() || smallest == biggest {
            return smallest;
        }

        loop {
            let remainder = &biggest % &smallest;
            if remainder.is_zero() {
                return smallest;
            }
            biggest = smallest;
            smallest = remainder;
        }
    }

    /// Writes the decimal digits of `value` into `sink`, preceded by `leading_zeros` zeros.
    pub fn int_to_buffer<W: fmt::Write>(
        value: &BigInt,
        sink: &mut W,
        leading_zeros: usize,
    ) -> fmt::Result {
        for _ in 0..leading_zeros {
            sink.write_char('0')?;
        }
        write!(sink, "{}", value)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn gcd(a: i64, b: i64) -> BigInt {
            greatest_common_divisor(&BigInt::from(a), &BigInt::from(b))
        }

        #[test]
        fn test_greatest_common_divisor() {
            assert_eq!(gcd(0, 0), BigInt::from(0));
            assert_eq!(gcd(0, 1), BigInt::from(0));
            assert_eq!(gcd(1, 0), BigInt::from(0));
            assert_eq!(gcd(45, 300), BigInt::from(15));
            assert_eq!(gcd(300, 45), BigInt::from(15));
            assert_eq!(gcd(7, 7), BigInt::from(7));
            assert_eq!(gcd(17, 5), BigInt::from(1));
        }

        #[test]
        fn test_greatest_common_divisor_signs() {
            assert_eq!(gcd(-45, 300), BigInt::from(15));
            assert_eq!(gcd(45, -300), BigInt::from(15));
            assert_eq!(gcd(-45, -300), BigInt::from(15));
            assert_eq!(gcd(-4, 4), BigInt::from(4));
        }

        #[test]
        fn test_int_to_buffer() {
            let mut buffer = String::new();
            int_to_buffer(&BigInt::from(300), &mut buffer, 0).unwrap();
            assert_eq!(buffer, "300");
        }

        #[test]
        fn test_int_to_buffer_leading() {
            let mut buffer = String::from("0.");
            int_to_buffer(&BigInt::from(300), &mut buffer, 3).unwrap();
            assert_eq!(buffer, "0.000300");
        }
    }
}
