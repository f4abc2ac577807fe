use std::collections::HashMap;
use std::fmt::{self, Write};
use std::str::FromStr;

use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::utils::math::int_to_buffer;

/// Combining mark written straight before the first and last digit of a repeating block.
const RECURRING_MARK: char = '\u{0307}';

impl Rational {
    /// Reads either `"<int>/<int>"` or `"-?<digits>(.<digits>)?"`, in that order.
    pub fn from_string(text: &str) -> Result<Self> {
        let unrecognised = || Error::Parse(text.to_string());

        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = parse_integer(numerator).ok_or_else(unrecognised)?;
            let denominator = parse_integer(denominator).ok_or_else(unrecognised)?;
            return Ok(Rational::new(numerator, denominator));
        }

        parse_decimal(text).ok_or_else(unrecognised)
    }

    /// Decimal text by long division.
    ///
    /// At most `max_dp` fractional digits are written. With `recursion`, a remainder seen twice
    /// closes a repeating block, whose first and last digits get a combining dot: 1/3 is
    /// `"0.̇3"`, 9/11 is `"0.̇8̇1"`. Running into `max_dp` first truncates without marks. With
    /// neither, one period of a repeating expansion is written unmarked.
    pub fn decimal(&self, max_dp: Option<usize>, recursion: bool) -> Result<String> {
        let mut text = String::new();
        self.write_decimal(&mut text, max_dp, recursion)?;
        Ok(text)
    }

    pub fn write_decimal<W: Write>(
        &self,
        sink: &mut W,
        max_dp: Option<usize>,
        recursion: bool,
    ) -> Result<()> {
        if self.denominator.is_zero() {
            if self.numerator.is_zero() {
                sink.write_str("0.0")?;
                return Ok(());
            }
            return Err(Error::DivisionByZero(format!(
                "cannot write {} as a decimal",
                self
            )));
        }

        let (whole, remainder) = self.numerator.abs().div_rem(&self.denominator);
        if self.numerator.is_negative() {
            sink.write_char('-')?;
        }
        int_to_buffer(&whole, sink, 0)?;

        if remainder.is_zero() {
            sink.write_str(".0")?;
            return Ok(());
        }

        let (digits, recurring_from) =
            long_division(remainder, &self.denominator, max_dp, recursion);
        if !digits.is_empty() {
            sink.write_char('.')?;
        }
        write_digits(sink, &digits, recurring_from)?;

        Ok(())
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Rational::from_string(text)
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `-?<digits>` and nothing else: no `+`, no `_` separators.
pub(crate) fn parse_integer(text: &str) -> Option<BigInt> {
    if !is_digits(text.strip_prefix('-').unwrap_or(text)) {
        return None;
    }
    BigInt::from_str(text).ok()
}

fn parse_decimal(text: &str) -> Option<Rational> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    if !is_digits(whole) {
        return None;
    }

    let mut value = Rational::from_integer(BigInt::from_str(whole).ok()?);
    if let Some(fraction) = fraction {
        if !is_digits(fraction) {
            return None;
        }
        let places = u32::try_from(fraction.len()).ok()?;
        let fraction = Rational::new(BigInt::from_str(fraction).ok()?, BigInt::from(10).pow(places));
        value = value.checked_add(fraction).ok()?;
    }

    Some(if negative { -value } else { value })
}

/// Fractional digits of `remainder / denominator`, and where the repeating block starts if one
/// was found and `recursion` asks for it.
///
/// Without a `max_dp` the division always stops at the first repeated remainder, so a
/// non-terminating expansion is written as one unmarked period when `recursion` is off.
fn long_division(
    mut remainder: BigInt,
    denominator: &BigInt,
    max_dp: Option<usize>,
    recursion: bool,
) -> (Vec<u8>, Option<usize>) {
    let mut digits = Vec::new();
    let mut seen = HashMap::new();
    let detect_cycle = recursion || max_dp.is_none();

    while !remainder.is_zero() {
        if max_dp.map_or(false, |max_dp| digits.len() >= max_dp) {
            break;
        }

        if detect_cycle {
            if let Some(&start) = seen.get(&remainder) {
                trace!("{}/{} repeats from digit {}", remainder, denominator, start);
                return (digits, recursion.then_some(start));
            }
            seen.insert(remainder.clone(), digits.len());
        }

        remainder *= 10u32;
        let (digit, rest) = remainder.div_rem(denominator);
        // Each digit is below ten because the remainder stays below the denominator.
        digits.push(digit.to_u8().unwrap_or_default());
        remainder = rest;
    }

    (digits, None)
}

fn write_digits<W: Write>(sink: &mut W, digits: &[u8], recurring_from: Option<usize>) -> fmt::Result {
    let last = digits.len().saturating_sub(1);
    for (index, digit) in digits.iter().enumerate() {
        if let Some(start) = recurring_from {
            if index == start || index == last {
                sink.write_char(RECURRING_MARK)?;
            }
        }
        sink.write_char(char::from(b'0' + digit))?;
    }
    Ok(())
}
