//! Arbitrary-precision decimals for decimal fields.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError, Zero};

/// An exact decimal of any size or precision.
///
/// Zero keeps the sign it was written with, so `-0` and `-0.00` render back
/// unchanged. Equality is numeric: `-0 == 0` and `1.50 == 1.5`.
///
/// # Examples
///
/// ```
/// use value_object::ExactDecimal;
///
/// let large: ExactDecimal = "1e30".parse()?;
/// assert_eq!(large.to_plain_string(), "1000000000000000000000000000000");
/// let zero: ExactDecimal = "-0.00".parse()?;
/// assert_eq!(zero.to_plain_string(), "-0.00");
/// # Ok::<(), bigdecimal::ParseBigDecimalError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExactDecimal {
    value: BigDecimal,
    negative_zero: bool,
}

impl ExactDecimal {
    /// Wraps a [`BigDecimal`]; zero is taken as positive.
    #[must_use]
    pub const fn new(value: BigDecimal) -> Self {
        Self {
            value,
            negative_zero: false,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn as_big_decimal(&self) -> &BigDecimal {
        &self.value
    }

    /// Returns `true` for a zero written with a leading minus sign.
    #[must_use]
    pub const fn is_negative_zero(&self) -> bool {
        self.negative_zero
    }

    /// Fixed-point text with every digit written out and no exponent.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let plain = self.value.to_plain_string();
        if self.negative_zero {
            format!("-{plain}")
        } else {
            plain
        }
    }
}

impl FromStr for ExactDecimal {
    type Err = ParseBigDecimalError;

    /// Accepts plain and exponent notation (`0.026`, `2.6E-2`, `1e30`).
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value = BigDecimal::from_str(text)?;
        let negative_zero = text.starts_with('-') && value.is_zero();
        Ok(Self {
            value,
            negative_zero,
        })
    }
}

impl From<BigDecimal> for ExactDecimal {
    fn from(value: BigDecimal) -> Self {
        Self::new(value)
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    //! Sign and equality rules for exact decimals.
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface configuration mistakes"
    )]

    use rstest::rstest;

    use super::ExactDecimal;

    fn parse(text: &str) -> ExactDecimal {
        text.parse().expect("decimal parses")
    }

    #[rstest]
    #[case::negative_zero("-0", true)]
    #[case::negative_scaled_zero("-0.00", true)]
    #[case::negative_zero_exponent("-0e5", true)]
    #[case::positive_zero("0", false)]
    #[case::negative_value("-1", false)]
    fn zero_remembers_its_sign(#[case] text: &str, #[case] negative_zero: bool) {
        assert_eq!(parse(text).is_negative_zero(), negative_zero);
    }

    #[rstest]
    #[case::signed_zeros("-0", "0")]
    #[case::trailing_zeros("1.50", "1.5")]
    #[case::exponent("2.6E-2", "0.026")]
    fn equality_is_numeric(#[case] left: &str, #[case] right: &str) {
        assert_eq!(parse(left), parse(right));
    }

    #[test]
    fn display_matches_plain_text() {
        let decimal = parse("-1.5E+3");
        assert_eq!(decimal.to_string(), "-1500");
        assert_eq!(decimal.to_string(), decimal.to_plain_string());
    }
}
