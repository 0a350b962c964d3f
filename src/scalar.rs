//! Number types the engine can run on.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Num, One, Signed};

pub type Rational = BigRational;

/// Field element usable by the parser, the determinant engine and the renderers.
///
/// `f64` follows IEEE-754 semantics. `Rational` is exact: decimal literals convert
/// without rounding and the singular check is a true zero test.
pub trait Scalar: Signed + Clone + fmt::Debug + fmt::Display {
    /// Convert a literal of the form `[+-]digits[.digits]` (at least one digit).
    fn from_decimal(literal: &str) -> Option<Self>;

    /// Text for display. `precision` caps fractional digits where rounding applies.
    fn render(&self, precision: Option<usize>) -> String;

    /// False for values that left the representable range (infinities and NaN).
    fn is_finite(&self) -> bool;
}

impl Scalar for f64 {
    fn from_decimal(literal: &str) -> Option<Self> {
        split_decimal(literal)?;
        literal.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    fn render(&self, precision: Option<usize>) -> String {
        let text = match precision {
            Some(digits) => trim_fraction(format!("{self:.digits$}")),
            None => self.to_string(),
        };
        if text == "-0" {
            "0".to_string()
        } else {
            text
        }
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Scalar for Rational {
    fn from_decimal(literal: &str) -> Option<Self> {
        let (negative, int_part, frac_part) = split_decimal(literal)?;
        let numer = BigInt::from_str_radix(&format!("{int_part}{frac_part}"), 10).ok()?;
        let denom = num_traits::pow(BigInt::from(10), frac_part.len());
        let value = Rational::new(numer, denom);
        Some(if negative { -value } else { value })
    }

    fn render(&self, _precision: Option<usize>) -> String {
        if self.denom().is_one() {
            format!("{}", self.numer())
        } else {
            format!("{}/{}", self.numer(), self.denom())
        }
    }

    fn is_finite(&self) -> bool {
        true
    }
}

/// Split a decimal literal into sign, integer digits and fraction digits.
fn split_decimal(literal: &str) -> Option<(bool, &str, &str)> {
    let (negative, body) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    Some((negative, int_part, frac_part))
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n.into(), d.into())
    }

    #[test]
    fn float_literals() {
        assert_eq!(f64::from_decimal("2"), Some(2.0));
        assert_eq!(f64::from_decimal("-1.5"), Some(-1.5));
        assert_eq!(f64::from_decimal("+.25"), Some(0.25));
        assert_eq!(f64::from_decimal("3."), Some(3.0));
        assert_eq!(f64::from_decimal("."), None);
        assert_eq!(f64::from_decimal("-"), None);
        assert_eq!(f64::from_decimal("1e3"), None);
        assert_eq!(f64::from_decimal("nan"), None);
        assert_eq!(f64::from_decimal(&"9".repeat(400)), None);
    }

    #[test]
    fn rational_literals_are_exact() {
        assert_eq!(Rational::from_decimal("0.1"), Some(ratio(1, 10)));
        assert_eq!(Rational::from_decimal("-2.50"), Some(ratio(-5, 2)));
        assert_eq!(Rational::from_decimal("+7"), Some(ratio(7, 1)));
        assert_eq!(Rational::from_decimal(".5"), Some(ratio(1, 2)));
        assert_eq!(Rational::from_decimal("1.2.3"), None);
        assert_eq!(Rational::from_decimal(""), None);
    }

    #[test]
    fn render_trims_and_normalizes_zero() {
        assert_eq!(0.1_f64.render(Some(4)), "0.1");
        assert_eq!((1.0_f64 / 3.0).render(Some(3)), "0.333");
        assert_eq!(2.0_f64.render(Some(2)), "2");
        assert_eq!((-0.0_f64).render(None), "0");
        assert_eq!((-0.0001_f64).render(Some(2)), "0");
        assert_eq!(12.0_f64.render(None), "12");
        assert_eq!(ratio(-3, 6).render(Some(2)), "-1/2");
        assert_eq!(ratio(4, 2).render(None), "2");
    }
}
