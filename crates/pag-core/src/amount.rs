//! # Amounts and Unit Conversion
//!
//! PagSeguro expects money in cents and weight in grams, sent as
//! zero-padded integer strings (`5` becomes `"005"`).
//!
//! Callers hand us either an integer that is already in the smallest unit,
//! or a decimal in major units (reais, kilograms). Decimals are scaled with
//! exact decimal arithmetic and truncated toward zero, so `19.99` reais is
//! always `"1999"` cents.

use crate::error::{CheckoutError, CheckoutResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Minimum width of a formatted subunit string
pub const SUBUNIT_WIDTH: usize = 3;

/// Scale factor from a major unit to its smallest unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Reais to centavos (x100)
    Cents,
    /// Kilograms to grams (x1000)
    Grams,
}

impl Scale {
    /// Multiplier applied to decimal amounts
    pub fn factor(&self) -> u32 {
        match self {
            Scale::Cents => 100,
            Scale::Grams => 1000,
        }
    }
}

/// A monetary or mass value supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    /// Integer already expressed in the smallest unit; never scaled
    Subunits(i64),
    /// Decimal in the major unit; scaled and truncated on conversion
    Decimal(Decimal),
}

impl Amount {
    /// Amount already in cents or grams
    pub fn subunits(value: i64) -> Self {
        Amount::Subunits(value)
    }

    /// Amount in reais or kilograms
    pub fn decimal(value: Decimal) -> Self {
        Amount::Decimal(value)
    }

    /// Convert to an integer count of the smallest unit.
    ///
    /// Decimal values are multiplied by `scale` and truncated toward zero.
    pub fn to_subunits(&self, scale: Scale) -> CheckoutResult<i64> {
        match self {
            Amount::Subunits(value) => Ok(*value),
            Amount::Decimal(value) => value
                .checked_mul(Decimal::from(scale.factor()))
                .map(|scaled| scaled.trunc())
                .and_then(|scaled| scaled.to_i64())
                .ok_or_else(|| CheckoutError::AmountOutOfRange {
                    value: value.to_string(),
                    scale: scale.factor(),
                }),
        }
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Subunits(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = CheckoutError;

    /// Floats go through their shortest decimal text, so `19.99_f64`
    /// becomes exactly `19.99` rather than its binary approximation.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(CheckoutError::InvalidAmount {
                value: value.to_string(),
            });
        }
        value.to_string().parse()
    }
}

impl FromStr for Amount {
    type Err = CheckoutError;

    /// Text always parses as a decimal in the major unit, even `"10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Amount::Decimal)
            .map_err(|_| CheckoutError::InvalidAmount {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Subunits(value) => write!(f, "{}", value),
            Amount::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// Wire shapes accepted for an amount in TOML/JSON order files
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<RawAmount> for Amount {
    type Error = CheckoutError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Integer(value) => Ok(Amount::Subunits(value)),
            RawAmount::Float(value) => Amount::try_from(value),
            RawAmount::Text(value) => value.parse(),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAmount::deserialize(deserializer)?;
        Amount::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Format a subunit count zero-padded to at least three digits
pub fn format_subunits(value: i64) -> String {
    format!("{:0width$}", value, width = SUBUNIT_WIDTH)
}

/// Normalize an optional amount into PagSeguro's subunit string.
///
/// An absent value formats as zero (`"000"`).
pub fn convert_unit(value: Option<&Amount>, scale: Scale) -> CheckoutResult<String> {
    let subunits = match value {
        Some(amount) => amount.to_subunits(scale)?,
        None => 0,
    };
    Ok(format_subunits(subunits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_decimal_is_exact() {
        let price = Amount::try_from(19.99).unwrap();
        assert_eq!(convert_unit(Some(&price), Scale::Cents).unwrap(), "1999");

        // 0.29 * 100 is 28.999... in binary floating point
        let price = Amount::try_from(0.29).unwrap();
        assert_eq!(convert_unit(Some(&price), Scale::Cents).unwrap(), "029");
    }

    #[test]
    fn test_integer_is_not_scaled() {
        assert_eq!(convert_unit(Some(&Amount::from(5)), Scale::Cents).unwrap(), "005");
        assert_eq!(convert_unit(Some(&Amount::from(1234)), Scale::Grams).unwrap(), "1234");
    }

    #[test]
    fn test_unset_formats_as_zero() {
        assert_eq!(convert_unit(None, Scale::Cents).unwrap(), "000");
        assert_eq!(convert_unit(None, Scale::Grams).unwrap(), "000");
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(convert_unit(Some(&dec("10.559")), Scale::Cents).unwrap(), "1055");
        assert_eq!(convert_unit(Some(&dec("0.0009")), Scale::Grams).unwrap(), "000");
        assert_eq!(dec("-2.555").to_subunits(Scale::Cents).unwrap(), -255);
    }

    #[test]
    fn test_grams_scale() {
        assert_eq!(convert_unit(Some(&dec("1.5")), Scale::Grams).unwrap(), "1500");
        assert_eq!(convert_unit(Some(&dec("0.025")), Scale::Grams).unwrap(), "025");
    }

    #[test]
    fn test_text_is_always_decimal() {
        assert_eq!(dec("10"), Amount::Decimal(Decimal::from(10)));
        assert_eq!(convert_unit(Some(&dec(" 10 ")), Scale::Cents).unwrap(), "1000");
        assert_eq!(convert_unit(Some(&dec("1e1")), Scale::Cents).unwrap(), "1000");
    }

    #[test]
    fn test_invalid_amounts() {
        assert!(matches!(
            "ten reais".parse::<Amount>(),
            Err(CheckoutError::InvalidAmount { .. })
        ));
        assert!(matches!(
            Amount::try_from(f64::NAN),
            Err(CheckoutError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let huge = Amount::Decimal(Decimal::MAX);
        assert!(matches!(
            huge.to_subunits(Scale::Cents),
            Err(CheckoutError::AmountOutOfRange { scale: 100, .. })
        ));
    }

    #[test]
    fn test_format_width_is_minimum() {
        assert_eq!(format_subunits(0), "000");
        assert_eq!(format_subunits(42), "042");
        assert_eq!(format_subunits(123456), "123456");
    }

    #[test]
    fn test_deserialize_shapes() {
        let amounts: Vec<Amount> = serde_json::from_str(r#"[5, 10.5, "19.99"]"#).unwrap();
        assert_eq!(amounts[0], Amount::Subunits(5));
        assert_eq!(amounts[1], dec("10.5"));
        assert_eq!(amounts[2], dec("19.99"));

        assert!(serde_json::from_str::<Amount>(r#""abc""#).is_err());
    }
}
