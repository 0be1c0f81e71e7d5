//! # Shipping Types

use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the order is shipped (Correios services)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingType {
    /// PAC, standard postal delivery
    #[serde(rename = "EN")]
    En,
    /// Sedex, express courier
    #[serde(rename = "SD")]
    Sd,
}

impl ShippingType {
    /// Returns the PagSeguro code
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingType::En => "EN",
            ShippingType::Sd => "SD",
        }
    }
}

impl FromStr for ShippingType {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EN" => Ok(ShippingType::En),
            "SD" => Ok(ShippingType::Sd),
            other => Err(CheckoutError::InvalidShippingType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ShippingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!("EN".parse::<ShippingType>().unwrap(), ShippingType::En);
        assert_eq!("SD".parse::<ShippingType>().unwrap(), ShippingType::Sd);
        assert_eq!(ShippingType::Sd.to_string(), "SD");
    }

    #[test]
    fn test_unknown_code() {
        // codes are case sensitive
        assert!("en".parse::<ShippingType>().is_err());
        assert!(serde_json::from_str::<ShippingType>(r#""FX""#).is_err());
        assert_eq!(
            serde_json::from_str::<ShippingType>(r#""EN""#).unwrap(),
            ShippingType::En
        );
    }
}
