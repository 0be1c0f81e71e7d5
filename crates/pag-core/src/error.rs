//! # Checkout Error Types
//!
//! Typed error handling for building PagSeguro cart orders.
//! All fallible order operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for order building and serialization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A required line item field was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Amount text could not be parsed as a decimal number
    #[error("Invalid amount: {value:?} is not a decimal number")]
    InvalidAmount { value: String },

    /// Scaled amount does not fit in a 64-bit integer
    #[error("Amount out of range: {value} x {scale}")]
    AmountOutOfRange { value: String, scale: u32 },

    /// Shipping type code is neither EN nor SD
    #[error("Invalid shipping type: {0}")]
    InvalidShippingType(String),

    /// Billing key is not one of the recognised semantic keys
    #[error("Unknown billing field: {0}")]
    UnknownBillingField(String),

    /// Configuration errors (missing merchant email, bad values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Order cannot be serialized as requested
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns true if the caller supplied bad order data
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            CheckoutError::Configuration(_) | CheckoutError::Serialization(_)
        )
    }
}

impl From<toml::de::Error> for CheckoutError {
    fn from(err: toml::de::Error) -> Self {
        CheckoutError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::Serialization(err.to_string())
    }
}

/// Result type alias for order operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(CheckoutError::MissingField { field: "price" }.is_client_error());
        assert!(CheckoutError::InvalidAmount {
            value: "abc".into()
        }
        .is_client_error());
        assert!(!CheckoutError::Configuration("PAGSEGURO_EMAIL not set".into()).is_client_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CheckoutError::MissingField { field: "id" }.to_string(),
            "Missing required field: id"
        );
        assert_eq!(
            CheckoutError::InvalidAmount {
                value: "ten".into()
            }
            .to_string(),
            "Invalid amount: \"ten\" is not a decimal number"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(
            CheckoutError::from(err),
            CheckoutError::Serialization(_)
        ));
    }
}
