//! # PagSeguro Configuration
//!
//! Merchant settings for the cart checkout form.
//! Values are loaded from environment variables.

use pag_core::CheckoutError;
use std::env;

/// Default checkout page the form posts to
pub const DEFAULT_CHECKOUT_URL: &str = "https://pagseguro.uol.com.br/checkout/checkout.jhtml";

/// Merchant configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagSeguroConfig {
    /// Merchant account email (`email_cobranca`)
    pub email: String,

    /// Currency code (`moeda`)
    pub currency: String,

    /// Form character encoding
    pub encoding: String,

    /// Checkout page URL (for the form action)
    pub checkout_url: String,
}

impl PagSeguroConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAGSEGURO_EMAIL`
    ///
    /// Optional: `PAGSEGURO_CURRENCY`, `PAGSEGURO_ENCODING`,
    /// `PAGSEGURO_CHECKOUT_URL`.
    pub fn from_env() -> Result<Self, CheckoutError> {
        Self::from_env_with_email(None)
    }

    /// Load configuration from the environment, with `email` (when given)
    /// taking the place of `PAGSEGURO_EMAIL`. Every other variable still
    /// applies.
    pub fn from_env_with_email(email: Option<String>) -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(email, |key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_lookup<F>(email: Option<String>, lookup: F) -> Result<Self, CheckoutError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let email = email
            .or_else(|| lookup("PAGSEGURO_EMAIL"))
            .ok_or_else(|| CheckoutError::Configuration("PAGSEGURO_EMAIL not set".to_string()))?;

        let mut config = Self::new(email);
        if let Some(currency) = lookup("PAGSEGURO_CURRENCY") {
            config.currency = currency;
        }
        if let Some(encoding) = lookup("PAGSEGURO_ENCODING") {
            config.encoding = encoding;
        }
        if let Some(url) = lookup("PAGSEGURO_CHECKOUT_URL") {
            config.checkout_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Create config with explicit values
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            currency: "BRL".to_string(),
            encoding: "UTF-8".to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
        }
    }

    /// Check that the merchant email looks like an email
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if !self.email.contains('@') {
            return Err(CheckoutError::Configuration(format!(
                "PAGSEGURO_EMAIL must be an email address, got {:?}",
                self.email
            )));
        }
        if self.currency.is_empty() {
            return Err(CheckoutError::Configuration(
                "PAGSEGURO_CURRENCY must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder: set currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: set custom checkout URL (for testing)
    pub fn with_checkout_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_url = url.into();
        self
    }
}
