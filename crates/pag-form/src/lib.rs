//! # pag-form
//!
//! PagSeguro cart checkout form serialization for pagseguro-cart-rs.
//!
//! The core crate only normalizes order data; this crate renders it as the
//! hidden inputs PagSeguro's checkout page expects. Sending the form is up
//! to the caller (an HTML page, an HTTP client, ...).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pag_form::FormEncoder;
//!
//! // Merchant email from PAGSEGURO_EMAIL
//! let encoder = FormEncoder::from_env()?;
//!
//! for field in encoder.encode(&order)? {
//!     println!(r#"<input type="hidden" name="{}" value="{}">"#, field.name, field.value);
//! }
//! ```

pub mod config;
pub mod form;

// Re-exports
pub use config::{PagSeguroConfig, DEFAULT_CHECKOUT_URL};
pub use form::{FormEncoder, FormField, CART_CHECKOUT_TYPE};
