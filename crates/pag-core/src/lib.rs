//! # pag-core
//!
//! Core order model for PagSeguro cart checkout.
//!
//! This crate provides:
//! - `Order` holding billing info, shipping type, extra amount and line items
//! - `ProductInput` and `LineItem`, normalized to cents and grams
//! - `Amount` and `convert_unit` for exact subunit conversion
//! - `BILLING_MAPPING` from semantic billing keys to form field names
//! - `OrderRequest` for loading orders from TOML or JSON
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pag_core::{Amount, Billing, Order, ProductInput, ShippingType};
//!
//! let mut order = Order::new(Some("ord-1001".into()))
//!     .with_billing(Billing::new().with("name", "Maria Silva"))
//!     .with_shipping_type(ShippingType::En);
//!
//! order.add_product(ProductInput::new("1", "Camiseta", "29.90".parse::<Amount>()?))?;
//!
//! assert_eq!(order.products()[0].price, "2990");
//! ```

pub mod amount;
pub mod billing;
pub mod error;
pub mod order;
pub mod product;
pub mod request;
pub mod shipping;

// Re-exports for convenience
pub use amount::{convert_unit, format_subunits, Amount, Scale};
pub use billing::{billing_field_name, Billing, BillingField, BILLING_MAPPING};
pub use error::{CheckoutError, CheckoutResult};
pub use order::Order;
pub use product::{LineItem, ProductInput, DEFAULT_QUANTITY};
pub use request::OrderRequest;
pub use rust_decimal::Decimal;
pub use shipping::ShippingType;
