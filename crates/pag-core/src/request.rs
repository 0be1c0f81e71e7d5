//! # Order Requests
//!
//! Orders described in TOML or JSON, e.g. from a cart service or a file
//! on disk:
//!
//! ```toml
//! id = "ord-1001"
//! shipping_type = "EN"
//! extra_amount = -5.00
//!
//! [billing]
//! name = "Maria Silva"
//! email = "maria@example.com.br"
//!
//! [[products]]
//! id = 1
//! description = "Camiseta"
//! price = 29.90
//! ```

use crate::billing::Billing;
use crate::error::CheckoutResult;
use crate::order::Order;
use crate::product::ProductInput;
use crate::shipping::ShippingType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Un-normalized order data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub billing: Billing,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<ShippingType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_amount: Option<Decimal>,

    #[serde(default)]
    pub products: Vec<ProductInput>,
}

impl OrderRequest {
    /// Parse a request from TOML
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Parse a request from JSON
    pub fn from_json(json: &str) -> CheckoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the order, adding products in request order.
    ///
    /// Stops at the first product that cannot be added.
    pub fn into_order(self) -> CheckoutResult<Order> {
        let mut order = Order::new(self.id).with_billing(self.billing);
        order.set_shipping_type(self.shipping_type);
        order.set_extra_amount(self.extra_amount);

        for product in self.products {
            order.add_product(product)?;
        }

        Ok(order)
    }
}

impl TryFrom<OrderRequest> for Order {
    type Error = crate::error::CheckoutError;

    fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
        request.into_order()
    }
}
