//! # Order
//!
//! The cart order handed to a PagSeguro form serializer.

use crate::billing::Billing;
use crate::error::CheckoutResult;
use crate::product::{LineItem, ProductInput};
use crate::shipping::ShippingType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shopping-cart order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Application order id (sent as the transaction reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// Billing info, by semantic key
    #[serde(default)]
    pub billing: Billing,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<ShippingType>,

    /// Extra amount on the purchase (negative for discount), in reais
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_amount: Option<Decimal>,

    /// Normalized line items, in insertion order
    #[serde(default)]
    products: Vec<LineItem>,
}

impl Order {
    /// Create an empty order
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            billing: Billing::new(),
            shipping_type: None,
            extra_amount: None,
            products: Vec::new(),
        }
    }

    /// Create an empty order with a generated id
    pub fn with_random_id() -> Self {
        Self::new(Some(Uuid::new_v4().to_string()))
    }

    /// Get the order id
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the order id. Should uniquely identify the order in your application.
    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Remove all products. Billing, shipping type and extra amount are kept.
    pub fn reset(&mut self) {
        self.products = Vec::new();
    }

    /// Normalize a product and append it to the order.
    ///
    /// `quantity` defaults to 1. Unset `weight`, `shipping` and `fees`
    /// are stored as `"000"`. Fails if `id`, `description` or `price`
    /// is missing, or an amount is out of range; the order is left
    /// unchanged in that case.
    pub fn add_product(&mut self, input: ProductInput) -> CheckoutResult<()> {
        let item = LineItem::from_input(input)?;
        self.products.push(item);
        Ok(())
    }

    /// Line items, in the order they were added
    pub fn products(&self) -> &[LineItem] {
        &self.products
    }

    /// Set the shipping type
    pub fn set_shipping_type(&mut self, shipping_type: Option<ShippingType>) {
        self.shipping_type = shipping_type;
    }

    /// Set the extra amount (negative for discount)
    pub fn set_extra_amount(&mut self, amount: Option<Decimal>) {
        self.extra_amount = amount;
    }

    /// Builder: set billing info
    pub fn with_billing(mut self, billing: Billing) -> Self {
        self.billing = billing;
        self
    }

    /// Builder: set shipping type
    pub fn with_shipping_type(mut self, shipping_type: ShippingType) -> Self {
        self.shipping_type = Some(shipping_type);
        self
    }

    /// Builder: set extra amount
    pub fn with_extra_amount(mut self, amount: Decimal) -> Self {
        self.extra_amount = Some(amount);
        self
    }

    /// Check if order has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total units across all line items
    pub fn item_count(&self) -> u64 {
        self.products
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }
}
