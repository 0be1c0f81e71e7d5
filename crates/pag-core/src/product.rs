//! # Line Items
//!
//! `ProductInput` is what the caller hands to `Order::add_product`;
//! `LineItem` is the normalized record the order stores, with every
//! amount already converted to a PagSeguro subunit string.

use crate::amount::{convert_unit, Amount, Scale};
use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Default quantity when the caller does not give one
pub const DEFAULT_QUANTITY: u32 = 1;

/// Caller-supplied product data, before normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Product id in the caller's catalog (required)
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,

    /// Human-readable label (required)
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price in reais, or cents if integer (required)
    #[serde(default)]
    pub price: Option<Amount>,

    #[serde(default)]
    pub quantity: Option<u32>,

    /// Weight in kilograms, or grams if integer
    #[serde(default)]
    pub weight: Option<Amount>,

    /// Shipping cost in reais, or cents if integer
    #[serde(default)]
    pub shipping: Option<Amount>,

    /// Extra fees in reais, or cents if integer
    #[serde(default)]
    pub fees: Option<Amount>,
}

impl ProductInput {
    /// Create input with the three required fields
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Amount>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            description: Some(description.into()),
            price: Some(price.into()),
            ..Self::default()
        }
    }

    /// Defaults applied under every input
    pub fn defaults() -> Self {
        Self {
            quantity: Some(DEFAULT_QUANTITY),
            ..Self::default()
        }
    }

    /// Builder: set quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Builder: set weight
    pub fn with_weight(mut self, weight: impl Into<Amount>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Builder: set shipping cost
    pub fn with_shipping(mut self, shipping: impl Into<Amount>) -> Self {
        self.shipping = Some(shipping.into());
        self
    }

    /// Builder: set fees
    pub fn with_fees(mut self, fees: impl Into<Amount>) -> Self {
        self.fees = Some(fees.into());
        self
    }

    /// Merge `self` over `defaults`; any field set on `self` wins.
    pub fn merged_over(self, defaults: ProductInput) -> ProductInput {
        ProductInput {
            id: self.id.or(defaults.id),
            description: self.description.or(defaults.description),
            price: self.price.or(defaults.price),
            quantity: self.quantity.or(defaults.quantity),
            weight: self.weight.or(defaults.weight),
            shipping: self.shipping.or(defaults.shipping),
            fees: self.fees.or(defaults.fees),
        }
    }
}

/// A normalized line item in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product id in the caller's catalog
    pub id: String,

    /// Product label
    pub description: String,

    /// Unit price in cents
    pub price: String,

    pub quantity: u32,

    /// Weight in grams
    pub weight: String,

    /// Shipping cost in cents
    pub shipping: String,

    /// Fees in cents
    pub fees: String,
}

impl LineItem {
    /// Apply defaults, check required fields and convert every amount.
    pub fn from_input(input: ProductInput) -> CheckoutResult<Self> {
        let input = input.merged_over(ProductInput::defaults());

        let id = input.id.ok_or(CheckoutError::MissingField { field: "id" })?;
        let description = input
            .description
            .ok_or(CheckoutError::MissingField { field: "description" })?;
        let price = input
            .price
            .ok_or(CheckoutError::MissingField { field: "price" })?;

        Ok(Self {
            id,
            description,
            shipping: convert_unit(input.shipping.as_ref(), Scale::Cents)?,
            fees: convert_unit(input.fees.as_ref(), Scale::Cents)?,
            price: convert_unit(Some(&price), Scale::Cents)?,
            weight: convert_unit(input.weight.as_ref(), Scale::Grams)?,
            quantity: input.quantity.unwrap_or(DEFAULT_QUANTITY),
        })
    }
}

/// Accept `id = 42` as well as `id = "42"`
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Integer(n) => n.to_string(),
    }))
}
