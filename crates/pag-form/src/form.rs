//! # Cart Checkout Form
//!
//! Turns an `Order` into the hidden inputs of a PagSeguro cart checkout
//! form (`tipo=CP`). Per-item fields are suffixed with the 1-based item
//! position, e.g. `item_valor_1`.

use crate::config::PagSeguroConfig;
use pag_core::{CheckoutError, CheckoutResult, Decimal, LineItem, Order};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Checkout type for a shopping cart
pub const CART_CHECKOUT_TYPE: &str = "CP";

/// Decimal places sent for `extras`
pub const EXTRA_AMOUNT_SCALE: u32 = 2;

/// A single form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builds PagSeguro form fields for orders
#[derive(Debug, Clone)]
pub struct FormEncoder {
    config: PagSeguroConfig,
}

impl FormEncoder {
    pub fn new(config: PagSeguroConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = PagSeguroConfig::from_env()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PagSeguroConfig {
        &self.config
    }

    /// Encode an order as ordered form fields.
    ///
    /// Merchant fields come first, then order-level fields, then items,
    /// then billing fields for recognised keys.
    #[instrument(skip(self, order), fields(order_id = ?order.id()))]
    pub fn encode(&self, order: &Order) -> CheckoutResult<Vec<FormField>> {
        if order.is_empty() {
            return Err(CheckoutError::InvalidRequest(
                "Order has no products".to_string(),
            ));
        }

        let mut fields = vec![
            FormField::new("email_cobranca", &self.config.email),
            FormField::new("tipo", CART_CHECKOUT_TYPE),
            FormField::new("moeda", &self.config.currency),
            FormField::new("encoding", &self.config.encoding),
        ];

        if let Some(id) = order.id() {
            fields.push(FormField::new("ref_transacao", id));
        }
        if let Some(shipping_type) = order.shipping_type {
            fields.push(FormField::new("tipo_frete", shipping_type.as_str()));
        }
        if let Some(extra) = order.extra_amount {
            fields.push(FormField::new("extras", format_extra_amount(extra)));
        }

        for (i, item) in order.products().iter().enumerate() {
            push_item_fields(&mut fields, i + 1, item);
        }

        let mut unmapped = 0;
        for (key, value) in order.billing.iter() {
            match pag_core::billing_field_name(key) {
                Some(name) => fields.push(FormField::new(name, value)),
                None => unmapped += 1,
            }
        }
        if unmapped > 0 {
            debug!("Skipped {} billing keys with no PagSeguro field", unmapped);
        }

        debug!(
            "Encoded order: {} items, {} fields",
            order.products().len(),
            fields.len()
        );

        Ok(fields)
    }

    /// Encode an order as `(name, value)` pairs, ready for form encoding
    pub fn encode_pairs(&self, order: &Order) -> CheckoutResult<Vec<(String, String)>> {
        Ok(self
            .encode(order)?
            .into_iter()
            .map(|field| (field.name, field.value))
            .collect())
    }
}

fn push_item_fields(fields: &mut Vec<FormField>, n: usize, item: &LineItem) {
    fields.push(FormField::new(format!("item_id_{}", n), &item.id));
    fields.push(FormField::new(format!("item_descr_{}", n), &item.description));
    fields.push(FormField::new(format!("item_quant_{}", n), item.quantity.to_string()));
    fields.push(FormField::new(format!("item_valor_{}", n), &item.price));

    // unset optional amounts are stored as "000"; don't send them
    for (prefix, value) in [
        ("item_peso", &item.weight),
        ("item_frete", &item.shipping),
        ("item_taxa", &item.fees),
    ] {
        if !is_zero(value) {
            fields.push(FormField::new(format!("{}_{}", prefix, n), value));
        }
    }
}

/// Render the extra amount with exactly two decimals, whatever its scale
fn format_extra_amount(amount: Decimal) -> String {
    let mut amount = amount;
    amount.rescale(EXTRA_AMOUNT_SCALE);
    amount.to_string()
}

fn is_zero(subunits: &str) -> bool {
    subunits.bytes().all(|b| b == b'0')
}
