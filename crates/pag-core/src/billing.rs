//! # Billing Fields
//!
//! Customer billing data and its mapping onto PagSeguro form inputs.
//!
//! Billing values are kept exactly as given. Only the twelve semantic keys
//! in [`BILLING_MAPPING`] have a form field; anything else is stored but
//! never sent.

use crate::error::CheckoutError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Semantic billing keys understood by PagSeguro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingField {
    Name,
    AddressZipcode,
    AddressStreet,
    AddressNumber,
    AddressComplement,
    AddressNeighbourhood,
    AddressCity,
    AddressState,
    AddressCountry,
    PhoneAreaCode,
    PhoneNumber,
    Email,
}

/// Semantic billing key to PagSeguro form field name
pub const BILLING_MAPPING: &[(BillingField, &str)] = &[
    (BillingField::Name, "cliente_nome"),
    (BillingField::AddressZipcode, "cliente_cep"),
    (BillingField::AddressStreet, "cliente_end"),
    (BillingField::AddressNumber, "cliente_num"),
    (BillingField::AddressComplement, "cliente_compl"),
    (BillingField::AddressNeighbourhood, "cliente_bairro"),
    (BillingField::AddressCity, "cliente_cidade"),
    (BillingField::AddressState, "cliente_uf"),
    (BillingField::AddressCountry, "cliente_pais"),
    (BillingField::PhoneAreaCode, "cliente_ddd"),
    (BillingField::PhoneNumber, "cliente_tel"),
    (BillingField::Email, "cliente_email"),
];

impl BillingField {
    /// Returns the semantic key (e.g. "address_zipcode")
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingField::Name => "name",
            BillingField::AddressZipcode => "address_zipcode",
            BillingField::AddressStreet => "address_street",
            BillingField::AddressNumber => "address_number",
            BillingField::AddressComplement => "address_complement",
            BillingField::AddressNeighbourhood => "address_neighbourhood",
            BillingField::AddressCity => "address_city",
            BillingField::AddressState => "address_state",
            BillingField::AddressCountry => "address_country",
            BillingField::PhoneAreaCode => "phone_area_code",
            BillingField::PhoneNumber => "phone_number",
            BillingField::Email => "email",
        }
    }

    /// Returns the PagSeguro form field name (e.g. "cliente_cep")
    pub fn form_field(&self) -> &'static str {
        BILLING_MAPPING
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }

    /// All recognised fields, in mapping order
    pub fn all() -> impl Iterator<Item = BillingField> {
        BILLING_MAPPING.iter().map(|(field, _)| *field)
    }
}

impl FromStr for BillingField {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BillingField::all()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CheckoutError::UnknownBillingField(s.to_string()))
    }
}

impl std::fmt::Display for BillingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the form field for a semantic billing key.
///
/// Unknown keys have no mapping.
pub fn billing_field_name(key: &str) -> Option<&'static str> {
    key.parse::<BillingField>().ok().map(|field| field.form_field())
}

/// Billing info attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Billing {
    values: BTreeMap<String, String>,
}

/// Billing values in order files; numbers (phone, street number) become text
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawValue> for String {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Text(text) => text,
            RawValue::Integer(n) => n.to_string(),
            RawValue::Float(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Billing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, RawValue>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl Billing {
    /// Create empty billing info
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value by semantic key. Unknown keys are accepted and kept.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Set a recognised field
    pub fn set_field(&mut self, field: BillingField, value: impl Into<String>) {
        self.set(field.as_str(), value);
    }

    /// Builder: set a value by semantic key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a value by semantic key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a recognised field
    pub fn field(&self, field: BillingField) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Remove a value, returning it if present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// All stored key/value pairs, including unknown keys
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `(form_field, value)` pairs for recognised keys only
    pub fn mapped_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.iter()
            .filter_map(|(key, value)| billing_field_name(key).map(|name| (name, value)))
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no billing info is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Billing
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_complete() {
        assert_eq!(BILLING_MAPPING.len(), 12);
        for field in BillingField::all() {
            assert!(field.form_field().starts_with("cliente_"));
            assert_eq!(field.as_str().parse::<BillingField>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_names() {
        assert_eq!(billing_field_name("name"), Some("cliente_nome"));
        assert_eq!(billing_field_name("address_zipcode"), Some("cliente_cep"));
        assert_eq!(billing_field_name("address_state"), Some("cliente_uf"));
        assert_eq!(billing_field_name("phone_area_code"), Some("cliente_ddd"));
        assert_eq!(billing_field_name("email"), Some("cliente_email"));
    }

    #[test]
    fn test_unknown_key_has_no_mapping() {
        assert_eq!(billing_field_name("favourite_colour"), None);
        assert!(matches!(
            "favourite_colour".parse::<BillingField>(),
            Err(CheckoutError::UnknownBillingField(_))
        ));
    }

    #[test]
    fn test_unknown_keys_kept_but_not_mapped() {
        let billing = Billing::new()
            .with("name", "Maria Silva")
            .with("email", "maria@example.com.br")
            .with("favourite_colour", "blue");

        assert_eq!(billing.len(), 3);
        assert_eq!(billing.get("favourite_colour"), Some("blue"));

        let mapped: Vec<_> = billing.mapped_fields().collect();
        assert_eq!(
            mapped,
            vec![
                ("cliente_email", "maria@example.com.br"),
                ("cliente_nome", "Maria Silva"),
            ]
        );
    }

    #[test]
    fn test_deserialize_billing() {
        let billing: Billing =
            serde_json::from_str(r#"{"address_city": "Recife", "address_state": "PE"}"#).unwrap();
        assert_eq!(billing.field(BillingField::AddressCity), Some("Recife"));
        assert_eq!(billing.field(BillingField::AddressState), Some("PE"));
    }

    #[test]
    fn test_deserialize_numeric_values() {
        let billing: Billing = toml::from_str(
            r#"
            phone_area_code = 11
            phone_number = 30000000
            address_number = "1578A"
            "#,
        )
        .unwrap();

        assert_eq!(billing.field(BillingField::PhoneAreaCode), Some("11"));
        assert_eq!(billing.field(BillingField::PhoneNumber), Some("30000000"));
        assert_eq!(billing.field(BillingField::AddressNumber), Some("1578A"));
    }
}
