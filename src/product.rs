//! Product records handed over by the ingestion layer
//!
//! The engine treats products as opaque: it orders and repeats them, and asks
//! for a short display token when drawing a preview. Field names and values
//! are never interpreted beyond that.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fields tried, in order, for a product's display token
const TOKEN_FIELDS: [&str; 4] = ["id", "sku", "barcode", "code"];

/// Errors from reading a product list
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("failed to read products: {0}")]
    Io(#[from] std::io::Error),

    #[error("products are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of product objects")]
    NotAnArray,
}

/// One product as a bag of named values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    pub fields: BTreeMap<String, Value>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Display token from the first identifying field present
    pub fn token(&self) -> Option<String> {
        TOKEN_FIELDS.iter().find_map(|name| match self.fields.get(*name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}

/// Identifier of a selected product, as carried through the plan
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ids for a product selection, falling back to the 1-based position
pub fn product_ids(products: &[Product]) -> Vec<ProductId> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| ProductId(p.token().unwrap_or_else(|| (i + 1).to_string())))
        .collect()
}

/// Parse a JSON array of product objects
pub fn parse_products(content: &str) -> Result<Vec<Product>, ProductError> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(ProductError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Read products from a JSON file
pub fn load_products(path: &Path) -> Result<Vec<Product>, ProductError> {
    let content = std::fs::read_to_string(path)?;
    parse_products(&content)
}

/// Read products from any reader, such as stdin
pub fn read_products(mut reader: impl Read) -> Result<Vec<Product>, ProductError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_products(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products() {
        let products = parse_products(
            r#"[{"sku": "A-1", "price": 3.5}, {"barcode": 4006381333931}, {"name": "plain"}]"#,
        )
        .expect("Should parse");
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].token().as_deref(), Some("A-1"));
        assert_eq!(products[1].token().as_deref(), Some("4006381333931"));
        assert_eq!(products[2].token(), None);
    }

    #[test]
    fn test_token_field_priority() {
        let p = Product::new().with_field("sku", "S").with_field("id", "I");
        assert_eq!(p.token().as_deref(), Some("I"));
    }

    #[test]
    fn test_ids_fall_back_to_position() {
        let products = vec![
            Product::new().with_field("sku", "A"),
            Product::new().with_field("name", "x"),
        ];
        let ids = product_ids(&products);
        assert_eq!(ids, vec![ProductId::new("A"), ProductId::new("2")]);
    }

    #[test]
    fn test_not_an_array() {
        let result = parse_products(r#"{"sku": "A"}"#);
        assert!(matches!(result, Err(ProductError::NotAnArray)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_products("[{"), Err(ProductError::Json(_))));
    }

    #[test]
    fn test_read_from_reader() {
        let products = read_products("[{\"id\": 7}]".as_bytes()).unwrap();
        assert_eq!(product_ids(&products), vec![ProductId::new("7")]);
    }
}
