//! Produto domain entity
//!
//! A product in the catalogue. Field rules (present name, non-negative price)
//! are checked by the service on save/update, not on construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier for a product, supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProdutoId(pub i64);

impl From<i64> for ProdutoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProdutoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: ProdutoId,
    /// `None` when the caller did not supply a name
    pub name: Option<String>,
    pub price: Decimal,
}

impl Produto {
    pub fn new(id: i64, name: Option<String>, price: impl Into<Decimal>) -> Self {
        Self {
            id: ProdutoId(id),
            name,
            price: price.into(),
        }
    }

    /// Build a product with a name
    pub fn named(id: i64, name: impl Into<String>, price: impl Into<Decimal>) -> Self {
        Self::new(id, Some(name.into()), price)
    }
}

impl std::fmt::Display for Produto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("<sem nome>");
        write!(f, "#{} {} ({})", self.id, name, self.price)
    }
}
