//! Repository port traits
//!
//! These traits define the interface for data persistence.

use async_trait::async_trait;

use crate::domain::entities::{Produto, ProdutoId};
use crate::error::DomainError;

/// Repository for Produto entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProdutoRepository: Send + Sync {
    /// Find a product by ID
    async fn get_by_id(&self, id: ProdutoId) -> Result<Option<Produto>, DomainError>;

    /// List every product
    async fn get_all(&self) -> Result<Vec<Produto>, DomainError>;

    /// Persist a new product
    async fn save(&self, produto: &Produto) -> Result<(), DomainError>;

    /// Replace an existing product
    async fn update(&self, produto: &Produto) -> Result<(), DomainError>;

    /// Remove a product
    async fn delete(&self, id: ProdutoId) -> Result<(), DomainError>;
}
