//! Produto service
//!
//! Validates products before handing them to the repository. Checks run in a
//! fixed order: missing argument, then record existence, then fields.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use crate::domain::entities::{Produto, ProdutoId};
use crate::domain::ports::ProdutoRepository;
use crate::error::AppError;

/// Service for managing products
pub struct ProdutoService<R>
where
    R: ProdutoRepository,
{
    produtos: Arc<R>,
}

impl<R> ProdutoService<R>
where
    R: ProdutoRepository,
{
    pub fn new(produtos: Arc<R>) -> Self {
        Self { produtos }
    }

    /// Fetch a product by ID, passing the repository result through as-is
    #[instrument(skip(self))]
    pub async fn get_produto(&self, id: ProdutoId) -> Result<Option<Produto>, AppError> {
        let produto = self.produtos.get_by_id(id).await?;
        tracing::debug!(found = produto.is_some(), "Looked up produto");
        Ok(produto)
    }

    /// List every product
    #[instrument(skip(self))]
    pub async fn obter_todos_produtos(&self) -> Result<Vec<Produto>, AppError> {
        let produtos = self.produtos.get_all().await?;
        tracing::debug!(count = produtos.len(), "Listed produtos");
        Ok(produtos)
    }

    /// Save a new product
    ///
    /// Fails with `NullArgument` when no product is given and with
    /// `InvalidArgument` when the name is missing/blank or the price is
    /// negative. The repository is only called when every check passes.
    #[instrument(skip_all, fields(id = ?produto.map(|p| p.id)))]
    pub async fn salvar_produto(&self, produto: Option<&Produto>) -> Result<(), AppError> {
        let produto = produto.ok_or(AppError::NullArgument("produto"))?;

        validate_fields(produto)?;

        self.produtos.save(produto).await?;
        tracing::info!("Produto saved");
        Ok(())
    }

    /// Update an existing product
    ///
    /// Same rules as [`Self::salvar_produto`], plus `InvalidOperation` when no
    /// record with the product's ID exists. The existence check runs before
    /// field validation.
    #[instrument(skip_all, fields(id = ?produto.map(|p| p.id)))]
    pub async fn atualizar_produto(&self, produto: Option<&Produto>) -> Result<(), AppError> {
        let produto = produto.ok_or(AppError::NullArgument("produto"))?;

        self.ensure_exists(produto.id).await?;
        validate_fields(produto)?;

        self.produtos.update(produto).await?;
        tracing::info!("Produto updated");
        Ok(())
    }

    /// Delete a product by ID
    #[instrument(skip(self))]
    pub async fn excluir_produto(&self, id: ProdutoId) -> Result<(), AppError> {
        self.ensure_exists(id).await?;

        self.produtos.delete(id).await?;
        tracing::info!("Produto deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: ProdutoId) -> Result<(), AppError> {
        if self.produtos.get_by_id(id).await?.is_none() {
            tracing::warn!(%id, "Produto does not exist");
            return Err(AppError::InvalidOperation(format!(
                "Produto {} does not exist",
                id
            )));
        }
        Ok(())
    }
}

fn validate_fields(produto: &Produto) -> Result<(), AppError> {
    let blank_name = produto
        .name
        .as_deref()
        .map_or(true, |name| name.trim().is_empty());
    if blank_name {
        tracing::warn!(id = %produto.id, "Rejected produto without a name");
        return Err(AppError::InvalidArgument(format!(
            "Produto {} must have a non-blank name",
            produto.id
        )));
    }

    if produto.price < Decimal::ZERO {
        tracing::warn!(id = %produto.id, price = %produto.price, "Rejected negative price");
        return Err(AppError::InvalidArgument(format!(
            "Produto {} has negative price {}",
            produto.id, produto.price
        )));
    }

    Ok(())
}
