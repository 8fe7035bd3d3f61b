//! Mock implementations of port traits
//!
//! In-memory implementations that can be seeded for testing. Every call is
//! recorded so tests can verify what the service forwarded.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Produto, ProdutoId};
use crate::domain::ports::ProdutoRepository;
use crate::error::DomainError;

/// A call received by [`InMemoryProdutoRepository`]
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    GetById(ProdutoId),
    GetAll,
    Save(Produto),
    Update(Produto),
    Delete(ProdutoId),
}

// ============================================================================
// In-Memory Produto Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProdutoRepository {
    produtos: Arc<RwLock<BTreeMap<ProdutoId, Produto>>>,
    calls: Arc<RwLock<Vec<RepositoryCall>>>,
    should_fail: bool,
}

impl InMemoryProdutoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_produto(self, produto: Produto) -> Self {
        self.produtos.write().unwrap().insert(produto.id, produto);
        self
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of recorded calls matching `predicate`
    pub fn count_calls(&self, predicate: impl Fn(&RepositoryCall) -> bool) -> usize {
        self.calls.read().unwrap().iter().filter(|c| predicate(*c)).count()
    }

    /// Number of mutating calls (save, update, delete)
    pub fn mutation_count(&self) -> usize {
        self.count_calls(|c| {
            matches!(
                c,
                RepositoryCall::Save(_) | RepositoryCall::Update(_) | RepositoryCall::Delete(_)
            )
        })
    }

    /// Current contents of the store
    pub fn stored(&self, id: ProdutoId) -> Option<Produto> {
        self.produtos.read().unwrap().get(&id).cloned()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), DomainError> {
        self.calls.write().unwrap().push(call);
        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProdutoRepository for InMemoryProdutoRepository {
    async fn get_by_id(&self, id: ProdutoId) -> Result<Option<Produto>, DomainError> {
        self.record(RepositoryCall::GetById(id))?;
        Ok(self.produtos.read().unwrap().get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Produto>, DomainError> {
        self.record(RepositoryCall::GetAll)?;
        Ok(self.produtos.read().unwrap().values().cloned().collect())
    }

    async fn save(&self, produto: &Produto) -> Result<(), DomainError> {
        self.record(RepositoryCall::Save(produto.clone()))?;
        self.produtos
            .write()
            .unwrap()
            .insert(produto.id, produto.clone());
        Ok(())
    }

    async fn update(&self, produto: &Produto) -> Result<(), DomainError> {
        self.record(RepositoryCall::Update(produto.clone()))?;
        let mut produtos = self.produtos.write().unwrap();
        match produtos.get_mut(&produto.id) {
            Some(existing) => {
                *existing = produto.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Produto {} not found",
                produto.id
            ))),
        }
    }

    async fn delete(&self, id: ProdutoId) -> Result<(), DomainError> {
        self.record(RepositoryCall::Delete(id))?;
        self.produtos.write().unwrap().remove(&id);
        Ok(())
    }
}
