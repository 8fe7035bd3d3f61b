//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Storage is provided by the embedding application.

pub mod repositories;

#[cfg(test)]
pub use repositories::MockProdutoRepository;
pub use repositories::ProdutoRepository;
