//! Application layer
//!
//! Services coordinate between domain entities and ports.

pub mod produto_service;

pub use produto_service::ProdutoService;
