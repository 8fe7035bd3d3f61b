//! Domain entities

pub mod produto;

pub use produto::{Produto, ProdutoId};
