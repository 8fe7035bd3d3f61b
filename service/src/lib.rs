//! Produto service
//!
//! A validating service for product CRUD. Persistence is delegated to an
//! injected `ProdutoRepository`; the crate ships no storage of its own.
//! Uses hexagonal (ports & adapters) layering.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;



pub use app::ProdutoService;
pub use config::Config;
pub use domain::entities::{Produto, ProdutoId};
pub use domain::ports::ProdutoRepository;
pub use error::{AppError, DomainError, ErrorKind};
pub use telemetry::init_tracing;
