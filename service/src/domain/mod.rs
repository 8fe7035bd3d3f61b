//! Domain layer
//!
//! - `entities`: Domain models
//! - `ports`: Trait definitions for external collaborators

pub mod entities;
pub mod ports;
