//! Domain layer: money value types, entities and repository ports.
//!
//! Everything in this module is pure and synchronous: no I/O, no shared
//! mutable state. Persistence happens behind the traits in [`repositories`],
//! implemented by `crate::infrastructure::persistence`.

pub mod entities;
pub mod error;
pub mod money;
pub mod repositories;

pub use error::DomainError;
pub use money::{MonetaryAmount, Percentage};
