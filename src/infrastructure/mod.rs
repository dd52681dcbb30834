//! Infrastructure layer: concrete adapters behind the domain ports.

pub mod persistence;
