//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Money and percentage fields travel as strings
//! (`"19.90"`, `"50%"`) and are parsed by the domain value types on the way
//! in, so a malformed amount never reaches a handler.

pub mod account;
pub mod beneficiary;
pub mod health;
pub mod reward;
