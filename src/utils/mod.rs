//! Small shared helpers.

pub mod confirmation;
