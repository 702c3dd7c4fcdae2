//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod persistence;
pub mod ports;
pub mod templates;
