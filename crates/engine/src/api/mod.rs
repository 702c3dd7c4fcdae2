//! API layer - HTTP entry points.

pub mod http;
mod pages;

pub use http::{router, routes, ApiError};
