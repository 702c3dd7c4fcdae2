//! Guildhall Engine library.
//!
//! This crate contains all server-side code for the Guildhall roster.
//!
//! ## Structure
//!
//! - `use_cases/` - Roster operations over the shared in-memory state
//! - `infrastructure/` - Persistence port, JSON file adapter, page templates
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment-driven settings

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;
