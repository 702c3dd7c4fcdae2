//! Server configuration.
//!
//! Every setting has a default matching the fixed layout of a checkout
//! (port 8080, `aventuriers.json`, `templates/`, `static/` in the working
//! directory). Environment variables override them.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ROSTER_PATH: &str = "aventuriers.json";
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON file mirroring the roster.
    pub roster_path: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = get("SERVER_PORT")
            .or_else(|| get("PORT"))
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            roster_path: get("ROSTER_PATH")
                .unwrap_or_else(|| DEFAULT_ROSTER_PATH.into())
                .into(),
            templates_dir: get("TEMPLATES_DIR")
                .unwrap_or_else(|| DEFAULT_TEMPLATES_DIR.into())
                .into(),
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
                .into(),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
