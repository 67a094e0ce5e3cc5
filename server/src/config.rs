//! Environment configuration for the static host.
//!
//! `PORT` picks the listen port (default 8080) and `SITE_DIR` the directory
//! to serve (default: the workspace `site/` next to this crate). Both are
//! validated up front so a typo fails at startup instead of as a stream of
//! 404s.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("site directory not found: {}", .0.display())]
    MissingSiteDir(PathBuf),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub site_dir: PathBuf,
}

impl ServeConfig {
    /// Read `PORT` and `SITE_DIR` from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServeConfig::from_values`].
    pub fn from_env() -> Result<Self, ServeError> {
        let port = std::env::var("PORT").ok();
        let site_dir = std::env::var("SITE_DIR").ok();
        Self::from_values(port.as_deref(), site_dir.as_deref())
    }

    /// # Errors
    ///
    /// [`ServeError::InvalidPort`] when the port is not a `u16`, and
    /// [`ServeError::MissingSiteDir`] when the site directory does not exist.
    pub fn from_values(port: Option<&str>, site_dir: Option<&str>) -> Result<Self, ServeError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ServeError::InvalidPort(raw.to_owned()))?,
        };
        let site_dir = site_dir
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_site_dir, PathBuf::from);
        if !site_dir.is_dir() {
            return Err(ServeError::MissingSiteDir(site_dir));
        }
        Ok(Self { port, site_dir })
    }
}

pub fn default_site_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("site")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
