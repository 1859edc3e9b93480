//! Server configuration loaded via OrthoConfig.
//!
//! Every key can come from the command line, a configuration file or a
//! `BOOKSTORE_*` environment variable. The database URI additionally falls
//! back to the bare `DATABASE_URI` variable.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::StoreConfig;

/// Environment variable consulted when `database_uri` is not configured.
pub const DATABASE_URI_FALLBACK_VAR: &str = "DATABASE_URI";

const DEFAULT_DATABASE_NAME: &str = "exercise-2";
const DEFAULT_COLLECTION_NAME: &str = "information";
const DEFAULT_PORT: u16 = 3030;
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Lower bound for both deadlines.
const MIN_TIMEOUT_SECS: u64 = 1;

/// Configuration values for the catalogue server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSTORE")]
pub struct BookstoreSettings {
    /// Document store connection string.
    pub database_uri: Option<String>,
    /// Database holding the catalogue collection.
    pub database_name: Option<String>,
    /// Collection holding one document per book.
    pub collection_name: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Deadline for every store round trip, in seconds.
    pub operation_timeout_secs: Option<u64>,
    /// Budget for connecting and the initial ping, in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Seed the catalogue at startup.
    pub seed_enabled: Option<bool>,
    /// JSON seed catalogue replacing the built-in books.
    pub seed_path: Option<PathBuf>,
    /// Create the unique (name, author, pages, year) index.
    pub enforce_unique_index: Option<bool>,
}

impl BookstoreSettings {
    /// Configured URI, else `DATABASE_URI`; blank values count as unset.
    pub fn database_uri(&self) -> Option<String> {
        self.database_uri
            .clone()
            .or_else(|| std::env::var(DATABASE_URI_FALLBACK_VAR).ok())
            .filter(|uri| !uri.trim().is_empty())
    }

    pub fn database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }

    pub fn collection_name(&self) -> &str {
        self.collection_name
            .as_deref()
            .unwrap_or(DEFAULT_COLLECTION_NAME)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Per-call store deadline, never below one second.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(
            self.operation_timeout_secs
                .unwrap_or(DEFAULT_OPERATION_TIMEOUT_SECS)
                .max(MIN_TIMEOUT_SECS),
        )
    }

    /// Connect and ping budget, never below one second.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS)
                .max(MIN_TIMEOUT_SECS),
        )
    }

    pub fn seed_enabled(&self) -> bool {
        self.seed_enabled.unwrap_or(true)
    }

    pub fn enforce_unique_index(&self) -> bool {
        self.enforce_unique_index.unwrap_or(true)
    }

    /// Store configuration for `uri` with the configured names and deadlines.
    pub fn store_config(&self, uri: impl Into<String>) -> StoreConfig {
        StoreConfig::new(uri)
            .with_database_name(self.database_name())
            .with_collection_name(self.collection_name())
            .with_connect_timeout(self.connect_timeout())
            .with_operation_timeout(self.operation_timeout())
    }
}
