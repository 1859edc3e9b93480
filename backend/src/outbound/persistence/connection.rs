//! Document-store client lifecycle.
//!
//! [`StoreConnection::connect`] parses the URI, builds one shared driver
//! client and proves the deployment answers a `ping` before returning. The
//! driver pools connections internally; the handle is cheap to clone.

use std::time::Duration;

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

/// Errors raised while connecting to or provisioning the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The URI could not be parsed or the deployment did not answer.
    #[error("failed to connect to document store: {message}")]
    Connect { message: String },

    /// A startup step exceeded its deadline.
    #[error("document store did not answer within {seconds}s during {step}")]
    Timeout { step: String, seconds: u64 },

    /// Collection or index provisioning failed.
    #[error("failed to provision document store: {message}")]
    Provision { message: String },
}

impl StoreError {
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    pub fn timeout(step: impl Into<String>, deadline: Duration) -> Self {
        Self::Timeout {
            step: step.into(),
            seconds: deadline.as_secs(),
        }
    }

    pub fn provision(message: impl Into<String>) -> Self {
        Self::Provision {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use bookstore::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017")
///     .with_database_name("catalogue")
///     .with_operation_timeout(Duration::from_secs(2));
/// assert_eq!(config.database_name(), "catalogue");
/// assert_eq!(config.collection_name(), "information");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database_name: String,
    collection_name: String,
    connect_timeout: Duration,
    operation_timeout: Duration,
}

impl StoreConfig {
    /// Configuration with the default database (`exercise-2`), collection
    /// (`information`), a 10 second connect budget and 5 second operation
    /// deadline.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: "exercise-2".to_owned(),
            collection_name: "information".to_owned(),
            connect_timeout: Duration::from_secs(10),
            operation_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }
}

/// Live client bound to the configured database.
#[derive(Clone, Debug)]
pub struct StoreConnection {
    client: Client,
    config: StoreConfig,
}

impl StoreConnection {
    /// Connect and ping the deployment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connect`] for an unparsable URI or a failed
    /// ping, and [`StoreError::Timeout`] when either step overruns the
    /// connect budget.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let budget = config.connect_timeout;
        let mut options = tokio::time::timeout(budget, ClientOptions::parse(config.uri.as_str()))
            .await
            .map_err(|_| StoreError::timeout("uri parsing", budget))?
            .map_err(|err| StoreError::connect(err.to_string()))?;
        options.app_name = Some("bookstore".to_owned());
        options.connect_timeout = Some(budget);
        options.server_selection_timeout = Some(budget);

        let client =
            Client::with_options(options).map_err(|err| StoreError::connect(err.to_string()))?;

        let admin = client.database("admin");
        tokio::time::timeout(budget, async { admin.run_command(doc! { "ping": 1 }).await })
            .await
            .map_err(|_| StoreError::timeout("ping", budget))?
            .map_err(|err| StoreError::connect(err.to_string()))?;
        info!(database = %config.database_name, "connected to document store");

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn database(&self) -> Database {
        self.client.database(&self.config.database_name)
    }

    pub(crate) fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.database().collection(&self.config.collection_name)
    }

    /// Close pooled connections and wait for in-flight operations.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("document store connection closed");
    }
}
