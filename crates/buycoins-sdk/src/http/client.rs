/*
[INPUT]:  HTTP configuration (endpoint, timeouts), API key pair
[OUTPUT]: BuycoinsClient ready to run composed operations
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::graphql::{Arguments, Operation};
use crate::http::dispatch;
use crate::http::transport::{HttpTransport, Transport};
use crate::http::{BuycoinsError, Result};

/// Production GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://backend.buycoins.tech/api/graphql";

pub const ENDPOINT_ENV: &str = "BUYCOINS_GRAPHQL_ENDPOINT";
pub const PUBLIC_KEY_ENV: &str = "BUYCOINS_PUBLIC_KEY";
pub const SECRET_KEY_ENV: &str = "BUYCOINS_SECRET_KEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Default configuration, with the endpoint overridden by `BUYCOINS_GRAPHQL_ENDPOINT` when set
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => Self::default().with_endpoint(endpoint),
            _ => Self::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// BuyCoins API key pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Read `BUYCOINS_PUBLIC_KEY` and `BUYCOINS_SECRET_KEY`
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .map_err(|_| BuycoinsError::Config(format!("{name} is not set")))
        };
        Ok(Self::new(read(PUBLIC_KEY_ENV)?, read(SECRET_KEY_ENV)?))
    }

    /// `Authorization` header value: `Basic base64(public_key:secret_key)`
    pub fn basic_authorization(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.public_key, self.secret_key));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Main client for the BuyCoins GraphQL API.
///
/// Cheap to clone; clones share the underlying transport and may be used
/// from multiple tasks concurrently.
#[derive(Debug, Clone)]
pub struct BuycoinsClient {
    transport: Arc<dyn Transport>,
}

impl BuycoinsClient {
    /// Create a client against the production endpoint
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let transport = HttpTransport::new(&config, &credentials)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client from `BUYCOINS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env(), Credentials::from_env()?)
    }

    /// Create a client over any transport (used for testing and custom HTTP stacks)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Compose `operation` with `args`, send it, and return the raw result
    /// found under `data.<operation name>`
    pub async fn execute(&self, operation: &Operation, args: &Arguments) -> Result<Value> {
        let query = operation.compose(args);
        dispatch::call(self.transport.as_ref(), operation, &query).await
    }

    pub(crate) async fn execute_as<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        args: &Arguments,
    ) -> Result<T> {
        let value = self.execute(operation, args).await?;
        Ok(serde_json::from_value(value)?)
    }
}
