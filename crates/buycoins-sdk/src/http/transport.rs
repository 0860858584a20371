/*
[INPUT]:  GraphQL document text, variables map, Basic auth header
[OUTPUT]: Decoded JSON response envelope
[POS]:    HTTP layer - pluggable transport seam
[UPDATE]: When changing request encoding or HTTP behavior
*/

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::http::client::{ClientConfig, Credentials};
use crate::http::{BuycoinsError, Result};

/// Sends one GraphQL request and returns the decoded response body.
///
/// Implementations report transport failures and non-success statuses as
/// errors; GraphQL `errors` in a successful body are left for the caller.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn execute(&self, document: &str, variables: &Map<String, Value>) -> Result<Value>;
}

#[derive(Serialize)]
struct RequestBody<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

/// reqwest-backed transport posting JSON to the GraphQL endpoint
pub struct HttpTransport {
    http_client: Client,
    endpoint: Url,
    authorization: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig, credentials: &Credentials) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
            authorization: credentials.basic_authorization(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("authorization", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, document: &str, variables: &Map<String, Value>) -> Result<Value> {
        let body = serde_json::to_vec(&RequestBody {
            query: document,
            variables,
        })?;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, &self.authorization)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "graphql response received");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BuycoinsError::http_error(status.as_u16(), text));
        }

        response.json::<Value>().await.map_err(|err| BuycoinsError::Api {
            message: format!("response body is not valid JSON: {err}"),
        })
    }
}

/// Request captured by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub document: String,
    pub variables: Map<String, Value>,
}

/// Mock transport for testing: records every request and replies with a canned body
#[derive(Debug)]
pub struct MockTransport {
    response: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, document: &str, variables: &Map<String, Value>) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                document: document.to_string(),
                variables: variables.clone(),
            });
        }
        Ok(self.response.clone())
    }
}
