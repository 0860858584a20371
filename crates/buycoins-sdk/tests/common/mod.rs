/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for buycoins-sdk tests

use std::sync::Arc;

use buycoins_sdk::{BuycoinsClient, ClientConfig, Credentials, MockTransport};
use serde_json::Value;
use wiremock::MockServer;

#[allow(dead_code)]
pub const GRAPHQL_PATH: &str = "/api/graphql";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Key pair whose Basic header is `Basic cGs6c2s=`
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("pk", "sk")
}

/// Client talking to the mock server over real HTTP
#[allow(dead_code)]
pub fn http_client(server: &MockServer) -> BuycoinsClient {
    let config = ClientConfig::default().with_endpoint(format!("{}{GRAPHQL_PATH}", server.uri()));
    BuycoinsClient::with_config(config, test_credentials()).expect("mock endpoint is a valid URL")
}

/// Client over an in-memory transport replying with `response`
#[allow(dead_code)]
pub fn mock_client(response: Value) -> (BuycoinsClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new(response));
    (BuycoinsClient::with_transport(transport.clone()), transport)
}

/// A `BuycoinsPrice` object as the API returns it
#[allow(dead_code)]
pub fn price_json() -> Value {
    serde_json::json!({
        "id": "QnV5Y29pbnNQcmljZS0x",
        "buyPricePerCoin": "21500000",
        "cryptocurrency": "bitcoin",
        "expiresAt": 1618000015,
        "maxBuy": "1.5",
        "maxSell": "1.2",
        "minBuy": "0.001",
        "minCoinAmount": "0.001",
        "minSell": "0.001",
        "sellPricePerCoin": "21000000",
        "status": "active"
    })
}
