/*
[INPUT]:  Mock GraphQL HTTP responses
[OUTPUT]: Test results for the HTTP transport and dispatcher
[POS]:    Integration tests - GraphQL over HTTP
[UPDATE]: When request encoding or error mapping changes
*/

mod common;

use buycoins_sdk::{
    BuycoinsClient, BuycoinsError, BuycoinsType, ClientConfig, Credentials, Cryptocurrency,
    PaginationArgs, TradeRequest,
};
use common::{GRAPHQL_PATH, http_client, price_json, setup_mock_server, test_credentials};
use rust_decimal::Decimal;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(BuycoinsClient::new(test_credentials()));
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default().with_endpoint("http://localhost:4000/graphql");
    let _client = assert_ok!(BuycoinsClient::with_config(config, Credentials::new("a", "b")));
}

#[tokio::test]
async fn test_request_carries_basic_auth_and_variables() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("authorization", "Basic cGs6c2s="))
        .and(body_partial_json(json!({ "variables": { "cryptocurrency": "bitcoin" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "getBalances": [
                { "id": "QWNjb3VudC0x", "cryptocurrency": "bitcoin", "confirmedBalance": "0.25" }
            ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server);
    let balances = assert_ok!(client.get_balances(Some(Cryptocurrency::Bitcoin)).await);

    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].confirmed_balance, Decimal::new(25, 2));
}

#[tokio::test]
async fn test_query_document_is_posted() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "query": "query getBalances { getBalances { id cryptocurrency confirmedBalance } }",
            "variables": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "getBalances": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server);
    let balances = assert_ok!(client.get_balances(None).await);
    assert!(balances.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_http_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.get_prices(None).await.unwrap_err();

    assert_eq!(err.http_status(), Some(500));
    match err {
        BuycoinsError::Http { response, .. } => {
            assert_eq!(response.as_deref(), Some("upstream exploded"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_maps_to_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.get_prices(None).await.unwrap_err();
    assert!(matches!(err, BuycoinsError::Api { .. }));
}

#[tokio::test]
async fn test_buy_insufficient_balance() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": { "price": "QnV5Y29pbnNQcmljZS0x", "coin_amount": "10", "cryptocurrency": "bitcoin" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{
                "message": "Your balance is insufficient for this purchase",
                "locations": [{ "line": 1, "column": 90 }],
                "path": ["buy"]
            }],
            "data": { "buy": null }
        })))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let request = TradeRequest::new("QnV5Y29pbnNQcmljZS0x", Decimal::new(10, 0));
    let err = client.buy(&request).await.unwrap_err();

    assert!(err.is_domain_error());
    match err {
        BuycoinsError::InsufficientBalanceToBuy {
            cryptocurrency,
            amount_to_buy,
        } => {
            assert_eq!(cryptocurrency, "bitcoin");
            assert_eq!(amount_to_buy, "10");
        }
        other => panic!("expected InsufficientBalanceToBuy, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unmatched_error_message_is_passed_through() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Invalid cryptocurrency" }]
        })))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.get_balances(None).await.unwrap_err();

    match err {
        BuycoinsError::Api { message } => assert_eq!(message, "Invalid cryptocurrency"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_node_with_empty_result_is_invalid_id() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "id": "UGF5bWVudC0x" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "node": {} }
        })))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.node("UGF5bWVudC0x", BuycoinsType::Order).await.unwrap_err();

    match err {
        BuycoinsError::InvalidNodeId {
            node_id, gql_type, ..
        } => {
            assert_eq!(node_id.as_deref(), Some("UGF5bWVudC0x"));
            assert_eq!(gql_type.as_deref(), Some("Order"));
        }
        other => panic!("expected InvalidNodeId, got {other:?}"),
    }
}

#[tokio::test]
async fn test_market_book_pagination() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "first": 1, "after": "MA" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "getMarketBook": {
                "dynamicPriceExpiry": 1618000030,
                "orders": {
                    "pageInfo": {
                        "endCursor": "MQ",
                        "hasNextPage": true,
                        "hasPreviousPage": true,
                        "startCursor": "MQ"
                    },
                    "edges": [{
                        "cursor": "MQ",
                        "node": {
                            "id": "UG9zdE9yZGVyLTE=",
                            "coinAmount": "0.05",
                            "createdAt": 1618000000,
                            "cryptocurrency": "bitcoin",
                            "dynamicExchangeRate": null,
                            "pricePerCoin": "21400000",
                            "priceType": "static",
                            "side": "sell",
                            "staticPrice": "21400000",
                            "status": "active"
                        }
                    }]
                }
            } }
        })))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let pagination = PaginationArgs::new().with_first(1).with_after("MA");
    let book = assert_ok!(client.get_market_book(None, &pagination).await);

    assert_eq!(book.orders.edges.len(), 1);
    assert_eq!(book.orders.next_cursor(), Some("MQ"));
    let order = book.orders.nodes().next().expect("one order on the page");
    assert_eq!(order.price_per_coin, Decimal::new(21_400_000, 0));
}

#[tokio::test]
async fn test_malformed_payload_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "sell": {
                "id": "T3JkZXItMQ==",
                "createdAt": 1618000001,
                "cryptocurrency": "bitcoin",
                "filledCoinAmount": "0.01",
                "price": price_json(),
                "side": "sell",
                "status": "processing_is_not_a_status"
            } }
        })))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let request = TradeRequest::new("QnV5Y29pbnNQcmljZS0x", Decimal::new(1, 2));
    let err = client.sell(&request).await.unwrap_err();

    assert!(matches!(err, BuycoinsError::Serialization(_)));
}
