/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BuyCoins SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod graphql;
pub mod http;
pub mod types;
pub mod webhook;

// Re-export commonly used types from graphql
pub use graphql::{Arguments, ComposedQuery, Operation, PaginationArgs};

// Re-export commonly used types from http
pub use http::{
    BuycoinsClient,
    BuycoinsError,
    ClientConfig,
    Credentials,
    MockTransport,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;

pub use webhook::{WEBHOOK_SIGNATURE_HEADER, WebhookVerifier, is_valid_webhook_request};
