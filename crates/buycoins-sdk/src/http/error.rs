/*
[INPUT]:  Error sources (HTTP, GraphQL error envelope, serialization, config)
[OUTPUT]: Structured error types with request context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or server error messages
*/

use thiserror::Error;

/// Main error type for the BuyCoins SDK
#[derive(Error, Debug)]
pub enum BuycoinsError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP request failed: {message}")]
    Http {
        status: Option<u16>,
        response: Option<String>,
        message: String,
    },

    /// GraphQL error with no more specific mapping
    #[error("API error: {message}")]
    Api { message: String },

    #[error("Balance is insufficient to buy {amount_to_buy} {cryptocurrency}")]
    InsufficientBalanceToBuy {
        cryptocurrency: String,
        amount_to_buy: String,
    },

    #[error("Balance is insufficient to sell {amount_to_sell} {cryptocurrency}")]
    InsufficientAmountToSell {
        cryptocurrency: String,
        amount_to_sell: String,
    },

    #[error("Balance is insufficient to withdraw {amount}")]
    InsufficientBalanceToWithdraw { amount: String },

    /// The payment was already processed
    #[error("Withdrawal can no longer be canceled")]
    WithdrawalCannotBeCanceled,

    /// Global object ID did not resolve to a node of the requested type
    #[error("Invalid node ID: {message}")]
    InvalidNodeId {
        node_id: Option<String>,
        gql_type: Option<String>,
        message: String,
    },

    /// Webhook body does not match its X-Webhook-Signature header
    #[error("Webhook signature does not match the request body")]
    InvalidWebhookSignature,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response envelope is missing the expected data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BuycoinsError {
    /// Check if the error is one of the typed business-rule failures
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            BuycoinsError::InsufficientBalanceToBuy { .. }
                | BuycoinsError::InsufficientAmountToSell { .. }
                | BuycoinsError::InsufficientBalanceToWithdraw { .. }
                | BuycoinsError::WithdrawalCannotBeCanceled
                | BuycoinsError::InvalidNodeId { .. }
        )
    }

    /// HTTP status code, if the failure carried one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            BuycoinsError::Http { status, .. } => *status,
            _ => None,
        }
    }

    /// Create an HTTP error from a non-success response
    pub fn http_error(status: u16, response: impl Into<String>) -> Self {
        BuycoinsError::Http {
            status: Some(status),
            response: Some(response.into()),
            message: format!("server responded with status {status}"),
        }
    }
}

impl From<reqwest::Error> for BuycoinsError {
    fn from(err: reqwest::Error) -> Self {
        BuycoinsError::Http {
            status: err.status().map(|status| status.as_u16()),
            response: None,
            message: err.to_string(),
        }
    }
}

/// Result type alias for BuyCoins operations
pub type Result<T> = std::result::Result<T, BuycoinsError>;
