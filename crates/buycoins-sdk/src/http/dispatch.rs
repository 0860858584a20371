/*
[INPUT]:  Transport, operation descriptor, composed query
[OUTPUT]: Result payload under data.<operation> or a classified BuycoinsError
[POS]:    HTTP layer - call dispatcher and GraphQL error classification
[UPDATE]: When the server adds error messages worth a typed variant
*/

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::graphql::operations::{BUY, CANCEL_WITHDRAWAL, CREATE_WITHDRAWAL, SELL};
use crate::graphql::{ComposedQuery, Operation};
use crate::http::transport::Transport;
use crate::http::{BuycoinsError, Result};

/// Maps `(operation, exact error message)` to a typed error built from the request variables
#[derive(Debug, Clone, Copy)]
pub struct ErrorRule {
    pub operation: &'static str,
    pub message: &'static str,
    pub build: fn(&Map<String, Value>) -> BuycoinsError,
}

pub const ERROR_RULES: [ErrorRule; 4] = [
    ErrorRule {
        operation: BUY,
        message: "Your balance is insufficient for this purchase",
        build: insufficient_balance_to_buy,
    },
    ErrorRule {
        operation: CANCEL_WITHDRAWAL,
        message: "This payment has been processed and can not be canceled",
        build: withdrawal_cannot_be_canceled,
    },
    ErrorRule {
        operation: CREATE_WITHDRAWAL,
        message: "Balance is insufficient for this withdrawal",
        build: insufficient_balance_to_withdraw,
    },
    ErrorRule {
        operation: SELL,
        message: "Your balance is insufficient for this sale",
        build: insufficient_amount_to_sell,
    },
];

fn echoed(variables: &Map<String, Value>, name: &str) -> String {
    match variables.get(name) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn insufficient_balance_to_buy(variables: &Map<String, Value>) -> BuycoinsError {
    BuycoinsError::InsufficientBalanceToBuy {
        cryptocurrency: echoed(variables, "cryptocurrency"),
        amount_to_buy: echoed(variables, "coin_amount"),
    }
}

fn insufficient_amount_to_sell(variables: &Map<String, Value>) -> BuycoinsError {
    BuycoinsError::InsufficientAmountToSell {
        cryptocurrency: echoed(variables, "cryptocurrency"),
        amount_to_sell: echoed(variables, "coin_amount"),
    }
}

fn insufficient_balance_to_withdraw(variables: &Map<String, Value>) -> BuycoinsError {
    BuycoinsError::InsufficientBalanceToWithdraw {
        amount: echoed(variables, "amount"),
    }
}

fn withdrawal_cannot_be_canceled(_variables: &Map<String, Value>) -> BuycoinsError {
    BuycoinsError::WithdrawalCannotBeCanceled
}

/// Pick the typed error for a GraphQL error message, falling back to `Api`
pub fn classify(operation: &str, message: &str, variables: &Map<String, Value>) -> BuycoinsError {
    ERROR_RULES
        .iter()
        .find(|rule| rule.operation == operation && rule.message == message)
        .map(|rule| (rule.build)(variables))
        .unwrap_or_else(|| BuycoinsError::Api {
            message: message.to_string(),
        })
}

/// Send a composed query and interpret the response envelope
pub async fn call(
    transport: &dyn Transport,
    operation: &Operation,
    query: &ComposedQuery,
) -> Result<Value> {
    debug!(
        operation = operation.name(),
        variables = ?query.variables.keys().collect::<Vec<_>>(),
        "dispatching graphql operation"
    );
    let response = transport.execute(&query.document, &query.variables).await?;
    interpret(operation, &query.variables, response)
}

/// Classify GraphQL errors, extract `data.<result path>`, and reject empty node lookups
pub fn interpret(
    operation: &Operation,
    variables: &Map<String, Value>,
    mut response: Value,
) -> Result<Value> {
    if let Some(first) = response
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown GraphQL error");
        warn!(operation = operation.name(), error = message, "graphql error response");
        return Err(classify(operation.name(), message, variables));
    }

    let result = response
        .get_mut("data")
        .and_then(|data| data.get_mut(operation.result_path()))
        .map(Value::take)
        .ok_or_else(|| {
            BuycoinsError::InvalidResponse(format!(
                "response has no data.{}",
                operation.result_path()
            ))
        })?;

    if operation.is_node_lookup() && has_empty_node(&result) {
        return Err(BuycoinsError::InvalidNodeId {
            node_id: requested_ids(variables),
            gql_type: operation.lookup_type().map(str::to_string),
            message: "the ID does not resolve to a node of the requested type".to_string(),
        });
    }

    Ok(result)
}

fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

fn has_empty_node(result: &Value) -> bool {
    match result {
        Value::Array(items) => items.iter().any(is_empty_node),
        other => is_empty_node(other),
    }
}

fn requested_ids(variables: &Map<String, Value>) -> Option<String> {
    if let Some(id) = variables.get("id").and_then(Value::as_str) {
        return Some(id.to_string());
    }
    let ids = variables.get("ids")?.as_array()?;
    Some(
        ids.iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )
}
