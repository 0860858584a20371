/*
[INPUT]:  GraphQL enum definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new enum values added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cryptocurrency {
    #[default]
    Bitcoin,
    Ethereum,
    Litecoin,
    UsdCoin,
    UsdTether,
    NairaToken,
}

impl Cryptocurrency {
    /// Wire value used in GraphQL variables
    pub fn as_str(self) -> &'static str {
        match self {
            Cryptocurrency::Bitcoin => "bitcoin",
            Cryptocurrency::Ethereum => "ethereum",
            Cryptocurrency::Litecoin => "litecoin",
            Cryptocurrency::UsdCoin => "usd_coin",
            Cryptocurrency::UsdTether => "usd_tether",
            Cryptocurrency::NairaToken => "naira_token",
        }
    }
}

impl fmt::Display for Cryptocurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Static,
    Dynamic,
}

impl PriceType {
    pub fn as_str(self) -> &'static str {
        match self {
            PriceType::Static => "static",
            PriceType::Dynamic => "dynamic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GetOrdersStatus {
    Open,
    Completed,
}

impl GetOrdersStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GetOrdersStatus::Open => "open",
            GetOrdersStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuycoinsPriceStatus {
    Expired,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostOrderStatus {
    Inactive,
    Active,
    PendingDeactivation,
    PaymentPending,
    PaymentProcessing,
    #[serde(alias = "canceled")]
    Cancelled,
    Expired,
    Completed,
    Open,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
    Retried,
    Initiated,
    ReadyForProcessing,
    #[serde(alias = "cancelled")]
    Canceled,
    Flagged,
    Returned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnchainTransferRequestStatus {
    Unconfirmed,
    Confirmed,
    Flagged,
    Failed,
    Expired,
    Processed,
    ReadyForProcessing,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountType {
    Withdrawal,
    Deposit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    #[serde(alias = "cancelled")]
    Canceled,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    Incoming,
    Outgoing,
}

/// Event names delivered to webhook endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "coins.incoming")]
    CoinsIncoming,
    #[serde(rename = "bank_deposit.incoming")]
    BankDepositIncoming,
    #[serde(rename = "order.succeeded")]
    OrderSucceeded,
    #[serde(rename = "order.failed")]
    OrderFailed,
}

/// GraphQL object types that implement the `Node` interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuycoinsType {
    Account,
    BankAccount,
    PostOrder,
    Payment,
    BuycoinsPrice,
    Address,
    DepositAccount,
    Order,
    OnchainTransferRequest,
    Transaction,
}

impl BuycoinsType {
    /// GraphQL type name, used as the inline fragment type condition
    pub fn as_str(self) -> &'static str {
        match self {
            BuycoinsType::Account => "Account",
            BuycoinsType::BankAccount => "BankAccount",
            BuycoinsType::PostOrder => "PostOrder",
            BuycoinsType::Payment => "Payment",
            BuycoinsType::BuycoinsPrice => "BuycoinsPrice",
            BuycoinsType::Address => "Address",
            BuycoinsType::DepositAccount => "DepositAccount",
            BuycoinsType::Order => "Order",
            BuycoinsType::OnchainTransferRequest => "OnchainTransferRequest",
            BuycoinsType::Transaction => "Transaction",
        }
    }
}

impl fmt::Display for BuycoinsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cryptocurrency_wire_values_match_serde() {
        for currency in [
            Cryptocurrency::Bitcoin,
            Cryptocurrency::Ethereum,
            Cryptocurrency::Litecoin,
            Cryptocurrency::UsdCoin,
            Cryptocurrency::UsdTether,
            Cryptocurrency::NairaToken,
        ] {
            let encoded = serde_json::to_value(currency).unwrap();
            assert_eq!(encoded, serde_json::Value::from(currency.as_str()));
        }
    }

    #[test]
    fn buycoins_type_serializes_as_graphql_type_name() {
        let encoded = serde_json::to_value(BuycoinsType::OnchainTransferRequest).unwrap();
        assert_eq!(encoded, "OnchainTransferRequest");
        assert_eq!(BuycoinsType::BuycoinsPrice.to_string(), "BuycoinsPrice");
    }

    #[test]
    fn webhook_event_type_uses_dotted_names() {
        let event: WebhookEventType = serde_json::from_str("\"bank_deposit.incoming\"").unwrap();
        assert_eq!(event, WebhookEventType::BankDepositIncoming);
    }

    #[test]
    fn statuses_accept_alternate_spellings() {
        let status: PaymentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, PaymentStatus::Canceled);

        let status: PostOrderStatus = serde_json::from_str("\"pending_deactivation\"").unwrap();
        assert_eq!(status, PostOrderStatus::PendingDeactivation);
    }
}
