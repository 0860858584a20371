/*
[INPUT]:  GraphQL object shapes and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{
    BankAccountType, BuycoinsPriceStatus, Cryptocurrency, OnchainTransferRequestStatus, OrderSide,
    OrderStatus, PaymentStatus, PaymentType, PostOrderStatus, PriceType, TransactionDirection,
    WebhookEventType,
};

fn timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub cryptocurrency: Cryptocurrency,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub confirmed_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub account_name: String,
    pub account_number: String,
    #[serde(default)]
    pub account_reference: Option<String>,
    pub account_type: BankAccountType,
    pub bank_name: String,
}

/// Virtual bank account used to fund the NGNT wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAccount {
    pub id: String,
    pub account_name: String,
    pub account_number: String,
    #[serde(default)]
    pub account_reference: Option<String>,
    pub account_type: BankAccountType,
    pub bank_name: String,
}

/// Limit or market order placed on the P2P market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOrder {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub coin_amount: Decimal,
    pub created_at: i64,
    pub cryptocurrency: Cryptocurrency,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub dynamic_exchange_rate: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_coin: Decimal,
    pub price_type: PriceType,
    pub side: OrderSide,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub static_price: Option<Decimal>,
    pub status: PostOrderStatus,
}

impl PostOrder {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub created_at: i64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    pub reference: String,
    pub status: PaymentStatus,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
}

impl Payment {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created_at)
    }
}

/// Instant buy/sell quote, valid until `expires_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuycoinsPrice {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub buy_price_per_coin: Decimal,
    pub cryptocurrency: Cryptocurrency,
    pub expires_at: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_buy: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_sell: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_buy: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_coin_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_sell: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub sell_price_per_coin: Decimal,
    pub status: BuycoinsPriceStatus,
}

impl BuycoinsPrice {
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        timestamp(self.expires_at)
    }

    /// Whether the quote has passed its expiry time
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.status == BuycoinsPriceStatus::Expired
            || self.expires_at_utc().is_some_and(|expires_at| now >= expires_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub address: String,
    pub created_at: i64,
    pub cryptocurrency: Cryptocurrency,
}

/// Instant buy or sell executed against a `BuycoinsPrice`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub created_at: i64,
    pub cryptocurrency: Cryptocurrency,
    #[serde(with = "rust_decimal::serde::str")]
    pub filled_coin_amount: Decimal,
    pub price: BuycoinsPrice,
    pub side: OrderSide,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_coin_amount: Decimal,
}

impl Order {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created_at)
    }
}

/// Back-reference to another node where only its ID is needed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnchainTransferRequest {
    pub id: String,
    pub address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub created_at: i64,
    pub cryptocurrency: Cryptocurrency,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    pub status: OnchainTransferRequestStatus,
    #[serde(default)]
    pub transaction: Option<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub confirmed: bool,
    pub created_at: i64,
    pub cryptocurrency: Cryptocurrency,
    pub direction: TransactionDirection,
    #[serde(default)]
    pub onchain_transfer_request: Option<NodeRef>,
    pub txhash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedFee {
    #[serde(with = "rust_decimal::serde::str")]
    pub estimated_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

/// Relay-style paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Connection<T> {
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    /// Iterate over the nodes in edge order
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Cursor to pass as `after` to fetch the next page, if there is one
    pub fn next_cursor(&self) -> Option<&str> {
        if self.page_info.has_next_page {
            self.page_info.end_cursor.as_deref()
        } else {
            None
        }
    }
}

/// Result of `getMarketBook` and `getOrders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOrders {
    pub dynamic_price_expiry: i64,
    pub orders: Connection<PostOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOffchainResult {
    pub initiated: bool,
}

/// Any object fetched through `node`/`nodes`, discriminated by `__typename`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Node {
    Account(Account),
    BankAccount(BankAccount),
    PostOrder(PostOrder),
    Payment(Payment),
    BuycoinsPrice(BuycoinsPrice),
    Address(Address),
    DepositAccount(DepositAccount),
    Order(Order),
    OnchainTransferRequest(OnchainTransferRequest),
    Transaction(Transaction),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Account(node) => &node.id,
            Node::BankAccount(node) => &node.id,
            Node::PostOrder(node) => &node.id,
            Node::Payment(node) => &node.id,
            Node::BuycoinsPrice(node) => &node.id,
            Node::Address(node) => &node.id,
            Node::DepositAccount(node) => &node.id,
            Node::Order(node) => &node.id,
            Node::OnchainTransferRequest(node) => &node.id,
            Node::Transaction(node) => &node.id,
        }
    }
}

/// Webhook delivery envelope posted by BuyCoins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub hook_id: i64,
    pub hook_key: String,
    pub hook_time: i64,
    pub hook_signature: String,
    pub payload: WebhookPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub event: WebhookEventType,
    /// Event-specific object, e.g. the incoming transaction for `coins.incoming`
    pub data: Value,
}

impl WebhookEvent {
    /// Parse the raw request body; every envelope field is required
    pub fn from_request_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn hook_time_utc(&self) -> Option<DateTime<Utc>> {
        timestamp(self.hook_time)
    }
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}
