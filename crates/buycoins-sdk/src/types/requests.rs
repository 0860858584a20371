/*
[INPUT]:  Caller-supplied mutation and filter parameters
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new operations added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Cryptocurrency, GetOrdersStatus, OrderSide, PriceType};
use crate::graphql::PaginationArgs;

/// Parameters for the `buy` and `sell` mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    /// Global ID of a retrieved `BuycoinsPrice`
    pub price_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub coin_amount: Decimal,
    #[serde(default)]
    pub cryptocurrency: Cryptocurrency,
}

impl TradeRequest {
    pub fn new(price_id: impl Into<String>, coin_amount: Decimal) -> Self {
        Self {
            price_id: price_id.into(),
            coin_amount,
            cryptocurrency: Cryptocurrency::default(),
        }
    }

    pub fn cryptocurrency(mut self, cryptocurrency: Cryptocurrency) -> Self {
        self.cryptocurrency = cryptocurrency;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrderRequest {
    pub order_side: OrderSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub coin_amount: Decimal,
    pub price_type: PriceType,
    /// Naira price, required when `price_type` is static
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_price: Option<Decimal>,
    /// Naira exchange rate, required when `price_type` is dynamic
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub cryptocurrency: Cryptocurrency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderRequest {
    pub order_side: OrderSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub coin_amount: Decimal,
    #[serde(default)]
    pub cryptocurrency: Cryptocurrency,
}

/// Parameters for the on-chain `send` mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendRequest {
    pub address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub cryptocurrency: Cryptocurrency,
}

/// Parameters for `sendOffchain`, a transfer to another BuyCoins user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendOffchainRequest {
    /// Username of the recipient
    pub recipient: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub cryptocurrency: Cryptocurrency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOrdersRequest {
    pub status: GetOrdersStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub cryptocurrency: Cryptocurrency,
    #[serde(default)]
    pub pagination: PaginationArgs,
}

impl GetOrdersRequest {
    pub fn new(status: GetOrdersStatus) -> Self {
        Self {
            status,
            side: None,
            cryptocurrency: Cryptocurrency::default(),
            pagination: PaginationArgs::default(),
        }
    }

    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn cryptocurrency(mut self, cryptocurrency: Cryptocurrency) -> Self {
        self.cryptocurrency = cryptocurrency;
        self
    }

    pub fn pagination(mut self, pagination: PaginationArgs) -> Self {
        self.pagination = pagination;
        self
    }
}
