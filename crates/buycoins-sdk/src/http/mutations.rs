/*
[INPUT]:  Typed trade, order, transfer and withdrawal parameters
[OUTPUT]: Created orders, payments, addresses and transfer requests
[POS]:    HTTP layer - state-changing GraphQL mutations
[UPDATE]: When adding new mutations or changing parameters
*/

// ### Mutations

use rust_decimal::Decimal;

use crate::graphql::{Arguments, operations};
use crate::http::{BuycoinsClient, Result};
use crate::types::{
    Address, Cryptocurrency, DepositAccount, LimitOrderRequest, MarketOrderRequest,
    OnchainTransferRequest, Order, Payment, PostOrder, SendOffchainRequest, SendOffchainResult,
    SendRequest, TradeRequest,
};

fn trade_arguments(request: &TradeRequest) -> Arguments {
    Arguments::new()
        .set("price", request.price_id.as_str())
        .set("coin_amount", request.coin_amount.to_string())
        .set("cryptocurrency", request.cryptocurrency.as_str())
}

impl BuycoinsClient {
    /// Buy at a retrieved price
    ///
    /// mutation buy(price!, coin_amount!, cryptocurrency)
    pub async fn buy(&self, request: &TradeRequest) -> Result<Order> {
        self.execute_as(&operations::buy(), &trade_arguments(request))
            .await
    }

    /// Sell at a retrieved price
    ///
    /// mutation sell(price!, coin_amount!, cryptocurrency)
    pub async fn sell(&self, request: &TradeRequest) -> Result<Order> {
        self.execute_as(&operations::sell(), &trade_arguments(request))
            .await
    }

    /// Cancel a pending withdrawal
    ///
    /// mutation cancelWithdrawal(payment!)
    pub async fn cancel_withdrawal(&self, payment_id: &str) -> Result<Payment> {
        let args = Arguments::new().set("payment", payment_id);
        self.execute_as(&operations::cancel_withdrawal(), &args).await
    }

    /// Create a deposit address for a cryptocurrency
    ///
    /// mutation createAddress(cryptocurrency)
    pub async fn create_address(&self, cryptocurrency: Option<Cryptocurrency>) -> Result<Address> {
        let args = Arguments::new().set_opt("cryptocurrency", cryptocurrency.map(Cryptocurrency::as_str));
        self.execute_as(&operations::create_address(), &args).await
    }

    /// Create a virtual bank account for funding the NGNT wallet
    ///
    /// mutation createDepositAccount(accountName!)
    pub async fn create_deposit_account(&self, account_name: &str) -> Result<DepositAccount> {
        let args = Arguments::new().set("accountName", account_name);
        self.execute_as(&operations::create_deposit_account(), &args)
            .await
    }

    /// Withdraw Naira to a linked bank account
    ///
    /// mutation createWithdrawal(bankAccount!, amount!)
    pub async fn create_withdrawal(&self, bank_account_id: &str, amount: Decimal) -> Result<Payment> {
        let args = Arguments::new()
            .set("bankAccount", bank_account_id)
            .set("amount", amount.to_string());
        self.execute_as(&operations::create_withdrawal(), &args).await
    }

    /// Place a P2P limit order
    ///
    /// mutation postLimitOrder(orderSide!, coinAmount!, staticPrice, priceType!, dynamicExchangeRate, cryptocurrency)
    pub async fn post_limit_order(&self, request: &LimitOrderRequest) -> Result<PostOrder> {
        let args = Arguments::new()
            .set("orderSide", request.order_side.as_str())
            .set("coinAmount", request.coin_amount.to_string())
            .set_opt("staticPrice", request.static_price.map(|price| price.to_string()))
            .set("priceType", request.price_type.as_str())
            .set_opt(
                "dynamicExchangeRate",
                request.dynamic_exchange_rate.map(|rate| rate.to_string()),
            )
            .set("cryptocurrency", request.cryptocurrency.as_str());
        self.execute_as(&operations::post_limit_order(), &args).await
    }

    /// Place a P2P market order
    ///
    /// mutation postMarketOrder(orderSide!, coinAmount!, cryptocurrency)
    pub async fn post_market_order(&self, request: &MarketOrderRequest) -> Result<PostOrder> {
        let args = Arguments::new()
            .set("orderSide", request.order_side.as_str())
            .set("coinAmount", request.coin_amount.to_string())
            .set("cryptocurrency", request.cryptocurrency.as_str());
        self.execute_as(&operations::post_market_order(), &args)
            .await
    }

    /// Send cryptocurrency to an on-chain address
    ///
    /// mutation send(cryptocurrency!, amount!, address!)
    pub async fn send(&self, request: &SendRequest) -> Result<OnchainTransferRequest> {
        let args = Arguments::new()
            .set("cryptocurrency", request.cryptocurrency.as_str())
            .set("amount", request.amount.to_string())
            .set("address", request.address.as_str());
        self.execute_as(&operations::send(), &args).await
    }

    /// Send cryptocurrency to another BuyCoins user
    ///
    /// mutation sendOffchain(cryptocurrency!, amount!, recipient!)
    pub async fn send_offchain(&self, request: &SendOffchainRequest) -> Result<SendOffchainResult> {
        let args = Arguments::new()
            .set("cryptocurrency", request.cryptocurrency.as_str())
            .set("amount", request.amount.to_string())
            .set("recipient", request.recipient.as_str());
        self.execute_as(&operations::send_offchain(), &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::BuycoinsError;
    use crate::http::transport::MockTransport;
    use crate::types::{OrderSide, PriceType};
    use serde_json::json;
    use std::sync::Arc;

    fn client_with(response: serde_json::Value) -> (BuycoinsClient, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new(response));
        (BuycoinsClient::with_transport(transport.clone()), transport)
    }

    #[tokio::test]
    async fn test_sell_insufficient_amount() {
        let (client, _transport) = client_with(json!({
            "errors": [{ "message": "Your balance is insufficient for this sale" }],
            "data": { "sell": null }
        }));
        let request = TradeRequest::new("QnV5Y29pbnNQcmljZS0x", Decimal::new(25, 1))
            .cryptocurrency(Cryptocurrency::Ethereum);

        let err = client.sell(&request).await.unwrap_err();

        match err {
            BuycoinsError::InsufficientAmountToSell {
                cryptocurrency,
                amount_to_sell,
            } => {
                assert_eq!(cryptocurrency, "ethereum");
                assert_eq!(amount_to_sell, "2.5");
            }
            other => panic!("expected InsufficientAmountToSell, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancel_processed_withdrawal() {
        let (client, transport) = client_with(json!({
            "errors": [{ "message": "This payment has been processed and can not be canceled" }]
        }));

        let err = client.cancel_withdrawal("UGF5bWVudC0x").await.unwrap_err();

        assert!(matches!(err, BuycoinsError::WithdrawalCannotBeCanceled));
        assert_eq!(transport.requests()[0].variables["payment"], "UGF5bWVudC0x");
    }

    #[tokio::test]
    async fn test_post_limit_order_omits_unused_price() {
        let (client, transport) = client_with(json!({
            "data": { "postLimitOrder": {
                "id": "UG9zdE9yZGVyLTE=",
                "coinAmount": "0.01",
                "createdAt": 1618000000,
                "cryptocurrency": "bitcoin",
                "dynamicExchangeRate": null,
                "pricePerCoin": "21000000",
                "priceType": "static",
                "side": "buy",
                "staticPrice": "21000000",
                "status": "active"
            } }
        }));
        let request = LimitOrderRequest {
            order_side: OrderSide::Buy,
            coin_amount: Decimal::new(1, 2),
            price_type: PriceType::Static,
            static_price: Some(Decimal::new(21_000_000, 0)),
            dynamic_exchange_rate: None,
            cryptocurrency: Cryptocurrency::Bitcoin,
        };

        let order = client.post_limit_order(&request).await.unwrap();

        assert_eq!(order.static_price, Some(Decimal::new(21_000_000, 0)));
        let recorded = &transport.requests()[0];
        assert_eq!(recorded.variables["staticPrice"], "21000000");
        assert!(!recorded.variables.contains_key("dynamicExchangeRate"));
        assert!(!recorded.document.contains("$dynamicExchangeRate"));
    }

    #[tokio::test]
    async fn test_send_offchain() {
        let (client, transport) = client_with(json!({
            "data": { "sendOffchain": { "initiated": true } }
        }));
        let request = SendOffchainRequest {
            recipient: "satoshi".to_string(),
            amount: Decimal::new(2, 3),
            cryptocurrency: Cryptocurrency::Bitcoin,
        };

        let result = client.send_offchain(&request).await.unwrap();

        assert!(result.initiated);
        assert_eq!(transport.requests()[0].variables["amount"], "0.002");
    }
}
