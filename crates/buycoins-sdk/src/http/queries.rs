/*
[INPUT]:  Query filters and pagination arguments
[OUTPUT]: Account data, prices, order books, payments, node lookups
[POS]:    HTTP layer - read-only GraphQL queries
[UPDATE]: When adding new queries or changing filters
*/

// ### Queries

use rust_decimal::Decimal;

use crate::graphql::{Arguments, PaginationArgs, operations};
use crate::http::{BuycoinsClient, BuycoinsError, Result};
use crate::types::{
    Account, BankAccount, BuycoinsPrice, BuycoinsType, Connection, Cryptocurrency, EstimatedFee,
    GetOrdersRequest, Node, Payment, PostOrders,
};

impl BuycoinsClient {
    /// Balances of every wallet, or only the given cryptocurrency
    ///
    /// query getBalances(cryptocurrency)
    pub async fn get_balances(&self, cryptocurrency: Option<Cryptocurrency>) -> Result<Vec<Account>> {
        let args = Arguments::new().set_opt("cryptocurrency", cryptocurrency.map(Cryptocurrency::as_str));
        self.execute_as(&operations::get_balances(), &args).await
    }

    /// Bank accounts linked to the user, optionally filtered by account number
    ///
    /// query getBankAccounts(accountNumber)
    pub async fn get_bank_accounts(&self, account_number: Option<&str>) -> Result<Vec<BankAccount>> {
        let args = Arguments::new().set_opt("accountNumber", account_number);
        self.execute_as(&operations::get_bank_accounts(), &args).await
    }

    /// Network fee for sending `amount` on-chain
    ///
    /// query getEstimatedNetworkFee(cryptocurrency, amount!)
    pub async fn get_estimated_network_fee(
        &self,
        amount: Decimal,
        cryptocurrency: Option<Cryptocurrency>,
    ) -> Result<EstimatedFee> {
        let args = Arguments::new()
            .set("amount", amount.to_string())
            .set_opt("cryptocurrency", cryptocurrency.map(Cryptocurrency::as_str));
        self.execute_as(&operations::get_estimated_network_fee(), &args)
            .await
    }

    /// Open P2P orders from all users
    ///
    /// query getMarketBook(cryptocurrency) { orders(first, last, after, before) }
    pub async fn get_market_book(
        &self,
        cryptocurrency: Option<Cryptocurrency>,
        pagination: &PaginationArgs,
    ) -> Result<PostOrders> {
        let args = pagination.apply(
            Arguments::new().set_opt("cryptocurrency", cryptocurrency.map(Cryptocurrency::as_str)),
        );
        self.execute_as(&operations::get_market_book(), &args).await
    }

    /// The user's own P2P orders
    ///
    /// query getOrders(cryptocurrency, status!, side) { orders(first, last, after, before) }
    pub async fn get_orders(&self, request: &GetOrdersRequest) -> Result<PostOrders> {
        let args = request.pagination.apply(
            Arguments::new()
                .set("cryptocurrency", request.cryptocurrency.as_str())
                .set("status", request.status.as_str())
                .set_opt("side", request.side.map(|side| side.as_str())),
        );
        self.execute_as(&operations::get_orders(), &args).await
    }

    /// Naira deposits and withdrawals
    ///
    /// query getPayments(first, last, after, before)
    pub async fn get_payments(&self, pagination: &PaginationArgs) -> Result<Connection<Payment>> {
        let args = pagination.apply(Arguments::new());
        self.execute_as(&operations::get_payments(), &args).await
    }

    /// Current buy/sell prices; each price is valid until its `expires_at`
    ///
    /// query getPrices(cryptocurrency)
    pub async fn get_prices(
        &self,
        cryptocurrency: Option<Cryptocurrency>,
    ) -> Result<Vec<BuycoinsPrice>> {
        let args = Arguments::new().set_opt("cryptocurrency", cryptocurrency.map(Cryptocurrency::as_str));
        self.execute_as(&operations::get_prices(), &args).await
    }

    /// Fetch one object by global ID
    ///
    /// query node(id!) { ... on <gql_type> }
    pub async fn node(&self, id: &str, gql_type: BuycoinsType) -> Result<Node> {
        let args = Arguments::new().set("id", id);
        self.execute_as(&operations::node(gql_type), &args).await
    }

    /// Fetch several objects by global ID; `gql_types[i]` is the type of `ids[i]`
    ///
    /// query nodes(ids!) { ... on <type> ... }
    pub async fn nodes(&self, ids: &[&str], gql_types: &[BuycoinsType]) -> Result<Vec<Node>> {
        if ids.len() != gql_types.len() {
            return Err(BuycoinsError::InvalidNodeId {
                node_id: Some(ids.join(",")),
                gql_type: None,
                message: format!(
                    "{} ids were given with {} types",
                    ids.len(),
                    gql_types.len()
                ),
            });
        }

        // An empty fragment list would leave `nodes` without a selection set.
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let args = Arguments::new().set("ids", ids.to_vec());
        self.execute_as(&operations::nodes(gql_types), &args).await
    }
}
