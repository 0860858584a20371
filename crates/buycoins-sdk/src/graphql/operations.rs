/*
[INPUT]:  BuyCoins API schema (argument types, result types)
[OUTPUT]: Operation descriptors for every supported query and mutation
[POS]:    GraphQL layer - operation catalogue
[UPDATE]: When the API adds or changes an operation
*/

use super::document::Selection;
use super::fields::{self, selection_for};
use super::operation::{ArgumentSpec, Operation};
use crate::types::BuycoinsType;

pub const GET_BALANCES: &str = "getBalances";
pub const GET_BANK_ACCOUNTS: &str = "getBankAccounts";
pub const GET_ESTIMATED_NETWORK_FEE: &str = "getEstimatedNetworkFee";
pub const GET_MARKET_BOOK: &str = "getMarketBook";
pub const GET_ORDERS: &str = "getOrders";
pub const GET_PAYMENTS: &str = "getPayments";
pub const GET_PRICES: &str = "getPrices";
pub const NODE: &str = "node";
pub const NODES: &str = "nodes";

pub const BUY: &str = "buy";
pub const SELL: &str = "sell";
pub const CANCEL_WITHDRAWAL: &str = "cancelWithdrawal";
pub const CREATE_ADDRESS: &str = "createAddress";
pub const CREATE_DEPOSIT_ACCOUNT: &str = "createDepositAccount";
pub const CREATE_WITHDRAWAL: &str = "createWithdrawal";
pub const POST_LIMIT_ORDER: &str = "postLimitOrder";
pub const POST_MARKET_ORDER: &str = "postMarketOrder";
pub const SEND: &str = "send";
pub const SEND_OFFCHAIN: &str = "sendOffchain";

const CRYPTOCURRENCY: ArgumentSpec = ArgumentSpec::optional("cryptocurrency", "Cryptocurrency");

fn post_orders() -> Vec<Selection> {
    vec![
        Selection::leaf("dynamicPriceExpiry"),
        Selection::object(
            "orders",
            fields::connection(selection_for(BuycoinsType::PostOrder)),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

pub fn get_balances() -> Operation {
    Operation::query(GET_BALANCES)
        .argument(CRYPTOCURRENCY)
        .selections(selection_for(BuycoinsType::Account))
}

pub fn get_bank_accounts() -> Operation {
    Operation::query(GET_BANK_ACCOUNTS)
        .argument(ArgumentSpec::optional("accountNumber", "String"))
        .selections(selection_for(BuycoinsType::BankAccount))
}

pub fn get_estimated_network_fee() -> Operation {
    Operation::query(GET_ESTIMATED_NETWORK_FEE)
        .argument(CRYPTOCURRENCY)
        .argument(ArgumentSpec::required("amount", "BigDecimal!"))
        .selections(fields::estimated_fee())
}

pub fn get_market_book() -> Operation {
    Operation::query(GET_MARKET_BOOK)
        .argument(CRYPTOCURRENCY)
        .paginated_on("orders")
        .selections(post_orders())
}

pub fn get_orders() -> Operation {
    Operation::query(GET_ORDERS)
        .argument(CRYPTOCURRENCY)
        .argument(ArgumentSpec::required("status", "GetOrdersStatus!"))
        .argument(ArgumentSpec::optional("side", "OrderSide"))
        .paginated_on("orders")
        .selections(post_orders())
}

pub fn get_payments() -> Operation {
    Operation::query(GET_PAYMENTS)
        .paginated()
        .selections(fields::connection(selection_for(BuycoinsType::Payment)))
}

pub fn get_prices() -> Operation {
    Operation::query(GET_PRICES)
        .argument(CRYPTOCURRENCY)
        .selections(selection_for(BuycoinsType::BuycoinsPrice))
}

/// `node(id)` narrowed to `gql_type` with an inline fragment
pub fn node(gql_type: BuycoinsType) -> Operation {
    Operation::query(NODE)
        .argument(ArgumentSpec::required("id", "ID!"))
        .selections(vec![typed_fragment(gql_type)])
        .node_lookup(gql_type.as_str())
}

/// `nodes(ids)` with one inline fragment per distinct type, in first-seen order
pub fn nodes(gql_types: &[BuycoinsType]) -> Operation {
    let mut distinct: Vec<BuycoinsType> = Vec::with_capacity(gql_types.len());
    for gql_type in gql_types {
        if !distinct.contains(gql_type) {
            distinct.push(*gql_type);
        }
    }

    let type_names = distinct
        .iter()
        .map(|gql_type| gql_type.as_str())
        .collect::<Vec<_>>()
        .join(",");

    Operation::query(NODES)
        .argument(ArgumentSpec::required("ids", "[ID!]!"))
        .selections(distinct.into_iter().map(typed_fragment).collect())
        .node_lookup(type_names)
}

// `__typename` lets the response deserialize into the matching `Node` variant.
fn typed_fragment(gql_type: BuycoinsType) -> Selection {
    let mut selections = vec![Selection::leaf("__typename")];
    selections.extend(selection_for(gql_type));
    Selection::on(gql_type.as_str(), selections)
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

fn trade(name: &str) -> Operation {
    Operation::mutation(name)
        .argument(ArgumentSpec::required("price", "ID!"))
        .argument(ArgumentSpec::required("coin_amount", "BigDecimal!"))
        .argument(CRYPTOCURRENCY)
        .selections(selection_for(BuycoinsType::Order))
}

pub fn buy() -> Operation {
    trade(BUY)
}

pub fn sell() -> Operation {
    trade(SELL)
}

pub fn cancel_withdrawal() -> Operation {
    Operation::mutation(CANCEL_WITHDRAWAL)
        .argument(ArgumentSpec::required("payment", "ID!"))
        .selections(selection_for(BuycoinsType::Payment))
}

pub fn create_address() -> Operation {
    Operation::mutation(CREATE_ADDRESS)
        .argument(CRYPTOCURRENCY)
        .selections(selection_for(BuycoinsType::Address))
}

pub fn create_deposit_account() -> Operation {
    Operation::mutation(CREATE_DEPOSIT_ACCOUNT)
        .argument(ArgumentSpec::required("accountName", "String!"))
        .selections(selection_for(BuycoinsType::DepositAccount))
}

pub fn create_withdrawal() -> Operation {
    Operation::mutation(CREATE_WITHDRAWAL)
        .argument(ArgumentSpec::required("bankAccount", "ID!"))
        .argument(ArgumentSpec::required("amount", "BigDecimal!"))
        .selections(selection_for(BuycoinsType::Payment))
}

pub fn post_limit_order() -> Operation {
    Operation::mutation(POST_LIMIT_ORDER)
        .argument(ArgumentSpec::required("orderSide", "OrderSide!"))
        .argument(ArgumentSpec::required("coinAmount", "BigDecimal!"))
        .argument(ArgumentSpec::optional("staticPrice", "BigDecimal"))
        .argument(ArgumentSpec::required("priceType", "PriceType!"))
        .argument(ArgumentSpec::optional("dynamicExchangeRate", "BigDecimal"))
        .argument(CRYPTOCURRENCY)
        .selections(selection_for(BuycoinsType::PostOrder))
}

pub fn post_market_order() -> Operation {
    Operation::mutation(POST_MARKET_ORDER)
        .argument(ArgumentSpec::required("orderSide", "OrderSide!"))
        .argument(ArgumentSpec::required("coinAmount", "BigDecimal!"))
        .argument(CRYPTOCURRENCY)
        .selections(selection_for(BuycoinsType::PostOrder))
}

pub fn send() -> Operation {
    Operation::mutation(SEND)
        .argument(ArgumentSpec::required("cryptocurrency", "Cryptocurrency!"))
        .argument(ArgumentSpec::required("amount", "BigDecimal!"))
        .argument(ArgumentSpec::required("address", "String!"))
        .selections(selection_for(BuycoinsType::OnchainTransferRequest))
}

pub fn send_offchain() -> Operation {
    Operation::mutation(SEND_OFFCHAIN)
        .argument(ArgumentSpec::required("cryptocurrency", "Cryptocurrency!"))
        .argument(ArgumentSpec::required("amount", "BigDecimal!"))
        .argument(ArgumentSpec::required("recipient", "String!"))
        .selections(fields::send_offchain())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::document::OperationKind;
    use crate::graphql::operation::Arguments;
    use crate::graphql::pagination::PaginationArgs;

    #[test]
    fn get_balances_without_filter() {
        let composed = get_balances().compose(&Arguments::new());
        assert_eq!(
            composed.document,
            "query getBalances { getBalances { id cryptocurrency confirmedBalance } }"
        );
    }

    #[test]
    fn get_balances_with_filter() {
        let composed = get_balances().compose(&Arguments::new().set("cryptocurrency", "bitcoin"));
        assert_eq!(
            composed.document,
            "query getBalances($cryptocurrency: Cryptocurrency) { getBalances(cryptocurrency: $cryptocurrency) { id cryptocurrency confirmedBalance } }"
        );
    }

    #[test]
    fn get_orders_places_filters_on_root_and_pagination_on_orders() {
        let args = PaginationArgs::new().with_first(5).apply(
            Arguments::new()
                .set("status", "open")
                .set("side", "buy")
                .set("cryptocurrency", "bitcoin"),
        );
        let composed = get_orders().compose(&args);

        assert!(composed.document.starts_with(
            "query getOrders($cryptocurrency: Cryptocurrency, $status: GetOrdersStatus!, $side: OrderSide, $first: Int) { getOrders(cryptocurrency: $cryptocurrency, status: $status, side: $side) { dynamicPriceExpiry orders(first: $first) { pageInfo"
        ));
    }

    #[test]
    fn get_payments_paginates_on_root() {
        let args = PaginationArgs::new().with_after("MTA").apply(Arguments::new());
        let composed = get_payments().compose(&args);

        assert!(composed
            .document
            .starts_with("query getPayments($after: String) { getPayments(after: $after) { pageInfo"));
    }

    #[test]
    fn node_uses_inline_fragment_with_typename() {
        let operation = node(BuycoinsType::Address);
        let composed = operation.compose(&Arguments::new().set("id", "QWRkcmVzcy0x"));

        assert_eq!(
            composed.document,
            "query node($id: ID!) { node(id: $id) { ... on Address { __typename id address createdAt cryptocurrency } } }"
        );
        assert!(operation.is_node_lookup());
        assert_eq!(operation.lookup_type(), Some("Address"));
    }

    #[test]
    fn nodes_deduplicates_fragments() {
        let operation = nodes(&[
            BuycoinsType::Account,
            BuycoinsType::Address,
            BuycoinsType::Account,
        ]);
        let composed = operation.compose(&Arguments::new().set("ids", vec!["a", "b", "c"]));

        assert_eq!(composed.document.matches("... on Account").count(), 1);
        assert_eq!(composed.document.matches("... on Address").count(), 1);
        assert!(composed.document.starts_with("query nodes($ids: [ID!]!) { nodes(ids: $ids) {"));
        assert_eq!(operation.lookup_type(), Some("Account,Address"));
    }

    #[test]
    fn buy_declares_price_and_amount() {
        let operation = buy();
        let composed = operation.compose(
            &Arguments::new()
                .set("price", "QnV5Y29pbnNQcmljZS0x")
                .set("coin_amount", "0.01")
                .set("cryptocurrency", "bitcoin"),
        );

        assert_eq!(operation.kind(), OperationKind::Mutation);
        assert!(composed.document.starts_with(
            "mutation buy($price: ID!, $coin_amount: BigDecimal!, $cryptocurrency: Cryptocurrency) { buy(price: $price, coin_amount: $coin_amount, cryptocurrency: $cryptocurrency) { id"
        ));
        assert!(!operation.is_node_lookup());
    }

    #[test]
    fn limit_order_skips_absent_prices() {
        let composed = post_limit_order().compose(
            &Arguments::new()
                .set("orderSide", "sell")
                .set("coinAmount", "1.5")
                .set("priceType", "static")
                .set("staticPrice", "21000000"),
        );

        assert!(composed.document.contains("$staticPrice: BigDecimal"));
        assert!(!composed.document.contains("dynamicExchangeRate:"));
        assert!(!composed.document.contains("$cryptocurrency"));
    }

    #[test]
    fn send_offchain_selects_initiated() {
        let composed = send_offchain().compose(
            &Arguments::new()
                .set("cryptocurrency", "bitcoin")
                .set("amount", "0.002")
                .set("recipient", "satoshi"),
        );

        assert!(composed.document.ends_with("{ initiated } }"));
        assert_eq!(composed.variables.len(), 3);
    }
}
