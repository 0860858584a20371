/*
[INPUT]:  BuyCoins GraphQL object types
[OUTPUT]: Field-selection sets requested for each type
[POS]:    GraphQL layer - selection sets shared by queries and mutations
[UPDATE]: When the API adds fields or models change
*/

use super::document::{Selection, leaves};
use crate::types::BuycoinsType;

/// Selection set for every field of a node type that the models deserialize
pub fn selection_for(gql_type: BuycoinsType) -> Vec<Selection> {
    match gql_type {
        BuycoinsType::Account => leaves(&["id", "cryptocurrency", "confirmedBalance"]),
        BuycoinsType::BankAccount | BuycoinsType::DepositAccount => leaves(&[
            "id",
            "accountName",
            "accountNumber",
            "accountReference",
            "accountType",
            "bankName",
        ]),
        BuycoinsType::PostOrder => leaves(&[
            "id",
            "coinAmount",
            "createdAt",
            "cryptocurrency",
            "dynamicExchangeRate",
            "pricePerCoin",
            "priceType",
            "side",
            "staticPrice",
            "status",
        ]),
        BuycoinsType::Payment => leaves(&[
            "id",
            "amount",
            "createdAt",
            "fee",
            "reference",
            "status",
            "totalAmount",
            "type",
        ]),
        BuycoinsType::BuycoinsPrice => leaves(&[
            "id",
            "buyPricePerCoin",
            "cryptocurrency",
            "expiresAt",
            "maxBuy",
            "maxSell",
            "minBuy",
            "minCoinAmount",
            "minSell",
            "sellPricePerCoin",
            "status",
        ]),
        BuycoinsType::Address => leaves(&["id", "address", "createdAt", "cryptocurrency"]),
        BuycoinsType::Order => {
            let mut selections = leaves(&["id", "createdAt", "cryptocurrency", "filledCoinAmount"]);
            selections.push(Selection::object(
                "price",
                selection_for(BuycoinsType::BuycoinsPrice),
            ));
            selections.extend(leaves(&["side", "status", "totalCoinAmount"]));
            selections
        }
        BuycoinsType::OnchainTransferRequest => {
            let mut selections = transfer_request_scalars();
            selections.push(Selection::object("transaction", transaction_selection()));
            selections
        }
        BuycoinsType::Transaction => transaction_selection(),
    }
}

fn transfer_request_scalars() -> Vec<Selection> {
    leaves(&[
        "id",
        "address",
        "amount",
        "createdAt",
        "cryptocurrency",
        "fee",
        "status",
    ])
}

// Back-references only ask for the id to keep the graph finite.
fn transaction_selection() -> Vec<Selection> {
    let mut selections = vec![
        Selection::leaf("id"),
        Selection::object("address", selection_for(BuycoinsType::Address)),
    ];
    selections.extend(leaves(&[
        "amount",
        "confirmed",
        "createdAt",
        "cryptocurrency",
        "direction",
    ]));
    selections.push(Selection::object("onchainTransferRequest", leaves(&["id"])));
    selections.push(Selection::leaf("txhash"));
    selections
}

pub fn page_info() -> Selection {
    Selection::object(
        "pageInfo",
        leaves(&["endCursor", "hasNextPage", "hasPreviousPage", "startCursor"]),
    )
}

/// `pageInfo { ... } edges { cursor node { ... } }`
pub fn connection(node: Vec<Selection>) -> Vec<Selection> {
    vec![
        page_info(),
        Selection::object(
            "edges",
            vec![Selection::leaf("cursor"), Selection::object("node", node)],
        ),
    ]
}

pub fn estimated_fee() -> Vec<Selection> {
    leaves(&["estimatedFee", "total"])
}

pub fn send_offchain() -> Vec<Selection> {
    leaves(&["initiated"])
}
