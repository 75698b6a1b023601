/*!
   Messages and responses of the counter contract exercised through the
   hooks middleware. These are the only contract shapes the framework
   depends on.
*/

use serde::{Deserialize, Serialize};

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::types::wallet::WalletAddress;

/**
   A coin as serialized by the contract: the amount travels as a
   decimal string.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterExecuteMsg {
    Increment {},
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterQueryMsg {
    GetTotalFunds { addr: String },
    GetCount { addr: String },
}

/// Funds the contract holds on behalf of one caller address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalFundsResponse {
    pub total_funds: Vec<Coin>,
}

/// Number of increments recorded for one caller address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

pub fn query_total_funds<Chain: ChainEndpoint>(
    chain: &Chain,
    contract: &WalletAddress,
    addr: &WalletAddress,
) -> Result<TotalFundsResponse, Error> {
    let query = serde_json::to_string(&CounterQueryMsg::GetTotalFunds {
        addr: addr.0.clone(),
    })?;

    let output = chain.query_wasm_contract(contract, &query)?;

    serde_json::from_str(&output).map_err(Error::json)
}

pub fn query_count<Chain: ChainEndpoint>(
    chain: &Chain,
    contract: &WalletAddress,
    addr: &WalletAddress,
) -> Result<CountResponse, Error> {
    let query = serde_json::to_string(&CounterQueryMsg::GetCount {
        addr: addr.0.clone(),
    })?;

    let output = chain.query_wasm_contract(contract, &query)?;

    serde_json::from_str(&output).map_err(Error::json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_msg_serializes_to_hook_shape() {
        let msg = serde_json::to_string(&CounterExecuteMsg::Increment {}).unwrap();
        assert_eq!(msg, r#"{"increment":{}}"#);
    }

    #[test]
    fn query_msgs_serialize_to_contract_shapes() {
        let msg = serde_json::to_string(&CounterQueryMsg::GetCount {
            addr: "cosmos1abc".to_string(),
        })
        .unwrap();
        assert_eq!(msg, r#"{"get_count":{"addr":"cosmos1abc"}}"#);
    }
}
