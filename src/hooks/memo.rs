/*!
   The memo payload understood by the IBC hooks middleware.

   The wire contract is the exact JSON shape
   `{"wasm":{"contract":"<bech32 address>","msg":<contract message>}}`;
   anything else is ignored by the middleware and the transfer degrades
   to a plain token transfer.
*/

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::wallet::WalletAddress;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmHookMemo {
    pub wasm: WasmHookBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmHookBody {
    /// The contract to execute on the receiving chain.
    pub contract: String,

    /// The execute message dispatched to the contract.
    pub msg: serde_json::Value,
}

impl WasmHookMemo {
    pub fn new(contract: &WalletAddress, msg: serde_json::Value) -> Self {
        Self {
            wasm: WasmHookBody {
                contract: contract.0.clone(),
                msg,
            },
        }
    }

    /// Serialize into the memo string carried by the transfer.
    pub fn encode(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::json)
    }

    /// Parse a memo string; `None` if it is not a wasm hook payload.
    pub fn decode(memo: &str) -> Option<Self> {
        serde_json::from_str(memo).ok()
    }
}
