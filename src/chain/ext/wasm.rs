/*!
   Contract deployment built on the wasm operations of
   [`ChainEndpoint`](crate::chain::endpoint::ChainEndpoint).
*/

use tracing::info;

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::types::wallet::{WalletAddress, WalletId};

pub trait ChainWasmMethodsExt {
    /**
       Upload and instantiate a wasm contract in one step, waiting a
       block in between so the stored code is queryable. Returns the
       code ID and the instantiated contract address.
    */
    fn setup_wasm_contract(
        &self,
        wasm_file: &str,
        init_msg: &str,
        from: &WalletId,
    ) -> Result<(String, WalletAddress), Error>;
}

impl<Chain: ChainEndpoint> ChainWasmMethodsExt for Chain {
    fn setup_wasm_contract(
        &self,
        wasm_file: &str,
        init_msg: &str,
        from: &WalletId,
    ) -> Result<(String, WalletAddress), Error> {
        let code_id = self.store_wasm_contract(wasm_file, from)?;

        self.wait_for_blocks(1)?;

        let contract = self.instantiate_wasm_contract(&code_id, init_msg, from)?;

        info!(
            "instantiated contract {} from {} (code id {}) on chain {}",
            contract,
            wasm_file,
            code_id,
            self.chain_id()
        );

        Ok((code_id, contract))
    }
}
