/*!
   Resolution of the hook-derived sender address.

   When the hooks middleware dispatches a contract call, the caller the
   contract sees is not the sender's own address but an intermediary
   address derived deterministically from the channel the transfer
   travelled and the sender's source-chain address. The derivation
   itself lives chain-side; the framework resolves it through a
   dedicated query.
*/

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::types::id::ChannelId;
use crate::types::wallet::WalletAddress;

/**
   Query the chain for the hook-derived address of `sender` over
   `channel_id`. A pure function of its inputs: resolving twice with
   the same arguments must yield the same address.
*/
pub fn resolve_hook_sender<Chain: ChainEndpoint>(
    chain: &Chain,
    channel_id: &ChannelId,
    sender: &WalletAddress,
) -> Result<WalletAddress, Error> {
    let address = chain.query_wasm_hooks_sender(channel_id, sender)?;

    if address.as_str().is_empty() {
        return Err(Error::assertion(format!(
            "chain {} returned an empty hook sender address for {} over {}",
            chain.chain_id(),
            sender,
            channel_id
        )));
    }

    Ok(address)
}
