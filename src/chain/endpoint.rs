/*!
   The chain-client collaborator interface.

   A [`ChainEndpoint`] is a handle to one provisioned chain through
   which the framework submits transactions and runs queries. The
   framework never owns chain state itself; the remote chain is the
   single source of truth, and all waits are blocking calls with
   bounded internal retries.
*/

use crate::chain::config::ChainConfig;
use crate::error::Error;
use crate::ibc::denom::Denom;
use crate::ibc::packet::Packet;
use crate::ibc::token::Token;
use crate::types::id::{ChainId, ChannelId};
use crate::types::transfer::{IbcTransferTx, TransferIntent};
use crate::types::wallet::{Wallet, WalletAddress, WalletId};

pub trait ChainEndpoint: Clone {
    /// The configuration this chain was provisioned from.
    fn config(&self) -> &ChainConfig;

    fn chain_id(&self) -> &ChainId {
        &self.config().chain_id
    }

    /// Query the latest committed height.
    fn query_height(&self) -> Result<u64, Error>;

    /**
       Block until the chain has produced a block at the given height.
       Returns immediately if the chain is already past it. Implementors
       bound the wait internally and fail rather than hang forever.
    */
    fn wait_until_height(&self, height: u64) -> Result<(), Error>;

    /// Block until the given number of new blocks have been produced.
    fn wait_for_blocks(&self, blocks: u64) -> Result<(), Error> {
        let target = self.query_height()? + blocks;
        self.wait_until_height(target)
    }

    /// Create a new key in the chain's keyring and return its wallet.
    fn add_wallet(&self, key_name: &str) -> Result<Wallet, Error>;

    /// Credit the wallet with the given token from the chain's faucet.
    /// The transaction must have landed once this returns.
    fn fund_wallet(&self, wallet: &WalletAddress, token: &Token) -> Result<(), Error>;

    fn query_balance(&self, address: &WalletAddress, denom: &Denom) -> Result<u128, Error>;

    /**
       Broadcast an IBC transfer on the given channel, signed by the
       sender. Returns the emitted packet together with the height the
       transfer was committed at, which anchors acknowledgement polling.
    */
    fn send_ibc_transfer(
        &self,
        channel_id: &ChannelId,
        sender: &Wallet,
        transfer: &TransferIntent,
    ) -> Result<IbcTransferTx, Error>;

    /// Whether the block at `height` carries an acknowledgement for
    /// the given packet.
    fn query_ack_at(&self, packet: &Packet, height: u64) -> Result<bool, Error>;

    /**
       Query the deterministic address the hooks middleware substitutes
       as sender when dispatching a contract call: a pure function of
       the channel the transfer travels and the sender's source-chain
       address.
    */
    fn query_wasm_hooks_sender(
        &self,
        channel_id: &ChannelId,
        sender: &WalletAddress,
    ) -> Result<WalletAddress, Error>;

    /// Upload a wasm contract binary; returns the stored code ID.
    fn store_wasm_contract(&self, wasm_file: &str, from: &WalletId) -> Result<String, Error>;

    /// Instantiate a stored contract; returns the contract address.
    fn instantiate_wasm_contract(
        &self,
        code_id: &str,
        init_msg: &str,
        from: &WalletId,
    ) -> Result<WalletAddress, Error>;

    /// Run a smart query against a contract. Both the query message and
    /// the response are JSON strings.
    fn query_wasm_contract(
        &self,
        contract: &WalletAddress,
        query_msg: &str,
    ) -> Result<String, Error>;

    /// Halt the chain and release the resources backing it. Called by
    /// the interchain teardown; must tolerate repeated invocation.
    fn shutdown(&self) -> Result<(), Error>;
}
