/*!
   The two-phase hook-triggering transfer protocol.

   A transfer whose memo names a contract cannot produce an observable
   contract state change until the hook-derived sender account exists
   on the receiving chain, and that account is only created once value
   has been delivered to it. The first transfer therefore exists solely
   to create the account; only a second transfer with identical
   parameters is expected to increment contract-tracked state.

   Rather than hiding that dependency behind a silently repeated call,
   the two phases are separate operations:
   [`register_hook_account`] and [`trigger_hook`]. Callers targeting an
   address the chain has never seen must run both, in that order.

   Each phase submits the transfer, records the source chain height at
   submission, and blocks until the packet's acknowledgement is
   observed within a bounded height window around the submission
   height. Missing the window is a hard failure; there is no retry at
   this layer.
*/

use tracing::info;

use crate::chain::endpoint::ChainEndpoint;
use crate::chain::ext::ack::ChainAckMethodsExt;
use crate::error::Error;
use crate::hooks::memo::WasmHookMemo;
use crate::ibc::token::Token;
use crate::types::channel::ConnectedChannel;
use crate::types::id::ChannelId;
use crate::types::transfer::TransferIntent;
use crate::types::wallet::{Wallet, WalletAddress};

/**
   How many blocks before the submission height the acknowledgement
   poll starts, tolerating small height skew between submission and
   the first query.
*/
pub const ACK_POLL_LOOK_BEHIND: u64 = 5;

/**
   How many blocks after the submission height the acknowledgement
   poll scans before giving up, bounding the total wait.
*/
pub const ACK_POLL_LOOK_AHEAD: u64 = 25;

/**
   One hook-triggering transfer: which channel to send over, which
   contract the memo names, the token to move, and the execute message
   the middleware should dispatch. Both protocol phases are run with
   the same value.
*/
#[derive(Debug, Clone)]
pub struct HookTransfer {
    pub channel_id: ChannelId,
    pub contract: WalletAddress,
    pub token: Token,
    pub msg: serde_json::Value,
}

impl HookTransfer {
    /// Build the transfer for the A-side of an established channel.
    pub fn new(
        channel: &ConnectedChannel,
        contract: &WalletAddress,
        token: Token,
        msg: serde_json::Value,
    ) -> Self {
        Self {
            channel_id: channel.channel_id_a.clone(),
            contract: contract.clone(),
            token,
            msg,
        }
    }
}

/**
   First phase: deliver value to the hook-derived address so the
   receiving chain creates the account. The contract call carried in
   the memo is not expected to be observable in this phase, and callers
   must not assert on contract state after it.
*/
pub fn register_hook_account<Chain: ChainEndpoint>(
    chain: &Chain,
    sender: &Wallet,
    transfer: &HookTransfer,
) -> Result<(), Error> {
    info!(
        "registering hook account: transferring {} from {} over {} to set up {}",
        transfer.token, sender.address, transfer.channel_id, transfer.contract
    );

    send_and_confirm(chain, sender, transfer)
}

/**
   Second phase: the transfer whose contract call is expected to be
   executed by the middleware and observable through contract queries.
   Requires that the hook-derived account already exists, i.e. that
   [`register_hook_account`] (or an equivalent prior delivery) has
   completed.
*/
pub fn trigger_hook<Chain: ChainEndpoint>(
    chain: &Chain,
    sender: &Wallet,
    transfer: &HookTransfer,
) -> Result<(), Error> {
    info!(
        "triggering hook: transferring {} from {} over {} to execute {}",
        transfer.token, sender.address, transfer.channel_id, transfer.contract
    );

    send_and_confirm(chain, sender, transfer)
}

/// Submit the transfer and block until its acknowledgement is observed
/// within `[h - ACK_POLL_LOOK_BEHIND, h + ACK_POLL_LOOK_AHEAD]`, where
/// `h` is the source chain height at submission.
fn send_and_confirm<Chain: ChainEndpoint>(
    chain: &Chain,
    sender: &Wallet,
    transfer: &HookTransfer,
) -> Result<(), Error> {
    let memo = WasmHookMemo::new(&transfer.contract, transfer.msg.clone()).encode()?;

    let intent = TransferIntent {
        recipient: transfer.contract.clone(),
        token: transfer.token.clone(),
        memo: Some(memo),
    };

    let tx = chain.send_ibc_transfer(&transfer.channel_id, sender, &intent)?;

    let start_height = tx.height.saturating_sub(ACK_POLL_LOOK_BEHIND);
    let end_height = tx.height + ACK_POLL_LOOK_AHEAD;

    chain.poll_for_ack(&tx.packet, start_height, end_height)?;

    Ok(())
}
