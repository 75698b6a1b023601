/*!
   Types describing an IBC transfer submission and its result.
*/

use crate::ibc::packet::Packet;
use crate::ibc::token::Token;
use crate::types::wallet::WalletAddress;

/**
   Everything needed to submit one IBC token transfer: the recipient on
   the counterparty chain, the token to move, and an optional memo.

   When the memo is a wasm hook payload (see
   [`WasmHookMemo`](crate::hooks::memo::WasmHookMemo)), the receiving
   chain's hooks middleware decodes it and executes the named contract
   atomically with fund delivery.
*/
#[derive(Debug, Clone)]
pub struct TransferIntent {
    /// The recipient address on the destination chain.
    pub recipient: WalletAddress,

    /// The token to transfer, denominated on the source chain.
    pub token: Token,

    /// Optional memo forwarded verbatim in the packet data.
    pub memo: Option<String>,
}

/**
   The result of a successfully broadcast IBC transfer: the packet
   reference to poll acknowledgements for, and the source chain height
   at submission time which anchors the polling window.
*/
#[derive(Debug, Clone)]
pub struct IbcTransferTx {
    /// The packet emitted by the transfer.
    pub packet: Packet,

    /// The source chain height at which the transfer was committed.
    pub height: u64,
}
