/*!
   Re-export of common constructs that are used by test cases.
*/

pub use core::time::Duration;

pub use eyre::eyre;
pub use serde_json::json;
pub use tracing::{debug, error, info, warn};

pub use crate::bootstrap::fund::get_and_fund_test_users;
pub use crate::bootstrap::init::init_test;
pub use crate::bootstrap::interchain::{
    ConnectedInterchain, Interchain, InterchainBuildOptions, InterchainLink,
};
pub use crate::chain::config::{ChainConfig, ChainSpec, ChainType, DockerImage};
pub use crate::chain::endpoint::ChainEndpoint;
pub use crate::chain::ext::ack::ChainAckMethodsExt;
pub use crate::chain::ext::fund::ChainFundMethodsExt;
pub use crate::chain::ext::wasm::ChainWasmMethodsExt;
pub use crate::chain::factory::ChainFactory;
pub use crate::contract::assert_hook_execution;
pub use crate::contract::counter::{CounterExecuteMsg, CounterQueryMsg};
pub use crate::error::{handle_generic_error, Error};
pub use crate::hooks::address::resolve_hook_sender;
pub use crate::hooks::memo::WasmHookMemo;
pub use crate::hooks::protocol::{
    register_hook_account, trigger_hook, HookTransfer, ACK_POLL_LOOK_AHEAD, ACK_POLL_LOOK_BEHIND,
};
pub use crate::ibc::denom::{derive_ibc_denom, Denom};
pub use crate::ibc::packet::Packet;
pub use crate::ibc::token::Token;
pub use crate::relayer::driver::{RelayerBuilder, RelayerDriver, StartupFlags};
pub use crate::types::channel::ConnectedChannel;
pub use crate::types::config::TestConfig;
pub use crate::types::id::{ChainId, ChannelId, PortId};
pub use crate::types::transfer::{IbcTransferTx, TransferIntent};
pub use crate::types::wallet::{Wallet, WalletAddress, WalletId};
pub use crate::util::assert::{assert_eq, assert_not_eq};
pub use crate::util::retry::assert_eventually_succeed;
