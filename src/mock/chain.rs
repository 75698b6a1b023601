/*!
   An in-memory chain implementing [`ChainEndpoint`], including an
   emulation of the receiving side of the hooks middleware and of the
   counter contract under test.

   The middleware emulation follows the observable semantics the
   framework exists to validate: a transfer carrying a wasm memo whose
   hook-derived sender account does not yet exist only creates that
   account; the contract call is dispatched on deliveries after that.
*/

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use eyre::eyre;
use sha2::{Digest, Sha256};
use subtle_encoding::hex;
use tracing::{debug, info};

use crate::chain::config::{ChainConfig, ChainSpec};
use crate::chain::endpoint::ChainEndpoint;
use crate::chain::factory::ChainFactory;
use crate::contract::counter::{Coin, CountResponse, CounterQueryMsg, TotalFundsResponse};
use crate::error::{handle_generic_error, Error};
use crate::hooks::memo::WasmHookMemo;
use crate::ibc::denom::{derive_ibc_denom, Denom};
use crate::ibc::packet::Packet;
use crate::ibc::token::Token;
use crate::types::id::{ChannelId, PortId};
use crate::types::transfer::{IbcTransferTx, TransferIntent};
use crate::types::wallet::{Wallet, WalletAddress, WalletId};
use crate::util::random::random_hex_string;

/// Domain separator for the hook-derived intermediary sender address.
const HOOK_SENDER_DOMAIN: &str = "ibc-wasm-hook-intermediary";

/**
   A handle to one in-memory chain. Cloning shares the underlying
   state, matching how real chain handles refer to one remote chain.
*/
#[derive(Clone)]
pub struct MockChain {
    config: ChainConfig,
    state: Arc<Mutex<MockChainState>>,
}

pub(crate) struct MockChainState {
    height: u64,
    running: bool,
    next_sequence: u64,
    next_code_id: u64,
    accounts: BTreeSet<String>,
    balances: BTreeMap<(String, String), u128>,
    stored_codes: BTreeSet<String>,
    contracts: BTreeMap<String, CounterContractState>,
    /// Packet sequence to the height its acknowledgement lands at.
    acks: BTreeMap<u64, u64>,
    link: Option<MockChannelEnd>,
}

/// State of one instantiated counter contract, keyed by caller.
struct CounterContractState {
    init_count: i64,
    counts: BTreeMap<String, i64>,
    total_funds: BTreeMap<String, Vec<Coin>>,
}

/**
   One end of an established channel, installed on both chains by the
   mock relayer during the handshake.
*/
pub(crate) struct MockChannelEnd {
    pub(crate) channel_id: ChannelId,
    pub(crate) counterparty_channel_id: ChannelId,
    pub(crate) port: PortId,
    pub(crate) counterparty_port: PortId,
    pub(crate) counterparty: Arc<Mutex<MockChainState>>,
    pub(crate) counterparty_prefix: String,
    /// Set once the relayer starts actively relaying the path.
    pub(crate) active: Arc<AtomicBool>,
    /// Blocks between packet submission and its acknowledgement.
    pub(crate) relay_delay: u64,
}

impl MockChain {
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(MockChainState {
                height: 1,
                running: true,
                next_sequence: 1,
                next_code_id: 1,
                accounts: BTreeSet::new(),
                balances: BTreeMap::new(),
                stored_codes: BTreeSet::new(),
                contracts: BTreeMap::new(),
                acks: BTreeMap::new(),
                link: None,
            })),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, MockChainState>, Error> {
        self.state
            .lock()
            .map_err(|_| Error::generic(eyre!("mock chain state mutex poisoned")))
    }

    pub(crate) fn shared_state(&self) -> Arc<Mutex<MockChainState>> {
        self.state.clone()
    }

    pub(crate) fn install_link(&self, link: MockChannelEnd) -> Result<(), Error> {
        let mut state = self.state()?;

        if state.link.is_some() {
            return Err(Error::generic(eyre!(
                "chain {} is already linked over {}",
                self.config.chain_id,
                link.channel_id
            )));
        }

        state.link = Some(link);

        Ok(())
    }
}

impl ChainEndpoint for MockChain {
    fn config(&self) -> &ChainConfig {
        &self.config
    }

    fn query_height(&self) -> Result<u64, Error> {
        Ok(self.state()?.height)
    }

    fn wait_until_height(&self, height: u64) -> Result<(), Error> {
        let mut state = self.state()?;

        // The mock produces blocks instantly on demand.
        if state.height < height {
            state.height = height;
        }

        Ok(())
    }

    fn add_wallet(&self, key_name: &str) -> Result<Wallet, Error> {
        let address = format!("{}1{}", self.config.account_prefix, random_hex_string(38));

        let mut state = self.state()?;
        state.accounts.insert(address.clone());

        Ok(Wallet::new(key_name, address))
    }

    fn fund_wallet(&self, wallet: &WalletAddress, token: &Token) -> Result<(), Error> {
        let mut state = self.state()?;

        state.height += 1;
        state.accounts.insert(wallet.0.clone());

        let key = (wallet.0.clone(), token.denom.as_str().to_string());
        *state.balances.entry(key).or_insert(0) += token.amount;

        Ok(())
    }

    fn query_balance(&self, address: &WalletAddress, denom: &Denom) -> Result<u128, Error> {
        let state = self.state()?;
        let key = (address.0.clone(), denom.as_str().to_string());

        Ok(state.balances.get(&key).copied().unwrap_or(0))
    }

    fn send_ibc_transfer(
        &self,
        channel_id: &ChannelId,
        sender: &Wallet,
        transfer: &TransferIntent,
    ) -> Result<IbcTransferTx, Error> {
        let mut state = self.state()?;

        if !state.running {
            return Err(Error::generic(eyre!(
                "chain {} has been shut down",
                self.config.chain_id
            )));
        }

        let link = state.link.as_ref().ok_or_else(|| {
            Error::generic(eyre!("chain {} has no ibc link", self.config.chain_id))
        })?;

        if &link.channel_id != channel_id {
            return Err(Error::generic(eyre!(
                "unknown channel {} on chain {}, expected {}",
                channel_id,
                self.config.chain_id,
                link.channel_id
            )));
        }

        let counterparty = link.counterparty.clone();
        let counterparty_prefix = link.counterparty_prefix.clone();
        let src_port = link.port.clone();
        let dst_port = link.counterparty_port.clone();
        let dst_channel = link.counterparty_channel_id.clone();
        let relaying = link.active.load(Ordering::SeqCst);
        let relay_delay = link.relay_delay;

        // Escrow the transferred token on the source chain.
        let balance_key = (sender.address.0.clone(), transfer.token.denom.as_str().to_string());
        let balance = state.balances.get(&balance_key).copied().unwrap_or(0);

        if balance < transfer.token.amount {
            return Err(Error::generic(eyre!(
                "insufficient balance {} of wallet {} to transfer {}",
                balance,
                sender.address,
                transfer.token
            )));
        }

        state.balances.insert(balance_key, balance - transfer.token.amount);

        state.height += 1;
        let submit_height = state.height;

        let sequence = state.next_sequence;
        state.next_sequence += 1;

        let packet = Packet {
            sequence,
            src_port,
            src_channel: channel_id.clone(),
            dst_port,
            dst_channel,
        };

        if relaying {
            state.acks.insert(sequence, submit_height + relay_delay);
            drop(state);

            let ibc_denom =
                derive_ibc_denom(&packet.dst_port, &packet.dst_channel, &transfer.token.denom)?;

            let mut dst = counterparty
                .lock()
                .map_err(|_| Error::generic(eyre!("mock chain state mutex poisoned")))?;

            dst.height += 1;
            dst.deliver(&counterparty_prefix, &packet, transfer, &sender.address, &ibc_denom)?;
        } else {
            debug!(
                "relayer not active, {} will not be delivered",
                packet
            );
        }

        Ok(IbcTransferTx {
            packet,
            height: submit_height,
        })
    }

    fn query_ack_at(&self, packet: &Packet, height: u64) -> Result<bool, Error> {
        let state = self.state()?;

        Ok(state.acks.get(&packet.sequence) == Some(&height))
    }

    fn query_wasm_hooks_sender(
        &self,
        channel_id: &ChannelId,
        sender: &WalletAddress,
    ) -> Result<WalletAddress, Error> {
        Ok(derive_hook_sender(
            &self.config.account_prefix,
            channel_id,
            sender,
        ))
    }

    fn store_wasm_contract(&self, wasm_file: &str, _from: &WalletId) -> Result<String, Error> {
        let mut state = self.state()?;

        state.height += 1;
        let code_id = state.next_code_id.to_string();
        state.next_code_id += 1;
        state.stored_codes.insert(code_id.clone());

        info!(
            "stored wasm contract {} on chain {} as code id {}",
            wasm_file, self.config.chain_id, code_id
        );

        Ok(code_id)
    }

    fn instantiate_wasm_contract(
        &self,
        code_id: &str,
        init_msg: &str,
        _from: &WalletId,
    ) -> Result<WalletAddress, Error> {
        let mut state = self.state()?;

        if !state.stored_codes.contains(code_id) {
            return Err(Error::generic(eyre!(
                "no wasm code with id {} stored on chain {}",
                code_id,
                self.config.chain_id
            )));
        }

        let init: serde_json::Value = serde_json::from_str(init_msg)?;
        let init_count = init.get("count").and_then(|count| count.as_i64()).unwrap_or(0);

        state.height += 1;

        let address = contract_address(&self.config.account_prefix, code_id, state.contracts.len());

        state.accounts.insert(address.clone());
        state.contracts.insert(
            address.clone(),
            CounterContractState {
                init_count,
                counts: BTreeMap::new(),
                total_funds: BTreeMap::new(),
            },
        );

        Ok(WalletAddress(address))
    }

    fn query_wasm_contract(
        &self,
        contract: &WalletAddress,
        query_msg: &str,
    ) -> Result<String, Error> {
        let state = self.state()?;

        let contract_state = state.contracts.get(&contract.0).ok_or_else(|| {
            Error::generic(eyre!(
                "no contract at address {} on chain {}",
                contract,
                self.config.chain_id
            ))
        })?;

        let query: CounterQueryMsg = serde_json::from_str(query_msg)?;

        let response = match query {
            CounterQueryMsg::GetTotalFunds { addr } => {
                serde_json::to_string(&TotalFundsResponse {
                    total_funds: contract_state
                        .total_funds
                        .get(&addr)
                        .cloned()
                        .unwrap_or_default(),
                })?
            }
            CounterQueryMsg::GetCount { addr } => serde_json::to_string(&CountResponse {
                count: contract_state
                    .counts
                    .get(&addr)
                    .copied()
                    .unwrap_or(contract_state.init_count),
            })?,
        };

        Ok(response)
    }

    fn shutdown(&self) -> Result<(), Error> {
        let mut state = self.state()?;

        if state.running {
            state.running = false;
            info!("shut down mock chain {}", self.config.chain_id);
        }

        Ok(())
    }
}

impl MockChainState {
    /// Receive one transfer packet, emulating the hooks middleware on
    /// the receiving chain.
    fn deliver(
        &mut self,
        account_prefix: &str,
        packet: &Packet,
        transfer: &TransferIntent,
        sender: &WalletAddress,
        ibc_denom: &Denom,
    ) -> Result<(), Error> {
        let memo = transfer.memo.as_deref().and_then(WasmHookMemo::decode);

        match memo {
            Some(memo) if self.contracts.contains_key(&memo.wasm.contract) => {
                let hook_sender = derive_hook_sender(account_prefix, &packet.src_channel, sender);

                if self.accounts.insert(hook_sender.0.clone()) {
                    // First delivery to this hook sender: the account is
                    // created and receives the funds, but no contract
                    // call is dispatched.
                    let key = (hook_sender.0.clone(), ibc_denom.as_str().to_string());
                    *self.balances.entry(key).or_insert(0) += transfer.token.amount;

                    debug!("created hook sender account {}", hook_sender);
                } else {
                    self.execute_contract(
                        &memo.wasm.contract,
                        &hook_sender.0,
                        &memo.wasm.msg,
                        ibc_denom,
                        transfer.token.amount,
                    )?;
                }
            }
            _ => {
                // Plain ICS-20 delivery to the named recipient.
                self.accounts.insert(transfer.recipient.0.clone());
                let key = (transfer.recipient.0.clone(), ibc_denom.as_str().to_string());
                *self.balances.entry(key).or_insert(0) += transfer.token.amount;
            }
        }

        Ok(())
    }

    fn execute_contract(
        &mut self,
        contract: &str,
        caller: &str,
        msg: &serde_json::Value,
        denom: &Denom,
        amount: u128,
    ) -> Result<(), Error> {
        let contract_state = self
            .contracts
            .get_mut(contract)
            .ok_or_else(|| Error::generic(eyre!("no contract at address {}", contract)))?;

        if msg.get("increment").is_none() {
            return Err(Error::generic(eyre!(
                "unsupported execute message for counter contract: {}",
                msg
            )));
        }

        let init_count = contract_state.init_count;
        *contract_state
            .counts
            .entry(caller.to_string())
            .or_insert(init_count) += 1;

        let funds = contract_state
            .total_funds
            .entry(caller.to_string())
            .or_default();

        match funds.iter_mut().find(|coin| coin.denom == denom.as_str()) {
            Some(coin) => {
                let current: u128 = coin.amount.parse().map_err(handle_generic_error)?;
                coin.amount = (current + amount).to_string();
            }
            None => funds.push(Coin {
                denom: denom.as_str().to_string(),
                amount: amount.to_string(),
            }),
        }

        Ok(())
    }
}

/**
   Derive the intermediary sender address the hooks middleware uses for
   a given channel and sender. Deterministic in its inputs, like the
   chain-side derivation it stands in for.
*/
fn derive_hook_sender(
    account_prefix: &str,
    channel_id: &ChannelId,
    sender: &WalletAddress,
) -> WalletAddress {
    let mut hasher = Sha256::new();
    hasher.update(HOOK_SENDER_DOMAIN.as_bytes());
    hasher.update(format!("{channel_id}/{sender}").as_bytes());

    let digest = hasher.finalize();
    let encoded = String::from_utf8_lossy(&hex::encode(&digest[..20])).into_owned();

    WalletAddress(format!("{account_prefix}1{encoded}"))
}

fn contract_address(account_prefix: &str, code_id: &str, instance: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("contract/{code_id}/{instance}").as_bytes());

    let digest = hasher.finalize();
    let encoded = String::from_utf8_lossy(&hex::encode(&digest[..20])).into_owned();

    format!("{account_prefix}1{encoded}")
}

/**
   Provisions [`MockChain`]s from chain specs, order-preserving.
*/
#[derive(Debug, Clone, Default)]
pub struct MockChainFactory;

impl MockChainFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ChainFactory for MockChainFactory {
    type Chain = MockChain;

    fn spawn_chains(
        &self,
        test_name: &str,
        specs: &[ChainSpec],
    ) -> Result<Vec<Self::Chain>, Error> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i]
                .iter()
                .any(|other| other.config.chain_id == spec.config.chain_id)
            {
                return Err(Error::generic(eyre!(
                    "duplicate chain id {} in topology for test {}",
                    spec.config.chain_id,
                    test_name
                )));
            }
        }

        specs
            .iter()
            .map(|spec| {
                info!(
                    "spawning mock chain {} with {} validators and {} full nodes for test {}",
                    spec.config.chain_id, spec.num_validators, spec.num_full_nodes, test_name
                );

                Ok(MockChain::new(spec.config.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_sender_derivation_is_pure() {
        let channel = ChannelId::new("channel-0");
        let sender = WalletAddress("cosmos1sender".to_string());

        let first = derive_hook_sender("cosmos", &channel, &sender);
        let second = derive_hook_sender("cosmos", &channel, &sender);

        assert_eq!(first, second);
        assert!(first.0.starts_with("cosmos1"));
    }

    #[test]
    fn hook_sender_depends_on_channel_and_sender() {
        let sender = WalletAddress("cosmos1sender".to_string());

        let over_channel_0 = derive_hook_sender("cosmos", &ChannelId::new("channel-0"), &sender);
        let over_channel_1 = derive_hook_sender("cosmos", &ChannelId::new("channel-1"), &sender);

        assert_ne!(over_channel_0, over_channel_1);

        let other_sender = WalletAddress("cosmos1other".to_string());
        let for_other = derive_hook_sender("cosmos", &ChannelId::new("channel-0"), &other_sender);

        assert_ne!(over_channel_0, for_other);
    }
}
