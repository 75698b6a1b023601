/*!
   End-to-end tests of the hook-triggering transfer protocol: a
   transfer from chain A carrying a wasm memo executes the counter
   contract on chain B, attributed to the hook-derived sender address.
*/

mod common;

use ibc_hooks_test_framework::contract::counter::{query_count, query_total_funds};
use ibc_hooks_test_framework::prelude::*;

use common::{
    setup_interchain, COUNTER_CONTRACT_INIT, COUNTER_CONTRACT_WASM, GENESIS_FUND_AMOUNT, PATH_NAME,
};

const TRANSFER_AMOUNT: u128 = 1;

#[test]
fn test_two_phase_hook_transfer_increments_counter() -> Result<(), Error> {
    let interchain = setup_interchain("two-phase-hook-transfer", 1)?;

    let channel = interchain.channel(PATH_NAME)?.clone();

    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;
    let chain_b = interchain.chain(&ChainId::new("counterparty-2"))?;

    let users = get_and_fund_test_users(
        "two-phase-hook-transfer",
        GENESIS_FUND_AMOUNT,
        &[chain_a, chain_b],
    )?;

    let (_code_id, contract) = chain_b.setup_wasm_contract(
        COUNTER_CONTRACT_WASM,
        COUNTER_CONTRACT_INIT,
        &users[1].id,
    )?;

    let token = Token::new(chain_a.config().native_denom(), TRANSFER_AMOUNT);
    let transfer = HookTransfer::new(&channel, &contract, token, json!({"increment": {}}));

    // First transfer only creates the hook-derived account; the second
    // is the one whose contract call is observable.
    register_hook_account(chain_a, &users[0], &transfer)?;
    trigger_hook(chain_a, &users[0], &transfer)?;

    let hook_sender = resolve_hook_sender(chain_a, &channel.channel_id_a, &users[0].address)?;

    assert_hook_execution(chain_b, &contract, &hook_sender, 1, TRANSFER_AMOUNT)?;

    interchain.close()?;

    Ok(())
}

#[test]
fn test_single_hook_transfer_only_creates_account() -> Result<(), Error> {
    let interchain = setup_interchain("single-hook-transfer", 1)?;

    let channel = interchain.channel(PATH_NAME)?.clone();

    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;
    let chain_b = interchain.chain(&ChainId::new("counterparty-2"))?;

    let users = get_and_fund_test_users(
        "single-hook-transfer",
        GENESIS_FUND_AMOUNT,
        &[chain_a, chain_b],
    )?;

    let (_code_id, contract) = chain_b.setup_wasm_contract(
        COUNTER_CONTRACT_WASM,
        COUNTER_CONTRACT_INIT,
        &users[1].id,
    )?;

    let token = Token::new(chain_a.config().native_denom(), TRANSFER_AMOUNT);
    let transfer = HookTransfer::new(&channel, &contract, token, json!({"increment": {}}));

    register_hook_account(chain_a, &users[0], &transfer)?;

    let hook_sender = resolve_hook_sender(chain_a, &channel.channel_id_a, &users[0].address)?;

    // No contract call has been dispatched yet: the counter is still at
    // its initial value and the contract holds no funds for the sender.
    let count = query_count(chain_b, &contract, &hook_sender)?;
    assert_eq("counter before any observable hook call", &count.count, &0)?;

    let funds = query_total_funds(chain_b, &contract, &hook_sender)?;
    assert_eq(
        "contract holds no funds before the trigger phase",
        &funds.total_funds.len(),
        &0,
    )?;

    // The transferred value landed on the freshly created hook-derived
    // account instead, under the trace denom of the path it travelled.
    let ibc_denom = derive_ibc_denom(
        &channel.port_b,
        &channel.channel_id_b,
        &chain_a.config().native_denom(),
    )?;

    let balance = chain_b.query_balance(&hook_sender, &ibc_denom)?;
    assert_eq("hook account balance", &balance, &TRANSFER_AMOUNT)?;

    interchain.close()?;

    Ok(())
}

#[test]
fn test_hook_sender_resolution_is_stable() -> Result<(), Error> {
    let interchain = setup_interchain("hook-sender-resolution", 1)?;

    let channel = interchain.channel(PATH_NAME)?.clone();
    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;

    let users =
        get_and_fund_test_users("hook-sender-resolution", GENESIS_FUND_AMOUNT, &[chain_a])?;

    let first = resolve_hook_sender(chain_a, &channel.channel_id_a, &users[0].address)?;
    let second = resolve_hook_sender(chain_a, &channel.channel_id_a, &users[0].address)?;

    assert_eq("hook sender resolution must be pure", &first, &second)?;
    assert_not_eq(
        "hook sender must differ from the sender's own address",
        &first,
        &users[0].address,
    )?;

    interchain.close()?;

    Ok(())
}
