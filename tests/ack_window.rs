/*!
   Boundary tests of the acknowledgement polling window around the
   submission height of a hook-triggering transfer.
*/

mod common;

use ibc_hooks_test_framework::error::ErrorDetail;
use ibc_hooks_test_framework::prelude::*;

use common::{
    setup_interchain, COUNTER_CONTRACT_INIT, COUNTER_CONTRACT_WASM, GENESIS_FUND_AMOUNT, PATH_NAME,
};

#[test]
fn test_ack_at_window_upper_bound_succeeds() -> Result<(), Error> {
    // An acknowledgement landing exactly ACK_POLL_LOOK_AHEAD blocks
    // after submission is still inside the window.
    let interchain = setup_interchain("ack-upper-bound", ACK_POLL_LOOK_AHEAD)?;

    let channel = interchain.channel(PATH_NAME)?.clone();
    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;
    let chain_b = interchain.chain(&ChainId::new("counterparty-2"))?;

    let users =
        get_and_fund_test_users("ack-upper-bound", GENESIS_FUND_AMOUNT, &[chain_a, chain_b])?;

    let (_code_id, contract) = chain_b.setup_wasm_contract(
        COUNTER_CONTRACT_WASM,
        COUNTER_CONTRACT_INIT,
        &users[1].id,
    )?;

    let token = Token::new(chain_a.config().native_denom(), 1);
    let transfer = HookTransfer::new(&channel, &contract, token, json!({"increment": {}}));

    register_hook_account(chain_a, &users[0], &transfer)?;

    interchain.close()?;

    Ok(())
}

#[test]
fn test_ack_past_window_upper_bound_times_out() -> Result<(), Error> {
    let interchain = setup_interchain("ack-past-upper-bound", ACK_POLL_LOOK_AHEAD + 1)?;

    let channel = interchain.channel(PATH_NAME)?.clone();
    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;
    let chain_b = interchain.chain(&ChainId::new("counterparty-2"))?;

    let users = get_and_fund_test_users(
        "ack-past-upper-bound",
        GENESIS_FUND_AMOUNT,
        &[chain_a, chain_b],
    )?;

    let (_code_id, contract) = chain_b.setup_wasm_contract(
        COUNTER_CONTRACT_WASM,
        COUNTER_CONTRACT_INIT,
        &users[1].id,
    )?;

    let token = Token::new(chain_a.config().native_denom(), 1);
    let transfer = HookTransfer::new(&channel, &contract, token, json!({"increment": {}}));

    match register_hook_account(chain_a, &users[0], &transfer) {
        Err(e) => match e.detail() {
            ErrorDetail::AckTimeout(_) => {}
            detail => {
                return Err(Error::assertion(format!(
                    "expected acknowledgement timeout, got: {detail}"
                )))
            }
        },
        Ok(()) => {
            return Err(Error::assertion(
                "expected acknowledgement polling to time out one block past the window"
                    .to_string(),
            ))
        }
    }

    interchain.close()?;

    Ok(())
}

#[test]
fn test_unrelayed_packet_times_out() -> Result<(), Error> {
    let interchain = setup_interchain("unrelayed-packet", 1)?;

    let channel = interchain.channel(PATH_NAME)?.clone();
    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;
    let chain_b = interchain.chain(&ChainId::new("counterparty-2"))?;

    let users =
        get_and_fund_test_users("unrelayed-packet", GENESIS_FUND_AMOUNT, &[chain_a, chain_b])?;

    let (_code_id, contract) = chain_b.setup_wasm_contract(
        COUNTER_CONTRACT_WASM,
        COUNTER_CONTRACT_INIT,
        &users[1].id,
    )?;

    // With the relayer stopped, the packet is never delivered and no
    // acknowledgement appears within the window.
    interchain.relayer.stop()?;

    let token = Token::new(chain_a.config().native_denom(), 1);
    let transfer = HookTransfer::new(&channel, &contract, token, json!({"increment": {}}));

    let result = register_hook_account(chain_a, &users[0], &transfer);

    match result {
        Err(e) => match e.detail() {
            ErrorDetail::AckTimeout(_) => {}
            detail => {
                return Err(Error::assertion(format!(
                    "expected acknowledgement timeout, got: {detail}"
                )))
            }
        },
        Ok(()) => {
            return Err(Error::assertion(
                "expected acknowledgement polling to time out without a relayer".to_string(),
            ))
        }
    }

    interchain.close()?;

    Ok(())
}
