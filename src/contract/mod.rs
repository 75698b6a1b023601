/*!
   The query surface of the counter contract under test and the state
   verification helpers built on it.
*/

pub mod counter;

use tracing::info;

use crate::chain::endpoint::ChainEndpoint;
use crate::contract::counter::{query_count, query_total_funds};
use crate::error::Error;
use crate::types::wallet::WalletAddress;
use crate::util::assert::assert_eq;

/**
   Verify the contract state after a completed two-phase hook transfer
   run, keyed by the hook-derived sender address:

   - exactly one coin entry is held for the hook sender;
   - its denomination carries the `ibc/` trace prefix, proving the
     funds arrived over the inter-chain path rather than being minted
     locally;
   - its amount and the increment counter match the expected values.
*/
pub fn assert_hook_execution<Chain: ChainEndpoint>(
    chain: &Chain,
    contract: &WalletAddress,
    hook_sender: &WalletAddress,
    expected_count: i64,
    expected_amount: u128,
) -> Result<(), Error> {
    let funds = query_total_funds(chain, contract, hook_sender)?;

    assert_eq(
        "expected exactly one coin entry held for the hook sender",
        &funds.total_funds.len(),
        &1,
    )?;

    let coin = &funds.total_funds[0];

    if !coin.denom.starts_with("ibc/") {
        return Err(Error::assertion(format!(
            "expected funds to arrive under an ibc trace denom, got {}",
            coin.denom
        )));
    }

    assert_eq(
        "transferred amount held by the contract",
        &coin.amount,
        &expected_amount.to_string(),
    )?;

    let count = query_count(chain, contract, hook_sender)?;

    assert_eq("hook increment counter", &count.count, &expected_count)?;

    info!(
        "verified hook execution on chain {}: {} of {} held for {}, count {}",
        chain.chain_id(),
        coin.amount,
        coin.denom,
        hook_sender,
        count.count
    );

    Ok(())
}
