/*!
   Shared setup for the integration tests: the standard two-chain
   topology, built on the in-memory collaborators.
*/

#![allow(dead_code)]

use ibc_hooks_test_framework::mock::chain::{MockChain, MockChainFactory};
use ibc_hooks_test_framework::mock::relayer::{MockRelayer, MockRelayerBuilder};
use ibc_hooks_test_framework::prelude::*;

pub const PATH_NAME: &str = "ibc-path";

/// Amount every test user is funded with at genesis.
pub const GENESIS_FUND_AMOUNT: u128 = 10_000_000;

pub const COUNTER_CONTRACT_WASM: &str = "contracts/ibchooks_counter.wasm";
pub const COUNTER_CONTRACT_INIT: &str = r#"{"count":0}"#;

pub fn chain_specs() -> (ChainSpec, ChainSpec) {
    let config = ChainConfig {
        name: "osmosis".to_string(),
        chain_type: ChainType::Cosmos,
        chain_id: ChainId::new("simapp-1"),
        command_path: "simd".to_string(),
        images: vec![DockerImage::new("ibchooks", "local", "1025:1025")],
        account_prefix: "cosmos".to_string(),
        denom: "uosmo".to_string(),
        coin_type: "118".to_string(),
    };

    let config2 = config.counterparty("osmosis-counterparty", "counterparty-2");

    (ChainSpec::new(config, 1, 0), ChainSpec::new(config2, 1, 0))
}

/**
   Provision the two-chain topology, link it over [`PATH_NAME`], start
   relaying with the given delay in blocks, and wait for both chains to
   produce a few blocks.
*/
pub fn setup_interchain(
    test_name: &str,
    relay_delay: u64,
) -> Result<ConnectedInterchain<MockChain, MockRelayer>, Error> {
    let test_config = init_test()?;

    let (spec_a, spec_b) = chain_specs();
    let chain_id_a = spec_a.config.chain_id.clone();
    let chain_id_b = spec_b.config.chain_id.clone();

    let chains = MockChainFactory::new().spawn_chains(test_name, &[spec_a, spec_b])?;

    let flags = StartupFlags::new(&["--processor", "events", "--block-history", "100"]);

    let relayer = MockRelayerBuilder::new()
        .with_relay_delay(relay_delay)
        .build(test_name, &flags)?;

    let mut interchain = Interchain::new(relayer);

    for chain in chains {
        interchain = interchain.add_chain(chain);
    }

    let interchain = interchain.add_link(InterchainLink {
        chain_id_a,
        chain_id_b,
        path: PATH_NAME.to_string(),
    });

    let connected = interchain.build(&InterchainBuildOptions {
        test_name: test_name.to_string(),
        block_database_file: Some(test_config.block_database_file()),
        skip_path_creation: false,
    })?;

    connected.relayer.start(PATH_NAME)?;

    for chain in connected.chains() {
        chain.wait_for_blocks(5)?;
    }

    Ok(connected)
}
