/*!
   Tests of interchain build and teardown behavior.
*/

mod common;

use ibc_hooks_test_framework::mock::chain::MockChainFactory;
use ibc_hooks_test_framework::mock::relayer::MockRelayerBuilder;
use ibc_hooks_test_framework::prelude::*;

use common::{chain_specs, setup_interchain, PATH_NAME};

#[test]
fn test_teardown_is_idempotent() -> Result<(), Error> {
    let interchain = setup_interchain("idempotent-teardown", 1)?;

    interchain.close()?;

    // Closing again must be a no-op, and the drop at the end of the
    // test runs the same path a third time.
    interchain.close()?;

    Ok(())
}

#[test]
fn test_teardown_tolerates_relayer_stop_failure() -> Result<(), Error> {
    let interchain = setup_interchain("relayer-stop-failure", 1)?;

    interchain.relayer.fail_next_stop();

    // The relayer refusing to stop must not abort the teardown; the
    // chains still get shut down.
    interchain.close()?;

    let chain_a = interchain.chain(&ChainId::new("simapp-1"))?;
    let user = chain_a.add_wallet("post-teardown-user")?;

    let channel = interchain.channel(PATH_NAME)?.clone();

    let intent = TransferIntent {
        recipient: user.address.clone(),
        token: Token::new(chain_a.config().native_denom(), 1),
        memo: None,
    };

    let result = chain_a.send_ibc_transfer(&channel.channel_id_a, &user, &intent);

    if result.is_ok() {
        return Err(Error::assertion(
            "expected transfers to fail after the chain was shut down".to_string(),
        ));
    }

    Ok(())
}

#[test]
fn test_skipping_path_creation_leaves_no_channel() -> Result<(), Error> {
    let test_config = init_test()?;

    let (spec_a, spec_b) = chain_specs();
    let chain_id_a = spec_a.config.chain_id.clone();
    let chain_id_b = spec_b.config.chain_id.clone();

    let chains = MockChainFactory::new().spawn_chains("skip-path-creation", &[spec_a, spec_b])?;

    let relayer = MockRelayerBuilder::new().build("skip-path-creation", &StartupFlags::default())?;

    let mut interchain = Interchain::new(relayer);

    for chain in chains {
        interchain = interchain.add_chain(chain);
    }

    let interchain = interchain.add_link(InterchainLink {
        chain_id_a: chain_id_a.clone(),
        chain_id_b: chain_id_b.clone(),
        path: PATH_NAME.to_string(),
    });

    let connected = interchain.build(&InterchainBuildOptions {
        test_name: "skip-path-creation".to_string(),
        block_database_file: Some(test_config.block_database_file()),
        skip_path_creation: true,
    })?;

    if connected.channel(PATH_NAME).is_ok() {
        return Err(Error::assertion(
            "expected no channel when path creation is skipped".to_string(),
        ));
    }

    if connected
        .relayer
        .transfer_channel(&chain_id_a, &chain_id_b)
        .is_ok()
    {
        return Err(Error::assertion(
            "expected no transfer channel when path creation is skipped".to_string(),
        ));
    }

    connected.close()?;

    Ok(())
}

#[test]
fn test_transfer_channel_resolution_flips_for_reversed_chain_order() -> Result<(), Error> {
    let interchain = setup_interchain("transfer-channel-resolution", 1)?;

    let chain_id_a = ChainId::new("simapp-1");
    let chain_id_b = ChainId::new("counterparty-2");

    let forward = interchain.relayer.transfer_channel(&chain_id_a, &chain_id_b)?;
    let reversed = interchain.relayer.transfer_channel(&chain_id_b, &chain_id_a)?;

    assert_eq(
        "reversed resolution flips the channel ends",
        &reversed,
        &forward.clone().flip(),
    )?;

    assert_eq(
        "forward resolution matches the channel from the build",
        &forward,
        interchain.channel(PATH_NAME)?,
    )?;

    interchain.close()?;

    Ok(())
}

#[test]
fn test_duplicate_chain_ids_are_rejected() -> Result<(), Error> {
    init_test()?;

    let (spec_a, _) = chain_specs();
    let duplicate = spec_a.clone();

    let result = MockChainFactory::new().spawn_chains("duplicate-chain-ids", &[spec_a, duplicate]);

    if result.is_ok() {
        return Err(Error::assertion(
            "expected provisioning to reject duplicate chain ids".to_string(),
        ));
    }

    Ok(())
}
