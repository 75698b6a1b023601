/*!
   The interchain build orchestrator.

   [`Interchain`] collects provisioned chains, a relayer, and the links
   between them, then [`build`](Interchain::build) performs the channel
   handshakes and returns a [`ConnectedInterchain`] that owns every
   provisioned resource. Teardown is bound to that handle: dropping it
   closes everything, and [`close`](ConnectedInterchain::close) is an
   idempotent latch that can also be invoked explicitly. A relayer that
   fails to stop during teardown is logged, not escalated, since the
   test verdict is already settled at that point.
*/

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, warn};

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::relayer::driver::RelayerDriver;
use crate::types::channel::ConnectedChannel;
use crate::types::id::ChainId;

/**
   An intended path between two chains, registered before the build
   step. Registration alone performs no handshake.
*/
#[derive(Debug, Clone)]
pub struct InterchainLink {
    pub chain_id_a: ChainId,
    pub chain_id_b: ChainId,
    pub path: String,
}

/**
   Options for [`Interchain::build`].
*/
#[derive(Debug, Clone, Default)]
pub struct InterchainBuildOptions {
    pub test_name: String,

    /// Where to persist per-block debug data, if anywhere.
    pub block_database_file: Option<PathBuf>,

    /// Skip the channel handshake over registered links. Tests that
    /// set this are responsible for creating channels themselves.
    pub skip_path_creation: bool,
}

/**
   Builder collecting the topology of one test: chains, one relayer,
   and the links to handshake between them.
*/
pub struct Interchain<Chain: ChainEndpoint, Relayer: RelayerDriver<Chain>> {
    chains: Vec<Chain>,
    relayer: Relayer,
    links: Vec<InterchainLink>,
}

impl<Chain: ChainEndpoint, Relayer: RelayerDriver<Chain>> Interchain<Chain, Relayer> {
    pub fn new(relayer: Relayer) -> Self {
        Self {
            chains: Vec::new(),
            relayer,
            links: Vec::new(),
        }
    }

    pub fn add_chain(mut self, chain: Chain) -> Self {
        self.chains.push(chain);
        self
    }

    pub fn add_link(mut self, link: InterchainLink) -> Self {
        self.links.push(link);
        self
    }

    fn chain(&self, chain_id: &ChainId) -> Result<&Chain, Error> {
        self.chains
            .iter()
            .find(|chain| chain.chain_id() == chain_id)
            .ok_or_else(|| Error::chain_not_found(chain_id.clone()))
    }

    /**
       Perform the channel handshake over every registered link (unless
       skipped) and hand ownership of all resources to the returned
       [`ConnectedInterchain`], which guarantees their release.

       On failure nothing is owned yet beyond what provisioning already
       created; the caller's test should fail fast.
    */
    pub fn build(
        self,
        options: &InterchainBuildOptions,
    ) -> Result<ConnectedInterchain<Chain, Relayer>, Error> {
        info!("building interchain for test {}", options.test_name);

        if let Some(file) = &options.block_database_file {
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(file, b"")?;
            debug!("persisting block data to {}", file.display());
        }

        let mut channels = BTreeMap::new();

        if !options.skip_path_creation {
            for link in &self.links {
                let chain_a = self.chain(&link.chain_id_a)?;
                let chain_b = self.chain(&link.chain_id_b)?;

                let channel = self.relayer.link(&link.path, chain_a, chain_b)?;

                info!(
                    "established channel {}/{} on path {} between chains {} and {}",
                    channel.channel_id_a,
                    channel.channel_id_b,
                    link.path,
                    link.chain_id_a,
                    link.chain_id_b,
                );

                channels.insert(link.path.clone(), channel);
            }
        }

        Ok(ConnectedInterchain {
            chains: self.chains,
            relayer: self.relayer,
            channels,
            closed: AtomicBool::new(false),
        })
    }
}

/**
   A fully built interchain: running chains, a relayer with handshaked
   channels, and the teardown obligation for all of them.
*/
pub struct ConnectedInterchain<Chain: ChainEndpoint, Relayer: RelayerDriver<Chain>> {
    chains: Vec<Chain>,
    pub relayer: Relayer,
    channels: BTreeMap<String, ConnectedChannel>,
    closed: AtomicBool,
}

impl<Chain: ChainEndpoint, Relayer: RelayerDriver<Chain>> ConnectedInterchain<Chain, Relayer> {
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn chain(&self, chain_id: &ChainId) -> Result<&Chain, Error> {
        self.chains
            .iter()
            .find(|chain| chain.chain_id() == chain_id)
            .ok_or_else(|| Error::chain_not_found(chain_id.clone()))
    }

    /// The channel handshaked over the given path during the build.
    pub fn channel(&self, path: &str) -> Result<&ConnectedChannel, Error> {
        self.channels.get(path).ok_or_else(|| {
            Error::assertion(format!("no channel was established on path {path}"))
        })
    }

    /**
       Tear down everything this interchain owns: stop the relayer
       (best effort) and shut the chains down. Idempotent; the second
       and later calls return without doing anything.
    */
    pub fn close(&self) -> Result<(), Error> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        if let Err(e) = self.relayer.stop() {
            warn!("an error occurred while stopping the relayer: {}", e);
        }

        for chain in &self.chains {
            chain.shutdown()?;
        }

        info!("tore down interchain");

        Ok(())
    }
}

impl<Chain: ChainEndpoint, Relayer: RelayerDriver<Chain>> Drop
    for ConnectedInterchain<Chain, Relayer>
{
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            error!("failed to tear down interchain: {}", e);
        }
    }
}
