/*!
   An in-memory relayer implementing [`RelayerDriver`] over
   [`MockChain`]s.

   Linking wires a channel end into each chain directly, and packets
   are delivered inline when transfers are submitted, acknowledged a
   configurable number of blocks after submission.
*/

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use eyre::eyre;
use tracing::{debug, info};

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::mock::chain::{MockChain, MockChannelEnd};
use crate::relayer::driver::{RelayerBuilder, RelayerDriver, StartupFlags};
use crate::types::channel::ConnectedChannel;
use crate::types::id::{ChainId, ChannelId, PortId};

struct MockLink {
    chain_id_a: ChainId,
    chain_id_b: ChainId,
    channel: ConnectedChannel,
    active: Arc<AtomicBool>,
}

pub struct MockRelayer {
    relay_delay: u64,
    flags: StartupFlags,
    fail_on_stop: AtomicBool,
    links: Mutex<BTreeMap<String, MockLink>>,
}

impl MockRelayer {
    pub fn new(relay_delay: u64, flags: StartupFlags) -> Self {
        Self {
            relay_delay,
            flags,
            fail_on_stop: AtomicBool::new(false),
            links: Mutex::new(BTreeMap::new()),
        }
    }

    /// The startup flags this relayer was built with.
    pub fn startup_flags(&self) -> &StartupFlags {
        &self.flags
    }

    /// Make the next call to [`RelayerDriver::stop`] fail, to exercise
    /// cleanup paths that must tolerate a relayer refusing to stop.
    pub fn fail_next_stop(&self) {
        self.fail_on_stop.store(true, Ordering::SeqCst);
    }

    fn links(&self) -> Result<MutexGuard<'_, BTreeMap<String, MockLink>>, Error> {
        self.links
            .lock()
            .map_err(|_| Error::generic(eyre!("mock relayer links mutex poisoned")))
    }
}

impl RelayerDriver<MockChain> for MockRelayer {
    fn link(
        &self,
        path: &str,
        chain_a: &MockChain,
        chain_b: &MockChain,
    ) -> Result<ConnectedChannel, Error> {
        let mut links = self.links()?;

        if links.contains_key(path) {
            return Err(Error::generic(eyre!(
                "path {} has already been linked",
                path
            )));
        }

        let channel = ConnectedChannel {
            path: path.to_string(),
            channel_id_a: ChannelId::new("channel-0"),
            channel_id_b: ChannelId::new("channel-0"),
            port_a: PortId::transfer(),
            port_b: PortId::transfer(),
        };

        let active = Arc::new(AtomicBool::new(false));

        chain_a.install_link(MockChannelEnd {
            channel_id: channel.channel_id_a.clone(),
            counterparty_channel_id: channel.channel_id_b.clone(),
            port: channel.port_a.clone(),
            counterparty_port: channel.port_b.clone(),
            counterparty: chain_b.shared_state(),
            counterparty_prefix: chain_b.config().account_prefix.clone(),
            active: active.clone(),
            relay_delay: self.relay_delay,
        })?;

        chain_b.install_link(MockChannelEnd {
            channel_id: channel.channel_id_b.clone(),
            counterparty_channel_id: channel.channel_id_a.clone(),
            port: channel.port_b.clone(),
            counterparty_port: channel.port_a.clone(),
            counterparty: chain_a.shared_state(),
            counterparty_prefix: chain_a.config().account_prefix.clone(),
            active: active.clone(),
            relay_delay: self.relay_delay,
        })?;

        info!(
            "established channel on path {} between chains {} and {}",
            path,
            chain_a.chain_id(),
            chain_b.chain_id()
        );

        links.insert(
            path.to_string(),
            MockLink {
                chain_id_a: chain_a.chain_id().clone(),
                chain_id_b: chain_b.chain_id().clone(),
                channel: channel.clone(),
                active,
            },
        );

        Ok(channel)
    }

    fn start(&self, path: &str) -> Result<(), Error> {
        let links = self.links()?;

        let link = links
            .get(path)
            .ok_or_else(|| Error::generic(eyre!("no linked path named {}", path)))?;

        link.active.store(true, Ordering::SeqCst);
        debug!("started relaying on path {}", path);

        Ok(())
    }

    fn stop(&self) -> Result<(), Error> {
        if self.fail_on_stop.swap(false, Ordering::SeqCst) {
            return Err(Error::generic(eyre!("injected relayer stop failure")));
        }

        let links = self.links()?;

        for (path, link) in links.iter() {
            link.active.store(false, Ordering::SeqCst);
            debug!("stopped relaying on path {}", path);
        }

        Ok(())
    }

    fn transfer_channel(
        &self,
        chain_id_a: &ChainId,
        chain_id_b: &ChainId,
    ) -> Result<ConnectedChannel, Error> {
        let links = self.links()?;

        for link in links.values() {
            if &link.chain_id_a == chain_id_a && &link.chain_id_b == chain_id_b {
                return Ok(link.channel.clone());
            }

            if &link.chain_id_a == chain_id_b && &link.chain_id_b == chain_id_a {
                return Ok(link.channel.clone().flip());
            }
        }

        Err(Error::channel_not_found(
            chain_id_a.clone(),
            chain_id_b.clone(),
        ))
    }
}

/**
   Builds [`MockRelayer`]s with a configurable relay delay, which
   controls how many blocks after submission an acknowledgement lands.
*/
#[derive(Debug, Clone)]
pub struct MockRelayerBuilder {
    relay_delay: u64,
}

impl MockRelayerBuilder {
    pub fn new() -> Self {
        Self { relay_delay: 1 }
    }

    pub fn with_relay_delay(mut self, blocks: u64) -> Self {
        self.relay_delay = blocks;
        self
    }
}

impl Default for MockRelayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayerBuilder<MockChain> for MockRelayerBuilder {
    type Relayer = MockRelayer;

    fn build(&self, test_name: &str, flags: &StartupFlags) -> Result<MockRelayer, Error> {
        info!(
            "built mock relayer for test {} with flags {:?} and relay delay of {} blocks",
            test_name, flags.0, self.relay_delay
        );

        Ok(MockRelayer::new(self.relay_delay, flags.clone()))
    }
}
