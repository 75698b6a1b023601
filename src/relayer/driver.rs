/*!
   Traits for building and driving the relayer process that bridges the
   two chains of a test.
*/

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::types::channel::ConnectedChannel;
use crate::types::id::ChainId;

/**
   Opaque startup flags forwarded verbatim to the relayer, e.g.
   `--processor events --block-history 100`. The block-history depth
   tunes how far back the relayer scans for already-emitted packets;
   larger windows trade startup latency for catching packets emitted
   before the relayer started.
*/
#[derive(Debug, Clone, Default)]
pub struct StartupFlags(pub Vec<String>);

impl StartupFlags {
    pub fn new(flags: &[&str]) -> Self {
        Self(flags.iter().map(|flag| flag.to_string()).collect())
    }
}

/**
   A handle to a running relayer instance.
*/
pub trait RelayerDriver<Chain: ChainEndpoint> {
    /**
       Register a path between the two chains and perform the channel
       handshake over it. Resolved exactly once per test; the returned
       channel is immutable afterwards.
    */
    fn link(&self, path: &str, chain_a: &Chain, chain_b: &Chain)
        -> Result<ConnectedChannel, Error>;

    /// Begin actively relaying packets on the path. Must only be
    /// called after the channel handshake has completed.
    fn start(&self, path: &str) -> Result<(), Error>;

    /**
       Stop relaying. Only invoked during cleanup, where a failure is
       logged by the caller rather than escalated, since the test
       verdict is already settled by then.
    */
    fn stop(&self) -> Result<(), Error>;

    /**
       Resolve the transfer channel established between the two chain
       IDs, with the first chain taking the A position of the returned
       channel.
    */
    fn transfer_channel(
        &self,
        chain_id_a: &ChainId,
        chain_id_b: &ChainId,
    ) -> Result<ConnectedChannel, Error>;
}

/**
   Builds relayer instances, forwarding the startup flags opaquely.
*/
pub trait RelayerBuilder<Chain: ChainEndpoint> {
    type Relayer: RelayerDriver<Chain>;

    fn build(&self, test_name: &str, flags: &StartupFlags) -> Result<Self::Relayer, Error>;
}
