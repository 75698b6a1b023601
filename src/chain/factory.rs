/*!
   The chain factory collaborator interface.
*/

use crate::chain::config::ChainSpec;
use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;

/**
   Provisions running chains from a list of specs. Image pulls, genesis
   generation, and validator startup all happen behind this trait;
   any failure there is surfaced verbatim and is fatal to the test.
*/
pub trait ChainFactory {
    type Chain: ChainEndpoint;

    /**
       Provision one chain per spec, order-preserving, all ready to
       accept transactions when this returns.
    */
    fn spawn_chains(&self, test_name: &str, specs: &[ChainSpec])
        -> Result<Vec<Self::Chain>, Error>;
}
