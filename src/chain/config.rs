/*!
   Configuration describing one chain in the test topology.

   A test pair is built by constructing one base [`ChainConfig`] and
   deriving the second with [`counterparty`](ChainConfig::counterparty),
   which deep-copies everything and overrides only the identity fields.
*/

use crate::ibc::denom::Denom;
use crate::types::id::ChainId;

/**
   The type tag of a chain. Only Cosmos SDK style chains are currently
   exercised by the hooks tests.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainType {
    #[default]
    Cosmos,
}

/**
   A container image the chain factory may run the chain from.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerImage {
    pub repository: String,
    pub version: String,
    pub uid_gid: String,
}

impl DockerImage {
    pub fn new(repository: &str, version: &str, uid_gid: &str) -> Self {
        Self {
            repository: repository.to_owned(),
            version: version.to_owned(),
            uid_gid: uid_gid.to_owned(),
        }
    }
}

/**
   Everything the chain factory needs to provision one chain: identity,
   binary, images, address encoding, and native denomination.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Human readable name of the chain.
    pub name: String,

    pub chain_type: ChainType,

    /// The chain ID, e.g. `simapp-1`. Must differ between the two
    /// chains of a test pair.
    pub chain_id: ChainId,

    /// Name of the chain binary, e.g. `simd`.
    pub command_path: String,

    /// Images the chain may be started from.
    pub images: Vec<DockerImage>,

    /// Bech32 address prefix, e.g. `cosmos`.
    pub account_prefix: String,

    /// The chain's native denomination, e.g. `uosmo`.
    pub denom: String,

    /// BIP-44 coin type used for key derivation.
    pub coin_type: String,
}

impl ChainConfig {
    /**
       Produce the configuration for the counterparty chain of a test
       pair: a deep copy of this configuration with the identity fields
       overridden. The copy shares no mutable state with the original,
       so mutating one (e.g. its image list) never affects the other.
    */
    pub fn counterparty(&self, name: &str, chain_id: &str) -> Self {
        let mut config = self.clone();
        config.name = name.to_owned();
        config.chain_id = ChainId::new(chain_id);
        config
    }

    /// The chain's native denomination as a base [`Denom`].
    pub fn native_denom(&self) -> Denom {
        Denom::base(&self.denom)
    }
}

/**
   A named chain configuration together with the node counts to
   provision, consumed by the
   [`ChainFactory`](crate::chain::factory::ChainFactory).
*/
#[derive(Debug, Clone)]
pub struct ChainSpec {
    pub config: ChainConfig,
    pub num_validators: usize,
    pub num_full_nodes: usize,
}

impl ChainSpec {
    pub fn new(config: ChainConfig, num_validators: usize, num_full_nodes: usize) -> Self {
        Self {
            config,
            num_validators,
            num_full_nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ChainConfig {
        ChainConfig {
            name: "osmosis".to_string(),
            chain_type: ChainType::Cosmos,
            chain_id: ChainId::new("simapp-1"),
            command_path: "simd".to_string(),
            images: vec![DockerImage::new("ibchooks", "local", "1025:1025")],
            account_prefix: "cosmos".to_string(),
            denom: "uosmo".to_string(),
            coin_type: "118".to_string(),
        }
    }

    #[test]
    fn counterparty_overrides_identity_fields() {
        let config = base_config();
        let config2 = config.counterparty("osmosis-counterparty", "counterparty-2");

        assert_ne!(config.chain_id, config2.chain_id);
        assert_ne!(config.name, config2.name);
        assert_eq!(config.denom, config2.denom);
        assert_eq!(config.account_prefix, config2.account_prefix);
        assert_eq!(config.images, config2.images);
    }

    #[test]
    fn counterparty_does_not_alias_mutable_fields() {
        let config = base_config();
        let mut config2 = config.counterparty("osmosis-counterparty", "counterparty-2");

        config2.images.push(DockerImage::new("other", "v2", "0:0"));
        config2.images[0].version = "edge".to_string();

        assert_eq!(config.images.len(), 1);
        assert_eq!(config.images[0].version, "local");
    }
}
