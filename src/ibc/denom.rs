/*!
   Helper functions for deriving the IBC denom of a transferred token.
*/

use core::fmt::{self, Display};

use sha2::{Digest, Sha256};
use subtle_encoding::hex;

use crate::error::{handle_generic_error, Error};
use crate::types::id::{ChannelId, PortId};

/**
   A token denomination, either native to a chain or derived from an
   IBC transfer trace path.

   A derived denom is the proof that funds arrived over an inter-chain
   path rather than being minted locally: its hash commits to the
   `port/channel` trace the token travelled.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denom {
    /// A denomination native to the chain, e.g. `uosmo`.
    Base(String),

    /// A denomination derived from transferring a token over IBC.
    Ibc {
        /// The `port/channel` trace path of the transfer.
        path: String,

        /// The base denomination the trace started from.
        denom: Box<Denom>,

        /// The `ibc/...` hashed form used on chain.
        hashed: String,
    },
}

/**
   Derives the denom on the receiving chain for a token transferred
   over the given port and channel, following the coin source tracing
   scheme: `ibc/` followed by the uppercase hex sha256 of the
   `port/channel/denom` transfer path.
*/
pub fn derive_ibc_denom(
    port_id: &PortId,
    channel_id: &ChannelId,
    denom: &Denom,
) -> Result<Denom, Error> {
    fn derive_denom_with_path(transfer_path: &str) -> Result<String, Error> {
        let mut hasher = Sha256::new();
        hasher.update(transfer_path.as_bytes());

        let denom_bytes = hasher.finalize();
        let denom_hex =
            String::from_utf8(hex::encode_upper(denom_bytes)).map_err(handle_generic_error)?;

        Ok(format!("ibc/{denom_hex}"))
    }

    match denom {
        Denom::Base(base) => {
            let path = format!("{port_id}/{channel_id}");
            let hashed = derive_denom_with_path(&format!("{path}/{base}"))?;

            Ok(Denom::Ibc {
                path,
                denom: Box::new(denom.clone()),
                hashed,
            })
        }
        Denom::Ibc { path, denom, .. } => {
            let new_path = format!("{port_id}/{channel_id}/{path}");
            let hashed = derive_denom_with_path(&format!("{new_path}/{denom}"))?;

            Ok(Denom::Ibc {
                path: new_path,
                denom: denom.clone(),
                hashed,
            })
        }
    }
}

impl Denom {
    pub fn base(denom: &str) -> Self {
        Denom::Base(denom.to_owned())
    }

    /// The string form used on chain: the raw denom for base tokens,
    /// the `ibc/...` hash for derived ones.
    pub fn as_str(&self) -> &str {
        match self {
            Denom::Base(denom) => denom,
            Denom::Ibc { hashed, .. } => hashed,
        }
    }

    /// Whether this denomination carries the cross-chain trace prefix.
    pub fn is_derived(&self) -> bool {
        matches!(self, Denom::Ibc { .. })
    }
}

impl Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
