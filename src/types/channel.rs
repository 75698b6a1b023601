/*!
   Type definitions for a channel connected between two chains.
*/

use crate::types::id::{ChannelId, PortId};

/**
   A channel between two chains with the full handshake completed,
   resolved once at setup time and immutable afterwards.

   The `_a` fields belong to the chain from which transfers are
   submitted in the current direction; [`flip`](ConnectedChannel::flip)
   swaps the two ends.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedChannel {
    /// The name of the relayer path this channel was established over.
    pub path: String,

    /// The channel ID on chain A, corresponding to the channel
    /// connected to chain B.
    pub channel_id_a: ChannelId,

    /// The channel ID on chain B, corresponding to the channel
    /// connected to chain A.
    pub channel_id_b: ChannelId,

    /// The port ID on chain A.
    pub port_a: PortId,

    /// The port ID on chain B.
    pub port_b: PortId,
}

impl ConnectedChannel {
    /**
       Flip the position between chain A and chain B.

       The original chain A becomes the new chain B, and the original
       chain B becomes the new chain A.
    */
    pub fn flip(self) -> ConnectedChannel {
        ConnectedChannel {
            path: self.path,
            channel_id_a: self.channel_id_b,
            channel_id_b: self.channel_id_a,
            port_a: self.port_b,
            port_b: self.port_a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_swaps_both_channel_and_port_ends() {
        let channel = ConnectedChannel {
            path: "ibc-path".to_string(),
            channel_id_a: ChannelId::new("channel-0"),
            channel_id_b: ChannelId::new("channel-7"),
            port_a: PortId::transfer(),
            port_b: PortId::new("wasm"),
        };

        let flipped = channel.clone().flip();

        assert_eq!(flipped.channel_id_a, channel.channel_id_b);
        assert_eq!(flipped.channel_id_b, channel.channel_id_a);
        assert_eq!(flipped.port_a, channel.port_b);
        assert_eq!(flipped.port_b, channel.port_a);
        assert_eq!(flipped.clone().flip(), channel);
    }
}
