/*!
   Reference to an IBC packet emitted by a transfer.
*/

use core::fmt::{self, Display};

use crate::types::id::{ChannelId, PortId};

/**
   Identifies one packet in flight between two chains. The sequence is
   scoped to the source port and channel, so the full tuple is needed to
   poll for the packet's acknowledgement.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Packet sequence on the source channel.
    pub sequence: u64,

    /// Port on the sending chain.
    pub src_port: PortId,

    /// Channel on the sending chain.
    pub src_channel: ChannelId,

    /// Port on the receiving chain.
    pub dst_port: PortId,

    /// Channel on the receiving chain.
    pub dst_channel: ChannelId,
}

impl Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "packet {} on {}/{} -> {}/{}",
            self.sequence, self.src_port, self.src_channel, self.dst_port, self.dst_channel
        )
    }
}
