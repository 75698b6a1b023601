/*!
   Acknowledgement polling over a bounded height window.
*/

use tracing::{debug, info};

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::ibc::packet::Packet;

pub trait ChainAckMethodsExt {
    /**
       Block until an acknowledgement for the packet is observed in a
       block within `[start_height, end_height]`, scanning the window
       height by height and waiting for each block to be produced.

       Returns the height the acknowledgement was found at. Exhausting
       the window without finding one is a hard failure reported with
       the attempted bounds.
    */
    fn poll_for_ack(
        &self,
        packet: &Packet,
        start_height: u64,
        end_height: u64,
    ) -> Result<u64, Error>;
}

impl<Chain: ChainEndpoint> ChainAckMethodsExt for Chain {
    fn poll_for_ack(
        &self,
        packet: &Packet,
        start_height: u64,
        end_height: u64,
    ) -> Result<u64, Error> {
        info!(
            "polling chain {} for acknowledgement of {} within heights [{}, {}]",
            self.chain_id(),
            packet,
            start_height,
            end_height
        );

        for height in start_height..=end_height {
            self.wait_until_height(height)?;

            if self.query_ack_at(packet, height)? {
                debug!(
                    "found acknowledgement for {} at height {} on chain {}",
                    packet,
                    height,
                    self.chain_id()
                );
                return Ok(height);
            }
        }

        Err(Error::ack_timeout(packet.sequence, start_height, end_height))
    }
}
