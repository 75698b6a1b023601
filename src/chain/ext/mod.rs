/*!
   Extension traits adding higher level operations on top of
   [`ChainEndpoint`](crate::chain::endpoint::ChainEndpoint).
*/

pub mod ack;
pub mod fund;
pub mod wasm;
