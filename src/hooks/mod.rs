/*!
   The hook-triggering transfer protocol: the wasm memo payload, the
   two-phase transfer sequence, and hook-sender address resolution.
*/

pub mod address;
pub mod memo;
pub mod protocol;
