/*!
   IBC primitives the framework asserts on: packets, tokens, and
   trace-denom derivation.
*/

pub mod denom;
pub mod packet;
pub mod token;
