/*!
   In-memory implementations of the collaborator traits, so the full
   hook-transfer protocol can be exercised deterministically without
   spawning chain or relayer processes.

   The mock chains produce a block instantly whenever a caller waits on
   a height, and the mock relayer delivers packets with a configurable
   delay in blocks, which is what the acknowledgement-window boundary
   tests are built on.
*/

pub mod chain;
pub mod relayer;
