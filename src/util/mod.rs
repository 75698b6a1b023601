/*!
   Utilities shared across the framework.
*/

pub mod assert;
pub mod random;
pub mod retry;
