/*!
   Types used throughout the test framework.
*/

pub mod channel;
pub mod config;
pub mod id;
pub mod transfer;
pub mod wallet;
