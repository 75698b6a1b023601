/*!
   Chain configuration, the chain-client collaborator interface, and
   extension methods built on top of it.
*/

pub mod config;
pub mod endpoint;
pub mod ext;
pub mod factory;
