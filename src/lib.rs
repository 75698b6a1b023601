#![allow(clippy::too_many_arguments)]
#![doc = include_str!("../README.md")]

//!
//! ## Overview
//!
//! This framework tests the IBC hooks middleware as a black box: it
//! provisions two chains, links them with a relayer over a named path,
//! funds test accounts, and then drives the two-phase hook-triggering
//! transfer protocol defined in the [`hooks`] module.
//!
//! The hook-derived account on the receiving chain does not exist until
//! value has been delivered to it once, so a single transfer carrying a
//! wasm memo is not enough to observe a contract state change. The
//! protocol makes the two phases explicit:
//! [`register_hook_account`](hooks::protocol::register_hook_account)
//! performs the account-creation transfer, and
//! [`trigger_hook`](hooks::protocol::trigger_hook) performs the
//! transfer whose contract call is expected to be observable.
//!
//! Collaborators are reached through traits so that tests can run
//! either against real infrastructure or against the deterministic
//! in-memory implementations in the [`mock`] module:
//!
//! - [`ChainFactory`](chain::factory::ChainFactory) provisions chains.
//! - [`ChainEndpoint`](chain::endpoint::ChainEndpoint) submits
//!   transactions and answers queries for one chain.
//! - [`RelayerBuilder`](relayer::driver::RelayerBuilder) and
//!   [`RelayerDriver`](relayer::driver::RelayerDriver) manage the
//!   relayer process and channel handshakes.
//!
//! The [`bootstrap`] module sequences provisioning and bridging into a
//! single build step whose returned handle tears everything down when
//! dropped, so no processes or networks leak even when an assertion
//! fails halfway through a test.

pub mod bootstrap;
pub mod chain;
pub mod contract;
pub mod error;
pub mod hooks;
pub mod ibc;
pub mod mock;
pub mod prelude;
pub mod relayer;
pub mod types;
pub mod util;
