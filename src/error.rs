/*!
   Error type used by the test framework.

   Almost all errors here are fatal to the test that raised them: the
   framework validates a third-party protocol implementation and values
   fail-fast clarity over resilience. Cleanup errors are the one
   exception and are logged by the teardown path instead of escalated.
*/

use eyre::Report;
use flex_error::{define_error, TraceError};
use std::io::Error as IoError;

use crate::types::id::ChainId;

define_error! {
    Error {
        Generic
            [ TraceError<Report> ]
            | _ | { "generic error" },

        Io
            [ TraceError<IoError> ]
            | _ | { "io error" },

        Json
            [ TraceError<serde_json::Error> ]
            | _ | { "json serialization error" },

        Assertion
            { message: String }
            | e | { format_args!("assertion failure: {}", e.message) },

        Retry
            { task_name: String, attempts: u16 }
            | e | {
                format_args!(
                    "expected task to eventually succeed, but failed after {} attempts: {}",
                    e.attempts, e.task_name)
            },

        AckTimeout
            { sequence: u64, start_height: u64, end_height: u64 }
            | e | {
                format_args!(
                    "no acknowledgement found for packet sequence {} within heights [{}, {}]",
                    e.sequence, e.start_height, e.end_height)
            },

        ChannelNotFound
            { chain_id_a: ChainId, chain_id_b: ChainId }
            | e | {
                format_args!(
                    "no transfer channel established between chains {} and {}",
                    e.chain_id_a, e.chain_id_b)
            },

        ChainNotFound
            { chain_id: ChainId }
            | e | { format_args!("no chain with id {} registered in the interchain", e.chain_id) },
    }
}

pub fn handle_generic_error(e: impl Into<Report>) -> Error {
    Error::generic(e.into())
}

impl From<Report> for Error {
    fn from(e: Report) -> Self {
        Error::generic(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::json(e)
    }
}
