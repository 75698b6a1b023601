/*!
   Setup steps run at the beginning of a test: logger and environment
   initialization, interchain orchestration, and account funding.
*/

pub mod fund;
pub mod init;
pub mod interchain;
