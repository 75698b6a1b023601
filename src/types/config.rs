/*!
   Test configuration read from the environment at the start of a test.
*/

use std::path::PathBuf;

/**
   Process-level configuration for a test run, built by
   [`init_test`](crate::bootstrap::init::init_test). Each test gets its
   own randomized subdirectory under `chain_store_dir` so that parallel
   tests never share mutable state on disk.
*/
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Directory where per-test data files are stored.
    pub chain_store_dir: PathBuf,
}

impl TestConfig {
    /// Default location for the block persistence database inside the
    /// test's data directory.
    pub fn block_database_file(&self) -> PathBuf {
        self.chain_store_dir.join("blocks.db")
    }
}
