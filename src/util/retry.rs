/*!
   Bounded retry for operations that depend on chain progress.
*/

use core::time::Duration;
use std::thread::sleep;

use tracing::{debug, trace};

use crate::error::Error;

/**
   Call `task` until it succeeds, sleeping `interval` between attempts,
   for at most `attempts` tries. All waits in the framework go through
   bounded loops like this one; nothing blocks indefinitely.
*/
pub fn assert_eventually_succeed<R>(
    task_name: &str,
    attempts: u16,
    interval: Duration,
    task: impl Fn() -> Result<R, Error>,
) -> Result<R, Error> {
    for attempt in 1..=attempts {
        match task() {
            Ok(res) => {
                trace!("task {} succeeded after {} attempts", task_name, attempt);
                return Ok(res);
            }
            Err(e) => {
                debug!(
                    "retrying task {} that failed with error: {}",
                    task_name, e
                );
                sleep(interval);
            }
        }
    }

    Err(Error::retry(task_name.to_string(), attempts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn returns_first_success() -> Result<(), Error> {
        let calls = AtomicU32::new(0);

        assert_eventually_succeed("flaky task", 5, Duration::from_millis(1), || {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(Error::assertion("not yet".to_string()))
            } else {
                Ok(())
            }
        })?;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        Ok(())
    }

    #[test]
    fn reports_exhausted_attempts() {
        let result = assert_eventually_succeed("doomed task", 3, Duration::from_millis(1), || {
            Err::<(), _>(Error::assertion("never".to_string()))
        });

        assert!(result.is_err());
    }
}
