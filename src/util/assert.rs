/*!
   Assertion helpers that return [`Error`] instead of panicking, so
   failures propagate through the test's `Result` and teardown still
   runs.
*/

use core::fmt::Debug;

use crate::error::Error;

pub fn assert_eq<T: Eq + Debug>(message: &str, left: &T, right: &T) -> Result<(), Error> {
    if left == right {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expect left ({left:?}) to be equal to right ({right:?}): {message}"
        )))
    }
}

pub fn assert_not_eq<T: Eq + Debug>(message: &str, left: &T, right: &T) -> Result<(), Error> {
    if left != right {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expect left ({left:?}) to be not equal to right ({right:?}): {message}"
        )))
    }
}
