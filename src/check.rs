use std::{fmt, io::Write, process};

use crate::hint::unlikely;

/// Exit status handed to the OS when a check fails.
pub const FAILURE_EXIT_CODE: i32 = 1;

const ASSERT_TAG: &str = "ASSERT";
const FATAL_TAG: &str = "FATAL";

/// Checks that a condition holds, terminating the process if it does not.
///
/// If `condition` is `true`, this returns immediately without any observable
/// effect. Otherwise it writes ``ASSERT : <msg>`` to stderr and exits the
/// process with [`FAILURE_EXIT_CODE`], i.e. it only ever returns if the
/// condition held.
///
/// The failing branch is wrapped in [`unlikely`]; the non-failing path
/// neither allocates nor copies the message.
#[inline]
pub fn check(condition: bool, msg: &str) {
    if unlikely(!condition) {
        die(ASSERT_TAG, format_args!("{msg}"));
    }
}

/// Terminates the process unconditionally.
///
/// Writes ``FATAL : <msg>`` to stderr and exits the process with
/// [`FAILURE_EXIT_CODE`]. For call sites that are already known to be
/// unrecoverable, without a condition left to test.
#[inline]
pub fn fatal(msg: &str) -> ! {
    die(FATAL_TAG, format_args!("{msg}"))
}

#[doc(hidden)]
pub fn __check_failed(msg: fmt::Arguments<'_>) -> ! {
    die(ASSERT_TAG, msg)
}

#[doc(hidden)]
pub fn __fatal(msg: fmt::Arguments<'_>) -> ! {
    die(FATAL_TAG, msg)
}

// The single exit of both checks. Writing to the locked handle directly
// instead of `eprintln!` keeps the diagnostic on the real stderr even under
// libtest's output capturing, and a failed write is ignored since there is
// no path left to report it on.
#[cold]
#[inline(never)]
fn die(tag: &'static str, msg: fmt::Arguments<'_>) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!("{tag} : {msg}");

    let stderr = std::io::stderr();
    let _ = writeln!(stderr.lock(), "{tag} : {msg}");

    process::exit(FAILURE_EXIT_CODE)
}

#[cfg(test)]
mod tests {
    use super::check;

    #[test]
    fn passing_check_returns() {
        check(2 + 2 == 4, "math broken");
        check(true, "");
    }

    #[test]
    fn passing_check_does_not_touch_message() {
        // The message must only be *read* on the failing path, so a passing
        // check with an expensive message argument costs one branch.
        let msg = String::from("never formatted");
        check(true, &msg);
        assert_eq!(msg, "never formatted");
    }
}
