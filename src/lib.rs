//! Fail-fast runtime checks and branch-prediction hints for latency-sensitive
//! code.
//!
//! ## Description
//!
//! `failfast` provides two runtime-check helpers and two compiler hints:
//!
//!   - [`check`](check()): terminates the process with an `ASSERT`
//!     diagnostic on stderr if the given condition is false, otherwise does
//!     nothing.
//!   - [`fatal`](fatal()): always terminates the process with a `FATAL`
//!     diagnostic on stderr.
//!   - [`likely`] and [`unlikely`]: return their argument unchanged while
//!     hinting at the compiler which branch is statistically expected.
//!
//! There is deliberately no recovery path: a failed check writes a single
//! tagged line to stderr and terminates the whole process with
//! [`FAILURE_EXIT_CODE`], giving a predictable, exception-free failure cost.
//! The non-failing path of [`check`](check()) is a single branch wrapped in
//! [`unlikely`], with no allocation and no copy of the message.
//!
//! The [`check!`] and [`fatal!`] macros accept `format!`-style messages
//! which are only evaluated on the failing path.
//!
//! ## Usage
//!
//! ```
//! use failfast::{check, fatal, likely};
//!
//! fn checked_halve(n: u32) -> u32 {
//!     // Terminates the process when handed zero.
//!     check(n != 0, "expected a non-zero number");
//!
//!     if likely(n % 2 == 0) {
//!         n / 2
//!     } else {
//!         fatal("odd input")
//!     }
//! }
//!
//! assert_eq!(checked_halve(8), 4);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | A failing check is additionally logged through `tracing::error` before the process terminates. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

pub use self::{
    check::{check, fatal, FAILURE_EXIT_CODE},
    hint::{likely, unlikely},
};

#[doc(hidden)]
pub use self::check::{__check_failed, __fatal};

mod check;
mod hint;
mod macros;
